use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };
use log::{ debug, info, warn };
use crate::error::StorageError;

/// The user's explicit appearance preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Accepts only the exact stored spellings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown theme mode: {:?}", s))
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The appearance actually applied to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// `system` follows the platform signal, falling back to light when the
    /// platform reports no preference.
    pub fn resolve(mode: ThemeMode, system: Option<ResolvedTheme>) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
            ThemeMode::System => system.unwrap_or_default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Display for ResolvedTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub resolved_theme: ResolvedTheme,
}

/// Loading -> Ready, one way. `mode` starts at `System` and only changes
/// through a successful load or `set_mode`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    mode: ThemeMode,
    phase: LoadPhase,
}

impl ThemeState {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Applies the outcome of the persisted-preference read. Storage errors
    /// and unrecognized values leave the default in place; the state becomes
    /// ready either way.
    pub fn finish_loading(&mut self, saved: Result<Option<String>, StorageError>) {
        if self.is_ready() {
            debug!("Theme preference already loaded, ignoring late result");
            return;
        }

        match saved {
            Ok(Some(value)) =>
                match ThemeMode::parse(&value) {
                    Some(mode) => {
                        info!("Restored theme mode: {}", mode);
                        self.mode = mode;
                    }
                    None => warn!("Ignoring unrecognized theme mode {:?}", value),
                }
            Ok(None) => debug!("No saved theme mode, using {}", self.mode),
            Err(e) => warn!("Failed to load theme mode: {}", e),
        }

        self.phase = LoadPhase::Ready;
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// `None` until the saved preference has been applied.
    pub fn snapshot(&self, system: Option<ResolvedTheme>) -> Option<ThemeSnapshot> {
        if !self.is_ready() {
            return None;
        }
        Some(ThemeSnapshot {
            mode: self.mode,
            resolved_theme: ResolvedTheme::resolve(self.mode, system),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNALS: [Option<ResolvedTheme>; 3] = [
        None,
        Some(ResolvedTheme::Light),
        Some(ResolvedTheme::Dark),
    ];

    #[test]
    fn test_explicit_modes_ignore_system_signal() {
        for system in SIGNALS {
            assert_eq!(ResolvedTheme::resolve(ThemeMode::Light, system), ResolvedTheme::Light);
            assert_eq!(ResolvedTheme::resolve(ThemeMode::Dark, system), ResolvedTheme::Dark);
        }
    }

    #[test]
    fn test_system_mode_tracks_signal() {
        assert_eq!(
            ResolvedTheme::resolve(ThemeMode::System, Some(ResolvedTheme::Dark)),
            ResolvedTheme::Dark
        );
        assert_eq!(
            ResolvedTheme::resolve(ThemeMode::System, Some(ResolvedTheme::Light)),
            ResolvedTheme::Light
        );
        assert_eq!(ResolvedTheme::resolve(ThemeMode::System, None), ResolvedTheme::Light);
    }

    #[test]
    fn test_parse_is_exact() {
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse(" light"), None);
        assert_eq!(ThemeMode::parse(""), None);
        assert!("blue".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_spelling() {
        assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn test_snapshot_gated_until_ready() {
        let mut state = ThemeState::loading();
        assert_eq!(state.mode(), ThemeMode::System);
        assert_eq!(state.phase(), LoadPhase::Loading);
        assert_eq!(state.snapshot(Some(ResolvedTheme::Dark)), None);

        state.finish_loading(Ok(None));
        assert_eq!(
            state.snapshot(Some(ResolvedTheme::Dark)),
            Some(ThemeSnapshot { mode: ThemeMode::System, resolved_theme: ResolvedTheme::Dark })
        );
    }

    #[test]
    fn test_finish_loading_adopts_valid_value() {
        let mut state = ThemeState::loading();
        state.finish_loading(Ok(Some("dark".to_string())));
        assert!(state.is_ready());
        assert_eq!(state.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_finish_loading_ignores_malformed_value() {
        let mut state = ThemeState::loading();
        state.finish_loading(Ok(Some("blue".to_string())));
        assert!(state.is_ready());
        assert_eq!(state.mode(), ThemeMode::System);
    }

    #[test]
    fn test_finish_loading_swallows_storage_error() {
        let mut state = ThemeState::loading();
        state.finish_loading(Err(StorageError::Unavailable("offline".to_string())));
        assert!(state.is_ready());
        assert_eq!(state.mode(), ThemeMode::System);
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut state = ThemeState::loading();
        state.finish_loading(Ok(Some("light".to_string())));
        state.set_mode(ThemeMode::Dark);
        state.finish_loading(Ok(Some("light".to_string())));
        assert_eq!(state.phase(), LoadPhase::Ready);
        assert_eq!(state.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_set_mode_is_idempotent() {
        let mut state = ThemeState::loading();
        state.finish_loading(Ok(None));
        state.set_mode(ThemeMode::Dark);
        let first = state.snapshot(None);
        state.set_mode(ThemeMode::Dark);
        assert_eq!(state.snapshot(None), first);
    }
}
