use std::path::{ Path, PathBuf };

const APP_DIR: &str = "zine";
const PREFERENCES_FILE: &str = "preferences.json";

pub fn get_storage_path() -> Option<PathBuf> {
    let explicit = std::env::var_os("ZINE_STORAGE_PATH").map(PathBuf::from);
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);

    let path = resolve_storage_path(explicit.as_deref(), xdg_config_home.as_deref(), home.as_deref());
    if path.is_none() {
        log::warn!("ZINE_STORAGE_PATH, XDG_CONFIG_HOME and HOME are all unset");
    }
    path
}

fn resolve_storage_path(
    explicit: Option<&Path>,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>
) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path.to_path_buf());
    }
    if let Some(config) = xdg_config_home.filter(|p| !p.as_os_str().is_empty()) {
        return Some(config.join(APP_DIR).join(PREFERENCES_FILE));
    }
    home.filter(|p| !p.as_os_str().is_empty()).map(|home|
        home.join(".config").join(APP_DIR).join(PREFERENCES_FILE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_storage_path(
            Some(Path::new("/tmp/prefs.json")),
            Some(Path::new("/xdg")),
            Some(Path::new("/home/me"))
        );
        assert_eq!(path, Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn test_xdg_before_home() {
        let path = resolve_storage_path(None, Some(Path::new("/xdg")), Some(Path::new("/home/me")));
        assert_eq!(path, Some(PathBuf::from("/xdg/zine/preferences.json")));
    }

    #[test]
    fn test_home_fallback() {
        let path = resolve_storage_path(None, Some(Path::new("")), Some(Path::new("/home/me")));
        assert_eq!(path, Some(PathBuf::from("/home/me/.config/zine/preferences.json")));
    }

    #[test]
    fn test_nothing_available() {
        assert_eq!(resolve_storage_path(None, None, None), None);
    }
}
