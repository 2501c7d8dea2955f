pub mod palette;
mod theme_state;

pub use palette::{ palette, Palette };
pub use theme_state::{ LoadPhase, ResolvedTheme, ThemeMode, ThemeSnapshot, ThemeState };
