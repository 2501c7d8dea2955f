pub mod appearance;
mod theme_context;

pub use theme_context::{
    use_color_scheme,
    use_theme,
    PersistTask,
    ThemeContext,
    ThemeProvider,
    ThemeResolver,
};
