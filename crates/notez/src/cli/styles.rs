use console::Style;
use once_cell::sync::Lazy;

/// Styles for session chrome: the banner, the prompt marker, and hint lines.
/// Note rendering itself lives in print.rs.
pub struct Theme {
    pub banner: Style,
    pub prompt: Style,
    pub hint: Style,
}

pub static NOTEZ_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    banner: Style::new().bold(),
    prompt: Style::new().cyan(),
    hint: Style::new().dim(),
});
