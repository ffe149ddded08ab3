//! Page and form handlers.

mod submit;
mod theme;
mod view;

pub use submit::submit_handler;
pub use theme::toggle_theme_handler;
pub use view::view_handler;
