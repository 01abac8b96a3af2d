pub mod keyboard;
pub mod pointer;
pub mod theme;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};
pub use theme::wire_theme_toggle;
