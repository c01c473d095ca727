pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_prompter_keydown;
pub use pointer::{wire_compass_drag, wire_spinner_drag};
