//! Input handling for keyboard events and key bindings.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::InputEvent;
