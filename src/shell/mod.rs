//! The terminal standing in for a browser window

mod input;
mod view;

pub use input::spawn_input;
pub use view::TerminalView;
