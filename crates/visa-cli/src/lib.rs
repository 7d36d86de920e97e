//! Library side of the `visa` command-line tool.

pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
