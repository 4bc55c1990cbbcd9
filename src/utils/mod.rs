//! Small helpers shared by the registry and the CLI.

pub mod html;
pub mod path;
