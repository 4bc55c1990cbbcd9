//! Stylesheet discovery and CSS processing.

mod filter;
pub mod minify;
mod process;
mod scan;

pub use filter::{DEFAULT_EXTENSION, ExtensionFilter};
pub use process::PostProcessor;
pub use scan::{DEFAULT_ASYNC_MARKER, ScanOptions, StylesheetTree, classify, scan_stylesheets};
