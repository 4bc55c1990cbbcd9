//! Configuration section definitions.

mod build;
mod dirs;
mod styles;

pub use build::BuildConfig;
pub use dirs::DirsConfig;
pub use styles::StylesSectionConfig;
