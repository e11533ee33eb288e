pub mod config;
pub mod format;
pub mod join;
pub mod names;
pub mod resolution;
pub mod util;

pub use config::*;
pub use format::*;
pub use join::*;
pub use names::*;
pub use resolution::*;
pub use util::*;
