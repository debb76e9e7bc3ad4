pub mod error;
pub mod options;
pub mod stats;
pub mod trim;
pub mod validate;

pub use crate::error::{Result, TrimError};
pub use crate::options::{TrimOptions, DEFAULT_TAB_WIDTH};
pub use crate::stats::Counters;
pub use crate::trim::{trim_bytes, trim_stream, Trimmer};
