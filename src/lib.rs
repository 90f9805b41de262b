pub mod cli;
pub mod command;
mod error;
pub mod logger;
mod style;
mod utils;

pub use command::{FormatType, MapperOutput};
pub use error::{MapperError, MapperErrorCode, MapperErrorSuggestion, MapperResult};

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
