mod bundle;
mod config;
mod importer;
mod mapping;
pub(crate) mod output;
mod settings;

pub use bundle::Bundle;
pub use config::Config;
pub use importer::Importer;
pub use mapping::Mapping;
pub use output::{FormatType, MapperOutput};
pub use settings::Settings;
