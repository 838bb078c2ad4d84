mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    Config, DEFAULT_PALETTE, DatasetConfig, ExportConfig, FilterConfig, SectionConfig, SectionKind,
};
pub use validation::{is_hex_color, validate_config_semantics};
