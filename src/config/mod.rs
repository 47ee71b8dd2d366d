mod filesystem;
mod loader;
mod model;
mod roots;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{Config, DEFAULT_MAX_BYTES, ScopeSection, SizingSection};
pub use roots::{SEARCH_PATH_ENV, search_roots};
