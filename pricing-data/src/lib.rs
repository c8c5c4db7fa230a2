pub mod config;
pub mod in_memory;
pub mod loader;

pub use config::{ConfigError, load_pricing_config, parse_pricing_config};
pub use in_memory::InMemoryCatalog;
pub use loader::{CourseCatalogLoader, CourseLoaderError, CourseRecord};
