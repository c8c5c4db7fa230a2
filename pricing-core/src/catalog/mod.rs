pub mod repository;

pub use repository::{CatalogError, CourseCatalog};
