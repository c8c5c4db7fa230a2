use async_trait::async_trait;
use thiserror::Error;

use crate::models::Course;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Catalog backend error: {0}")]
    Backend(String),
}

/// Source of listed course prices.
///
/// Checkout code depends on this trait instead of a fixed course list, so a
/// database, an HTTP API or a CSV file can back it.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn get_course(&self, id: &str) -> Result<Course, CatalogError>;

    /// All courses, in the catalog's own order.
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError>;
}
