use std::collections::HashMap;
use std::io::Read;

use async_trait::async_trait;
use pricing_core::{CatalogError, Course, CourseCatalog};

use crate::loader::{CourseCatalogLoader, CourseLoaderError};

/// A [`CourseCatalog`] held entirely in memory, preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Builds a catalog from courses. A later course with an id already
    /// present replaces the earlier one in place.
    pub fn new(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Self::default();
        for course in courses {
            catalog.insert(course);
        }
        catalog
    }

    /// Reads a catalog from course CSV data.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, CourseLoaderError> {
        Ok(Self::new(CourseCatalogLoader::parse_courses(reader)?))
    }

    pub fn insert(
        &mut self,
        course: Course,
    ) {
        match self.index.get(&course.id) {
            Some(&pos) => self.courses[pos] = course,
            None => {
                self.index.insert(course.id.clone(), self.courses.len());
                self.courses.push(course);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[async_trait]
impl CourseCatalog for InMemoryCatalog {
    async fn get_course(&self, id: &str) -> Result<Course, CatalogError> {
        self.index
            .get(id)
            .map(|&pos| self.courses[pos].clone())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.courses.clone())
    }
}
