use std::collections::HashSet;
use std::io::Read;

use pricing_core::Course;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading course catalog data.
#[derive(Debug, Error)]
pub enum CourseLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Row {row}: course_id is empty")]
    MissingCourseId { row: usize },

    #[error("Duplicate course_id '{0}'")]
    DuplicateCourse(String),
}

impl From<csv::Error> for CourseLoaderError {
    fn from(err: csv::Error) -> Self {
        CourseLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the course catalog CSV file.
///
/// - `course_id`: Unique identifier used by checkout
/// - `title`: Display title
/// - `base_price`: Listed price in major currency units (e.g. `2999` or `499.50`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CourseRecord {
    pub course_id: String,
    pub title: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub base_price: Decimal,
}

/// Parses the raw cell text so prices keep their exact written precision.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<Decimal>().map_err(serde::de::Error::custom)
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Course {
            id: record.course_id,
            title: record.title,
            base_price: record.base_price,
        }
    }
}

/// Loader for course catalog data from CSV files.
///
/// Price validation is left to the charge calculator; the loader only
/// checks the file's shape and that course ids are present and unique.
pub struct CourseCatalogLoader;

impl CourseCatalogLoader {
    /// Parse course records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice. Records are returned in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CourseRecord>, CourseLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();
        let mut seen = HashSet::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let record: CourseRecord = result?;
            // Header is line 1, so the first record is row 2.
            let row = index + 2;
            if record.course_id.is_empty() {
                return Err(CourseLoaderError::MissingCourseId { row });
            }
            if !seen.insert(record.course_id.clone()) {
                return Err(CourseLoaderError::DuplicateCourse(record.course_id));
            }
            records.push(record);
        }

        debug!(count = records.len(), "parsed course records");
        Ok(records)
    }

    /// Parse records and convert them into catalog courses.
    pub fn parse_courses<R: Read>(reader: R) -> Result<Vec<Course>, CourseLoaderError> {
        Ok(Self::parse(reader)?
            .into_iter()
            .map(Course::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_reads_records_in_order() {
        let csv = "course_id,title,base_price\n\
                   rust-101,Intro to Rust,2999\n\
                   web-201,Web Basics,499.50\n";

        let records = CourseCatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                CourseRecord {
                    course_id: "rust-101".to_string(),
                    title: "Intro to Rust".to_string(),
                    base_price: dec!(2999),
                },
                CourseRecord {
                    course_id: "web-201".to_string(),
                    title: "Web Basics".to_string(),
                    base_price: dec!(499.50),
                },
            ]
        );
    }

    #[test]
    fn parse_keeps_written_precision() {
        let csv = "course_id,title,base_price\nodd,Odd Price,10.005\n";

        let records = CourseCatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records[0].base_price, dec!(10.005));
        assert_eq!(records[0].base_price.scale(), 3);
    }

    #[test]
    fn parse_trims_whitespace() {
        let csv = "course_id, title, base_price\n a , Spaced , 1000 \n";

        let records = CourseCatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records[0].course_id, "a");
        assert_eq!(records[0].title, "Spaced");
        assert_eq!(records[0].base_price, dec!(1000));
    }

    #[test]
    fn parse_rejects_non_numeric_price() {
        let csv = "course_id,title,base_price\nx,Bad,free\n";

        let result = CourseCatalogLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(CourseLoaderError::CsvParse(_))));
    }

    #[test]
    fn parse_rejects_missing_column() {
        let csv = "course_id,title\nx,No Price\n";

        let result = CourseCatalogLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(CourseLoaderError::CsvParse(_))));
    }

    #[test]
    fn parse_rejects_empty_course_id() {
        let csv = "course_id,title,base_price\na,First,100\n,Nameless,100\n";

        let result = CourseCatalogLoader::parse(csv.as_bytes());

        assert!(matches!(
            result,
            Err(CourseLoaderError::MissingCourseId { row: 3 })
        ));
    }

    #[test]
    fn parse_rejects_duplicate_course_id() {
        let csv = "course_id,title,base_price\na,First,100\na,Again,200\n";

        let result = CourseCatalogLoader::parse(csv.as_bytes());

        assert!(matches!(
            result,
            Err(CourseLoaderError::DuplicateCourse(ref id)) if id == "a"
        ));
    }

    #[test]
    fn parse_courses_converts_records() {
        let csv = "course_id,title,base_price\nrust-101,Intro to Rust,2999\n";

        let courses = CourseCatalogLoader::parse_courses(csv.as_bytes()).unwrap();

        assert_eq!(
            courses,
            vec![Course {
                id: "rust-101".to_string(),
                title: "Intro to Rust".to_string(),
                base_price: dec!(2999),
            }]
        );
    }
}
