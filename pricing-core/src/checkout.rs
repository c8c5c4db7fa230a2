//! Quoting courses for checkout.
//!
//! Joins a [`CourseCatalog`] with a [`ChargeCalculator`] so a checkout flow
//! can ask for the amount to charge by course id. Submitting the payment to
//! a gateway is left to the caller via [`CourseQuote::gateway_payment`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::calculations::{ChargeCalculator, PricingError};
use crate::catalog::{CatalogError, CourseCatalog};
use crate::models::{Course, GatewayPayment, TaxComputation};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Pricing error for course '{course_id}': {source}")]
    Pricing {
        course_id: String,
        #[source]
        source: PricingError,
    },
}

/// A course together with the charge computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseQuote {
    pub course: Course,
    pub computation: TaxComputation,
}

impl CourseQuote {
    pub fn gateway_payment(&self) -> GatewayPayment {
        self.computation.gateway_payment()
    }
}

pub struct CheckoutQuoter<C: CourseCatalog> {
    catalog: C,
    calculator: ChargeCalculator,
}

impl<C: CourseCatalog> CheckoutQuoter<C> {
    pub fn new(
        catalog: C,
        calculator: ChargeCalculator,
    ) -> Self {
        Self {
            catalog,
            calculator,
        }
    }

    /// The catalog courses are looked up in.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Looks up a course and computes its charge.
    pub async fn quote_course(
        &self,
        course_id: &str,
    ) -> Result<CourseQuote, CheckoutError> {
        let course = self.catalog.get_course(course_id).await?;
        debug!(course_id, base_price = %course.base_price, "quoting course");
        self.quote(course)
    }

    /// Quotes every course in catalog order.
    ///
    /// Stops at the first course whose price cannot be charged.
    pub async fn quote_all(&self) -> Result<Vec<CourseQuote>, CheckoutError> {
        let courses = self.catalog.list_courses().await?;
        let quotes = courses
            .into_iter()
            .map(|course| self.quote(course))
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = quotes.len(), "quoted catalog");
        Ok(quotes)
    }

    fn quote(
        &self,
        course: Course,
    ) -> Result<CourseQuote, CheckoutError> {
        let computation = self
            .calculator
            .compute_charge_amount(course.base_price)
            .map_err(|source| CheckoutError::Pricing {
                course_id: course.id.clone(),
                source,
            })?;
        Ok(CourseQuote {
            course,
            computation,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PricingConfig;

    struct FixedCatalog {
        courses: Vec<Course>,
    }

    impl FixedCatalog {
        fn new(prices: &[(&str, rust_decimal::Decimal)]) -> Self {
            Self {
                courses: prices
                    .iter()
                    .map(|(id, price)| Course {
                        id: id.to_string(),
                        title: format!("Course {id}"),
                        base_price: *price,
                    })
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl CourseCatalog for FixedCatalog {
        async fn get_course(&self, id: &str) -> Result<Course, CatalogError> {
            let by_id: HashMap<&str, &Course> =
                self.courses.iter().map(|c| (c.id.as_str(), c)).collect();
            by_id
                .get(id)
                .map(|c| (*c).clone())
                .ok_or_else(|| CatalogError::NotFound(id.to_string()))
        }

        async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
            Ok(self.courses.clone())
        }
    }

    fn quoter(prices: &[(&str, rust_decimal::Decimal)]) -> CheckoutQuoter<FixedCatalog> {
        CheckoutQuoter::new(
            FixedCatalog::new(prices),
            ChargeCalculator::new(PricingConfig::default()),
        )
    }

    #[tokio::test]
    async fn quote_course_prices_catalog_entry() {
        let quoter = quoter(&[("rust-101", dec!(2999)), ("web-201", dec!(1000))]);

        let quote = quoter.quote_course("rust-101").await.unwrap();

        assert_eq!(quote.course.id, "rust-101");
        assert_eq!(quote.computation.total_amount, dec!(3539));
        assert_eq!(quote.gateway_payment().amount, 353900);
    }

    #[tokio::test]
    async fn quote_course_reports_missing_course() {
        let quoter = quoter(&[("rust-101", dec!(2999))]);

        let result = quoter.quote_course("missing").await;

        assert_eq!(
            result,
            Err(CheckoutError::Catalog(CatalogError::NotFound(
                "missing".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn quote_course_reports_invalid_price() {
        let quoter = quoter(&[("broken", dec!(-10))]);

        let result = quoter.quote_course("broken").await;

        assert!(matches!(
            result,
            Err(CheckoutError::Pricing { ref course_id, source: PricingError::InvalidAmount(_) })
                if course_id == "broken"
        ));
    }

    #[tokio::test]
    async fn quote_all_preserves_catalog_order() {
        let quoter = quoter(&[
            ("b", dec!(1250)),
            ("a", dec!(1000)),
            ("c", dec!(2999)),
        ]);

        let quotes = quoter.quote_all().await.unwrap();

        let amounts: Vec<(&str, u64)> = quotes
            .iter()
            .map(|q| (q.course.id.as_str(), q.computation.gateway_amount))
            .collect();
        assert_eq!(amounts, vec![("b", 147500), ("a", 118000), ("c", 353900)]);
    }

    #[tokio::test]
    async fn catalog_exposes_backing_courses() {
        let quoter = quoter(&[("a", dec!(1000)), ("b", dec!(1250))]);

        let courses = quoter.catalog().list_courses().await.unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].id, "b");
    }

    #[tokio::test]
    async fn quote_all_fails_on_first_invalid_price() {
        let quoter = quoter(&[("ok", dec!(1000)), ("bad", dec!(0.001))]);

        let result = quoter.quote_all().await;

        assert!(matches!(result, Err(CheckoutError::Pricing { .. })));
    }
}
