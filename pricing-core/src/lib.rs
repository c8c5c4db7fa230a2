pub mod calculations;
pub mod catalog;
pub mod checkout;
pub mod models;

pub use calculations::{ChargeCalculator, PricingError, compute_charge_amount};
pub use catalog::{CatalogError, CourseCatalog};
pub use checkout::{CheckoutError, CheckoutQuoter, CourseQuote};
pub use models::*;
