//! Resource services for the GoCollect API.
//!
//! Each service is a lightweight wrapper borrowing a
//! [`Connection`](crate::http::Connection) and exposing blocking methods that
//! return `Result<T>` with typed models.

pub mod collectibles;
pub mod insights;
pub mod sold_examples;
pub mod staged_sales;

pub use collectibles::{CollectiblesService, SearchItemsParams};
pub use insights::InsightsService;
pub use sold_examples::SoldExamplesService;
pub use staged_sales::StagedSalesService;
