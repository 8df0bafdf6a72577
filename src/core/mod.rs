pub mod runner;

pub use crate::domain::model::{LocalityQuery, LookupResult, PostalCode};
pub use crate::domain::ports::{ConfigProvider, LookupService, Routine};
pub use crate::utils::error::Result;
