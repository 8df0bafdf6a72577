pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::ViaCepClient;
pub use app::routines::{AddressLookup, BatchLookup, FAILURE_MESSAGE};
pub use core::runner::LookupRunner;
pub use domain::model::{LocalityQuery, LookupResult, PostalCode};
pub use utils::error::{LookupError, Result};
