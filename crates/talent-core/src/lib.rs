pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod format;
pub mod io;
pub mod paths;
pub mod types;

pub use error::{HubError, Result};
