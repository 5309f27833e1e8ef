pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use crate::client::SaplingClient;
pub use crate::config::Config;
pub use crate::error::{Result, SaplingError};
pub use crate::types::*;

pub use log;
pub use reqwest;
