pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{store::LocalStore, ServiceConfig};
pub use core::{cleaner::clean_response, client::EnhanceClient};
pub use domain::model::{Credential, EnhanceMode};
pub use domain::ports::KeyStore;
pub use utils::error::{EnhanceError, Result};
