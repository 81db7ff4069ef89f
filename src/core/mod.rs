pub mod cleaner;
pub mod client;
pub mod wire;

pub use crate::domain::model::{Credential, EnhanceMode, ModeParams};
pub use crate::domain::ports::KeyStore;
pub use crate::utils::error::Result;
