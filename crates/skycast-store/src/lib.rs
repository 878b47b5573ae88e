//! Beliefs dataset for Skycast
//!
//! Loads the forecast beliefs dataset and answers "as-of" queries: what was
//! believed at a knowledge time about a target time, and derived boolean
//! indicators for tomorrow.

pub mod dataset;
pub mod store;
pub mod time;
pub mod types;

pub use skycast_core::StoreError;
pub use store::BeliefStore;
pub use time::parse_datetime;
pub use types::*;
