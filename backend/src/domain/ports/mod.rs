//! Domain ports: traits the inbound adapters depend on and the outbound
//! adapters implement.

mod user_store;

pub use user_store::{UserStore, UserStoreError};
