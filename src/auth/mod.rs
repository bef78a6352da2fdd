//! Authentication Module
//! Mission: Issue and verify signed session tokens, resolve role-scoped resources

pub mod api;
pub mod catalog;
pub mod clock;
pub mod digest;
pub mod errors;
pub mod jwt;
pub mod models;
pub mod service;
pub mod user_store;

pub use api::AuthState;
pub use catalog::ResourceCatalog;
pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::AuthError;
pub use jwt::TokenCodec;
pub use service::AuthService;
pub use user_store::UserStore;
