pub mod error;
pub mod i18n;
pub mod models;
pub mod schema;
pub mod session;
pub mod target;
pub mod types;

pub use error::Error;
pub use models::{CompletionModel, CompletionRequest};
pub use schema::{Property, Schema, SchemaViolation};
pub use session::{Authenticator, DemoAuthenticator, Session};
pub use types::*;

pub type Result<T> = std::result::Result<T, Error>;
