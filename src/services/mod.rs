pub mod api;
pub mod auth;
pub mod session;

pub use api::{ApiClient, ApiError, ApiResult, ErrorCategory, LoginRedirect, Navigator};
pub use auth::AuthContext;
pub use session::{FileStorage, MemoryStorage, Session, SessionError, SessionStorage};
