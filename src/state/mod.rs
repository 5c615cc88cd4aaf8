//! View state for each console screen.
//!
//! State is split by screen (`dashboard`, `projects`, `videos`, `login`) so a
//! front end can drive one focused model per page. Each model talks to the
//! API only through [`ApiClient`](crate::services::ApiClient) or
//! [`AuthContext`](crate::services::AuthContext); nothing here renders.

pub mod dashboard;
pub mod login;
pub mod projects;
pub mod videos;

pub use dashboard::DashboardView;
pub use login::LoginForm;
pub use projects::{ProjectDetailView, ProjectListView, StatusFilter};
pub use videos::{VideoDetailView, VideoListView};

/// Render an RFC 3339 timestamp as e.g. "March 4, 2025". Input that does not
/// parse is returned unchanged.
pub fn format_date(value: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(value) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}
