pub mod cli;
pub mod config;
pub mod global;
pub mod models;
pub mod services;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use services::{ApiClient, ApiError, AuthContext, Session};
