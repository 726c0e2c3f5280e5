pub mod aggregate;
pub mod auth;
pub mod graphql;
pub mod models;
pub mod queries;

pub use graphql::GithubClient;
pub use models::*;
