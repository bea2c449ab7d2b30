pub mod engine;
pub mod fetch;
pub mod graphql;
pub mod models;
pub mod output;
