//! Remote API Boundary
//!
//! The dashboard owns no data. Every read and write goes through `AdminApi`;
//! `HttpApi` is the production implementation.

mod http;
mod traits;

#[cfg(test)]
mod tests;

pub use http::HttpApi;
pub use traits::{AdminApi, ListSource};
