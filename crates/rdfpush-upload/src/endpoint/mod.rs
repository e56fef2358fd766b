//! SPARQL-family endpoint support
//!
//! `strategy` holds the per-product wire conventions (URL shape, query
//! parameters, authentication scheme); `client` resolves connection
//! settings and performs the HTTP uploads.

pub mod client;
pub mod strategy;

pub use client::{ConnectionSettings, Credentials, EndpointClient};
pub use strategy::{AuthScheme, EndpointType};
