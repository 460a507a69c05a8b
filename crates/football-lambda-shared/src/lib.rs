//! Shared infrastructure for the football players AWS Lambda function.
//!
//! This crate provides the pieces every handler needs around the core
//! library:
//!
//! - [`ProxyRequest`]: API Gateway proxy event, as much of it as the handler reads
//! - [`response()`]: builds the [`ProxyResponse`] envelope with CORS headers
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//! - [`LambdaConfig`] and [`init_gateway`]: environment configuration and the
//!   DynamoDB-backed gateway built once at cold start
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides an in-memory gateway and request
//! builders for handler testing. Enable the `test-utils` feature to access it
//! from dependent crates.

#![deny(warnings)]

mod requests;
mod response;
mod runtime;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use requests::ProxyRequest;
pub use response::{
    error_response, method_not_allowed, response, ErrorBody, ProxyResponse, CORS_HEADERS,
    METHOD_NOT_ALLOWED,
};
pub use runtime::{init_gateway, InitError, LambdaConfig, DEFAULT_TABLE_NAME, TABLE_NAME_ENV};
pub use tracing_init::{init_tracing, LogFormat};
