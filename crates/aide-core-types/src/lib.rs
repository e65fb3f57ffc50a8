//! Core types shared across aide facilities
//!
//! This crate provides foundational types used by both the router and
//! the logging facility:
//!
//! - **Correlation types**: RequestId, SessionId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, SessionId};
