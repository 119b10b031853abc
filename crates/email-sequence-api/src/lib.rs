//! Email Sequence API - client registry and sequence trigger service.
//!
//! This service sits in front of an external email automation system to:
//! - Register clients and hand out sequential client ids
//! - Acknowledge email sequence triggers for registered clients
//! - Gate every mutating or listing route behind a shared API key
//!
//! All state lives in process memory and is lost on restart.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod registry;
pub mod sequence;

pub use auth::ApiKey;
pub use config::Config;
pub use error::ApiError;
pub use registry::{ClientRecord, Registry};
pub use sequence::SequenceStarted;
