//! trialdesk-client
//!
//! JSON resource client for the trialdesk API: one `send` per round trip,
//! anti-forgery header on mutating verbs, and classification of every
//! failure into the session/validation/generic taxonomy the view layer
//! consumes. Requests are never retried; at-most-once for mutating verbs
//! is part of the contract.

pub mod envelope;
pub mod error;
pub mod resource;
