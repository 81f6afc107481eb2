//! trialdesk-core
//!
//! Pure domain types, the `Entity` contract, and REST path conventions.
//! No HTTP dependency — this is the shared vocabulary of the trialdesk
//! client layer.

pub mod entity;
pub mod error;
pub mod models;
pub mod urls;
