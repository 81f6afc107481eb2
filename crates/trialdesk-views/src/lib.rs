//! trialdesk-views
//!
//! View-model layer for the listing screens: an authoritative in-memory
//! collection per screen, a debounced text filter over it, and the
//! add/edit/delete session that sends drafts to the API and merges the
//! canonical result back in. The hosting page constructs a controller per
//! mount point (see [`listings`]) and drives it from its event loop.

pub mod collection;
pub mod controller;
pub mod error;
pub mod filter;
pub mod listings;
pub mod session;
pub mod surface;
