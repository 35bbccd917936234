//! Networking for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints, interprets responses, and hosts the browser
//! transport. Wire types live in the shared `roster` crate.

pub mod api;
