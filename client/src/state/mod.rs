//! Client state for the activity panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` owns the rendered list and select options, `status` the shared
//! message slot, `signup` the form fields; `panel` bundles them into the one
//! value provided through Leptos context.

pub mod catalog;
pub mod panel;
pub mod signup;
pub mod status;
