//! Domain types shared by the notebox store and HTTP layer.
//!
//! This crate has no I/O. It owns the error taxonomy, the typed request
//! bodies with their validation rules, and list filter normalization.

pub mod error;
pub mod notes;
pub mod types;
