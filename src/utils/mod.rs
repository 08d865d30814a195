//! Helper functions shared across layers.
//!
//! - [`validation`] - Field validators for submitted forms

pub mod validation;
