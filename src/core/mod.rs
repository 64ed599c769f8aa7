//! Core comprobante types, folio sequencing, and validation.
//!
//! This module provides the foundational types for CFDI 4.0 invoicing of
//! service bookings: the document model, the builder that computes IVA, and
//! the monotonic folio sequence.

mod builder;
mod catalog;
mod config;
mod error;
mod folio;
mod types;
mod validation;

pub use builder::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use folio::*;
pub use types::*;
pub use validation::*;
