//! # comprobante
//!
//! CFDI 4.0 (Mexican SAT) e-invoicing for service businesses: comprobante
//! construction, folio sequencing, IVA calculation, and XML generation.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Float-sourced amounts enter through [`core::monto_from_f64`], which
//! rejects NaN, infinite, and negative inputs up front.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use comprobante::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut folios = FolioSequence::starting_at(42).unwrap();
//! let servicio = ServicioPrestado {
//!     folio: folios.next_folio().unwrap(),
//!     fecha: Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
//!     monto: dec!(250.00),
//!     servicio_nombre: "Paseo Estándar".into(),
//!     duracion_minutos: 60,
//! };
//!
//! let cfdi = ComprobanteBuilder::para_servicio(&servicio).build().unwrap();
//! assert_eq!(cfdi.sub_total, dec!(250.00));
//! assert_eq!(cfdi.total, dec!(290.00));
//! assert_eq!(cfdi.folio.to_string(), "000042");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Comprobante types, folio sequencing, validation |
//! | `xml` (default) | CFDI 4.0 XML rendering |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod cfdi;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
