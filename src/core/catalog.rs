//! Walk service catalog.
//!
//! The tiers offered by the booking layer. Prices are pre-tax; the builder
//! adds IVA on top.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::folio::Folio;
use super::types::ServicioPrestado;

/// One bookable walk service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Servicio {
    pub nombre: String,
    pub duracion_minutos: u32,
    /// Pre-tax price.
    pub precio: Decimal,
    pub descripcion: String,
}

/// The base catalog of walk tiers.
pub fn catalogo_base() -> Vec<Servicio> {
    vec![
        Servicio {
            nombre: "Paseo Básico".into(),
            duracion_minutos: 30,
            precio: dec!(150.00),
            descripcion: "Paseo de 30 minutos".into(),
        },
        Servicio {
            nombre: "Paseo Estándar".into(),
            duracion_minutos: 60,
            precio: dec!(250.00),
            descripcion: "Paseo de 1 hora".into(),
        },
        Servicio {
            nombre: "Paseo Premium".into(),
            duracion_minutos: 90,
            precio: dec!(350.00),
            descripcion: "Paseo de hora y media".into(),
        },
    ]
}

/// Look up a catalog entry by exact name.
pub fn buscar_servicio<'a>(catalogo: &'a [Servicio], nombre: &str) -> Option<&'a Servicio> {
    catalogo.iter().find(|s| s.nombre == nombre)
}

impl ServicioPrestado {
    /// Build the invoice input for a catalog service rendered at `fecha`
    /// under the given folio.
    pub fn para_servicio(servicio: &Servicio, folio: Folio, fecha: DateTime<Utc>) -> Self {
        Self {
            folio,
            fecha,
            monto: servicio.precio,
            servicio_nombre: servicio.nombre.clone(),
            duracion_minutos: servicio.duracion_minutos,
        }
    }
}
