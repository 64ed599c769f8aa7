use rust_decimal::Decimal;

use super::config::{CfdiConfig, IMPUESTO_IVA};
use super::error::ComprobanteError;
use super::types::*;
use super::validation::round_half_up;

/// Builder for constructing comprobantes from a rendered service.
///
/// Pure and deterministic: no I/O, no clock, no folio generation. Validation
/// runs before any document is assembled, so a failed build never yields a
/// partial document.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use comprobante::core::*;
/// use rust_decimal_macros::dec;
///
/// let servicio = ServicioPrestado {
///     folio: Folio::new(1).unwrap(),
///     fecha: Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
///     monto: dec!(150.00),
///     servicio_nombre: "Paseo Básico".into(),
///     duracion_minutos: 30,
/// };
/// let cfdi = ComprobanteBuilder::para_servicio(&servicio).build().unwrap();
/// assert_eq!(cfdi.total, dec!(174.00));
/// ```
pub struct ComprobanteBuilder {
    servicio: ServicioPrestado,
    config: CfdiConfig,
}

impl ComprobanteBuilder {
    pub fn para_servicio(servicio: &ServicioPrestado) -> Self {
        Self {
            servicio: servicio.clone(),
            config: CfdiConfig::default(),
        }
    }

    /// Override the default issuer/jurisdiction configuration.
    pub fn config(mut self, config: CfdiConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the comprobante, validating inputs and computing tax fields.
    ///
    /// Arithmetic rule: `monto` is normalized to two decimal places with
    /// half-up rounding to become the subtotal; IVA is the subtotal times
    /// the configured rate, rounded the same way; the total is their exact
    /// sum. All stored monetary values therefore carry at most two decimal
    /// places and `total == sub_total + iva` holds exactly.
    pub fn build(self) -> Result<Comprobante, ComprobanteError> {
        let ServicioPrestado {
            folio,
            fecha,
            monto,
            servicio_nombre,
            duracion_minutos,
        } = self.servicio;
        let config = self.config;

        if monto.is_sign_negative() && !monto.is_zero() {
            return Err(ComprobanteError::InvalidAmount(format!(
                "monto must be non-negative, got {monto}"
            )));
        }
        if servicio_nombre.trim().is_empty() {
            return Err(ComprobanteError::Builder(
                "servicio_nombre must not be empty".into(),
            ));
        }

        let sub_total = round_half_up(monto, 2);
        let iva = round_half_up(sub_total * config.tasa_iva, 2);
        let total = sub_total + iva;

        let traslado = Traslado {
            base: sub_total,
            impuesto: IMPUESTO_IVA.into(),
            tipo_factor: "Tasa".into(),
            tasa_o_cuota: config.tasa_iva,
            importe: iva,
        };

        let descripcion = format!(
            "Servicio de paseo de perro - {servicio_nombre} - Duración: {duracion_minutos} minutos"
        );

        let concepto = Concepto {
            clave_prod_serv: config.clave_prod_serv,
            cantidad: Decimal::ONE,
            clave_unidad: config.clave_unidad,
            unidad: config.unidad,
            descripcion,
            valor_unitario: sub_total,
            importe: sub_total,
            objeto_imp: config.objeto_imp,
            impuestos: Impuestos {
                traslados: vec![traslado.clone()],
            },
        };

        Ok(Comprobante {
            version: "4.0".into(),
            serie: config.serie,
            folio,
            fecha,
            forma_pago: config.forma_pago,
            sub_total,
            moneda: config.moneda,
            total,
            tipo_de_comprobante: config.tipo_de_comprobante,
            metodo_pago: config.metodo_pago,
            lugar_expedicion: config.lugar_expedicion,
            emisor: config.emisor,
            receptor: config.receptor,
            conceptos: vec![concepto],
            impuestos: Impuestos {
                traslados: vec![traslado],
            },
        })
    }
}
