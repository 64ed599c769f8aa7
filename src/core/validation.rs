use rust_decimal::Decimal;

use super::error::{ComprobanteError, ValidationError};
use super::folio::FOLIO_MAX;
use super::types::Comprobante;

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a float-sourced amount to a Decimal.
///
/// This is the single entry point for amounts arriving as `f64` (e.g. from a
/// JSON body). NaN, infinities, and negative values are rejected with
/// [`ComprobanteError::InvalidAmount`] before they can reach the builder.
pub fn monto_from_f64(value: f64) -> Result<Decimal, ComprobanteError> {
    if !value.is_finite() {
        return Err(ComprobanteError::InvalidAmount(format!(
            "monto must be finite, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(ComprobanteError::InvalidAmount(format!(
            "monto must be non-negative, got {value}"
        )));
    }
    Decimal::try_from(value)
        .map_err(|e| ComprobanteError::InvalidAmount(format!("monto {value}: {e}")))
}

/// Validate a built comprobante.
/// Returns all validation errors found (not just the first).
pub fn validate_comprobante(cfdi: &Comprobante) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if cfdi.folio.value() > FOLIO_MAX {
        errors.push(ValidationError::new(
            "folio",
            format!("folio exceeds 6-digit maximum {FOLIO_MAX}"),
        ));
    }

    if cfdi.moneda.len() != 3 {
        errors.push(ValidationError::new(
            "moneda",
            "currency code must be 3 characters (ISO 4217)",
        ));
    }

    check_amount(cfdi.sub_total, "sub_total", &mut errors);
    check_amount(cfdi.total, "total", &mut errors);

    let iva = cfdi.impuestos.total_trasladados();
    check_amount(iva, "impuestos.total_trasladados", &mut errors);

    // total == sub_total + iva, exactly
    if cfdi.total != cfdi.sub_total + iva {
        errors.push(ValidationError::new(
            "total",
            format!(
                "total {} does not equal sub_total {} + IVA {}",
                cfdi.total, cfdi.sub_total, iva
            ),
        ));
    }

    if cfdi.conceptos.is_empty() {
        errors.push(ValidationError::new(
            "conceptos",
            "comprobante must have at least one line item",
        ));
    }

    let mut line_iva = Decimal::ZERO;
    for (i, concepto) in cfdi.conceptos.iter().enumerate() {
        if concepto.descripcion.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("conceptos.{i}.descripcion"),
                "description must not be empty",
            ));
        }
        check_amount(concepto.valor_unitario, &format!("conceptos.{i}.valor_unitario"), &mut errors);
        check_amount(concepto.importe, &format!("conceptos.{i}.importe"), &mut errors);
        if concepto.importe != concepto.cantidad * concepto.valor_unitario {
            errors.push(ValidationError::new(
                format!("conceptos.{i}.importe"),
                "importe must equal cantidad * valor_unitario",
            ));
        }
        line_iva += concepto.impuestos.total_trasladados();
    }

    // Line-level taxes must add up to the document-level summary
    if line_iva != iva {
        errors.push(ValidationError::new(
            "impuestos",
            format!(
                "document-level IVA {iva} does not match sum of line-level IVA {line_iva}"
            ),
        ));
    }

    errors
}

fn check_amount(value: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if value.is_sign_negative() && !value.is_zero() {
        errors.push(ValidationError::new(
            field,
            format!("amount {value} must be non-negative"),
        ));
    }
    if value != value.round_dp(2) {
        errors.push(ValidationError::new(
            field,
            format!("amount {value} has more than 2 decimal places"),
        ));
    }
}
