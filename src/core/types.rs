use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::folio::Folio;

/// Input record for one rendered service (a completed walk booking).
///
/// Folio and fecha are caller-supplied: the builder never generates them, so
/// building the same record twice produces identical documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicioPrestado {
    /// Document folio (6-digit sequence number).
    pub folio: Folio,
    /// Issue timestamp, rendered as ISO-8601 with milliseconds.
    pub fecha: DateTime<Utc>,
    /// Pre-tax subtotal.
    pub monto: Decimal,
    /// Service description as shown in the line item (e.g. "Paseo Básico").
    pub servicio_nombre: String,
    /// Service duration in minutes.
    pub duracion_minutos: u32,
}

/// CFDI 4.0 `Comprobante` — the top-level tax document.
///
/// Monetary fields are set by the builder and satisfy
/// `total == sub_total + iva` with at most two decimal places each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comprobante {
    /// CFDI schema version ("4.0").
    pub version: String,
    /// Document series.
    pub serie: String,
    /// Document folio.
    pub folio: Folio,
    /// Issue timestamp.
    pub fecha: DateTime<Utc>,
    /// SAT c_FormaPago payment form code (e.g. "01" cash).
    pub forma_pago: String,
    /// Pre-tax subtotal.
    pub sub_total: Decimal,
    /// ISO 4217 currency code (e.g. "MXN").
    pub moneda: String,
    /// Gross total = sub_total + transferred taxes.
    pub total: Decimal,
    /// SAT c_TipoDeComprobante document type ("I" = ingreso).
    pub tipo_de_comprobante: String,
    /// SAT c_MetodoPago payment method code ("PUE" = single payment).
    pub metodo_pago: String,
    /// Postal code of the place of issue.
    pub lugar_expedicion: String,
    /// Issuer block.
    pub emisor: Emisor,
    /// Receiver block.
    pub receptor: Receptor,
    /// Line items.
    pub conceptos: Vec<Concepto>,
    /// Document-level tax summary.
    pub impuestos: Impuestos,
}

/// `cfdi:Emisor` — issuer identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emisor {
    /// Issuer tax ID (RFC).
    pub rfc: String,
    /// Legal name.
    pub nombre: String,
    /// SAT c_RegimenFiscal tax regime code.
    pub regimen_fiscal: String,
}

/// `cfdi:Receptor` — receiver identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receptor {
    /// Receiver tax ID (RFC); "XAXX010101000" is the SAT generic receiver.
    pub rfc: String,
    /// Name.
    pub nombre: String,
    /// Receiver's fiscal domicile postal code.
    pub domicilio_fiscal: String,
    /// SAT c_RegimenFiscal tax regime code.
    pub regimen_fiscal: String,
    /// SAT c_UsoCFDI usage code (e.g. "G03" general expenses).
    pub uso_cfdi: String,
}

/// `cfdi:Concepto` — one line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concepto {
    /// SAT c_ClaveProdServ product/service classification code.
    pub clave_prod_serv: String,
    /// Invoiced quantity.
    pub cantidad: Decimal,
    /// SAT c_ClaveUnidad unit code ("E48" = service unit).
    pub clave_unidad: String,
    /// Human-readable unit name.
    pub unidad: String,
    /// Line description (service name + duration).
    pub descripcion: String,
    /// Net unit price.
    pub valor_unitario: Decimal,
    /// Line extension amount (cantidad * valor_unitario).
    pub importe: Decimal,
    /// SAT c_ObjetoImp tax liability code ("02" = subject to tax).
    pub objeto_imp: String,
    /// Line-level taxes.
    pub impuestos: Impuestos,
}

/// `cfdi:Impuestos` — transferred-tax block (line-level or document-level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Impuestos {
    /// Transferred taxes (IVA).
    pub traslados: Vec<Traslado>,
}

impl Impuestos {
    /// Sum of all transferred tax amounts
    /// (document-level `TotalImpuestosTrasladados`).
    pub fn total_trasladados(&self) -> Decimal {
        self.traslados.iter().map(|t| t.importe).sum()
    }
}

/// `cfdi:Traslado` — one transferred tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traslado {
    /// Taxable base amount.
    pub base: Decimal,
    /// SAT c_Impuesto tax code ("002" = IVA).
    pub impuesto: String,
    /// SAT c_TipoFactor factor type ("Tasa" = flat rate).
    pub tipo_factor: String,
    /// Tax rate, rendered with six decimal places ("0.160000").
    pub tasa_o_cuota: Decimal,
    /// Tax amount = base * rate, rounded to two decimals.
    pub importe: Decimal,
}
