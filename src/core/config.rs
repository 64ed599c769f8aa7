//! Issuer, receiver, and jurisdiction constants.
//!
//! Every value the document template needs is a named field here rather than
//! an inline literal, so a different issuer or jurisdiction is a config
//! change, not a code change.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{Emisor, Receptor};

/// IVA flat rate applied to the subtotal.
pub const TASA_IVA: Decimal = dec!(0.16);

/// SAT c_Impuesto code for IVA.
pub const IMPUESTO_IVA: &str = "002";

/// SAT generic receiver RFC for unregistered customers.
pub const RFC_PUBLICO_GENERAL: &str = "XAXX010101000";

/// Template configuration for rendered comprobantes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfdiConfig {
    /// Document series.
    pub serie: String,
    /// c_FormaPago payment form code.
    pub forma_pago: String,
    /// ISO 4217 currency code.
    pub moneda: String,
    /// c_TipoDeComprobante document type code.
    pub tipo_de_comprobante: String,
    /// c_MetodoPago payment method code.
    pub metodo_pago: String,
    /// Postal code of the place of issue.
    pub lugar_expedicion: String,
    /// IVA rate.
    pub tasa_iva: Decimal,
    /// c_ClaveProdServ classification for the service line.
    pub clave_prod_serv: String,
    /// c_ClaveUnidad unit code for the service line.
    pub clave_unidad: String,
    /// Human-readable unit name.
    pub unidad: String,
    /// c_ObjetoImp tax liability code.
    pub objeto_imp: String,
    /// Issuer identity.
    pub emisor: Emisor,
    /// Receiver identity.
    pub receptor: Receptor,
}

impl Default for CfdiConfig {
    /// The "Patitas Felices" dog-walking service: Guadalajara issuer,
    /// generic receiver, 16% IVA, single cash payment.
    fn default() -> Self {
        Self {
            serie: "A".into(),
            forma_pago: "01".into(),
            moneda: "MXN".into(),
            tipo_de_comprobante: "I".into(),
            metodo_pago: "PUE".into(),
            lugar_expedicion: "44100".into(),
            tasa_iva: TASA_IVA,
            clave_prod_serv: "90111501".into(),
            clave_unidad: "E48".into(),
            unidad: "Servicio".into(),
            objeto_imp: "02".into(),
            emisor: Emisor {
                rfc: "PPE250101XX1".into(),
                nombre: "Patitas Felices".into(),
                regimen_fiscal: "601".into(),
            },
            receptor: Receptor {
                rfc: RFC_PUBLICO_GENERAL.into(),
                nombre: "Cliente General".into(),
                domicilio_fiscal: "44100".into(),
                regimen_fiscal: "616".into(),
                uso_cfdi: "G03".into(),
            },
        }
    }
}
