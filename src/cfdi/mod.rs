//! CFDI 4.0 XML generation.
//!
//! Renders a [`Comprobante`](crate::core::Comprobante) into the SAT
//! `cfdi:Comprobante` schema. All caller-supplied text is XML-escaped on
//! the way out, and rendering is deterministic: identical documents produce
//! byte-identical XML.

mod comprobante_xml;
mod xml_utils;

pub use comprobante_xml::to_xml;
pub use xml_utils::{format_importe, format_tasa};

/// SAT namespace constants for CFDI 4.0.
pub mod cfdi_ns {
    pub const CFDI: &str = "http://www.sat.gob.mx/cfd/4";
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
    pub const SCHEMA_LOCATION: &str =
        "http://www.sat.gob.mx/cfd/4 http://www.sat.gob.mx/sitio_internet/cfd/4/cfdv40.xsd";
}
