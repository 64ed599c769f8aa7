//! CFDI 4.0 XML rendering tests.

#![cfg(feature = "xml")]

use chrono::{DateTime, TimeZone, Utc};
use comprobante::cfdi::to_xml;
use comprobante::core::*;
use quick_xml::Reader;
use quick_xml::events::Event;
use rust_decimal_macros::dec;

fn fecha() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
}

fn comprobante(monto: rust_decimal::Decimal, nombre: &str, duracion: u32) -> Comprobante {
    let input = ServicioPrestado {
        folio: Folio::new(42).unwrap(),
        fecha: fecha(),
        monto,
        servicio_nombre: nombre.into(),
        duracion_minutos: duracion,
    };
    ComprobanteBuilder::para_servicio(&input).build().unwrap()
}

/// Parse the document into (element name, attributes) pairs in document
/// order. Panics on malformed XML, so every call doubles as a
/// well-formedness check.
fn parse(xml: &str) -> Vec<(String, Vec<(String, String)>)> {
    let mut reader = Reader::from_str(xml);
    let mut elements = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let attrs = e
                    .attributes()
                    .map(|a| {
                        let a = a.unwrap();
                        (
                            String::from_utf8_lossy(a.key.as_ref()).into_owned(),
                            a.unescape_value().unwrap().into_owned(),
                        )
                    })
                    .collect();
                elements.push((name, attrs));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {e}"),
        }
    }
    elements
}

/// Look up an attribute on the element carrying it. Elements may occur more
/// than once with different attribute sets (the line-level `cfdi:Impuestos`
/// block has no attributes, the document-level one does), so match on both
/// name and key.
fn attr<'a>(elements: &'a [(String, Vec<(String, String)>)], elem: &str, key: &str) -> &'a str {
    elements
        .iter()
        .filter(|(name, _)| name == elem)
        .find_map(|(_, attrs)| attrs.iter().find(|(k, _)| k == key))
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("no {key} on {elem}"))
}

// --- Header ---

#[test]
fn header_fields() {
    let xml = to_xml(&comprobante(dec!(250.00), "Paseo Estándar", 60)).unwrap();
    let doc = parse(&xml);

    let (root, _) = &doc[0];
    assert_eq!(root, "cfdi:Comprobante");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "Version"), "4.0");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "Serie"), "A");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "Folio"), "000042");
    assert_eq!(
        attr(&doc, "cfdi:Comprobante", "Fecha"),
        "2024-03-15T10:30:00.000Z"
    );
    assert_eq!(attr(&doc, "cfdi:Comprobante", "FormaPago"), "01");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "SubTotal"), "250.00");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "Moneda"), "MXN");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "Total"), "290.00");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "TipoDeComprobante"), "I");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "MetodoPago"), "PUE");
    assert_eq!(attr(&doc, "cfdi:Comprobante", "LugarExpedicion"), "44100");
}

#[test]
fn issuer_and_receiver_blocks() {
    let xml = to_xml(&comprobante(dec!(250.00), "Paseo Estándar", 60)).unwrap();
    let doc = parse(&xml);

    assert_eq!(attr(&doc, "cfdi:Emisor", "Rfc"), "PPE250101XX1");
    assert_eq!(attr(&doc, "cfdi:Emisor", "Nombre"), "Patitas Felices");
    assert_eq!(attr(&doc, "cfdi:Emisor", "RegimenFiscal"), "601");

    assert_eq!(attr(&doc, "cfdi:Receptor", "Rfc"), "XAXX010101000");
    assert_eq!(attr(&doc, "cfdi:Receptor", "Nombre"), "Cliente General");
    assert_eq!(attr(&doc, "cfdi:Receptor", "DomicilioFiscalReceptor"), "44100");
    assert_eq!(attr(&doc, "cfdi:Receptor", "RegimenFiscalReceptor"), "616");
    assert_eq!(attr(&doc, "cfdi:Receptor", "UsoCFDI"), "G03");
}

// --- Line item ---

#[test]
fn line_item_fields_verbatim() {
    let xml = to_xml(&comprobante(dec!(150.00), "Paseo Básico", 30)).unwrap();
    let doc = parse(&xml);

    let descripcion = attr(&doc, "cfdi:Concepto", "Descripcion");
    assert!(descripcion.contains("Paseo Básico"));
    assert!(descripcion.contains("30"));
    assert_eq!(
        descripcion,
        "Servicio de paseo de perro - Paseo Básico - Duración: 30 minutos"
    );

    assert_eq!(attr(&doc, "cfdi:Concepto", "ClaveProdServ"), "90111501");
    assert_eq!(attr(&doc, "cfdi:Concepto", "Cantidad"), "1");
    assert_eq!(attr(&doc, "cfdi:Concepto", "ClaveUnidad"), "E48");
    assert_eq!(attr(&doc, "cfdi:Concepto", "Unidad"), "Servicio");
    assert_eq!(attr(&doc, "cfdi:Concepto", "ValorUnitario"), "150.00");
    assert_eq!(attr(&doc, "cfdi:Concepto", "Importe"), "150.00");
    assert_eq!(attr(&doc, "cfdi:Concepto", "ObjetoImp"), "02");
}

#[test]
fn tax_blocks_carry_same_iva() {
    let xml = to_xml(&comprobante(dec!(250.00), "Paseo Estándar", 60)).unwrap();
    let doc = parse(&xml);

    assert_eq!(
        attr(&doc, "cfdi:Impuestos", "TotalImpuestosTrasladados"),
        "40.00"
    );

    // Two cfdi:Impuestos blocks: the line-level one carries no attributes,
    // only the document-level summary (last in document order) has the total.
    let impuestos: Vec<_> = doc.iter().filter(|(n, _)| n == "cfdi:Impuestos").collect();
    assert_eq!(impuestos.len(), 2);
    assert!(impuestos[0].1.is_empty());
    assert_eq!(
        impuestos[1].1,
        vec![("TotalImpuestosTrasladados".to_string(), "40.00".to_string())]
    );

    // Both the line-level and document-level traslado carry the same values
    let traslados: Vec<_> = doc.iter().filter(|(n, _)| n == "cfdi:Traslado").collect();
    assert_eq!(traslados.len(), 2);
    for (_, attrs) in &traslados {
        let get = |k: &str| {
            attrs
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("Base"), "250.00");
        assert_eq!(get("Impuesto"), "002");
        assert_eq!(get("TipoFactor"), "Tasa");
        assert_eq!(get("TasaOCuota"), "0.160000");
        assert_eq!(get("Importe"), "40.00");
    }
}

// --- Determinism ---

#[test]
fn rendering_is_deterministic() {
    let cfdi = comprobante(dec!(250.00), "Paseo Estándar", 60);
    let first = to_xml(&cfdi).unwrap();
    let second = to_xml(&cfdi).unwrap();
    assert_eq!(first, second);

    // Same input built twice also renders byte-identical
    let again = comprobante(dec!(250.00), "Paseo Estándar", 60);
    assert_eq!(first, to_xml(&again).unwrap());
}

// --- Escaping ---

#[test]
fn markup_characters_in_service_name_are_escaped() {
    let nombre = r#"Paseo & <Premium> "especial""#;
    let xml = to_xml(&comprobante(dec!(150.00), nombre, 30)).unwrap();

    // Reserved characters never appear raw inside the attribute value
    assert!(!xml.contains("<Premium"));
    assert!(xml.contains("&amp;"));
    assert!(xml.contains("&lt;"));

    // The document still parses, and the text round-trips intact
    let doc = parse(&xml);
    let descripcion = attr(&doc, "cfdi:Concepto", "Descripcion");
    assert!(descripcion.contains(nombre));
}

#[test]
fn declaration_and_namespaces() {
    let xml = to_xml(&comprobante(dec!(250.00), "Paseo Estándar", 60)).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

    let doc = parse(&xml);
    assert_eq!(
        attr(&doc, "cfdi:Comprobante", "xmlns:cfdi"),
        "http://www.sat.gob.mx/cfd/4"
    );
    assert!(attr(&doc, "cfdi:Comprobante", "xsi:schemaLocation")
        .contains("cfdv40.xsd"));
}
