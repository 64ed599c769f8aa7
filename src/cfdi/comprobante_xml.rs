use chrono::SecondsFormat;

use super::cfdi_ns;
use super::xml_utils::{XmlResult, XmlWriter, format_importe, format_tasa};
use crate::core::{Comprobante, ComprobanteError, Impuestos, Traslado};

/// Render a comprobante as CFDI 4.0 XML.
pub fn to_xml(cfdi: &Comprobante) -> XmlResult {
    let mut w = XmlWriter::new()?;

    // ISO-8601 with millisecond precision and Z suffix.
    let fecha = cfdi.fecha.to_rfc3339_opts(SecondsFormat::Millis, true);
    let folio = cfdi.folio.to_string();

    w.start_element_with_attrs(
        "cfdi:Comprobante",
        &[
            ("xmlns:cfdi", cfdi_ns::CFDI),
            ("xmlns:xsi", cfdi_ns::XSI),
            ("xsi:schemaLocation", cfdi_ns::SCHEMA_LOCATION),
            ("Version", &cfdi.version),
            ("Serie", &cfdi.serie),
            ("Folio", &folio),
            ("Fecha", &fecha),
            ("FormaPago", &cfdi.forma_pago),
            ("SubTotal", &format_importe(cfdi.sub_total)),
            ("Moneda", &cfdi.moneda),
            ("Total", &format_importe(cfdi.total)),
            ("TipoDeComprobante", &cfdi.tipo_de_comprobante),
            ("MetodoPago", &cfdi.metodo_pago),
            ("LugarExpedicion", &cfdi.lugar_expedicion),
        ],
    )?;

    w.empty_element_with_attrs(
        "cfdi:Emisor",
        &[
            ("Rfc", &cfdi.emisor.rfc),
            ("Nombre", &cfdi.emisor.nombre),
            ("RegimenFiscal", &cfdi.emisor.regimen_fiscal),
        ],
    )?;

    w.empty_element_with_attrs(
        "cfdi:Receptor",
        &[
            ("Rfc", &cfdi.receptor.rfc),
            ("Nombre", &cfdi.receptor.nombre),
            ("DomicilioFiscalReceptor", &cfdi.receptor.domicilio_fiscal),
            ("RegimenFiscalReceptor", &cfdi.receptor.regimen_fiscal),
            ("UsoCFDI", &cfdi.receptor.uso_cfdi),
        ],
    )?;

    w.start_element("cfdi:Conceptos")?;
    for concepto in &cfdi.conceptos {
        let cantidad = concepto.cantidad.normalize().to_string();
        w.start_element_with_attrs(
            "cfdi:Concepto",
            &[
                ("ClaveProdServ", &concepto.clave_prod_serv),
                ("Cantidad", &cantidad),
                ("ClaveUnidad", &concepto.clave_unidad),
                ("Unidad", &concepto.unidad),
                ("Descripcion", &concepto.descripcion),
                ("ValorUnitario", &format_importe(concepto.valor_unitario)),
                ("Importe", &format_importe(concepto.importe)),
                ("ObjetoImp", &concepto.objeto_imp),
            ],
        )?;
        write_impuestos(&mut w, &concepto.impuestos, None)?;
        w.end_element("cfdi:Concepto")?;
    }
    w.end_element("cfdi:Conceptos")?;

    // Document-level tax summary carries the transferred total.
    let total_trasladados = format_importe(cfdi.impuestos.total_trasladados());
    write_impuestos(&mut w, &cfdi.impuestos, Some(&total_trasladados))?;

    w.end_element("cfdi:Comprobante")?;
    w.into_string()
}

fn write_impuestos(
    w: &mut XmlWriter,
    impuestos: &Impuestos,
    total_trasladados: Option<&str>,
) -> Result<(), ComprobanteError> {
    match total_trasladados {
        Some(total) => {
            w.start_element_with_attrs("cfdi:Impuestos", &[("TotalImpuestosTrasladados", total)])?
        }
        None => w.start_element("cfdi:Impuestos")?,
    };
    w.start_element("cfdi:Traslados")?;
    for traslado in &impuestos.traslados {
        write_traslado(w, traslado)?;
    }
    w.end_element("cfdi:Traslados")?;
    w.end_element("cfdi:Impuestos")?;
    Ok(())
}

fn write_traslado(w: &mut XmlWriter, traslado: &Traslado) -> Result<(), ComprobanteError> {
    w.empty_element_with_attrs(
        "cfdi:Traslado",
        &[
            ("Base", &format_importe(traslado.base)),
            ("Impuesto", &traslado.impuesto),
            ("TipoFactor", &traslado.tipo_factor),
            ("TasaOCuota", &format_tasa(traslado.tasa_o_cuota)),
            ("Importe", &format_importe(traslado.importe)),
        ],
    )?;
    Ok(())
}
