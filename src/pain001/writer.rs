use super::xml_utils::XmlWriter;
use crate::core::profile::{CREATION_TIMESTAMP_FORMAT, EXECUTION_DATE_FORMAT};
use crate::core::*;

/// Render a document as compact pain.001 XML (no whitespace between elements).
///
/// Rendering does not validate: an uninitialized document renders with
/// empty fields and zero totals.
pub fn to_xml(doc: &Document) -> Result<Vec<u8>, SepaError> {
    write_document(doc, XmlWriter::compact())
}

/// Render a document as pain.001 XML indented by two spaces per level.
pub fn to_xml_pretty(doc: &Document) -> Result<Vec<u8>, SepaError> {
    write_document(doc, XmlWriter::indented())
}

fn write_document(doc: &Document, mut w: XmlWriter) -> Result<Vec<u8>, SepaError> {
    w.start_element_with_attrs(
        "Document",
        &[("xmlns", doc.namespace()), ("xmlns:xsi", doc.xsi_namespace())],
    )?;
    w.start_element("CstmrCdtTrfInitn")?;
    write_group_header(&mut w, doc.group_header())?;
    write_payment_info(&mut w, doc.payment_info())?;
    w.end_element("CstmrCdtTrfInitn")?;
    w.end_element("Document")?;
    Ok(w.into_bytes())
}

fn write_group_header(w: &mut XmlWriter, header: &GroupHeader) -> Result<(), SepaError> {
    let created = header
        .creation_date_time
        .map(|dt| dt.format(CREATION_TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default();

    w.start_element("GrpHdr")?;
    w.text_element("MsgId", &header.message_id)?;
    w.text_element("CreDtTm", &created)?;
    w.text_element("NbOfTxs", &header.number_of_transactions.to_string())?;
    w.text_element("CtrlSum", &money::format_amount(header.control_sum))?;
    w.nested_text_element(&["InitgPty", "Nm"], &header.initiating_party_name)?;
    w.end_element("GrpHdr")?;
    Ok(())
}

fn write_payment_info(w: &mut XmlWriter, payment: &PaymentInformation) -> Result<(), SepaError> {
    let execution = payment
        .requested_execution_date
        .map(|d| d.format(EXECUTION_DATE_FORMAT).to_string())
        .unwrap_or_default();

    w.start_element("PmtInf")?;
    w.text_element("PmtInfId", &payment.payment_info_id)?;
    w.text_element("PmtMtd", &payment.payment_method)?;
    w.text_element("NbOfTxs", &payment.number_of_transactions.to_string())?;
    w.text_element("CtrlSum", &money::format_amount(payment.control_sum))?;
    w.nested_text_element(&["PmtTpInf", "SvcLvl", "Cd"], &payment.service_level)?;
    w.text_element("ReqdExctnDt", &execution)?;
    w.nested_text_element(&["Dbtr", "Nm"], &payment.debtor_name)?;
    w.nested_text_element(&["DbtrAcct", "Id", "IBAN"], &payment.debtor_iban)?;
    w.nested_text_element(&["DbtrAgt", "FinInstnId", "BIC"], &payment.debtor_bic)?;
    w.text_element("ChrgBr", &payment.charge_bearer)?;
    for tx in &payment.transactions {
        write_transaction(w, tx)?;
    }
    w.end_element("PmtInf")?;
    Ok(())
}

fn write_transaction(w: &mut XmlWriter, tx: &Transaction) -> Result<(), SepaError> {
    w.start_element("CdtTrfTxInf")?;

    w.start_element("PmtId")?;
    w.text_element("InstrId", &tx.instruction_id)?;
    w.text_element("EndToEndId", &tx.end_to_end_id)?;
    w.end_element("PmtId")?;

    w.start_element("Amt")?;
    w.amount_element("InstdAmt", tx.amount.value, &tx.amount.currency)?;
    w.end_element("Amt")?;

    w.nested_text_element(&["Cdtr", "Nm"], &tx.creditor_name)?;
    w.nested_text_element(&["CdtrAcct", "Id", "IBAN"], &tx.creditor_iban)?;
    w.nested_text_element(&["RgltryRptg", "Dtls", "Cd"], &tx.regulatory_code)?;
    w.nested_text_element(&["RmtInf", "Ustrd"], &tx.remittance_info)?;

    w.end_element("CdtTrfTxInf")?;
    Ok(())
}
