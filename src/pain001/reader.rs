use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::core::*;
use crate::core::{parse_creation_timestamp, parse_execution_date};

/// Read a pain.001.001.03 credit transfer document.
///
/// Elements outside the layout written by [`super::to_xml`] are skipped.
/// Leaf text is kept as written, including surrounding spaces; CDATA
/// sections and text interrupted by comments are joined. The result must
/// pass [`validate_document`]; otherwise the collected problems are
/// returned as [`SepaError::Validation`].
pub fn from_xml(xml: &str) -> Result<Document, SepaError> {
    let mut reader = Reader::from_str(xml);

    let mut parsed = ParsedDocument::default();
    let mut path: Vec<String> = Vec::new();
    // Text of the innermost open element, valid while it has no children.
    let mut text = String::new();
    let mut in_leaf = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = local_name(e)?;
                parsed.open(&path, &name, e)?;
                path.push(name);
                text.clear();
                in_leaf = true;
            }
            Ok(Event::Empty(ref e)) => {
                let name = local_name(e)?;
                parsed.open(&path, &name, e)?;
                parsed.close(&path, &name);
                text.clear();
                in_leaf = false;
            }
            Ok(Event::Text(ref e)) if in_leaf => {
                let fragment = e
                    .unescape()
                    .map_err(|err| SepaError::Xml(format!("bad text content: {err}")))?;
                text.push_str(&fragment);
            }
            Ok(Event::CData(ref e)) if in_leaf => {
                let fragment = std::str::from_utf8(e)
                    .map_err(|err| SepaError::Xml(format!("CDATA is not UTF-8: {err}")))?;
                text.push_str(fragment);
            }
            Ok(Event::End(_)) => {
                if in_leaf && !text.is_empty() {
                    let segments: Vec<&str> = path.iter().map(String::as_str).collect();
                    parsed.text(&segments, &text)?;
                }
                text.clear();
                in_leaf = false;
                let ended = path.pop().unwrap_or_default();
                parsed.close(&path, &ended);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SepaError::Xml(format!(
                    "parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    let doc = parsed.finish()?;
    let errors = validate_document(&doc);
    if errors.is_empty() {
        Ok(doc)
    } else {
        Err(SepaError::Validation(errors))
    }
}

/// `Document/CstmrCdtTrfInitn/PmtInf`, the only level a transaction
/// starts or ends at.
fn is_payment_level(parents: &[String]) -> bool {
    matches!(parents, [_, initiation, payment] if initiation == "CstmrCdtTrfInitn" && payment == "PmtInf")
}

fn local_name(e: &BytesStart<'_>) -> Result<String, SepaError> {
    std::str::from_utf8(e.local_name().as_ref())
        .map(str::to_string)
        .map_err(|err| SepaError::Xml(format!("element name is not UTF-8: {err}")))
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, SepaError> {
    let attr = e
        .try_get_attribute(key)
        .map_err(|err| SepaError::Xml(format!("bad attribute on {key}: {err}")))?;
    attr.map(|a| {
        a.unescape_value()
            .map(|v| v.into_owned())
            .map_err(|err| SepaError::Xml(format!("bad value for {key}: {err}")))
    })
    .transpose()
}

fn parse_count(field: &str, text: &str) -> Result<usize, SepaError> {
    text.trim()
        .parse()
        .map_err(|_| SepaError::Xml(format!("{field} '{text}' is not a transaction count")))
}

/// Plain (`70000`, `12.5`) or exponent (`1.7e+05`) notation.
fn parse_amount(field: &str, text: &str) -> Result<Decimal, SepaError> {
    let value = text.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| SepaError::Xml(format!("{field} '{text}' is not an amount")))
}

#[derive(Default)]
struct ParsedDocument {
    seen_root: bool,
    namespace: String,
    xsi_namespace: String,
    group_header: GroupHeader,
    payment_info: PaymentInformation,
    current_tx: Option<Transaction>,
}

impl ParsedDocument {
    fn open(&mut self, parents: &[String], name: &str, e: &BytesStart<'_>) -> Result<(), SepaError> {
        if parents.is_empty() {
            if name != "Document" || self.seen_root {
                return Err(SepaError::Xml(format!(
                    "expected a single <Document> root, found <{name}>"
                )));
            }
            self.seen_root = true;
            self.namespace = attribute(e, "xmlns")?.unwrap_or_default();
            self.xsi_namespace = attribute(e, "xmlns:xsi")?.unwrap_or_default();
            return Ok(());
        }

        if name == "CdtTrfTxInf" && is_payment_level(parents) {
            self.current_tx = Some(Transaction::default());
        } else if name == "InstdAmt" {
            if let Some(tx) = self.current_tx.as_mut() {
                tx.amount.currency = attribute(e, "Ccy")?.unwrap_or_default();
            }
        }
        Ok(())
    }

    fn close(&mut self, parents: &[String], name: &str) {
        if name == "CdtTrfTxInf" && is_payment_level(parents) {
            if let Some(tx) = self.current_tx.take() {
                self.payment_info.transactions.push(tx);
            }
        }
    }

    fn text(&mut self, path: &[&str], text: &str) -> Result<(), SepaError> {
        let ["Document", "CstmrCdtTrfInitn", block, rest @ ..] = path else {
            return Ok(());
        };
        match *block {
            "GrpHdr" => self.header_text(rest, text),
            "PmtInf" => self.payment_text(rest, text),
            _ => Ok(()),
        }
    }

    fn header_text(&mut self, path: &[&str], text: &str) -> Result<(), SepaError> {
        let header = &mut self.group_header;
        match path {
            ["MsgId"] => header.message_id = text.into(),
            ["CreDtTm"] => header.creation_date_time = Some(parse_creation_timestamp(text.trim())?),
            ["NbOfTxs"] => header.number_of_transactions = parse_count("GrpHdr/NbOfTxs", text)?,
            ["CtrlSum"] => header.control_sum = parse_amount("GrpHdr/CtrlSum", text)?,
            ["InitgPty", "Nm"] => header.initiating_party_name = text.into(),
            _ => {}
        }
        Ok(())
    }

    fn payment_text(&mut self, path: &[&str], text: &str) -> Result<(), SepaError> {
        if let ["CdtTrfTxInf", rest @ ..] = path {
            return self.transaction_text(rest, text);
        }
        let payment = &mut self.payment_info;
        match path {
            ["PmtInfId"] => payment.payment_info_id = text.into(),
            ["PmtMtd"] => payment.payment_method = text.into(),
            ["NbOfTxs"] => payment.number_of_transactions = parse_count("PmtInf/NbOfTxs", text)?,
            ["CtrlSum"] => payment.control_sum = parse_amount("PmtInf/CtrlSum", text)?,
            ["PmtTpInf", "SvcLvl", "Cd"] => payment.service_level = text.into(),
            ["ReqdExctnDt"] => payment.requested_execution_date = Some(parse_execution_date(text.trim())?),
            ["Dbtr", "Nm"] => payment.debtor_name = text.into(),
            ["DbtrAcct", "Id", "IBAN"] => payment.debtor_iban = text.into(),
            ["DbtrAgt", "FinInstnId", "BIC"] => payment.debtor_bic = text.into(),
            ["ChrgBr"] => payment.charge_bearer = text.into(),
            _ => {}
        }
        Ok(())
    }

    fn transaction_text(&mut self, path: &[&str], text: &str) -> Result<(), SepaError> {
        let Some(tx) = self.current_tx.as_mut() else {
            return Ok(());
        };
        match path {
            ["PmtId", "InstrId"] => tx.instruction_id = text.into(),
            ["PmtId", "EndToEndId"] => tx.end_to_end_id = text.into(),
            ["Amt", "InstdAmt"] => tx.amount.value = parse_amount("InstdAmt", text)?,
            ["Cdtr", "Nm"] => tx.creditor_name = text.into(),
            ["CdtrAcct", "Id", "IBAN"] => tx.creditor_iban = text.into(),
            ["RgltryRptg", "Dtls", "Cd"] => tx.regulatory_code = text.into(),
            ["RmtInf", "Ustrd"] => tx.remittance_info = text.into(),
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<Document, SepaError> {
        if !self.seen_root {
            return Err(SepaError::Xml("missing <Document> root element".into()));
        }
        Ok(Document::from_parts(
            self.namespace,
            self.xsi_namespace,
            self.group_header,
            self.payment_info,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_foreign_root() {
        let err = from_xml("<Invoice></Invoice>").unwrap_err();
        assert!(matches!(err, SepaError::Xml(_)));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(from_xml(""), Err(SepaError::Xml(_))));
    }

    #[test]
    fn rejects_malformed_xml() {
        assert!(matches!(
            from_xml("<Document><CstmrCdtTrfInitn></Document>"),
            Err(SepaError::Xml(_))
        ));
    }

    #[test]
    fn payment_level_path() {
        let path = |parts: &[&str]| parts.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        assert!(is_payment_level(&path(&["Document", "CstmrCdtTrfInitn", "PmtInf"])));
        assert!(!is_payment_level(&path(&["Document", "CstmrCdtTrfInitn"])));
        assert!(!is_payment_level(&path(&[
            "Document",
            "CstmrCdtTrfInitn",
            "PmtInf",
            "CdtTrfTxInf",
            "Purp"
        ])));
    }

    #[test]
    fn count_ignores_surrounding_whitespace() {
        assert_eq!(parse_count("x", " 5\n").unwrap(), 5);
        assert!(parse_count("x", "five").is_err());
    }

    #[test]
    fn amount_notations() {
        assert_eq!(parse_amount("x", "170000").unwrap(), Decimal::from(170000));
        assert_eq!(parse_amount("x", "1.7e5").unwrap(), Decimal::from(170000));
        assert_eq!(parse_amount("x", " 12.5\n").unwrap(), Decimal::new(125, 1));
        assert!(parse_amount("x", "abc").is_err());
    }
}
