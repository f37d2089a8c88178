use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;

use crate::core::SepaError;
use crate::core::money::format_amount;

fn xml_io(e: std::io::Error) -> SepaError {
    SepaError::Xml(format!("XML write error: {e}"))
}

/// Thin event writer over `quick_xml::Writer`. No XML declaration is
/// emitted; the receiving banks expect the document to start at `<Document>`.
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// No whitespace between elements.
    pub fn compact() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    /// Two spaces per nesting level, text kept inline with its element.
    pub fn indented() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner()
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, SepaError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, SepaError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, SepaError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// `<name>text</name>`; an empty `text` still yields both tags.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, SepaError> {
        self.start_element(name)?;
        self.write_text(text)?;
        self.end_element(name)
    }

    /// `<name Ccy="...">amount</name>`.
    pub fn amount_element(
        &mut self,
        name: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<&mut Self, SepaError> {
        self.start_element_with_attrs(name, &[("Ccy", currency)])?;
        self.write_text(&format_amount(amount))?;
        self.end_element(name)
    }

    /// Open each element of `path` in turn, write `text` in the innermost
    /// one and close them again: `Dbtr/Nm`, `DbtrAcct/Id/IBAN`, ...
    pub fn nested_text_element(
        &mut self,
        path: &[&str],
        text: &str,
    ) -> Result<&mut Self, SepaError> {
        let Some((leaf, parents)) = path.split_last() else {
            return Ok(self);
        };
        for parent in parents {
            self.start_element(parent)?;
        }
        self.text_element(leaf, text)?;
        for parent in parents.iter().rev() {
            self.end_element(parent)?;
        }
        Ok(self)
    }

    fn write_text(&mut self, text: &str) -> Result<(), SepaError> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn render(mut w: XmlWriter) -> String {
        w.start_element("A").unwrap();
        w.nested_text_element(&["B", "C"], "x").unwrap();
        w.amount_element("D", dec!(12.50), "EUR").unwrap();
        w.text_element("E", "").unwrap();
        w.end_element("A").unwrap();
        String::from_utf8(w.into_bytes()).unwrap()
    }

    #[test]
    fn compact_output() {
        assert_eq!(
            render(XmlWriter::compact()),
            r#"<A><B><C>x</C></B><D Ccy="EUR">12.5</D><E></E></A>"#
        );
    }

    #[test]
    fn indented_output() {
        assert_eq!(
            render(XmlWriter::indented()),
            "<A>\n  <B>\n    <C>x</C>\n  </B>\n  <D Ccy=\"EUR\">12.5</D>\n  <E></E>\n</A>"
        );
    }

    #[test]
    fn text_is_escaped() {
        let mut w = XmlWriter::compact();
        w.text_element("Nm", "Smith & <Sons>").unwrap();
        assert_eq!(
            String::from_utf8(w.into_bytes()).unwrap(),
            "<Nm>Smith &amp; &lt;Sons&gt;</Nm>"
        );
    }
}
