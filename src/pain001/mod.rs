//! pain.001.001.03 XML generation and parsing.
//!
//! The element layout and order follow the customer credit transfer
//! initiation schema; each field of [`Document`](crate::core::Document)
//! maps to exactly one element path.
//!
//! # Example
//!
//! ```
//! use sepa_transfer::core::Document;
//! use sepa_transfer::pain001;
//! use rust_decimal_macros::dec;
//!
//! let mut doc = Document::new();
//! doc.init_doc("MSGID", "2017-06-07T14:39:33", "2017-06-09", "Emitter Name",
//!     "FR1420041010050500013M02606", "BKAUATWW").unwrap();
//! doc.add_transaction("F201705", dec!(70000), "EUR", "DEF Electronics",
//!     "GB29NWBK60161331926819").unwrap();
//!
//! let xml = pain001::to_xml(&doc).unwrap();
//! let parsed = pain001::from_xml(std::str::from_utf8(&xml).unwrap()).unwrap();
//! assert_eq!(parsed, doc);
//! ```

mod reader;
mod writer;
pub(crate) mod xml_utils;

pub use reader::from_xml;
pub use writer::{to_xml, to_xml_pretty};
