//! # sepa-transfer
//!
//! Builds SEPA credit transfer batches (ISO 20022 `pain.001.001.03`) from
//! individual transfer instructions and renders them to XML.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Control sums are accumulated in integer minor units, IBANs are checked
//! with the ISO 7064 mod-97 algorithm, and the header counters and control
//! sums are updated together with the transaction list or not at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use sepa_transfer::core::*;
//! use sepa_transfer::pain001;
//! use rust_decimal_macros::dec;
//!
//! let mut doc = Document::new();
//! doc.init_doc(
//!     "VIR201705",
//!     "2017-05-01T12:00:00",
//!     "2017-05-03",
//!     "Franz Holzapfel GMBH",
//!     "AT611904300234573201",
//!     "BKAUATWW",
//! )
//! .unwrap();
//! doc.add_transaction("F201705", dec!(70000), "EUR", "DEF Electronics", "GB29NWBK60161331926819")
//!     .unwrap();
//! doc.add_transaction("F201706", dec!(10000.50), "EUR", "D1F Electronics", "BE62510007547061")
//!     .unwrap();
//!
//! assert!(validate_document(&doc).is_empty());
//! assert_eq!(doc.control_sum(), dec!(80000.50));
//!
//! let xml = pain001::to_xml(&doc).unwrap();
//! assert!(xml.starts_with(b"<Document xmlns=\"urn:iso:std:iso:20022:tech:xsd:pain.001.001.03\""));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document model, IBAN and money primitives, validation |
//! | `xml` (default) | pain.001 XML writer and reader |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod pain001;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
