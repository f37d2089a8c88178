//! Transfer batch model, IBAN and money primitives, and validation.
//!
//! This module holds everything that does not depend on the XML syntax:
//! the in-memory `Document`, the mutation protocol that keeps its counters
//! and control sums in step with the transaction list, and the checks
//! applied before a batch is handed to a bank.

pub mod currencies;
mod document;
mod error;
pub mod iban;
pub mod iban_registry;
pub mod money;
pub mod profile;
mod types;
mod validation;

#[cfg_attr(not(feature = "xml"), allow(unused_imports))]
pub(crate) use document::{parse_creation_timestamp, parse_execution_date};
pub use error::*;
pub use iban::is_valid_iban;
pub use money::{amount_from_f64, decimals_number, to_amount, to_minor_units};
pub use types::*;
pub use validation::*;
