use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use rust_decimal::Decimal;

use super::error::SepaError;
use super::iban::is_valid_iban;
use super::money::{MINOR_UNIT_SCALE, add_amounts, decimals_number};
use super::profile::*;
use super::types::*;

/// Building a transfer batch.
///
/// ```
/// use sepa_transfer::core::Document;
/// use rust_decimal_macros::dec;
///
/// let mut doc = Document::new();
/// doc.init_doc(
///     "VIR201705",
///     "2017-05-01T12:00:00",
///     "2017-05-03",
///     "Franz Holzapfel GMBH",
///     "AT611904300234573201",
///     "BKAUATWW",
/// )
/// .unwrap();
/// doc.add_transaction("F201705", dec!(70000), "EUR", "DEF Electronics", "GB29NWBK60161331926819")
///     .unwrap();
///
/// assert_eq!(doc.transaction_count(), 1);
/// assert_eq!(doc.control_sum(), dec!(70000));
/// ```
impl Document {
    /// An empty, uninitialized document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the emitter identity and the fixed profile values.
    ///
    /// Checks, in order: the creation timestamp (`YYYY-MM-DDTHH:MM:SS`), the
    /// execution date (`YYYY-MM-DD`) and the emitter IBAN checksum. Nothing
    /// is changed unless all three pass. Transactions, counters and control
    /// sums are left alone, so calling this again only overwrites the
    /// identity fields.
    pub fn init_doc(
        &mut self,
        msg_id: &str,
        creation_date: &str,
        execution_date: &str,
        emitter_name: &str,
        emitter_iban: &str,
        emitter_bic: &str,
    ) -> Result<(), SepaError> {
        let creation = parse_creation_timestamp(creation_date).inspect_err(reject)?;
        let execution = parse_execution_date(execution_date).inspect_err(reject)?;
        if !is_valid_iban(emitter_iban) {
            let err = SepaError::InvalidIban {
                role: "emitter",
                iban: emitter_iban.into(),
            };
            reject(&err);
            return Err(err);
        }

        self.namespace = PAIN_001_001_03_NS.into();
        self.xsi_namespace = XSI_NS.into();

        let header = &mut self.group_header;
        header.message_id = msg_id.into();
        header.creation_date_time = Some(creation);
        header.initiating_party_name = emitter_name.into();

        let payment = &mut self.payment_info;
        payment.payment_info_id = msg_id.into();
        payment.payment_method = PAYMENT_METHOD.into();
        payment.service_level = SERVICE_LEVEL.into();
        payment.requested_execution_date = Some(execution);
        payment.debtor_name = emitter_name.into();
        payment.debtor_iban = emitter_iban.into();
        payment.debtor_bic = emitter_bic.into();
        payment.charge_bearer = CHARGE_BEARER.into();

        debug!("initialized document {msg_id} for {emitter_iban}, execution {execution}");
        Ok(())
    }

    /// Append one transfer and update both counters and both control sums.
    ///
    /// Checks the creditor IBAN, then that `amount` has at most two
    /// decimals, then computes the new control sum in minor units. The
    /// document is only touched once all of that has succeeded.
    pub fn add_transaction(
        &mut self,
        id: &str,
        amount: Decimal,
        currency: &str,
        creditor_name: &str,
        creditor_iban: &str,
    ) -> Result<(), SepaError> {
        if !is_valid_iban(creditor_iban) {
            let err = SepaError::InvalidIban {
                role: "creditor",
                iban: creditor_iban.into(),
            };
            reject(&err);
            return Err(err);
        }
        let decimals = decimals_number(amount);
        if decimals > MINOR_UNIT_SCALE {
            let err = SepaError::Precision { amount, decimals };
            reject(&err);
            return Err(err);
        }
        let control_sum = add_amounts(self.group_header.control_sum, amount).inspect_err(reject)?;

        self.payment_info.transactions.push(Transaction {
            instruction_id: id.into(),
            end_to_end_id: id.into(),
            amount: InstructedAmount {
                value: amount,
                currency: currency.into(),
            },
            creditor_name: creditor_name.into(),
            creditor_iban: creditor_iban.into(),
            regulatory_code: REGULATORY_CODE.into(),
            remittance_info: id.into(),
        });
        let count = self.payment_info.transactions.len();
        self.group_header.number_of_transactions = count;
        self.payment_info.number_of_transactions = count;
        self.group_header.control_sum = control_sum;
        self.payment_info.control_sum = control_sum;

        debug!("added transaction {id} ({amount} {currency}), {count} total, control sum {control_sum}");
        Ok(())
    }

    /// `xmlns` of the root element (empty before initialization).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `xmlns:xsi` of the root element (empty before initialization).
    pub fn xsi_namespace(&self) -> &str {
        &self.xsi_namespace
    }

    pub fn group_header(&self) -> &GroupHeader {
        &self.group_header
    }

    pub fn payment_info(&self) -> &PaymentInformation {
        &self.payment_info
    }

    /// Transactions in append order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.payment_info.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.group_header.number_of_transactions
    }

    pub fn control_sum(&self) -> Decimal {
        self.group_header.control_sum
    }

    /// Whether [`Document::init_doc`] has succeeded at least once.
    pub fn is_initialized(&self) -> bool {
        self.group_header.creation_date_time.is_some()
    }

    /// Assemble a document from already-read parts. Callers must check
    /// the result with `validate_document`.
    #[cfg_attr(not(feature = "xml"), allow(dead_code))]
    pub(crate) fn from_parts(
        namespace: String,
        xsi_namespace: String,
        group_header: GroupHeader,
        payment_info: PaymentInformation,
    ) -> Self {
        Self {
            namespace,
            xsi_namespace,
            group_header,
            payment_info,
        }
    }
}

fn reject(err: &SepaError) {
    warn!("document change rejected: {err}");
}

/// Parse a `CreDtTm` value; the zero-padded layout is required.
pub(crate) fn parse_creation_timestamp(value: &str) -> Result<NaiveDateTime, SepaError> {
    let format_error = || SepaError::Format {
        field: "creation timestamp",
        value: value.into(),
        expected: "YYYY-MM-DDTHH:MM:SS",
    };
    if value.len() != "YYYY-MM-DDTHH:MM:SS".len() {
        return Err(format_error());
    }
    NaiveDateTime::parse_from_str(value, CREATION_TIMESTAMP_FORMAT).map_err(|_| format_error())
}

/// Parse a `ReqdExctnDt` value; the zero-padded layout is required.
pub(crate) fn parse_execution_date(value: &str) -> Result<NaiveDate, SepaError> {
    let format_error = || SepaError::Format {
        field: "execution date",
        value: value.into(),
        expected: "YYYY-MM-DD",
    };
    if value.len() != "YYYY-MM-DD".len() {
        return Err(format_error());
    }
    NaiveDate::parse_from_str(value, EXECUTION_DATE_FORMAT).map_err(|_| format_error())
}
