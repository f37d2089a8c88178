use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `Document`: one customer credit transfer initiation (pain.001).
///
/// Fields are only reachable through accessors so that the transaction
/// counters and control sums cannot drift from the transaction list.
/// See [`Document::init_doc`] and [`Document::add_transaction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// `xmlns` attribute of the root element.
    pub(crate) namespace: String,
    /// `xmlns:xsi` attribute of the root element.
    pub(crate) xsi_namespace: String,
    /// `GrpHdr`.
    pub(crate) group_header: GroupHeader,
    /// `PmtInf`.
    pub(crate) payment_info: PaymentInformation,
}

/// `GrpHdr`: message-level identification and totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHeader {
    /// `MsgId`.
    pub message_id: String,
    /// `CreDtTm`, unset until the document is initialized.
    pub creation_date_time: Option<NaiveDateTime>,
    /// `NbOfTxs`.
    pub number_of_transactions: usize,
    /// `CtrlSum`.
    pub control_sum: Decimal,
    /// `InitgPty/Nm`.
    pub initiating_party_name: String,
}

/// `PmtInf`: the single payment block carrying all transfers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInformation {
    /// `PmtInfId`, same value as the message id.
    pub payment_info_id: String,
    /// `PmtMtd`.
    pub payment_method: String,
    /// `NbOfTxs`.
    pub number_of_transactions: usize,
    /// `CtrlSum`.
    pub control_sum: Decimal,
    /// `PmtTpInf/SvcLvl/Cd`.
    pub service_level: String,
    /// `ReqdExctnDt`, unset until the document is initialized.
    pub requested_execution_date: Option<NaiveDate>,
    /// `Dbtr/Nm`.
    pub debtor_name: String,
    /// `DbtrAcct/Id/IBAN`.
    pub debtor_iban: String,
    /// `DbtrAgt/FinInstnId/BIC`.
    pub debtor_bic: String,
    /// `ChrgBr`.
    pub charge_bearer: String,
    /// `CdtTrfTxInf`, in transmission order.
    pub transactions: Vec<Transaction>,
}

/// `CdtTrfTxInf`: one transfer instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// `PmtId/InstrId`.
    pub instruction_id: String,
    /// `PmtId/EndToEndId`.
    pub end_to_end_id: String,
    /// `Amt/InstdAmt`.
    pub amount: InstructedAmount,
    /// `Cdtr/Nm`.
    pub creditor_name: String,
    /// `CdtrAcct/Id/IBAN`.
    pub creditor_iban: String,
    /// `RgltryRptg/Dtls/Cd`.
    pub regulatory_code: String,
    /// `RmtInf/Ustrd`.
    pub remittance_info: String,
}

/// Instructed amount with its ISO 4217 currency (`Ccy` attribute).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructedAmount {
    pub value: Decimal,
    pub currency: String,
}
