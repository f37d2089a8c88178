use rust_decimal::Decimal;

use super::currencies;
use super::error::ValidationError;
use super::iban::{iban_country_code, is_valid_iban};
use super::iban_registry::iban_length;
use super::money::{MINOR_UNIT_SCALE, add_amounts, decimals_number};
use super::profile::*;
use super::types::*;

/// ISO 20022 `Max35Text`.
const MAX_ID_LEN: usize = 35;
/// ISO 20022 `Max70Text`, used for party names.
const MAX_NAME_LEN: usize = 70;
/// ISO 20022 `Max140Text`, used for the unstructured remittance line.
const MAX_REMITTANCE_LEN: usize = 140;

/// Check a whole document before it is handed to a bank.
/// Returns all validation errors found (not just the first).
///
/// Documents built only through [`Document::init_doc`] and
/// [`Document::add_transaction`] always have consistent counters and
/// sums; this additionally catches what the mutation checks leave to the
/// bank (uninitialized header, unknown IBAN countries, BIC shape, empty or
/// mixed currencies) and whatever a document read from elsewhere got wrong.
pub fn validate_document(doc: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let header = &doc.group_header;
    let payment = &doc.payment_info;

    if doc.namespace != PAIN_001_001_03_NS {
        errors.push(ValidationError::new(
            "namespace",
            format!("expected '{PAIN_001_001_03_NS}', got '{}'", doc.namespace),
        ));
    }

    validate_id(&header.message_id, "group_header.message_id", &mut errors);
    validate_id(&payment.payment_info_id, "payment_info.payment_info_id", &mut errors);
    if header.creation_date_time.is_none() {
        errors.push(ValidationError::new(
            "group_header.creation_date_time",
            "creation timestamp is missing",
        ));
    }
    if payment.requested_execution_date.is_none() {
        errors.push(ValidationError::new(
            "payment_info.requested_execution_date",
            "requested execution date is missing",
        ));
    }
    validate_name(&header.initiating_party_name, "group_header.initiating_party_name", &mut errors);
    validate_name(&payment.debtor_name, "payment_info.debtor_name", &mut errors);

    for (field, actual, expected) in [
        ("payment_info.payment_method", &payment.payment_method, PAYMENT_METHOD),
        ("payment_info.service_level", &payment.service_level, SERVICE_LEVEL),
        ("payment_info.charge_bearer", &payment.charge_bearer, CHARGE_BEARER),
    ] {
        if actual != expected {
            errors.push(ValidationError::new(
                field,
                format!("expected '{expected}', got '{actual}'"),
            ));
        }
    }

    validate_iban(&payment.debtor_iban, "payment_info.debtor_iban", &mut errors);
    if !payment.debtor_bic.is_empty() && !is_well_formed_bic(&payment.debtor_bic) {
        errors.push(ValidationError::new(
            "payment_info.debtor_bic",
            format!(
                "BIC '{}' must be 8 or 11 uppercase alphanumeric characters",
                payment.debtor_bic
            ),
        ));
    }

    for (i, tx) in payment.transactions.iter().enumerate() {
        validate_transaction(tx, i, &mut errors);
    }
    validate_currencies(&payment.transactions, &mut errors);
    validate_totals(doc, &mut errors);

    errors
}

/// Counters and control sums against the transaction list and each other.
fn validate_totals(doc: &Document, errors: &mut Vec<ValidationError>) {
    let header = &doc.group_header;
    let payment = &doc.payment_info;
    let count = payment.transactions.len();

    if header.number_of_transactions != count {
        errors.push(ValidationError::new(
            "group_header.number_of_transactions",
            format!("{} does not match {count} transactions", header.number_of_transactions),
        ));
    }
    if payment.number_of_transactions != count {
        errors.push(ValidationError::new(
            "payment_info.number_of_transactions",
            format!("{} does not match {count} transactions", payment.number_of_transactions),
        ));
    }

    let total = payment
        .transactions
        .iter()
        .try_fold(Decimal::ZERO, |sum, tx| add_amounts(sum, tx.amount.value));
    let total = match total {
        Ok(total) => total,
        Err(e) => {
            errors.push(ValidationError::new("payment_info.transactions", e.to_string()));
            return;
        }
    };
    if header.control_sum != total {
        errors.push(ValidationError::new(
            "group_header.control_sum",
            format!("{} does not match transaction total {total}", header.control_sum),
        ));
    }
    if payment.control_sum != total {
        errors.push(ValidationError::new(
            "payment_info.control_sum",
            format!("{} does not match transaction total {total}", payment.control_sum),
        ));
    }
}

fn validate_transaction(tx: &Transaction, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("payment_info.transactions[{index}]");

    validate_id(&tx.instruction_id, &format!("{prefix}.instruction_id"), errors);
    validate_id(&tx.end_to_end_id, &format!("{prefix}.end_to_end_id"), errors);
    validate_name(&tx.creditor_name, &format!("{prefix}.creditor_name"), errors);
    validate_iban(&tx.creditor_iban, &format!("{prefix}.creditor_iban"), errors);

    if tx.remittance_info.chars().count() > MAX_REMITTANCE_LEN {
        errors.push(ValidationError::new(
            format!("{prefix}.remittance_info"),
            format!("remittance information exceeds {MAX_REMITTANCE_LEN} characters"),
        ));
    }
    if tx.regulatory_code != REGULATORY_CODE {
        errors.push(ValidationError::new(
            format!("{prefix}.regulatory_code"),
            format!("expected '{REGULATORY_CODE}', got '{}'", tx.regulatory_code),
        ));
    }

    let amount = tx.amount.value;
    if amount <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.amount"),
            format!("amount {amount} must be positive"),
        ));
    }
    let decimals = decimals_number(amount);
    if decimals > MINOR_UNIT_SCALE {
        errors.push(ValidationError::new(
            format!("{prefix}.amount"),
            format!("amount {amount} has more than {MINOR_UNIT_SCALE} decimal places"),
        ));
    }

    let currency = &tx.amount.currency;
    match currencies::minor_unit_exponent(currency) {
        None => errors.push(ValidationError::new(
            format!("{prefix}.amount.currency"),
            format!("currency code '{currency}' is not a known ISO 4217 code"),
        )),
        Some(exponent) if decimals > exponent && decimals <= MINOR_UNIT_SCALE => {
            errors.push(ValidationError::new(
                format!("{prefix}.amount"),
                format!("{currency} allows {exponent} decimal places, {amount} has {decimals}"),
            ));
        }
        Some(_) => {}
    }
}

/// One batch carries one currency.
fn validate_currencies(transactions: &[Transaction], errors: &mut Vec<ValidationError>) {
    let Some(first) = transactions.first() else {
        return;
    };
    for (i, tx) in transactions.iter().enumerate().skip(1) {
        if tx.amount.currency != first.amount.currency {
            errors.push(ValidationError::new(
                format!("payment_info.transactions[{i}].amount.currency"),
                format!(
                    "currency '{}' differs from batch currency '{}'",
                    tx.amount.currency, first.amount.currency
                ),
            ));
        }
    }
}

fn validate_iban(iban: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !is_valid_iban(iban) {
        errors.push(ValidationError::new(
            field,
            format!("IBAN '{iban}' fails the mod-97 checksum"),
        ));
        return;
    }
    let Some(country) = iban_country_code(iban) else {
        errors.push(ValidationError::new(
            field,
            format!("IBAN '{iban}' has no country prefix"),
        ));
        return;
    };
    let compact_len = iban.bytes().filter(|b| *b != b' ').count();
    match iban_length(country) {
        None => errors.push(ValidationError::new(
            field,
            format!("'{country}' does not issue IBANs"),
        )),
        Some(expected) if expected != compact_len => errors.push(ValidationError::new(
            field,
            format!("{country} IBANs have {expected} characters, got {compact_len}"),
        )),
        Some(_) => {}
    }
}

fn validate_id(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    } else if value.chars().count() > MAX_ID_LEN {
        errors.push(ValidationError::new(
            field,
            format!("exceeds {MAX_ID_LEN} characters"),
        ));
    }
}

fn validate_name(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "name must not be empty"));
    } else if value.chars().count() > MAX_NAME_LEN {
        errors.push(ValidationError::new(
            field,
            format!("name exceeds {MAX_NAME_LEN} characters"),
        ));
    }
}

/// 4 letters bank code, 2 letters country, 2 alphanumeric location,
/// optional 3 alphanumeric branch.
fn is_well_formed_bic(bic: &str) -> bool {
    let b = bic.as_bytes();
    (b.len() == 8 || b.len() == 11)
        && b[..6].iter().all(u8::is_ascii_uppercase)
        && b[6..]
            .iter()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
