use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sepa_transfer::core::*;

fn initialized() -> Document {
    let mut doc = Document::new();
    doc.init_doc(
        "",
        "2017-05-01T22:45:03",
        "2017-05-01",
        "",
        "FR1420041010050500013M02606",
        "",
    )
    .unwrap();
    doc
}

/// Amounts from a real month of expense refunds, as float input.
const REFUNDS: &[f64] = &[
    55.0, 140.0, 77.0, 105.0, 140.0, 76.3, 164.8, 62.3, 29.3, 125.3, 70.0, 78.22, 252.9, 35.0,
    70.0, 173.6, 60.9, 63.0, 126.0, 215.6, 12.5, 35.0, 257.6, 75.0, 30.0, 72.5, 259.5, 302.62,
    120.4, 35.0, 173.6, 104.54, 119.0, 22.5, 80.5, 135.8, 161.85, 1199.86, 32.5, 70.0, 140.0,
    633.92, 159.6, 35.0, 196.0, 97.3, 90.3, 144.9, 258.7, 374.13, 27.5, 1575.0, 282.1, 56.0,
    105.0, 57.4, 51.8, 56.0, 801.5, 66.99, 98.5, 212.8, 35.0, 109.9, 35.0, 269.5, 327.6, 224.0,
    38.5, 35.0, 266.0, 256.2, 102.9, 201.6, 0.34, 35.0, 35.0, 341.6, 21.0, 217.0, 35.1, 19.0,
    114.0, 25.0, 277.9, 70.0, 140.0, 21.0, 67.5, 41.3, 134.4, 143.36, 74.0, 21.0, 24.0, 27.07,
    208.6, 43.75, 70.0, 58.8, 38.15, 61.5, 147.0, 378.8, 16.5, 52.5, 24.5, 60.2, 72.84, 175.0,
    17.5, 70.0, 231.6, 161.0, 49.0, 70.0, 45.5, 291.2, 41.3, 35.0, 186.2, 154.0, 70.0, 35.0,
    70.0, 35.0, 230.0, 119.0, 70.0, 20.0, 70.0, 175.0, 36.5, 217.0, 35.0, 52.0, 31.3, 109.2,
    35.0, 24.5, 13.5, 63.5, 111.3, 60.2, 103.0, 203.0, 143.5, 35.0, 57.5, 35.0, 125.3, 175.0,
    138.6, 153.82, 120.4, 62.5, 35.52, 63.5, 129.5, 70.0, 175.0, 224.0, 70.0, 126.0, 140.0,
    35.0, 140.0, 25.5, 7.98, 70.0, 35.0, 65.2, 105.0, 77.0, 35.0, 98.0, 225.5, 38.5, 35.0,
    158.0, 72.8, 147.0, 50.0, 210.0, 385.0, 28.0, 202.3, 128.8, 39.2, 117.6, 326.0, 30.0,
];

// --- Control sums ---

#[test]
fn long_float_sequence_sums_exactly() {
    let mut doc = initialized();
    for &refund in REFUNDS {
        let amount = amount_from_f64(refund).unwrap();
        doc.add_transaction("", amount, "EUR", "", "GB29NWBK60161331926819")
            .unwrap();
    }
    assert_eq!(doc.transaction_count(), REFUNDS.len());
    assert_eq!(doc.payment_info().number_of_transactions, REFUNDS.len());
    assert_eq!(doc.control_sum(), dec!(24443.66));
    assert_eq!(doc.payment_info().control_sum, dec!(24443.66));
}

#[test]
fn float_accumulation_would_drift() {
    // Guards the premise of minor-unit accumulation.
    let float_sum: f64 = REFUNDS.iter().sum();
    assert_ne!(float_sum, 24443.66);
}

#[test]
fn sums_track_every_step() {
    let mut doc = initialized();
    let mut expected = Decimal::ZERO;
    for (i, amount) in [dec!(0.34), dec!(1199.86), dec!(7.98), dec!(0.01), dec!(99999.99)]
        .into_iter()
        .enumerate()
    {
        doc.add_transaction(&format!("T{i}"), amount, "EUR", "C", "BE62510007547061")
            .unwrap();
        expected += amount;
        assert_eq!(doc.group_header().control_sum, expected);
        assert_eq!(doc.payment_info().control_sum, expected);
        assert_eq!(doc.group_header().number_of_transactions, i + 1);
        assert_eq!(doc.payment_info().number_of_transactions, i + 1);
    }
}

#[test]
fn empty_document_has_zero_totals() {
    let doc = initialized();
    assert_eq!(doc.transaction_count(), 0);
    assert_eq!(doc.control_sum(), Decimal::ZERO);
    assert!(doc.transactions().is_empty());
}

// --- Mutation failures ---

#[test]
fn precision_error_leaves_document_unchanged() {
    let mut doc = initialized();
    doc.add_transaction("A", dec!(12.5), "EUR", "A", "EE382200221020145685")
        .unwrap();
    let before = doc.clone();
    let err = doc
        .add_transaction("B", dec!(1.234), "EUR", "B", "EE382200221020145685")
        .unwrap_err();
    assert!(matches!(err, SepaError::Precision { decimals: 3, .. }));
    assert_eq!(doc, before);
}

#[test]
fn invalid_creditor_iban_leaves_document_unchanged() {
    let mut doc = initialized();
    let before = doc.clone();
    let err = doc
        .add_transaction("XXX", dec!(0), "XXX", "XXX", "ZZ382200221020145685")
        .unwrap_err();
    assert!(matches!(err, SepaError::InvalidIban { role: "creditor", .. }));
    assert_eq!(doc, before);
}

#[test]
fn iban_is_checked_before_precision() {
    let mut doc = initialized();
    let err = doc
        .add_transaction("X", dec!(1.234), "EUR", "X", "GB28NWBK60161331926819")
        .unwrap_err();
    assert!(matches!(err, SepaError::InvalidIban { .. }));
}

#[test]
fn init_checks_run_in_order() {
    let mut doc = Document::new();
    // bad timestamp wins over bad date and bad IBAN
    let err = doc.init_doc("", "2017-05-01", "", "", "", "").unwrap_err();
    assert!(matches!(err, SepaError::Format { field: "creation timestamp", .. }));
    let err = doc
        .init_doc("", "2017-05-01T22:45:03", "2017-05-01T22:45:03", "", "", "")
        .unwrap_err();
    assert!(matches!(err, SepaError::Format { field: "execution date", .. }));
    let err = doc
        .init_doc("", "2017-05-01T22:45:03", "2017-05-01", "", "XX12345678901234567", "")
        .unwrap_err();
    assert!(matches!(err, SepaError::InvalidIban { role: "emitter", .. }));
    assert!(!doc.is_initialized());
}

#[test]
fn error_messages() {
    let err = SepaError::InvalidIban {
        role: "creditor",
        iban: "ZZ00".into(),
    };
    assert_eq!(err.to_string(), "invalid creditor IBAN 'ZZ00'");
    let err = SepaError::Precision {
        amount: dec!(1.234),
        decimals: 3,
    };
    assert_eq!(err.to_string(), "amount 1.234 has 3 decimals, at most 2 allowed");
}

// --- Primitives ---

#[test]
fn iban_examples() {
    for iban in [
        "FR1420041010050500013M02606",
        "GB29NWBK60161331926819",
        "BE62510007547061",
        "BG80BNBG96611020345678",
        "EE382200221020145685",
        "AT611904300234573201",
    ] {
        assert!(is_valid_iban(iban), "{iban}");
    }
    assert!(!is_valid_iban("GB29_NWBK60161331926819"));
    assert!(!is_valid_iban("GB2"));
    assert!(!is_valid_iban(&"GB29".repeat(9)));
}

#[test]
fn decimals_of_float_inputs() {
    let decimals = |f: f64| decimals_number(amount_from_f64(f).unwrap());
    assert_eq!(decimals(0.0), 0);
    assert_eq!(decimals(123.0), 0);
    assert_eq!(decimals(144.2), 1);
    assert_eq!(decimals(-1250.0), 0);
    assert_eq!(decimals(-252123.123), 3);
}

#[test]
fn minor_unit_round_trip() {
    for amount in [dec!(0), dec!(0.01), dec!(24443.66), dec!(-7.98), dec!(70000)] {
        assert_eq!(to_amount(to_minor_units(amount).unwrap()), amount);
    }
}

#[test]
fn non_finite_input_is_a_conversion_error() {
    assert!(matches!(amount_from_f64(f64::NAN), Err(SepaError::Conversion(_))));
    assert!(matches!(
        amount_from_f64(f64::NEG_INFINITY),
        Err(SepaError::Conversion(_))
    ));
}
