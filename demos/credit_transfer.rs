use rust_decimal_macros::dec;
use sepa_transfer::core::*;
use sepa_transfer::pain001;

fn main() {
    env_logger::init();

    // ── 1. Batch header ───────────────────────────────────────────────
    let mut doc = Document::new();
    if let Err(e) = doc.init_doc(
        "VIR201705",
        "2017-05-01T12:00:00",
        "2017-05-03",
        "Franz Holzapfel GMBH",
        "AT611904300234573201",
        "BKAUATWW",
    ) {
        eprintln!("Cannot start batch: {e}");
        std::process::exit(1);
    }

    // ── 2. Transfers ──────────────────────────────────────────────────
    let transfers = [
        ("F201705", dec!(70000), "DEF Electronics", "GB29NWBK60161331926819"),
        ("F201706", dec!(10000), "D1F Electronics", "AT611904300234573201"),
        ("F201707", dec!(20000), "D2F Electronics", "BE62510007547061"),
        ("F201708", dec!(30000), "D3F Electronics", "BG80BNBG96611020345678"),
        ("F201709", dec!(40000), "D4F Electronics", "EE382200221020145685"),
        // Rejected: bad checksum, batch stays unchanged
        ("F201710", dec!(500), "D5F Electronics", "GB29NWBK60161331926818"),
        // Rejected: sub-cent amount
        ("F201711", dec!(12.345), "D6F Electronics", "BE62510007547061"),
    ];
    for (id, amount, name, iban) in transfers {
        match doc.add_transaction(id, amount, "EUR", name, iban) {
            Ok(()) => println!("  added {id}: {amount} EUR to {name}"),
            Err(e) => println!("  skipped {id}: {e}"),
        }
    }

    println!(
        "\n{} transfers, control sum {}",
        doc.transaction_count(),
        doc.control_sum()
    );

    // ── 3. Pre-submission checks ──────────────────────────────────────
    let errors = validate_document(&doc);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("  Validation: {e}");
        }
        std::process::exit(1);
    }

    // ── 4. Render ─────────────────────────────────────────────────────
    match pain001::to_xml_pretty(&doc) {
        Ok(xml) => println!("\n{}", String::from_utf8_lossy(&xml)),
        Err(e) => eprintln!("Rendering failed: {e}"),
    }
}
