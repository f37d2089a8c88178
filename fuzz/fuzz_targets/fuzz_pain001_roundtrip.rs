#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything the reader accepts must be written and read back unchanged.
        if let Ok(doc) = sepa_transfer::pain001::from_xml(s) {
            let xml = sepa_transfer::pain001::to_xml(&doc).expect("writer failed");
            let xml = std::str::from_utf8(&xml).expect("writer produced non-UTF-8");
            let again = sepa_transfer::pain001::from_xml(xml).expect("reader rejected own output");
            assert_eq!(again, doc);
        }
    }
});
