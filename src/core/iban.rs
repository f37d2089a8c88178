//! IBAN checksum validation (ISO 7064 mod 97-10).
//!
//! The expanded digit stream of a 34-character IBAN can reach ~70 decimal
//! digits, so the remainder is folded one digit (or one letter pair) at a
//! time instead of building the full number.

/// Shortest accepted input, country code plus check digits.
pub const MIN_IBAN_LEN: usize = 4;
/// Longest IBAN allowed by ISO 13616.
pub const MAX_IBAN_LEN: usize = 34;

/// Check an IBAN against its mod-97 checksum.
///
/// The first four characters are moved to the end, letters `A`–`Z` expand
/// to `10`–`35`, digits stand for themselves and literal spaces are
/// skipped. Any other character (including lowercase letters) rejects the
/// input. Valid iff the resulting number is `1 (mod 97)`.
///
/// ```
/// use sepa_transfer::core::is_valid_iban;
///
/// assert!(is_valid_iban("GB29NWBK60161331926819"));
/// assert!(!is_valid_iban("GB28NWBK60161331926819"));
/// ```
pub fn is_valid_iban(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    if bytes.len() < MIN_IBAN_LEN || bytes.len() > MAX_IBAN_LEN {
        return false;
    }

    let (head, tail) = bytes.split_at(MIN_IBAN_LEN);
    let mut remainder: u32 = 0;
    for &b in tail.iter().chain(head) {
        match b {
            b'A'..=b'Z' => {
                let value = u32::from(b - b'A') + 10;
                remainder = (remainder * 100 + value) % 97;
            }
            b'0'..=b'9' => {
                remainder = (remainder * 10 + u32::from(b - b'0')) % 97;
            }
            b' ' => {}
            _ => return false,
        }
    }
    remainder == 1
}

/// The two-letter country prefix of an IBAN, if it has one.
pub fn iban_country_code(iban: &str) -> Option<&str> {
    let prefix = iban.get(..2)?;
    prefix
        .bytes()
        .all(|b| b.is_ascii_uppercase())
        .then_some(prefix)
}
