//! Cleaning rules for the noisy roster fields.

/// Value substituted for a phone number that cannot be reduced to ten digits.
pub const BAD_PHONE: &str = "bad input";

const ZIPCODE_LEN: usize = 5;

/// Left-pads with `0` to five characters, then keeps the first five.
///
/// The input is not checked for digits; `"90210-1"` becomes `"90210"` and an
/// empty value becomes `"00000"`.
pub fn clean_zipcode(raw: &str) -> String {
    let len = raw.chars().count();
    let padding = ZIPCODE_LEN.saturating_sub(len);

    std::iter::repeat('0')
        .take(padding)
        .chain(raw.chars())
        .take(ZIPCODE_LEN)
        .collect()
}

/// Strips every non-digit, then accepts ten digits or eleven starting with `1`.
pub fn clean_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => digits,
        11 if digits.starts_with('1') => digits[1..].to_string(),
        _ => BAD_PHONE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_zipcode_pads_short_values() {
        assert_eq!(clean_zipcode("1"), "00001");
        assert_eq!(clean_zipcode("501"), "00501");
        assert_eq!(clean_zipcode(""), "00000");
    }

    #[test]
    fn test_clean_zipcode_truncates_long_values() {
        assert_eq!(clean_zipcode("123456"), "12345");
        assert_eq!(clean_zipcode("90210-1"), "90210");
        assert_eq!(clean_zipcode("00500"), "00500");
    }

    #[test]
    fn test_clean_zipcode_always_five_characters() {
        for raw in ["", "7", "abc", "12345", "1234567890", "é1", "  42"] {
            assert_eq!(clean_zipcode(raw).chars().count(), 5, "input {:?}", raw);
        }
        assert_eq!(clean_zipcode("abc"), "00abc");
    }

    #[test]
    fn test_clean_phone_number() {
        assert_eq!(clean_phone_number("(223) 456-7890"), "2234567890");
        assert_eq!(clean_phone_number("1-223-456-7890"), "2234567890");
        assert_eq!(clean_phone_number("5551234567"), "5551234567");
    }

    #[test]
    fn test_clean_phone_number_bad_input() {
        assert_eq!(clean_phone_number("223-456-78"), BAD_PHONE);
        assert_eq!(clean_phone_number("22234567890"), BAD_PHONE);
        assert_eq!(clean_phone_number("123456789012"), BAD_PHONE);
        assert_eq!(clean_phone_number(""), BAD_PHONE);
    }
}
