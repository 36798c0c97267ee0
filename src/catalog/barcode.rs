/// Strip everything but ASCII digits from a raw barcode string.
pub fn normalize_barcode(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Accepts the common retail symbology lengths: EAN-8 (8), UPC-A (12),
/// EAN-13 (13), ITF-14 (14).
pub fn is_likely_barcode(raw: &str) -> bool {
    matches!(normalize_barcode(raw).len(), 8 | 12 | 13 | 14)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_non_digits() {
        assert_eq!(normalize_barcode("0 17800-123451"), "017800123451");
        assert_eq!(normalize_barcode("abc"), "");
        assert_eq!(normalize_barcode("017800123451"), "017800123451");
    }

    #[test]
    fn test_is_likely_barcode_lengths() {
        assert!(is_likely_barcode("12345678")); // EAN-8
        assert!(is_likely_barcode("017800123451")); // UPC-A
        assert!(is_likely_barcode("4008429090134")); // EAN-13
        assert!(is_likely_barcode("10012345678902")); // ITF-14

        assert!(!is_likely_barcode(""));
        assert!(!is_likely_barcode("1234567"));
        assert!(!is_likely_barcode("123456789"));
        assert!(!is_likely_barcode("123456789012345"));
    }

    #[test]
    fn test_is_likely_barcode_normalizes_first() {
        assert!(is_likely_barcode("0-17800-12345-1"));
    }
}
