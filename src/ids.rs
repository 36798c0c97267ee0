use rand::Rng;

/// Generate a random UUIDv4-format identifier.
///
/// Used for pets, user-added foods, and log entries. Seed catalog entries
/// carry fixed ids instead so they stay stable across installs.
pub fn new_id() -> String {
    let mut bytes: [u8; 16] = rand::thread_rng().r#gen();
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // RFC 4122 variant
    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3],
        bytes[4],
        bytes[5],
        bytes[6],
        bytes[7],
        bytes[8],
        bytes[9],
        bytes[10],
        bytes[11],
        bytes[12],
        bytes[13],
        bytes[14],
        bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = new_id();
        assert_eq!(id.len(), 36);
        for pos in [8, 13, 18, 23] {
            assert_eq!(id.as_bytes()[pos], b'-');
        }
        // Version nibble is always 4
        assert_eq!(id.as_bytes()[14], b'4');
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }
}
