/// Compute Hamming distance between two hashes.
///
/// Returns the number of bits that differ between the two hashes.
pub fn hamming_distance(hash1: u64, hash2: u64) -> u32 {
    (hash1 ^ hash2).count_ones()
}

/// Two hashes count as the same picture when fewer than `threshold` bits differ.
pub fn is_similar(hash1: u64, hash2: u64, threshold: u32) -> bool {
    hamming_distance(hash1, hash2) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(0b0000, 0b0000), 0);
        assert_eq!(hamming_distance(0b0001, 0b0000), 1);
        assert_eq!(hamming_distance(0b1111, 0b0000), 4);
        assert_eq!(hamming_distance(0xFF, 0x00), 8);
        assert_eq!(hamming_distance(u64::MAX, 0), 64);
    }

    #[test]
    fn test_is_similar_is_strict() {
        assert!(is_similar(0b0111, 0, 4));
        assert!(!is_similar(0b1111, 0, 4));
        assert!(!is_similar(42, 42, 0));
    }
}
