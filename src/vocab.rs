/// Number of ids in the simulated vocabulary.
pub const VOCAB_SIZE: u32 = 1024;

/// Map a token to a stable id in `[0, VOCAB_SIZE)`.
///
/// Multiply-add hash over the token's UTF-16 code units with unsigned
/// 32-bit wraparound, reduced mod [`VOCAB_SIZE`]. The exact arithmetic is
/// the vocabulary contract: the same token must always land on the same id,
/// and changing any step re-colors the whole downstream matrix.
pub fn token_to_id(token: &str) -> u32 {
    let mut acc: u32 = 0;
    for unit in token.encode_utf16() {
        acc = acc.wrapping_mul(31).wrapping_add(u32::from(unit));
    }
    acc % VOCAB_SIZE
}

#[cfg(test)]
mod tests {
    use super::{token_to_id, VOCAB_SIZE};

    #[test]
    fn single_char_matches_hand_computation() {
        // (0 * 31 + 97) % 1024
        assert_eq!(token_to_id("a"), 97);
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(token_to_id("there"), token_to_id("there"));
    }

    #[test]
    fn always_within_vocab_range() {
        for token in ["hi", "there", "!", "supercalifragilistic", "ünïcodé", ""] {
            assert!(token_to_id(token) < VOCAB_SIZE);
        }
    }

    #[test]
    fn multi_char_accumulates_in_order() {
        // "ab" = ((0 * 31 + 97) * 31 + 98) % 1024 = 3105 % 1024
        assert_eq!(token_to_id("ab"), 3105 % 1024);
        assert_ne!(token_to_id("ab"), token_to_id("ba"));
    }
}
