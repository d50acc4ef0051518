use soroban_sdk::{BytesN, Env, U256};

use crate::{merkle, MAX_DIFFICULTY};

/// The nonce as the 32-byte big-endian word it occupies in a proof.
pub fn nonce_word(env: &Env, nonce: &U256) -> BytesN<32> {
    let mut word = [0u8; 32];

    nonce.to_be_bytes().copy_into_slice(&mut word);

    BytesN::from_array(env, &word)
}

/// `keccak256(original_hash ‖ nonce)`: the final reduction step of a proof
/// whose last element is the nonce.
pub fn pow_hash(env: &Env, original_hash: &BytesN<32>, nonce: &U256) -> BytesN<32> {
    merkle::combine(env, original_hash, &nonce_word(env, nonce))
}

/// True iff the `bits` most significant bits of `hash` are zero.
pub fn meets_difficulty(hash: &[u8; 32], bits: u32) -> bool {
    if bits > MAX_DIFFICULTY {
        return false;
    }

    let full_bytes = (bits / 8) as usize;
    let remainder_bits = bits % 8;

    if hash[..full_bytes].iter().any(|byte| *byte != 0) {
        return false;
    }

    if remainder_bits > 0 {
        let mask = 0xffu8 << (8 - remainder_bits);

        if hash[full_bytes] & mask != 0 {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn leading_zero_bits(hash: &[u8; 32]) -> u32 {
        let mut zeros = 0;

        for byte in hash {
            if *byte == 0 {
                zeros += 8;
            } else {
                zeros += byte.leading_zeros();
                break;
            }
        }

        zeros
    }

    fn with_top_bit_set_at(bit: u32) -> [u8; 32] {
        let mut hash = [0u8; 32];
        hash[(bit / 8) as usize] = 0x80 >> (bit % 8);
        hash
    }

    #[test]
    fn zero_bits_accepts_everything() {
        assert!(meets_difficulty(&[0xff; 32], 0));
        assert!(meets_difficulty(&[0x00; 32], 0));
    }

    #[test]
    fn one_bit_checks_only_the_most_significant_bit() {
        let mut valid = [0xff; 32];
        valid[0] = 0x7f;

        assert!(meets_difficulty(&valid, 1));
        assert!(!meets_difficulty(&[0xff; 32], 1));
    }

    #[test]
    fn boundary_bits() {
        for bits in [1u32, 7, 8, 9, 255, 256] {
            // exactly `bits` leading zeros passes, one fewer fails
            if bits < 256 {
                assert!(meets_difficulty(&with_top_bit_set_at(bits), bits));
            }
            assert!(!meets_difficulty(&with_top_bit_set_at(bits - 1), bits));
        }
    }

    #[test]
    fn full_difficulty_only_accepts_zero_hash() {
        assert!(meets_difficulty(&[0u8; 32], 256));

        let mut last_bit = [0u8; 32];
        last_bit[31] = 0x01;
        assert!(!meets_difficulty(&last_bit, 256));
        assert!(meets_difficulty(&last_bit, 255));
    }

    #[test]
    fn beyond_full_difficulty_never_passes() {
        assert!(!meets_difficulty(&[0u8; 32], 257));
    }

    #[test]
    fn pow_hash_matches_nonce_proof_step() {
        let env = Env::default();
        let original = BytesN::from_array(&env, &[7u8; 32]);
        let nonce = U256::from_u32(&env, 42);

        let mut word = [0u8; 32];
        word[31] = 42;

        assert_eq!(nonce_word(&env, &nonce).to_array(), word);
        assert_eq!(
            pow_hash(&env, &original, &nonce),
            merkle::combine(&env, &original, &BytesN::from_array(&env, &word))
        );
    }

    proptest! {
        #[test]
        fn predicate_is_leading_zero_count(hash in any::<[u8; 32]>(), bits in 0u32..=256) {
            prop_assert_eq!(meets_difficulty(&hash, bits), leading_zero_bits(&hash) >= bits);
        }

        #[test]
        fn predicate_on_sparse_hashes(zero_prefix in 0usize..=32, tail in any::<[u8; 32]>(), bits in 0u32..=256) {
            // random hashes almost never have long zero prefixes; force some
            let mut hash = tail;
            for byte in hash.iter_mut().take(zero_prefix) {
                *byte = 0;
            }
            prop_assert_eq!(meets_difficulty(&hash, bits), leading_zero_bits(&hash) >= bits);
        }
    }
}
