//! Coordinate hashing into a stable, non-negative sequence seed.
//!
//! The coordinate is rendered as `"{lat:.4}_{lng:.4}"` and folded with a
//! base-31 polynomial rolling hash in 32-bit two's-complement arithmetic:
//!
//! ```text
//! hash = (hash << 5) - hash + byte      (wrapping i32)
//! seed = |hash|                         (as u32, so i32::MIN maps to 2^31)
//! ```
//!
//! The accumulator width is fixed at 32 bits regardless of platform so the
//! same coordinate yields the same seed everywhere.

use agrisense_types::Coordinate;

use crate::fixed::fixed_decimal;

/// Decimal places kept in the hash key.
pub const KEY_DECIMALS: u8 = 4;

/// Textual key hashed for a coordinate, e.g. `"28.7041_77.1025"`.
pub fn coordinate_key(coordinate: &Coordinate) -> String {
    format!(
        "{}_{}",
        fixed_decimal(coordinate.latitude, KEY_DECIMALS),
        fixed_decimal(coordinate.longitude, KEY_DECIMALS)
    )
}

/// Polynomial rolling hash of `key` with 32-bit wraparound.
pub fn rolling_hash(key: &str) -> i32 {
    key.bytes().fold(0_i32, |hash, byte| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(byte))
    })
}

/// Non-negative seed for the coordinate's sequence generator.
pub fn hash_coordinate(coordinate: &Coordinate) -> u64 {
    u64::from(rolling_hash(&coordinate_key(coordinate)).unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_uses_four_decimals() {
        let key = coordinate_key(&Coordinate::new(28.704_101_23, 77.102_512_34));
        assert_eq!(key, "28.7041_77.1025");

        let key = coordinate_key(&Coordinate::new(51.5, -0.12));
        assert_eq!(key, "51.5000_-0.1200");
    }

    #[test]
    fn rolling_hash_matches_base_31_fold() {
        // "0" -> 48; "01" -> 48 * 31 + 49 = 1537
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("0"), 48);
        assert_eq!(rolling_hash("01"), 1537);
    }

    #[test]
    fn real_keys_hash_to_known_values() {
        assert_eq!(rolling_hash("28.7041_77.1025"), -1_384_484_497);
        assert_eq!(rolling_hash("0.0000_0.0000"), 271_074_143);
        assert_eq!(
            hash_coordinate(&Coordinate::new(28.7041, 77.1025)),
            1_384_484_497
        );
    }

    #[test]
    fn rolling_hash_wraps_at_32_bits() {
        // Long keys overflow i32 many times; the fold must stay in range
        // and be reproducible.
        let key = "89.9999_-179.9999";
        let first = rolling_hash(key);
        assert_eq!(first, rolling_hash(key));

        let wide = key
            .bytes()
            .fold(0_i64, |hash, byte| (hash * 31 + i64::from(byte)) % (1_i64 << 32));
        let narrowed = i32::from_ne_bytes(u32::try_from(wide).unwrap_or(0).to_ne_bytes());
        assert_eq!(first, narrowed);
    }

    #[test]
    fn seed_is_stable_and_non_negative() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(coordinate_key(&origin), "0.0000_0.0000");
        assert_eq!(hash_coordinate(&origin), hash_coordinate(&origin));

        let a = hash_coordinate(&Coordinate::new(28.7041, 77.1025));
        let b = hash_coordinate(&Coordinate::new(28.7042, 77.1025));
        assert_ne!(a, b);
        assert!(a <= 1_u64 << 31);
    }

    #[test]
    fn sub_precision_changes_do_not_move_the_seed() {
        let a = hash_coordinate(&Coordinate::new(12.345_61, 45.678_91));
        let b = hash_coordinate(&Coordinate::new(12.345_64, 45.678_94));
        assert_eq!(a, b);
    }
}
