use std::fmt;

use crate::unsigned::unsigned;

/// Initial accumulator value shared by both variants.
pub const DJB_SEED: u32 = 5381;

/// Offset of 'A', subtracted from every input unit before mixing.
const OFFSET_A: i64 = 65;

/// Which flavour of the case-folded hash to compute.
///
/// `Script` walks UTF-16 code units and is the reference behaviour that
/// existing lookup tables are keyed by. `Native` walks raw bytes with a
/// true `* 33` multiplier, matching the byte-oriented library build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    #[default]
    Script,
    Native,
}

impl HashVariant {
    pub fn hash(&self, text: &str) -> u32 {
        match self {
            HashVariant::Script => string_hash(text),
            HashVariant::Native => string_hash_bytes(text.as_bytes()),
        }
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            HashVariant::Script => "script",
            HashVariant::Native => "native",
        })
    }
}

/// Offset a code unit from 'A' and fold upper-case letters onto lower-case.
///
/// Units below 'A' are pulled into a byte-like window by adding 256. Nothing
/// else is reduced, so units far above 'Z' pass through as large offsets.
#[inline(always)]
pub fn fold_unit(unit: u16) -> u32 {
    let mut ch = unit as i64 - OFFSET_A;
    if ch < 0 {
        ch += 256;
    }
    if ch <= 25 {
        ch += 32;
    }
    ch as u32
}

/// Mix one folded offset into the accumulator: shift, double, xor.
///
/// Each step is normalized back to u32 on its own. The shift and the
/// doubling together multiply by 64.
#[inline(always)]
pub fn mix(hash: u32, ch: u32) -> u32 {
    let mut hash = unsigned((hash as i64) << 5);
    hash = unsigned(hash as i64 + hash as i64);
    unsigned((hash ^ ch) as i64)
}

/// Case-insensitive hash of a string, one UTF-16 code unit at a time.
pub fn string_hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(DJB_SEED, |acc, unit| mix(acc, fold_unit(unit)))
}

/// Same as [`string_hash`] but over code units that are already decoded,
/// including lone surrogates.
pub fn string_hash_units(units: &[u16]) -> u32 {
    units
        .iter()
        .fold(DJB_SEED, |acc, &unit| mix(acc, fold_unit(unit)))
}

#[inline(always)]
fn fold_byte(byte: u8) -> u8 {
    let ch = byte.wrapping_sub(b'A');
    if ch <= b'Z' - b'A' {
        ch + (b'a' - b'A')
    } else {
        ch
    }
}

/// Byte-oriented djb2 variant: offsets wrap within a byte and the
/// accumulator is multiplied by 33.
pub fn string_hash_bytes(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(DJB_SEED, |acc, &b| acc.wrapping_mul(33) ^ fold_byte(b) as u32)
}
