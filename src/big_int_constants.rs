/// Radix of one limb.
pub const BASE: u32 = 1_000_000_000;

pub const BASE_U64: u64 = BASE as u64;

/// Number of decimal digits stored in a full limb.
pub const DIGITS_PER_LIMB: usize = 9;

/// Largest magnitude kept in the constant cache.
pub const MAX_CONSTANT: usize = 16;
