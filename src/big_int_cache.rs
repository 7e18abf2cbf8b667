use lazy_static::*;

use crate::big_int_constants::*;
use crate::BigInt;

lazy_static! {
    /// `0, 1, ..., MAX_CONSTANT`
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_raw(vec![n as u32], true));
    /// `0, -1, ..., -MAX_CONSTANT`. Slot 0 holds zero, which is never negative.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_raw(vec![n as u32], n == 0));
}
