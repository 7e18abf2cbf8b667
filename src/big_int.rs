//! # BigInt
//! Immutable arbitrary-precision signed integers stored as base `10^9` limbs,
//! least significant limb first.
//! # Example
//! ```
//! use decimal_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a * 10^9 = {}", a.shl_limbs(1));
//! ```
//!

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::{self, Display, Write as _};
use std::hash::{Hash, Hasher};
use std::io::{self, BufRead};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::big_int_cache::*;
use crate::big_int_constants::*;
use crate::error::{BigIntError, ParseBigIntError, Result};

macro_rules! trim_leading_zero {
    ($vec: expr) => {
        {
            let mut v: Vec<u32> = $vec;
            while v.len() > 1 && v.last() == Some(&0) {
                v.pop();
            }
            if v.is_empty() {
                v.push(0);
            }
            v
        }
    };
}

#[derive(Debug, Clone)]
pub struct BigInt {
    /// `true` for zero and positive values.
    sign: bool,
    /// Little-endian limbs, each below [`BASE`]. Never empty.
    limbs: Vec<u32>,
}

// Miscellaneous helpers
fn is_zero_mag(mag: &[u32]) -> bool {
    mag.len() == 1 && mag[0] == 0
}

fn cmp_mag(x: &[u32], y: &[u32]) -> Ordering {
    x.len()
        .cmp(&y.len())
        .then_with(|| x.iter().rev().cmp(y.iter().rev()))
}

// Construction
impl BigInt {
    /// Wraps limbs that are already normalized.
    pub(crate) fn from_raw(limbs: Vec<u32>, sign: bool) -> Self {
        BigInt { sign, limbs }
    }

    fn new(limbs: Vec<u32>, sign: bool) -> Self {
        let limbs = trim_leading_zero!(limbs);
        debug_assert!(limbs.iter().all(|&limb| limb < BASE));
        let sign = sign || is_zero_mag(&limbs);
        BigInt { sign, limbs }
    }

    /// Builds a value from little-endian base `10^9` limbs.
    ///
    /// `sign` is `true` for a non-negative result. A zero magnitude is always
    /// non-negative, whatever `sign` says.
    pub fn from_limbs(sign: bool, limbs: Vec<u32>) -> Result<BigInt> {
        if let Some((index, &limb)) = limbs.iter().enumerate().find(|(_, l)| **l >= BASE) {
            return Err(BigIntError::LimbOutOfRange { index, limb });
        }
        Ok(BigInt::new(limbs, sign))
    }

    pub fn from_sign_magnitude(sign: bool, magnitude: u64) -> BigInt {
        BigInt::value_of(magnitude, sign)
    }

    fn value_of(val: u64, sign: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            return if sign {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            };
        }
        let mut limbs = Vec::with_capacity(3);
        let mut rest = val;
        while rest != 0 {
            limbs.push((rest % BASE_U64) as u32);
            rest /= BASE_U64;
        }
        BigInt::from_raw(limbs, sign)
    }

    fn from_i64(val: i64) -> BigInt {
        if val == i64::MIN {
            // the magnitude of i64::MIN does not fit in an i64
            let mut min = BigInt::value_of(i64::MAX as u64, false);
            min.decrement();
            min
        } else if val < 0 {
            BigInt::value_of((-val) as u64, false)
        } else {
            BigInt::value_of(val as u64, true)
        }
    }

    /// Parses `-?[0-9]+`.
    ///
    /// Leading zeros are accepted, and `-0` is zero. Nothing else is: no `+`,
    /// no whitespace, no separators.
    pub fn parse_decimal(val: &str) -> std::result::Result<BigInt, ParseBigIntError> {
        let (sign, digits, offset) = match val.strip_prefix('-') {
            Some(rest) => (false, rest, 1),
            None => (true, val, 0),
        };

        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some((index, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit { index: index + offset, found });
        }

        // groups of nine from the least significant end, the leftover leading
        // digits form the top limb
        let limbs = digits
            .as_bytes()
            .rchunks(DIGITS_PER_LIMB)
            .map(|group| {
                group
                    .iter()
                    .fold(0_u32, |acc, digit| acc * 10 + u32::from(digit - b'0'))
            })
            .collect();

        Ok(BigInt::new(limbs, sign))
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_i64(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BigInt::parse_decimal(s)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// Accessors
impl BigInt {
    /// Little-endian base `10^9` limbs of the magnitude.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn is_zero(&self) -> bool {
        is_zero_mag(&self.limbs)
    }

    pub fn is_negative(&self) -> bool {
        !self.sign && !self.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.sign && !self.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else if self.sign {
            POS_CACHE[1].clone()
        } else {
            NEG_CACHE[1].clone()
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_raw(self.limbs.clone(), true)
    }

    fn magnitude_u64(&self) -> Option<u64> {
        self.limbs.iter().rev().try_fold(0_u64, |acc, &limb| {
            acc.checked_mul(BASE_U64)?.checked_add(u64::from(limb))
        })
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<u64> {
        if val.is_negative() {
            return Err(BigIntError::OutOfRange);
        }
        val.magnitude_u64().ok_or(BigIntError::OutOfRange)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<i64> {
        let magnitude = val.magnitude_u64().ok_or(BigIntError::OutOfRange)?;
        if val.is_negative() {
            if magnitude > i64::MIN.unsigned_abs() {
                return Err(BigIntError::OutOfRange);
            }
            Ok((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).map_err(|_| BigIntError::OutOfRange)
        }
    }
}

// Printing
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * DIGITS_PER_LIMB);
        let mut limbs = self.limbs.iter().rev();
        if let Some(top) = limbs.next() {
            write!(digits, "{}", top)?;
        }
        for limb in limbs {
            write!(digits, "{:0width$}", limb, width = DIGITS_PER_LIMB)?;
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

// Reading
impl BigInt {
    /// Reads the next whitespace-delimited token from `reader` and parses it.
    ///
    /// Returns `Ok(None)` once the input holds nothing but whitespace. The
    /// delimiter following the token is left unread.
    pub fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<BigInt>> {
        let mut token = Vec::new();
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&token);
        Ok(Some(text.parse::<BigInt>()?))
    }
}

// Comparison
impl BigInt {
    /// Compares absolute values.
    pub fn cmp_magnitude(&self, other: &BigInt) -> Ordering {
        cmp_mag(&self.limbs, &other.limbs)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() && other.is_zero() {
            return true;
        }
        self.sign == other.sign && self.limbs == other.limbs
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_mag(&self.limbs, &other.limbs),
            (true, true) => cmp_mag(&self.limbs, &other.limbs).reverse(),
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.sign || self.is_zero()).hash(state);
        self.limbs.hash(state);
    }
}

// Negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, limbs } = self;
        let sign = !sign || is_zero_mag(&limbs);
        BigInt { sign, limbs }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// Addition and subtraction
impl BigInt {
    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0_u32;
        for (i, &limb) in long.iter().enumerate() {
            // at most 2 * (BASE - 1) + 1, no u32 overflow
            let mut sum = limb + carry + short.get(i).copied().unwrap_or(0);
            if sum >= BASE {
                sum -= BASE;
                carry = 1;
            } else {
                carry = 0;
            }
            result.push(sum);
        }
        if carry != 0 {
            result.push(carry);
        }
        result
    }

    /// `big - little`. `big` must not be smaller than `little`.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        debug_assert!(cmp_mag(big, little) != Ordering::Less);
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0_i64;
        for (i, &limb) in big.iter().enumerate() {
            let mut diff =
                i64::from(limb) - borrow - i64::from(little.get(i).copied().unwrap_or(0));
            if diff < 0 {
                diff += i64::from(BASE);
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u32);
        }
        debug_assert_eq!(borrow, 0);
        trim_leading_zero!(result)
    }

    /// Adds two signed magnitudes. Each sign combination is handled in place,
    /// so the magnitude loops only ever see non-negative operands.
    fn add_signed(x: &[u32], x_sign: bool, y: &[u32], y_sign: bool) -> BigInt {
        match (x_sign, y_sign) {
            (true, true) => BigInt::new(BigInt::add_mag(x, y), true),
            (false, false) => BigInt::new(BigInt::add_mag(x, y), false),
            (true, false) | (false, true) => match cmp_mag(x, y) {
                Ordering::Less => BigInt::new(BigInt::sub_mag(y, x), y_sign),
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => BigInt::new(BigInt::sub_mag(x, y), x_sign),
            },
        }
    }

    /// `++x`
    pub fn increment(&mut self) -> &mut Self {
        *self = &*self + &POS_CACHE[1];
        self
    }

    /// `--x`
    pub fn decrement(&mut self) -> &mut Self {
        *self = &*self - &POS_CACHE[1];
        self
    }

    /// `x++`: returns the value before the increment.
    pub fn post_increment(&mut self) -> BigInt {
        let old = self.clone();
        self.increment();
        old
    }

    /// `x--`: returns the value before the decrement.
    pub fn post_decrement(&mut self) -> BigInt {
        let old = self.clone();
        self.decrement();
        old
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        BigInt::add_signed(&self.limbs, self.sign, &rhs.limbs, rhs.sign)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        BigInt::add_signed(&self.limbs, self.sign, &rhs.limbs, !rhs.sign)
    }
}

// Limb shifts and slices
impl BigInt {
    fn shl_mag(mag: &[u32], n: usize) -> Vec<u32> {
        if is_zero_mag(mag) {
            return vec![0];
        }
        let mut shifted = Vec::with_capacity(mag.len() + n);
        shifted.resize(n, 0);
        shifted.extend_from_slice(mag);
        shifted
    }

    fn shr_mag(mag: &[u32], n: usize) -> Vec<u32> {
        if n >= mag.len() {
            vec![0]
        } else {
            mag[n..].to_vec()
        }
    }

    fn slice_mag(mag: &[u32], left: usize, right: usize) -> Vec<u32> {
        let len = mag.len();
        let hi = len.saturating_sub(left);
        let lo = len.saturating_sub(right);
        if lo >= hi {
            return vec![0];
        }
        trim_leading_zero!(mag[lo..hi].to_vec())
    }

    /// Multiplies by `10^(9n)`.
    pub fn shl_limbs(&self, n: usize) -> BigInt {
        BigInt::from_raw(BigInt::shl_mag(&self.limbs, n), self.sign)
    }

    /// Divides by `10^(9n)`, dropping the `n` low limbs.
    pub fn shr_limbs(&self, n: usize) -> BigInt {
        BigInt::new(BigInt::shr_mag(&self.limbs, n), self.sign)
    }

    /// The limbs `[left, right)` counted from the most significant one, as a
    /// non-negative value. Positions outside the number are ignored.
    pub fn slice(&self, left: usize, right: usize) -> BigInt {
        BigInt::from_raw(BigInt::slice_mag(&self.limbs, left, right), true)
    }
}

// Multiplication
impl BigInt {
    /// Karatsuba product of two normalized magnitudes.
    fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        if is_zero_mag(x) || is_zero_mag(y) {
            return vec![0];
        }

        let n = x.len().max(y.len());
        if n == 1 {
            let product = u64::from(x[0]) * u64::from(y[0]);
            return trim_leading_zero!(vec![
                (product % BASE_U64) as u32,
                (product / BASE_U64) as u32,
            ]);
        }

        // Bring both operands to the same even length by appending low zero
        // limbs. The product then carries `x_shift + y_shift` extra low limbs.
        let mut x_shift = n - x.len();
        let mut y_shift = n - y.len();
        let mut fixed = n;
        if fixed % 2 != 0 {
            fixed += 1;
            x_shift += 1;
            y_shift += 1;
        }
        let x = BigInt::shl_mag(x, x_shift);
        let y = BigInt::shl_mag(y, y_shift);

        let half = fixed / 2;
        let x_high = BigInt::slice_mag(&x, 0, half);
        let x_low = BigInt::slice_mag(&x, half, fixed);
        let y_high = BigInt::slice_mag(&y, 0, half);
        let y_low = BigInt::slice_mag(&y, half, fixed);

        let high = BigInt::mul_mag(&x_high, &y_high);
        let low = BigInt::mul_mag(&x_low, &y_low);
        let middle = BigInt::mul_mag(
            &BigInt::add_mag(&x_low, &x_high),
            &BigInt::add_mag(&y_low, &y_high),
        );
        let cross = BigInt::sub_mag(&BigInt::sub_mag(&middle, &high), &low);

        let result = BigInt::add_mag(
            &BigInt::add_mag(&BigInt::shl_mag(&high, fixed), &BigInt::shl_mag(&cross, half)),
            &low,
        );
        BigInt::shr_mag(&result, x_shift + y_shift)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        let _span = tracing::trace_span!(
            "karatsuba",
            lhs_limbs = self.limbs.len(),
            rhs_limbs = rhs.limbs.len()
        )
        .entered();
        BigInt::new(BigInt::mul_mag(&self.limbs, &rhs.limbs), self.sign == rhs.sign)
    }
}

// Division
impl BigInt {
    /// Long division by a single machine word, most significant limb first.
    fn div_small_mag(mag: &[u32], divisor: u32) -> (Vec<u32>, u32) {
        let divisor = u64::from(divisor);
        let mut quotient = vec![0_u32; mag.len()];
        let mut remainder = 0_u64;
        for (q, &limb) in quotient.iter_mut().zip(mag).rev() {
            let current = remainder * BASE_U64 + u64::from(limb);
            *q = (current / divisor) as u32;
            remainder = current % divisor;
        }
        (trim_leading_zero!(quotient), remainder as u32)
    }

    fn div_mag(dividend: &[u32], divisor: &[u32]) -> Vec<u32> {
        debug_assert!(!is_zero_mag(divisor));
        match cmp_mag(dividend, divisor) {
            Ordering::Less => return vec![0],
            Ordering::Equal => return vec![1],
            Ordering::Greater => {}
        }
        if divisor.len() == 1 {
            return BigInt::div_small_mag(dividend, divisor[0]).0;
        }

        let dividend = BigInt::from_raw(dividend.to_vec(), true);
        let divisor = BigInt::from_raw(divisor.to_vec(), true);
        dividend.search_quotient(&divisor).limbs
    }

    /// Binary search for `self / divisor`, both non-negative and
    /// `self > divisor`.
    ///
    /// The quotient lies in `[BASE^(range-1), BASE^(range+1))` where `range`
    /// is the difference of the limb counts. Throughout the search
    /// `left * divisor <= self < right * divisor`.
    fn search_quotient(&self, divisor: &BigInt) -> BigInt {
        let one = &POS_CACHE[1];
        let range = self.limbs.len() - divisor.limbs.len();
        let mut left = if range == 0 {
            BigInt::zero()
        } else {
            one.shl_limbs(range - 1)
        };
        let mut right = one.shl_limbs(range + 1);
        let floor = self - divisor;

        let mut probes = 0_usize;
        while &(&right - &left) > one {
            probes += 1;
            let (mid, _) = BigInt::div_small_mag(&BigInt::add_mag(&left.limbs, &right.limbs), 2);
            let mid = BigInt::from_raw(mid, true);
            let product = &mid * divisor;
            if product <= *self && product > floor {
                tracing::trace!(probes = probes, "quotient found at midpoint");
                return mid;
            }
            if product > *self {
                right = mid;
            } else {
                left = mid;
            }
        }

        tracing::trace!(probes = probes, "quotient bracket closed");
        debug_assert!(&left * divisor <= *self && &right * divisor > *self);
        left
    }

    /// Divides by a machine word, truncating toward zero.
    pub fn div_small(&self, divisor: u32) -> Result<BigInt> {
        if divisor == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        let (quotient, _) = BigInt::div_small_mag(&self.limbs, divisor);
        Ok(BigInt::new(quotient, self.sign))
    }

    /// Quotient truncated toward zero.
    pub fn try_div(&self, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let quotient = BigInt::div_mag(&self.limbs, &divisor.limbs);
        Ok(BigInt::new(quotient, self.sign == divisor.sign))
    }

    /// Remainder with the sign of `self`.
    pub fn try_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Returns `(self / divisor, self % divisor)`. The remainder is derived as
    /// `self - quotient * divisor`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let quotient = self.try_div(divisor)?;
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.try_div(divisor).ok()
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.try_rem(divisor).ok()
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// If `rhs` is zero.
    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// If `rhs` is zero.
    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.try_rem(rhs) {
            Ok(remainder) => remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

// Owned and mixed operand forms, all routed through the `&BigInt op &BigInt` impls
macro_rules! forward_binop {
    ($($imp: ident, $method: ident);*) => {
    $(
    impl $imp<BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $imp::$method(&self, &rhs)
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $imp::$method(&self, rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $imp::$method(self, &rhs)
        }
    }
    )*
    };
}

macro_rules! forward_assign {
    ($($imp: ident, $method: ident, $op: ident, $op_method: ident);*) => {
    $(
    impl $imp<BigInt> for BigInt {
        fn $method(&mut self, rhs: BigInt) {
            *self = $op::$op_method(&*self, &rhs);
        }
    }

    impl $imp<&BigInt> for BigInt {
        fn $method(&mut self, rhs: &BigInt) {
            *self = $op::$op_method(&*self, rhs);
        }
    }
    )*
    };
}

forward_binop!(Add, add; Sub, sub; Mul, mul; Div, div; Rem, rem);
forward_assign!(
    AddAssign, add_assign, Add, add;
    SubAssign, sub_assign, Sub, sub;
    MulAssign, mul_assign, Mul, mul;
    DivAssign, div_assign, Div, div;
    RemAssign, rem_assign, Rem, rem
);

impl Zero for BigInt {
    fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        POS_CACHE[1].clone()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0).limbs(), &[0]);
    assert_eq!(BigInt::from(7_u8).to_string(), "7");
    assert_eq!(BigInt::from(-16_i32).to_string(), "-16");
    assert_eq!(BigInt::from(-17_i32).to_string(), "-17");
    assert_eq!(BigInt::from(1_000_000_000_u64).limbs(), &[0, 1]);
    assert_eq!(BigInt::from(u64::MAX).limbs(), &[709551615, 446744073, 18]);
    assert_eq!(BigInt::from(u64::MAX).to_string(), u64::MAX.to_string());

    let min = BigInt::from(i64::MIN);
    assert_eq!(min.limbs(), &[854775808, 223372036, 9]);
    assert!(min.is_negative());
    assert_eq!(min.to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(i64::MAX).to_string(), "9223372036854775807");

    assert_eq!(BigInt::from_sign_magnitude(false, 42).to_string(), "-42");
    assert_eq!(BigInt::from_sign_magnitude(false, 0), BigInt::from(0));
    assert!(!BigInt::from_sign_magnitude(false, 0).is_negative());
}

#[test]
fn test_parse() {
    assert_eq!(big("0").limbs(), &[0]);
    assert_eq!(big("123456789").limbs(), &[123456789]);
    assert_eq!(big("1234567890").limbs(), &[234567890, 1]);
    assert_eq!(big("-1000000000000000000").limbs(), &[0, 0, 1]);
    assert_eq!(big("000000000000000042").limbs(), &[42]);
    assert_eq!(big("-0"), BigInt::from(0));
    assert!(!big("-0").is_negative());
    assert_eq!(big("-000").to_string(), "0");

    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!(
        "+5".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { index: 0, found: '+' })
    );
    assert_eq!(
        "-12a4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { index: 3, found: 'a' })
    );
    assert_eq!(
        "1 000".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { index: 1, found: ' ' })
    );
    assert!("1e9".parse::<BigInt>().is_err());
    assert!("--1".parse::<BigInt>().is_err());
}

#[test]
fn test_from_limbs() {
    let neg_zero = BigInt::from_limbs(false, vec![0]).unwrap();
    assert_eq!(neg_zero, BigInt::from(0));
    assert_eq!(BigInt::from(0), BigInt::from_limbs(true, vec![0]).unwrap());
    assert!(!neg_zero.is_negative());
    assert_eq!(neg_zero.to_string(), "0");

    let n = BigInt::from_limbs(false, vec![5, 0, 0]).unwrap();
    assert_eq!(n.limbs(), &[5]);
    assert_eq!(n, BigInt::from(-5));
    assert_eq!(BigInt::from_limbs(true, vec![]).unwrap(), BigInt::from(0));

    match BigInt::from_limbs(true, vec![1, BASE]) {
        Err(BigIntError::LimbOutOfRange { index: 1, limb }) => assert_eq!(limb, BASE),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_cmp() {
    let values: Vec<BigInt> = [
        "-1000000000000000000000",
        "-999999999999",
        "-1000000000",
        "-999999999",
        "-1",
        "0",
        "1",
        "999999999",
        "1000000000",
        "1000000001",
        "123456789123456789123456789",
    ]
    .iter()
    .map(|s| big(s))
    .collect();

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            assert_eq!(a == b, i == j);
        }
    }

    let neg_zero = BigInt::from_limbs(false, vec![0]).unwrap();
    assert_eq!(neg_zero.cmp(&BigInt::from(0)), Ordering::Equal);
    assert!(neg_zero > BigInt::from(-1));
    assert!(neg_zero < BigInt::from(1));
    assert_eq!(big("-30").cmp_magnitude(&big("20")), Ordering::Greater);
}

#[test]
fn test_hash_signed_zero() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(BigInt::from(0));
    set.insert(BigInt::from_limbs(false, vec![0]).unwrap());
    set.insert(-BigInt::from(0));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_neg_abs() {
    assert_eq!(-big("5"), big("-5"));
    assert_eq!(-(-big("123456789123")), big("123456789123"));
    assert_eq!(-BigInt::from(0), BigInt::from(0));
    assert!(!(-BigInt::from(0)).is_negative());
    assert_eq!(big("-1000000000000").abs(), big("1000000000000"));
    assert_eq!(big("-7").signum(), BigInt::from(-1));
    assert_eq!(big("0").signum(), BigInt::from(0));
    assert_eq!(big("77777777777777").signum(), BigInt::from(1));
}

#[test]
fn test_add() {
    assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
    assert_eq!(big("999999999") + big("1"), big("1000000000"));
    assert_eq!(big("999999999999999999") + big("1"), big("1000000000000000000"));
    assert_eq!((big("999999999") + big("1")).limbs(), &[0, 1]);
    assert_eq!(big("-999999999") + big("-1"), big("-1000000000"));
    assert_eq!(big("5") + big("-5"), BigInt::from(0));
    assert_eq!(big("-5") + big("8"), big("3"));
    assert_eq!(big("5") + big("-8"), big("-3"));
    assert_eq!(big("123") + big("0"), big("123"));
    assert_eq!(big("0") + big("-123"), big("-123"));

    let mut a = big("1");
    a += big("999999999999999999");
    a += &big("-1");
    assert_eq!(a, big("999999999999999999"));
}

#[test]
fn test_sub() {
    assert_eq!(big("1000000000") - big("1"), big("999999999"));
    assert_eq!((big("1000000000") - big("1")).limbs(), &[999999999]);
    assert_eq!(big("1000000000000000000") - big("1"), big("999999999999999999"));
    assert_eq!(big("3") - big("5"), big("-2"));
    assert_eq!(big("-3") - big("5"), big("-8"));
    assert_eq!(big("-3") - big("-5"), big("2"));
    assert_eq!(big("3") - big("-5"), big("8"));
    assert_eq!(big("123456789123456789") - big("123456789123456789"), BigInt::from(0));
    assert_eq!(big("0") - big("0"), BigInt::from(0));

    let mut a = big("-1");
    a -= big("-1000000000000");
    assert_eq!(a, big("999999999999"));
}

#[test]
fn test_increment_decrement() {
    let mut a = big("999999999");
    assert_eq!(a.increment().to_string(), "1000000000");
    assert_eq!(a.post_decrement(), big("1000000000"));
    assert_eq!(a, big("999999999"));

    let mut z = BigInt::from(0);
    z.decrement();
    assert_eq!(z, BigInt::from(-1));
    assert_eq!(z.post_increment(), BigInt::from(-1));
    assert_eq!(z, BigInt::from(0));
    assert!(!z.is_negative());
    z.decrement().decrement();
    assert_eq!(z, BigInt::from(-2));
}

#[test]
fn test_shift() {
    let a = big("123456789");
    assert_eq!(a.shl_limbs(2), big("123456789000000000000000000"));
    assert_eq!(a.shl_limbs(2).shr_limbs(2), a);
    assert_eq!(a.shl_limbs(0), a);
    assert_eq!(BigInt::from(0).shl_limbs(3).limbs(), &[0]);
    assert_eq!(big("-5").shl_limbs(1), big("-5000000000"));
    assert_eq!(big("1234567890123").shr_limbs(1), big("1234"));
    assert_eq!(big("1234567890123").shr_limbs(5), BigInt::from(0));
    assert!(!big("-1234").shr_limbs(1).is_negative());
}

#[test]
fn test_slice() {
    // limbs from the top: [3, 2, 1]
    let a = BigInt::from_limbs(true, vec![1, 2, 3]).unwrap();
    assert_eq!(a.slice(0, 1).limbs(), &[3]);
    assert_eq!(a.slice(1, 3).limbs(), &[1, 2]);
    assert_eq!(a.slice(0, 3), a);
    assert_eq!(a.slice(0, 10), a);
    assert_eq!(a.slice(2, 2), BigInt::from(0));
    assert_eq!(a.slice(5, 9), BigInt::from(0));

    // low limbs that start with zeros are trimmed
    let b = BigInt::from_limbs(true, vec![7, 0, 4]).unwrap();
    assert_eq!(b.slice(1, 3).limbs(), &[7]);
    assert!(!big("-1000000002").slice(0, 2).is_negative());
}

#[test]
fn test_mul_single_limb() {
    assert_eq!(big("999999999") * big("999999999"), big("999999998000000001"));
    assert_eq!(big("-12") * big("12"), big("-144"));
    assert_eq!(big("-12") * big("-12"), big("144"));
    assert_eq!(big("0") * big("-12"), BigInt::from(0));
    assert!(!(big("0") * big("-12")).is_negative());
    assert_eq!(BigInt::mul_mag(&[2], &[3]), vec![6]);
}

#[test]
fn test_mul_karatsuba() {
    // two limbs each
    let a = big("123456789123456789");
    let b = big("987654321987654321");
    let c = big("121932631356500531347203169112635269");
    assert_eq!(&a * &b, c);
    assert_eq!(&b * &a, c);

    // odd length
    let a = big("123456789012345678901234567");
    let b = big("987654321098765432109876543");
    assert_eq!(&a * &b, big("121932631137021795226185031828684651861743636654061881"));
    assert_eq!(-&a * &b, big("-121932631137021795226185031828684651861743636654061881"));

    // uneven lengths, five and three limbs
    let a = big("12345678901234567890123456789012345678901234");
    let b = big("98765432109876543210");
    let c = big("1219326311370217952249657064224965706422496514554336222923321140");
    assert_eq!(&a * &b, c);
    assert_eq!(&b * &a, c);

    // one limb against many
    let a = big("1000000000000000000000000000000000000");
    assert_eq!(&a * &big("7"), big("7000000000000000000000000000000000000"));
    assert_eq!(&big("7") * &a, big("7000000000000000000000000000000000000"));

    let a = big("1606938044258990275541962092341162602522202993782792835301376");
    let b = big("369988485035126972924700782451696644186473100389722973815184405301748249");
    let c = big(concat!(
        "5945485725406936288498602875076590820199844118587451146656264515637316427910",
        "68651270736904218747229713754019390778814623215595290624"
    ));
    assert_eq!(a * b, c);

    let mut m = big("999999999999999999");
    m *= &big("999999999999999999");
    assert_eq!(m, big("999999999999999998000000000000000001"));
}

#[test]
fn test_div_small() {
    let a = big("1000000000000000000");
    assert_eq!(a.div_small(3).unwrap(), big("333333333333333333"));
    assert_eq!(big("-7").div_small(2).unwrap(), big("-3"));
    assert_eq!(big("5").div_small(7).unwrap(), BigInt::from(0));
    assert!(matches!(a.div_small(0), Err(BigIntError::DivisionByZero)));

    let (q, r) = BigInt::div_small_mag(&[1, 0, 1], 10);
    assert_eq!(BigInt::from_raw(q, true), big("100000000000000000"));
    assert_eq!(r, 1);
}

#[test]
fn test_div() {
    assert_eq!(big("1000000000000000000") / big("3"), big("333333333333333333"));
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(big("-7") / big("2"), big("-3"));
    assert_eq!(big("7") / big("-2"), big("-3"));
    assert_eq!(big("-7") / big("-2"), big("3"));
    assert_eq!(big("5") / big("123456789123"), BigInt::from(0));
    assert_eq!(big("123456789123") / big("123456789123"), BigInt::from(1));
    assert_eq!(big("-123456789123") / big("1"), big("-123456789123"));
    assert_eq!(big("0") / big("-9"), BigInt::from(0));

    // multi-limb divisors go through the binary search
    let a = big("10000000000000000000000000000000000000000");
    let b = big("100000000000000000001");
    assert_eq!(&a / &b, big("99999999999999999999"));
    assert_eq!(
        big("999999999999999999999999999") / big("999999999"),
        big("1000000001000000001")
    );
    assert_eq!(
        big("-1000000000000000000000000000007") / big("1000000000003"),
        big("-999999999997000000")
    );

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(a / b, c);

    let mut d = big("1000000000000000000");
    d /= big("1000000000");
    assert_eq!(d, big("1000000000"));
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), BigInt::from(0));
    assert_eq!(big("-7") % big("2"), big("-1"));
    assert_eq!(big("7") % big("-2"), big("1"));
    assert_eq!(
        big("-1000000000000000000000000000007") % big("1000000000003"),
        big("-9000007")
    );
    assert_eq!(
        big("1000000000000000000000000000007") % big("-1000000000003"),
        big("9000007")
    );

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(a % b, r);

    let mut m = big("-1000000000000000000000000000");
    m %= big("7");
    assert_eq!(m, big("-6"));
}

#[test]
fn test_division_by_zero() {
    let a = big("123456789123456789");
    let zero = BigInt::from(0);
    assert!(matches!(a.try_div(&zero), Err(BigIntError::DivisionByZero)));
    assert!(matches!(a.try_rem(&zero), Err(BigIntError::DivisionByZero)));
    assert!(a.checked_div(&zero).is_none());
    assert!(a.checked_rem(&zero).is_none());
    assert_eq!(a.checked_div(&big("2")), Some(big("61728394561728394")));

    let (q, r) = big("-1000000000000000000000000000").div_rem(&big("7")).unwrap();
    assert_eq!(q, big("-142857142857142857142857142"));
    assert_eq!(r, big("-6"));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = big("1") / big("0");
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_rem_operator_panics_on_zero() {
    let _ = big("1") % big("-0");
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::from(0).to_string(), "0");
    assert_eq!(big("-2").to_string(), "-2");
    assert_eq!(big("1000000000").to_string(), "1000000000");
    assert_eq!(big("-1000000000000000001").to_string(), "-1000000000000000001");
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(s).to_string(), s);

    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:+}", big("42")), "+42");
    assert_eq!(format!("{:05}", big("-42")), "-0042");
}

#[test]
fn test_read_token() {
    let mut input = io::Cursor::new("  42\n-1000000000000 \t junk\n");
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big("42")));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big("-1000000000000")));
    assert!(matches!(
        BigInt::read_token(&mut input),
        Err(BigIntError::Parse(ParseBigIntError::InvalidDigit { index: 0, found: 'j' }))
    ));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), None);

    // a token split across buffer refills
    let long = "123456789123456789123456789";
    let mut input = io::BufReader::with_capacity(4, long.as_bytes());
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big(long)));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), None);
}

#[test]
fn test_try_from() {
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)).unwrap(), i64::MIN);
    assert_eq!(i64::try_from(&BigInt::from(i64::MAX)).unwrap(), i64::MAX);
    assert_eq!(i64::try_from(&big("-42")).unwrap(), -42);
    assert!(i64::try_from(&big("9223372036854775808")).is_err());
    assert!(i64::try_from(&big("-9223372036854775809")).is_err());
    assert_eq!(u64::try_from(&BigInt::from(u64::MAX)).unwrap(), u64::MAX);
    assert_eq!(u64::try_from(&big("123456789110")).unwrap(), 123456789110);
    assert!(u64::try_from(&big("18446744073709551616")).is_err());
    assert!(u64::try_from(&big("-1")).is_err());
}

#[test]
fn test_sum_product() {
    let values = vec![big("999999999"), big("1"), big("-1000000000")];
    assert_eq!(values.iter().sum::<BigInt>(), BigInt::from(0));
    assert_eq!(values.into_iter().product::<BigInt>(), big("-999999999000000000"));

    let factorial: BigInt = (1..=30_u32).map(BigInt::from).product();
    assert_eq!(factorial, big("265252859812191058636308480000000"));
    assert_eq!(BigInt::one(), BigInt::from(1));
    assert!(<BigInt as Zero>::is_zero(&BigInt::default()));
}
