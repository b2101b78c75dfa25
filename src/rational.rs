//! Arbitrary-precision exact rational numbers.
//!
//! Every [`Rational`] is kept in lowest terms with a strictly positive
//! denominator: `gcd(|num|, den) == 1` and `den > 0`. All arithmetic
//! operations reduce their result before returning it, so equality can be
//! checked structurally instead of by cross-multiplying.
//!
//! Construction from text accepts four grammars: a bare integer, a `p/q`
//! fraction, a terminating decimal `a.bcd`, and a repeating decimal
//! `a.b(cd)`. The repeating form is the only one that needs real parsing
//! support from this module; the surrounding text-parsing collaborators
//! (outside this crate's scope) are expected to hand already-validated
//! strings to [`Rational::from_str`].

use crate::SweepError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// An arbitrary-precision rational number, always stored in canonical form.
#[derive(Debug, Clone)]
pub struct Rational {
  num: BigInt,
  den: BigInt,
}

impl Rational {
  /// Construct a rational from an integer numerator and denominator,
  /// reducing to canonical form.
  ///
  /// # Errors
  /// Returns [`SweepError::DivisionByZero`] if `den` is zero.
  pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Rational, SweepError> {
    let num = num.into();
    let den = den.into();
    if den.is_zero() {
      return Err(SweepError::DivisionByZero);
    }
    Ok(Rational { num, den }.reduced())
  }

  /// The rational representing the given integer.
  pub fn from_integer(n: impl Into<BigInt>) -> Rational {
    Rational {
      num: n.into(),
      den: BigInt::one(),
    }
  }

  pub fn zero() -> Rational {
    Rational {
      num: BigInt::zero(),
      den: BigInt::one(),
    }
  }

  pub fn one() -> Rational {
    Rational {
      num: BigInt::one(),
      den: BigInt::one(),
    }
  }

  pub fn is_zero(&self) -> bool {
    self.num.is_zero()
  }

  pub fn is_integer(&self) -> bool {
    self.den.is_one()
  }

  /// -1, 0, or 1, matching the sign of the value.
  pub fn sign(&self) -> i32 {
    if self.num.is_zero() {
      0
    } else if self.num.is_positive() {
      1
    } else {
      -1
    }
  }

  pub fn abs(&self) -> Rational {
    Rational {
      num: self.num.abs(),
      den: self.den.clone(),
    }
  }

  pub fn neg(&self) -> Rational {
    Rational {
      num: -self.num.clone(),
      den: self.den.clone(),
    }
  }

  /// The multiplicative inverse.
  ///
  /// # Errors
  /// Returns [`SweepError::DivisionByZero`] if `self` is zero.
  pub fn recip(&self) -> Result<Rational, SweepError> {
    if self.num.is_zero() {
      return Err(SweepError::DivisionByZero);
    }
    let (num, den) = if self.num.is_negative() {
      (-self.den.clone(), -self.num.clone())
    } else {
      (self.den.clone(), self.num.clone())
    };
    Ok(Rational { num, den })
  }

  pub fn numer(&self) -> &BigInt {
    &self.num
  }

  pub fn denom(&self) -> &BigInt {
    &self.den
  }

  fn reduced(self) -> Rational {
    let Rational { mut num, mut den } = self;
    if den.is_negative() {
      num = -num;
      den = -den;
    }
    if num.is_zero() {
      return Rational {
        num,
        den: BigInt::one(),
      };
    }
    let g = num.gcd(&den);
    if !g.is_one() {
      num /= &g;
      den /= &g;
    }
    Rational { num, den }
  }

  /// Cross-multiplying comparison: `sign(num1*den2 - num2*den1)`, avoiding
  /// any conversion to floating point.
  fn cross_cmp(&self, other: &Rational) -> Ordering {
    (&self.num * &other.den).cmp(&(&other.num * &self.den))
  }
}

impl FromStr for Rational {
  type Err = SweepError;

  fn from_str(text: &str) -> Result<Rational, SweepError> {
    parse_rational(text).ok_or_else(|| SweepError::InvalidNumber {
      text: text.to_string(),
    })
  }
}

fn parse_rational(text: &str) -> Option<Rational> {
  let text = text.trim();
  if text.is_empty() {
    return None;
  }
  let (sign, body) = match text.strip_prefix('-') {
    Some(rest) => (-1, rest),
    None => (1, text.strip_prefix('+').unwrap_or(text)),
  };
  if body.is_empty() {
    return None;
  }

  let value = if let Some((whole, frac)) = body.split_once('/') {
    let num: BigInt = whole.parse().ok()?;
    let den: BigInt = frac.parse().ok()?;
    if den.is_zero() {
      return None;
    }
    Rational { num, den }.reduced()
  } else if let Some(open) = body.find('(') {
    // Repeating decimal: a.b(c)
    let close = body.strip_suffix(')')?;
    let _ = close; // validated via rfind below
    if !body.ends_with(')') {
      return None;
    }
    let repeating = &body[open + 1..body.len() - 1];
    if repeating.is_empty() || !repeating.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    let head = &body[..open];
    let (whole, frac) = head.split_once('.')?;
    if !whole.bytes().all(|b| b.is_ascii_digit()) || whole.is_empty() {
      return None;
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    // a.b(c) == (abc - ab) / ((10^|c| - 1) * 10^|b|)
    let ab: BigInt = format!("{whole}{frac}").parse().ok()?;
    let abc: BigInt = format!("{whole}{frac}{repeating}").parse().ok()?;
    let ten = BigInt::from(10);
    let pow_c = ten.pow(repeating.len() as u32);
    let pow_b = ten.pow(frac.len() as u32);
    let den = (&pow_c - BigInt::one()) * &pow_b;
    let num = abc - ab;
    Rational { num, den }.reduced()
  } else if let Some((whole, frac)) = body.split_once('.') {
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    let num: BigInt = format!("{whole}{frac}").parse().ok()?;
    let den = BigInt::from(10).pow(frac.len() as u32);
    Rational { num, den }.reduced()
  } else {
    if !body.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    let num: BigInt = body.parse().ok()?;
    Rational {
      num,
      den: BigInt::one(),
    }
  };

  Some(if sign < 0 { value.neg() } else { value })
}

impl fmt::Display for Rational {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.den.is_one() {
      write!(f, "{}", self.num)
    } else {
      write!(f, "{}/{}", self.num, self.den)
    }
  }
}

impl PartialEq for Rational {
  fn eq(&self, other: &Rational) -> bool {
    self.num == other.num && self.den == other.den
  }
}
impl Eq for Rational {}

impl PartialOrd for Rational {
  fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}
impl Ord for Rational {
  fn cmp(&self, other: &Rational) -> Ordering {
    self.cross_cmp(other)
  }
}

impl Hash for Rational {
  fn hash<H: Hasher>(&self, state: &mut H) {
    // Both operands are already canonical, so hashing the reduced
    // numerator/denominator pair is consistent with `Eq`.
    self.num.hash(state);
    self.den.hash(state);
  }
}

impl Zero for Rational {
  fn zero() -> Rational {
    Rational::zero()
  }
  fn is_zero(&self) -> bool {
    self.num.is_zero()
  }
}

impl One for Rational {
  fn one() -> Rational {
    Rational::one()
  }
}

impl Add for &Rational {
  type Output = Rational;
  fn add(self, other: &Rational) -> Rational {
    Rational {
      num: &self.num * &other.den + &other.num * &self.den,
      den: &self.den * &other.den,
    }
    .reduced()
  }
}

impl Sub for &Rational {
  type Output = Rational;
  fn sub(self, other: &Rational) -> Rational {
    Rational {
      num: &self.num * &other.den - &other.num * &self.den,
      den: &self.den * &other.den,
    }
    .reduced()
  }
}

impl Mul for &Rational {
  type Output = Rational;
  fn mul(self, other: &Rational) -> Rational {
    Rational {
      num: &self.num * &other.num,
      den: &self.den * &other.den,
    }
    .reduced()
  }
}

impl Div for &Rational {
  type Output = Result<Rational, SweepError>;
  fn div(self, other: &Rational) -> Result<Rational, SweepError> {
    if other.num.is_zero() {
      return Err(SweepError::DivisionByZero);
    }
    Ok(
      Rational {
        num: &self.num * &other.den,
        den: &self.den * &other.num,
      }
      .reduced(),
    )
  }
}

impl Neg for &Rational {
  type Output = Rational;
  fn neg(self) -> Rational {
    Rational::neg(self)
  }
}

impl Add for Rational {
  type Output = Rational;
  fn add(self, other: Rational) -> Rational {
    &self + &other
  }
}
impl Sub for Rational {
  type Output = Rational;
  fn sub(self, other: Rational) -> Rational {
    &self - &other
  }
}
impl Mul for Rational {
  type Output = Rational;
  fn mul(self, other: Rational) -> Rational {
    &self * &other
  }
}
