use num::Integer;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// How a value is brought onto the grid `k * 10^oom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
  /// Towards negative infinity.
  Floor,
  /// Towards positive infinity.
  Ceiling,
  /// Nearest neighbour, ties away from zero.
  HalfUp,
  /// Nearest neighbour, ties towards zero.
  HalfDown,
  /// Nearest neighbour, ties to the even neighbour.
  HalfEven,
  /// Towards zero.
  Down,
  /// Away from zero.
  Up,
}

/// Precision of an inexact operation: the retained place value `10^oom` and
/// the rounding mode used to reach it.
///
/// There is no default. Every operation that can produce a non-terminating
/// result takes one of these explicitly.
///
/// ```rust
/// # use planar_kernel::{PrecisionSpec, RoundingMode};
/// let precision: PrecisionSpec = "-10:HALF_UP".parse().unwrap();
/// assert_eq!(precision, PrecisionSpec::new(-10, RoundingMode::HalfUp));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionSpec {
  order_of_magnitude: i32,
  rounding_mode: RoundingMode,
}

impl RoundingMode {
  const ALL: [RoundingMode; 7] = [
    RoundingMode::Floor,
    RoundingMode::Ceiling,
    RoundingMode::HalfUp,
    RoundingMode::HalfDown,
    RoundingMode::HalfEven,
    RoundingMode::Down,
    RoundingMode::Up,
  ];

  pub fn name(self) -> &'static str {
    match self {
      RoundingMode::Floor => "FLOOR",
      RoundingMode::Ceiling => "CEILING",
      RoundingMode::HalfUp => "HALF_UP",
      RoundingMode::HalfDown => "HALF_DOWN",
      RoundingMode::HalfEven => "HALF_EVEN",
      RoundingMode::Down => "DOWN",
      RoundingMode::Up => "UP",
    }
  }

  /// The mode that rounds `-x` to the negation of how `self` rounds `x`.
  pub fn negated(self) -> RoundingMode {
    match self {
      RoundingMode::Floor => RoundingMode::Ceiling,
      RoundingMode::Ceiling => RoundingMode::Floor,
      other => other,
    }
  }

  /// Round a rational to an integer.
  pub fn round_rational(self, value: &BigRational) -> BigInt {
    let floor = value.floor().to_integer();
    let frac = value - BigRational::from_integer(floor.clone());
    let half = BigRational::new(BigInt::one(), BigInt::from(2));
    self.resolve(
      floor,
      frac.is_zero(),
      frac.cmp(&half),
      value.is_negative(),
    )
  }

  // Pick between `floor` and `floor + 1` for a value `floor + f`, `0 <= f < 1`.
  // `cmp_half` is `f` compared to 1/2.
  fn resolve(self, floor: BigInt, exact: bool, cmp_half: Ordering, negative: bool) -> BigInt {
    if exact {
      return floor;
    }
    let ceil = &floor + BigInt::one();
    let round_up = match self {
      RoundingMode::Floor => false,
      RoundingMode::Ceiling => true,
      RoundingMode::Down => negative,
      RoundingMode::Up => !negative,
      RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => match cmp_half {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => match self {
          RoundingMode::HalfUp => !negative,
          RoundingMode::HalfDown => negative,
          _ => floor.is_odd(),
        },
      },
    };
    if round_up {
      ceil
    } else {
      floor
    }
  }
}

impl fmt::Display for RoundingMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for RoundingMode {
  type Err = Error;
  fn from_str(s: &str) -> Result<RoundingMode, Error> {
    let s = s.trim();
    RoundingMode::ALL
      .iter()
      .copied()
      .find(|mode| mode.name().eq_ignore_ascii_case(s))
      .ok_or(Error::InvalidPrecision)
  }
}

impl PrecisionSpec {
  pub const fn new(order_of_magnitude: i32, rounding_mode: RoundingMode) -> PrecisionSpec {
    PrecisionSpec {
      order_of_magnitude,
      rounding_mode,
    }
  }

  pub fn order_of_magnitude(&self) -> i32 {
    self.order_of_magnitude
  }

  pub fn rounding_mode(&self) -> RoundingMode {
    self.rounding_mode
  }

  /// Number of decimal places retained. Zero for non-negative magnitudes.
  pub fn decimal_places(&self) -> u32 {
    self.order_of_magnitude.min(0).unsigned_abs()
  }

  /// Same grid, mirrored rounding mode. Rounding `-x` with `self` equals
  /// negating the result of rounding `x` with the negated precision.
  pub fn negated(&self) -> PrecisionSpec {
    PrecisionSpec::new(self.order_of_magnitude, self.rounding_mode.negated())
  }

  /// The grid spacing `10^oom`.
  pub fn unit(&self) -> BigRational {
    let scale = pow(BigInt::from(10), self.order_of_magnitude.unsigned_abs() as usize);
    if self.order_of_magnitude >= 0 {
      BigRational::from_integer(scale)
    } else {
      BigRational::new(BigInt::one(), scale)
    }
  }

  /// Round `value` to a multiple of `10^oom`.
  pub fn round(&self, value: &BigRational) -> BigRational {
    let unit = self.unit();
    let steps = self.rounding_mode.round_rational(&(value / &unit));
    BigRational::from_integer(steps) * unit
  }
}

impl fmt::Display for PrecisionSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.order_of_magnitude, self.rounding_mode)
  }
}

impl FromStr for PrecisionSpec {
  type Err = Error;
  fn from_str(s: &str) -> Result<PrecisionSpec, Error> {
    let (oom, mode) = s.split_once(':').ok_or(Error::InvalidPrecision)?;
    let oom = oom.trim().parse().map_err(|_| Error::InvalidPrecision)?;
    Ok(PrecisionSpec::new(oom, mode.parse()?))
  }
}

pub(crate) fn div_rounded(
  lhs: &BigRational,
  rhs: &BigRational,
  precision: &PrecisionSpec,
) -> Result<BigRational, Error> {
  if rhs.is_zero() {
    return Err(Error::DivisionByZero);
  }
  Ok(precision.round(&(lhs / rhs)))
}

// sqrt(v) / u = sqrt(v / u^2). With v / u^2 = n/d we have
// floor(sqrt(n/d)) = floor(isqrt(n*d) / d), and the fractional part can be
// classified exactly by squaring, so every mode is rounded correctly.
pub(crate) fn sqrt_rounded(
  value: &BigRational,
  precision: &PrecisionSpec,
) -> Result<BigRational, Error> {
  if value.is_negative() {
    return Err(Error::NegativeSquareRoot);
  }
  let unit = precision.unit();
  let scaled = value / (&unit * &unit);
  let floor = (scaled.numer() * scaled.denom()).sqrt() / scaled.denom();
  let floor_r = BigRational::from_integer(floor.clone());
  let exact = &floor_r * &floor_r == scaled;
  let half = &floor_r + BigRational::new(BigInt::one(), BigInt::from(2));
  let cmp_half = scaled.cmp(&(&half * &half));
  let steps = precision
    .rounding_mode
    .resolve(floor, exact, cmp_half, false);
  Ok(BigRational::from_integer(steps) * unit)
}
