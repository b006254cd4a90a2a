// Correctly rounded transcendental functions over rationals.
//
// Values are carried as balls (midpoint and radius) at a working precision of
// `digits` decimal places. The true value always lies inside the ball. A
// result is accepted once both ends of the ball round to the same grid value;
// otherwise the working precision is increased. Irrational results never sit
// exactly on a rounding boundary, and the rational special cases (sin 0,
// cos 0, atan2(0, x)) are produced with a zero radius.
use num::Integer;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::*;

use crate::{Error, PrecisionSpec};

const INITIAL_GUARD_DIGITS: u32 = 10;
const MAX_REFINEMENTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Ball {
  mid: BigRational,
  rad: BigRational,
}

fn ten_pow(digits: u32) -> BigInt {
  pow(BigInt::from(10), digits as usize)
}

fn epsilon(digits: u32) -> BigRational {
  BigRational::new(BigInt::one(), ten_pow(digits))
}

impl Ball {
  fn exact(mid: BigRational) -> Ball {
    Ball {
      mid,
      rad: BigRational::zero(),
    }
  }

  fn from_integer(n: i64) -> Ball {
    Ball::exact(BigRational::from_integer(BigInt::from(n)))
  }

  fn lower(&self) -> BigRational {
    &self.mid - &self.rad
  }

  fn upper(&self) -> BigRational {
    &self.mid + &self.rad
  }

  // Largest absolute value inside the ball.
  fn magnitude(&self) -> BigRational {
    self.mid.abs() + &self.rad
  }

  // Snap the midpoint to `digits` decimal places, widening the radius by the
  // distance moved.
  fn trim(self, digits: u32) -> Ball {
    let scale = ten_pow(digits);
    let scaled = &self.mid * BigRational::from_integer(scale.clone());
    let snapped = BigRational::new(scaled.round().to_integer(), scale);
    let moved = (&self.mid - &snapped).abs();
    Ball {
      mid: snapped,
      rad: self.rad + moved,
    }
  }

  fn add(&self, other: &Ball) -> Ball {
    Ball {
      mid: &self.mid + &other.mid,
      rad: &self.rad + &other.rad,
    }
  }

  fn sub(&self, other: &Ball) -> Ball {
    Ball {
      mid: &self.mid - &other.mid,
      rad: &self.rad + &other.rad,
    }
  }

  fn neg(&self) -> Ball {
    Ball {
      mid: -&self.mid,
      rad: self.rad.clone(),
    }
  }

  fn mul(&self, other: &Ball) -> Ball {
    Ball {
      mid: &self.mid * &other.mid,
      rad: self.mid.abs() * &other.rad + other.mid.abs() * &self.rad + &self.rad * &other.rad,
    }
  }

  fn scale(&self, factor: &BigRational) -> Ball {
    Ball {
      mid: &self.mid * factor,
      rad: &self.rad * factor.abs(),
    }
  }

  // None when the ball contains zero.
  fn recip(&self) -> Option<Ball> {
    let m = self.mid.abs();
    if m <= self.rad {
      return None;
    }
    let rad = &self.rad / (&m * (&m - &self.rad));
    Some(Ball {
      mid: self.mid.recip(),
      rad,
    })
  }

  fn widen(self, extra: BigRational) -> Ball {
    Ball {
      mid: self.mid,
      rad: self.rad + extra,
    }
  }
}

fn round_ball<F>(precision: &PrecisionSpec, mut eval: F) -> Result<BigRational, Error>
where
  F: FnMut(u32) -> Option<Ball>,
{
  let mut guard = INITIAL_GUARD_DIGITS;
  for _ in 0..MAX_REFINEMENTS {
    let digits = precision.decimal_places() + guard;
    if let Some(ball) = eval(digits) {
      if ball.rad.is_zero() {
        return Ok(precision.round(&ball.mid));
      }
      let lo = precision.round(&ball.lower());
      if lo == precision.round(&ball.upper()) {
        return Ok(lo);
      }
    }
    crate::log::debug!(guard, "refining working precision");
    guard *= 2;
  }
  crate::log::warn!(%precision, "working precision exhausted");
  Err(Error::PrecisionExhausted)
}

// atan(1/n) for an integer n >= 2, in fixed point.
fn atan_inverse(n: u32, digits: u32) -> Ball {
  let unit = ten_pow(digits + 5);
  let n = BigInt::from(n);
  let n2 = &n * &n;
  let mut power = &unit / &n;
  let mut sum = BigInt::zero();
  let mut k: u64 = 0;
  while !power.is_zero() {
    let term = &power / BigInt::from(2 * k + 1);
    if k % 2 == 0 {
      sum += term;
    } else {
      sum -= term;
    }
    power = &power / &n2;
    k += 1;
  }
  // Each truncated division is off by less than one unit, the tail by less
  // than one more.
  let error = BigRational::new(BigInt::from(2 * k + 2), unit.clone());
  Ball {
    mid: BigRational::new(sum, unit),
    rad: error,
  }
}

// Machin: pi = 16 atan(1/5) - 4 atan(1/239).
fn pi_ball(digits: u32) -> Ball {
  let a = atan_inverse(5, digits).scale(&BigRational::from_integer(BigInt::from(16)));
  let b = atan_inverse(239, digits).scale(&BigRational::from_integer(BigInt::from(4)));
  a.sub(&b)
}

// Taylor series of sin (odd) or cos (even) for |x| < 1.
fn trig_series(x: &Ball, odd: bool, digits: u32) -> Ball {
  let eps = epsilon(digits);
  let x2 = x.mul(x).trim(digits + 2);
  let mut term = if odd { x.clone() } else { Ball::from_integer(1) };
  let mut sum = term.clone();
  let mut k: i64 = if odd { 1 } else { 0 };
  while term.magnitude() >= eps {
    let denom = BigRational::from_integer(BigInt::from((k + 1) * (k + 2)));
    term = term.mul(&x2).scale(&-denom.recip()).trim(digits + 2);
    sum = sum.add(&term);
    k += 2;
  }
  // Consecutive terms shrink by more than half, so the tail is bounded by
  // the last term.
  let tail = term.magnitude();
  sum.trim(digits + 2).widen(tail)
}

// (sin x, cos x) for a rational x, reducing by multiples of pi/2.
fn sin_cos(x: &BigRational, digits: u32) -> (Ball, Ball) {
  if x.is_zero() {
    return (Ball::from_integer(0), Ball::from_integer(1));
  }
  let magnitude_digits = x.abs().ceil().to_integer().to_string().len() as u32;
  let work = digits + magnitude_digits + 2;
  let half_pi = pi_ball(work).scale(&BigRational::new(BigInt::one(), BigInt::from(2)));
  let k = (x / &half_pi.mid).round().to_integer();
  let reduced = Ball::exact(x.clone())
    .sub(&half_pi.scale(&BigRational::from_integer(k.clone())))
    .trim(work);
  let sin = trig_series(&reduced, true, work);
  let cos = trig_series(&reduced, false, work);
  let quadrant = k.mod_floor(&BigInt::from(4));
  match quadrant.to_u8() {
    Some(1) => (cos, sin.neg()),
    Some(2) => (sin.neg(), cos.neg()),
    Some(3) => (cos.neg(), sin),
    _ => (sin, cos),
  }
}

// atan for a ball, reduced into |x| <= 1/2 before summing the series.
fn atan_ball(x: &Ball, digits: u32) -> Option<Ball> {
  let half = BigRational::new(BigInt::one(), BigInt::from(2));
  if x.mid.is_negative() {
    return atan_ball(&x.neg(), digits).map(|b| b.neg());
  }
  if x.mid > BigRational::one() {
    // atan(x) = pi/2 - atan(1/x) for x > 0.
    if !x.lower().is_positive() {
      return None;
    }
    let inv = x.recip()?.trim(digits + 2);
    let half_pi = pi_ball(digits + 2).scale(&half);
    return Some(half_pi.sub(&atan_ball(&inv, digits)?));
  }
  if x.mid > half {
    // atan(x) = pi/4 + atan((x - 1) / (x + 1)).
    let one = Ball::from_integer(1);
    let shifted = x.sub(&one).mul(&x.add(&one).recip()?).trim(digits + 2);
    let quarter_pi = pi_ball(digits + 2).scale(&BigRational::new(BigInt::one(), BigInt::from(4)));
    return Some(quarter_pi.add(&atan_ball(&shifted, digits)?));
  }
  let eps = epsilon(digits);
  let x2 = x.mul(x).trim(digits + 2);
  let mut power = x.clone();
  let mut sum = x.clone();
  let mut k: i64 = 1;
  while power.magnitude() >= eps {
    power = power.mul(&x2).neg().trim(digits + 2);
    let term = power.scale(&BigRational::new(BigInt::one(), BigInt::from(2 * k + 1)));
    sum = sum.add(&term);
    k += 1;
  }
  // |x| <= 1/2 plus slack: the tail is at most a third of the last power.
  let tail = power.magnitude();
  Some(sum.trim(digits + 2).widen(tail))
}

pub(crate) fn pi(precision: &PrecisionSpec) -> Result<BigRational, Error> {
  round_ball(precision, |digits| Some(pi_ball(digits)))
}

pub(crate) fn sin(x: &BigRational, precision: &PrecisionSpec) -> Result<BigRational, Error> {
  round_ball(precision, |digits| Some(sin_cos(x, digits).0))
}

pub(crate) fn cos(x: &BigRational, precision: &PrecisionSpec) -> Result<BigRational, Error> {
  round_ball(precision, |digits| Some(sin_cos(x, digits).1))
}

pub(crate) fn tan(x: &BigRational, precision: &PrecisionSpec) -> Result<BigRational, Error> {
  round_ball(precision, |digits| {
    let (sin, cos) = sin_cos(x, digits + 2);
    Some(sin.mul(&cos.recip()?))
  })
}

/// Angle of the vector `(x, y)` in `(-pi, pi]`. `atan2(0, 0)` is zero.
pub(crate) fn atan2(
  y: &BigRational,
  x: &BigRational,
  precision: &PrecisionSpec,
) -> Result<BigRational, Error> {
  if y.is_zero() && !x.is_negative() {
    return Ok(BigRational::zero());
  }
  round_ball(precision, |digits| {
    if x.is_zero() {
      let half_pi = pi_ball(digits).scale(&BigRational::new(BigInt::one(), BigInt::from(2)));
      return Some(if y.is_positive() { half_pi } else { half_pi.neg() });
    }
    let angle = atan_ball(&Ball::exact(y / x), digits)?;
    if x.is_positive() {
      Some(angle)
    } else if y.is_negative() {
      Some(angle.sub(&pi_ball(digits)))
    } else {
      Some(angle.add(&pi_ball(digits)))
    }
  })
}

pub(crate) fn to_degrees(
  radians: &BigRational,
  precision: &PrecisionSpec,
) -> Result<BigRational, Error> {
  let degrees = radians * BigRational::from_integer(BigInt::from(180));
  round_ball(precision, |digits| {
    let magnitude_digits = degrees.abs().ceil().to_integer().to_string().len() as u32;
    let inv_pi = pi_ball(digits + magnitude_digits).recip()?;
    Some(inv_pi.scale(&degrees))
  })
}

pub(crate) fn to_radians(
  degrees: &BigRational,
  precision: &PrecisionSpec,
) -> Result<BigRational, Error> {
  let turns = degrees / BigRational::from_integer(BigInt::from(180));
  round_ball(precision, |digits| {
    let magnitude_digits = turns.abs().ceil().to_integer().to_string().len() as u32;
    Some(pi_ball(digits + magnitude_digits).scale(&turns))
  })
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::RoundingMode::*;
  use claims::assert_ok;
  use test_strategy::proptest;

  fn at(oom: i32, mode: crate::RoundingMode) -> PrecisionSpec {
    PrecisionSpec::new(oom, mode)
  }

  // Parse a decimal literal such as "3.14159" into an exact rational.
  fn dec(s: &str) -> BigRational {
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    let digits = format!("{}{}", int_part, frac_part);
    BigRational::new(
      digits.parse::<BigInt>().unwrap(),
      ten_pow(frac_part.len() as u32),
    )
  }

  #[test]
  fn pi_digits() {
    assert_eq!(
      pi(&at(-30, HalfEven)),
      Ok(dec("3.141592653589793238462643383280"))
    );
    assert_eq!(pi(&at(-4, Floor)), Ok(dec("3.1415")));
    assert_eq!(pi(&at(-4, HalfUp)), Ok(dec("3.1416")));
    assert_eq!(pi(&at(0, Ceiling)), Ok(int(4)));
  }

  // Gives up, logging each refinement, when no ball ever decides the digit.
  #[test]
  fn refinement_gives_up() {
    let mut calls = 0;
    let result = round_ball(&at(-4, HalfEven), |_| {
      calls += 1;
      None
    });
    assert_eq!(result, Err(Error::PrecisionExhausted));
    assert_eq!(calls, MAX_REFINEMENTS);
  }

  #[test]
  fn sin_cos_known_values() {
    let p = at(-12, HalfEven);
    assert_eq!(sin(&int(1), &p), Ok(dec("0.841470984808")));
    assert_eq!(cos(&int(1), &p), Ok(dec("0.540302305868")));
    assert_eq!(sin(&int(-2), &p), Ok(dec("-0.909297426826")));
    assert_eq!(cos(&int(10), &p), Ok(dec("-0.839071529076")));
    assert_eq!(sin(&int(100), &p), Ok(dec("-0.506365641110")));
  }

  #[test]
  fn exact_special_values() {
    let p = at(-20, Ceiling);
    assert_eq!(sin(&int(0), &p), Ok(int(0)));
    assert_eq!(cos(&int(0), &p), Ok(int(1)));
    assert_eq!(atan2(&int(0), &int(5), &p), Ok(int(0)));
    assert_eq!(atan2(&int(0), &int(0), &p), Ok(int(0)));
  }

  #[test]
  fn tan_known_values() {
    let p = at(-10, HalfEven);
    assert_eq!(tan(&int(1), &p), Ok(dec("1.5574077247")));
    assert_eq!(tan(&q(1, 2), &p), Ok(dec("0.5463024898")));
  }

  #[test]
  fn atan2_quadrants() {
    let p = at(-10, HalfEven);
    assert_eq!(atan2(&int(1), &int(1), &p), Ok(dec("0.7853981634")));
    assert_eq!(atan2(&int(1), &int(-1), &p), Ok(dec("2.3561944902")));
    assert_eq!(atan2(&int(-1), &int(-1), &p), Ok(dec("-2.3561944902")));
    assert_eq!(atan2(&int(-1), &int(1), &p), Ok(dec("-0.7853981634")));
    assert_eq!(atan2(&int(1), &int(0), &p), Ok(dec("1.5707963268")));
    assert_eq!(atan2(&int(-1), &int(0), &p), Ok(dec("-1.5707963268")));
    assert_eq!(atan2(&int(0), &int(-1), &p), Ok(dec("3.1415926536")));
    assert_eq!(atan2(&int(1), &int(2), &p), Ok(dec("0.4636476090")));
    assert_eq!(atan2(&int(7), &int(3), &p), Ok(dec("1.1659045405")));
  }

  #[test]
  fn degrees_and_radians() {
    let p = at(-10, HalfEven);
    assert_eq!(to_degrees(&int(1), &p), Ok(dec("57.2957795131")));
    assert_eq!(to_radians(&int(180), &p), Ok(dec("3.1415926536")));
    assert_eq!(to_radians(&int(0), &p), Ok(int(0)));
    assert_eq!(to_radians(&int(-90), &p), Ok(dec("-1.5707963268")));
  }

  #[proptest]
  fn pythagorean_identity(#[strategy(-50_i64..50)] n: i64, #[strategy(1_i64..20)] d: i64) {
    let x = q(n, d);
    let p = at(-20, HalfEven);
    let s = assert_ok!(sin(&x, &p));
    let c = assert_ok!(cos(&x, &p));
    let err = (&s * &s + &c * &c - int(1)).abs();
    assert!(err < dec("0.000000000000000001"));
  }

  #[proptest]
  fn floor_and_ceiling_bracket(#[strategy(-20_i64..20)] n: i64, #[strategy(1_i64..7)] d: i64) {
    let x = q(n, d);
    let lo = sin(&x, &at(-8, Floor)).unwrap();
    let hi = sin(&x, &at(-8, Ceiling)).unwrap();
    if x.is_zero() {
      assert_eq!(lo, hi);
    } else {
      assert_eq!(&hi - &lo, dec("0.00000001"));
    }
  }
}
