use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
const SCALE: i64 = 10_000;
/// Decimal places kept by `Money`.
const DECIMALS: i128 = 4;
/// Integer digits that still fit an `i64` once scaled by `SCALE`.
const MAX_INT_DIGITS: i128 = 15;

#[derive(Debug, Clone, Copy, Default, Hash)]
/// A sales amount stored as an integer number of ten-thousandths of a
/// currency unit.
///
/// Entries, totals and targets all flow through `Money` so that summing many
/// segment cells never accumulates floating-point error. Only the progress
/// percentage leaves integer space.
///
/// # Examples
/// ```
/// use sales_tracker::common::money::Money;
///
/// let amount = Money::from_units(600);
/// assert_eq!(amount.as_i64(), 6_000_000);
/// assert_eq!(amount.to_string_4dp(), "600.0000");
/// assert_eq!(Money::new(-5).non_negative(), Money::zero());
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. a daily target of `1000`.
    pub fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Clamps negative amounts to zero; sales cells and targets never go below it.
    pub fn non_negative(self) -> Self {
        Money(self.0.max(0))
    }

    /// Ratio of `self` to `other`. Callers guard against a zero denominator.
    pub fn ratio_to(&self, other: Money) -> f64 {
        self.0 as f64 / other.0 as f64
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        if bd.is_zero() {
            return Ok(Money::zero());
        }

        // Order of magnitude, checked before any arithmetic: scaling a value
        // like `1e999999999999` costs time proportional to its exponent.
        let (_, exponent) = bd.as_bigint_and_exponent();
        let magnitude = i128::from(bd.digits()) - i128::from(exponent);
        if magnitude > MAX_INT_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }
        if magnitude < -DECIMALS {
            // below half of the smallest unit, rounds to zero
            return Ok(Money::zero());
        }

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
