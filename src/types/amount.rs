use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{AddAssign, Neg};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::error;

use crate::types::errors::AmountError;

/// A signed cash amount. Positive values are deposits, negative values are
/// withdrawals; the zero amount is legal and counts as neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.0.checked_add(rhs.0) {
            self.0 = new_val;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        let mut total = Amount::ZERO;

        for amount in iter {
            total += amount;
        }

        total
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Self::Output {
        Amount(-self.0)
    }
}

/// Two rendering rules share this impl. Without a precision the amount is
/// written the way ledger lines expect it: trailing zeros dropped, and a
/// single `.0` kept on integral values, so `100.00` comes out as `100.0`.
/// With a precision (the balance label asks for `{:.2}`) the value is
/// rounded and padded to exactly that many places.
impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if let Some(places) = formatter.precision() {
            let mut fixed = self.0.round_dp(places as u32);
            fixed.rescale(places as u32);
            return write!(formatter, "{}", fixed);
        }

        let shortest = self.0.normalize();

        if shortest.is_integer() {
            write!(formatter, "{}.0", shortest)
        } else {
            write!(formatter, "{}", shortest)
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        Decimal::from_str(value)
            .map(Amount)
            .map_err(|_| AmountError::InvalidNumber(value.to_string()))
    }
}
