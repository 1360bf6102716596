//! Integer money and the sales-tax rule.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Amount in minor currency units. Negative amounts are unrepresentable.
pub type Cents = u64;

/// Sales-tax rate in basis points (625 = 6.25%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(pub u32);

impl TaxRate {
    pub const DEFAULT: TaxRate = TaxRate(625);

    pub fn basis_points(self) -> u32 {
        self.0
    }

    /// Tax owed on `subtotal`, rounded half-up to the nearest cent.
    ///
    /// Returns `None` if the intermediate product overflows.
    pub fn tax_on(self, subtotal: Cents) -> Option<Cents> {
        subtotal
            .checked_mul(u64::from(self.0))?
            .checked_add(5_000)
            .map(|scaled| scaled / 10_000)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rounds_half_up() {
        let rate = TaxRate::DEFAULT;
        // 2997 * 0.0625 = 187.3125
        assert_eq!(rate.tax_on(2997), Some(187));
        // 8 * 0.0625 = 0.5
        assert_eq!(rate.tax_on(8), Some(1));
        // 7 * 0.0625 = 0.4375
        assert_eq!(rate.tax_on(7), Some(0));
        assert_eq!(rate.tax_on(0), Some(0));
    }

    #[test]
    fn test_tax_overflow_is_reported() {
        assert_eq!(TaxRate::DEFAULT.tax_on(u64::MAX), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TaxRate::DEFAULT.to_string(), "6.25%");
        assert_eq!(TaxRate(800).to_string(), "8.00%");
    }
}
