//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In tax math the stakes are statutory:                                  │
//! │    ₹118.00 incl. 18% GST must back-calculate to EXACTLY ₹100.00        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    Every amount is an i64 count of paise (1/100 rupee).                │
//! │    Rounding happens at exactly one place (div_rounded) and is          │
//! │    round-half-away-from-zero, the behavior invoices are audited        │
//! │    against.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bahi_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(1099); // ₹10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // ₹21.98
//! let total = price + Money::from_paise(500);     // ₹15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Rounded Division
// =============================================================================

/// Integer division rounded half away from zero.
///
/// Every monetary rounding in the crate funnels through this function so
/// the rounding rule exists exactly once. Intermediate math is i128 so
/// `amount * bps`-style products cannot overflow.
///
/// `denom` must be positive; both callers in this crate pass constants or
/// `10_000 + bps`, which is always positive.
pub(crate) const fn div_rounded(numer: i128, denom: i128) -> i64 {
    let half = denom / 2;
    if numer >= 0 {
        ((numer + half) / denom) as i64
    } else {
        ((numer - half) / denom) as i64
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (the smallest INR unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and credit notes
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type:
/// product prices, line totals, the taxable/CGST/SGST/IGST fields of a
/// bill, and the grand total the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bahi_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // Represents ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    ///
    /// ## Why Paise?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The database, calculations, and API all use paise.
    /// Only the UI converts to rupees for display.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// ## Example
    /// ```rust
    /// use bahi_core::money::Money;
    ///
    /// let price = Money::from_rupees_paise(10, 99); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    ///
    /// let refund = Money::from_rupees_paise(-5, 50); // -₹5.50
    /// assert_eq!(refund.paise(), -550);
    /// ```
    ///
    /// For negative amounts only the rupee part carries the sign:
    /// `from_rupees_paise(-5, 50)` is -₹5.50, not -₹4.50.
    #[inline]
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paise)
        } else {
            Money(rupees * 100 + paise)
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax on a pre-tax amount (GST-exclusive pricing).
    ///
    /// `amount * rate`, rounded half away from zero to whole paise.
    ///
    /// ## Example
    /// ```rust
    /// use bahi_core::money::Money;
    /// use bahi_core::types::TaxRate;
    ///
    /// let taxable = Money::from_paise(10_000); // ₹100.00
    /// let rate = TaxRate::from_bps(1800);      // 18%
    ///
    /// assert_eq!(taxable.calculate_tax(rate).paise(), 1800); // ₹18.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Invoice line: ₹100.00 (price excl. GST)
    ///      │
    ///      ▼
    /// calculate_tax(18%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// GST: ₹18.00 → line total ₹118.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // rate.bps() is basis points: 1800 = 18%
        // Formula: amount_paise * bps / 10000, rounded
        Money::from_paise(div_rounded(self.0 as i128 * rate.bps() as i128, 10_000))
    }

    /// Backs the pre-tax amount out of a GST-inclusive total.
    ///
    /// `amount / (1 + rate)`, rounded half away from zero to whole paise.
    /// The inverse of [`Money::calculate_tax`] up to rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bahi_core::money::Money;
    /// use bahi_core::types::TaxRate;
    ///
    /// let line_total = Money::from_paise(11_800); // ₹118.00 incl. 18% GST
    /// let rate = TaxRate::from_bps(1800);
    ///
    /// assert_eq!(line_total.pre_tax_amount(rate).paise(), 10_000); // ₹100.00
    /// ```
    pub fn pre_tax_amount(&self, rate: TaxRate) -> Money {
        // amount * 10000 / (10000 + bps), rounded
        let denom = 10_000 + rate.bps() as i128;
        Money::from_paise(div_rounded(self.0 as i128 * 10_000, denom))
    }

    /// Half of the amount, rounded half away from zero.
    ///
    /// Used to split a GST amount into its CGST and SGST components. Each
    /// half is rounded independently, so an odd number of paise produces
    /// halves that together exceed the whole by one paisa:
    ///
    /// ```rust
    /// use bahi_core::money::Money;
    ///
    /// let tax = Money::from_paise(9);
    /// assert_eq!(tax.half().paise(), 5); // 4.5 rounds to 5
    /// assert_eq!(tax.half() + tax.half(), Money::from_paise(10));
    /// ```
    ///
    /// That one-paisa drift is the documented invoice behavior; callers
    /// must not re-add a remainder to "fix" it.
    pub fn half(&self) -> Money {
        Money::from_paise(div_rounded(self.0 as i128, 2))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bahi_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(299); // ₹2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.paise(), 897); // ₹8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle the Indian digit-grouping style (₹1,00,000) properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (for bill aggregation).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
