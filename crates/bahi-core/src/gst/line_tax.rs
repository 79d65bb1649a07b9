//! # Line Item Tax Calculation
//!
//! Computes the taxable value and CGST/SGST/IGST split for a single line
//! item, given the bill's place of supply and tax mode.
//!
//! ## The Two Pricing Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EXCLUSIVE (price before tax)        INCLUSIVE (price contains tax)     │
//! │                                                                         │
//! │  line total   ₹100.00                line total   ₹118.00              │
//! │  taxable      ₹100.00 (unchanged)    taxable      ₹100.00 (backed out) │
//! │  GST @18%     ₹ 18.00 (added)        GST @18%     ₹ 18.00 (difference) │
//! │  payable      ₹118.00                payable      ₹118.00              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::gst::PlaceOfSupply;
use crate::money::Money;
use crate::types::{TaxMode, TaxRate};

// =============================================================================
// Input
// =============================================================================

/// One line of a bill, as the GST engine sees it.
///
/// Whether `line_total` contains tax is decided by the [`TaxMode`] passed
/// to the calculation, not stored per item. A single bill is entered in
/// one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstLineItem {
    /// The line's monetary amount (quantity already multiplied in).
    pub line_total: Money,

    /// Statutory GST rate. `None` means tax-exempt, same as a zero rate.
    pub tax_rate: Option<TaxRate>,

    /// HSN/SAC classification code, carried through for display only.
    pub hsn_sac_code: Option<String>,
}

impl GstLineItem {
    /// Creates a line item without a classification code.
    pub fn new(line_total: Money, tax_rate: Option<TaxRate>) -> Self {
        GstLineItem {
            line_total,
            tax_rate,
            hsn_sac_code: None,
        }
    }

    /// The rate used in arithmetic: the item's rate, or zero when absent.
    #[inline]
    pub fn effective_rate(&self) -> TaxRate {
        self.tax_rate.unwrap_or_default()
    }
}

// =============================================================================
// Output
// =============================================================================

/// The computed tax fields for one line item, all in whole paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineTax {
    /// Pre-tax value of the line.
    pub taxable_amount: Money,
    /// Total GST on the line.
    pub tax_amount: Money,
    pub cgst_amount: Money,
    pub sgst_amount: Money,
    pub igst_amount: Money,
}

impl LineTax {
    /// Result for an exempt line: the full amount is taxable value, every
    /// tax component is zero.
    pub fn exempt(line_total: Money) -> Self {
        LineTax {
            taxable_amount: line_total,
            tax_amount: Money::zero(),
            cgst_amount: Money::zero(),
            sgst_amount: Money::zero(),
            igst_amount: Money::zero(),
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes the tax split for one line item.
///
/// Pure arithmetic with no error conditions: exempt lines short-circuit,
/// inclusive lines back-calculate the taxable value, exclusive lines add
/// tax on top, and the tax is then routed to CGST+SGST (intrastate) or
/// IGST (interstate).
///
/// Intrastate halves are rounded independently; an odd-paise tax amount
/// therefore yields halves that sum one paisa above `tax_amount`. That is
/// the accepted invoice behavior, not corrected here.
///
/// Amounts are signed and flow through unchanged: negative line totals
/// (credit notes, bad input) produce negative tax fields. Upstream callers
/// sanitize; see [`crate::validation`].
///
/// ## Example
/// ```rust
/// use bahi_core::gst::{calculate_line_tax, GstLineItem, PlaceOfSupply};
/// use bahi_core::money::Money;
/// use bahi_core::types::{TaxMode, TaxRate};
///
/// let item = GstLineItem::new(Money::from_paise(11_800), Some(TaxRate::from_bps(1800)));
/// let tax = calculate_line_tax(&item, PlaceOfSupply::Intrastate, TaxMode::Inclusive);
///
/// assert_eq!(tax.taxable_amount, Money::from_paise(10_000));
/// assert_eq!(tax.cgst_amount, Money::from_paise(900));
/// assert_eq!(tax.sgst_amount, Money::from_paise(900));
/// assert!(tax.igst_amount.is_zero());
/// ```
pub fn calculate_line_tax(
    item: &GstLineItem,
    place_of_supply: PlaceOfSupply,
    tax_mode: TaxMode,
) -> LineTax {
    let rate = item.effective_rate();

    if rate.is_zero() {
        return LineTax::exempt(item.line_total);
    }

    let (taxable_amount, tax_amount) = match tax_mode {
        TaxMode::Inclusive => {
            let taxable = item.line_total.pre_tax_amount(rate);
            (taxable, item.line_total - taxable)
        }
        TaxMode::Exclusive => (item.line_total, item.line_total.calculate_tax(rate)),
    };

    let (cgst_amount, sgst_amount, igst_amount) = match place_of_supply {
        PlaceOfSupply::Intrastate => (tax_amount.half(), tax_amount.half(), Money::zero()),
        PlaceOfSupply::Interstate => (Money::zero(), Money::zero(), tax_amount),
    };

    LineTax {
        taxable_amount,
        tax_amount,
        cgst_amount,
        sgst_amount,
        igst_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(paise: i64, bps: u32) -> GstLineItem {
        GstLineItem::new(Money::from_paise(paise), Some(TaxRate::from_bps(bps)))
    }

    #[test]
    fn test_inclusive_intrastate() {
        // ₹118.00 incl. 18% → taxable ₹100.00, CGST ₹9.00, SGST ₹9.00
        let tax = calculate_line_tax(
            &item(11_800, 1800),
            PlaceOfSupply::Intrastate,
            TaxMode::Inclusive,
        );
        assert_eq!(tax.taxable_amount.paise(), 10_000);
        assert_eq!(tax.tax_amount.paise(), 1800);
        assert_eq!(tax.cgst_amount.paise(), 900);
        assert_eq!(tax.sgst_amount.paise(), 900);
        assert_eq!(tax.igst_amount.paise(), 0);
    }

    #[test]
    fn test_inclusive_interstate() {
        // Same line, different states → the whole ₹18.00 is IGST
        let tax = calculate_line_tax(
            &item(11_800, 1800),
            PlaceOfSupply::Interstate,
            TaxMode::Inclusive,
        );
        assert_eq!(tax.taxable_amount.paise(), 10_000);
        assert_eq!(tax.igst_amount.paise(), 1800);
        assert_eq!(tax.cgst_amount.paise(), 0);
        assert_eq!(tax.sgst_amount.paise(), 0);
    }

    #[test]
    fn test_exclusive_intrastate() {
        // ₹1000.00 excl. 12% → tax ₹120.00, CGST = SGST = ₹60.00
        let tax = calculate_line_tax(
            &item(100_000, 1200),
            PlaceOfSupply::Intrastate,
            TaxMode::Exclusive,
        );
        assert_eq!(tax.taxable_amount.paise(), 100_000);
        assert_eq!(tax.tax_amount.paise(), 12_000);
        assert_eq!(tax.cgst_amount.paise(), 6000);
        assert_eq!(tax.sgst_amount.paise(), 6000);
        assert_eq!(tax.igst_amount.paise(), 0);
    }

    #[test]
    fn test_zero_rate_is_exempt() {
        // ₹500.00 at 0% → fully taxable value, zero tax, either place
        for place in [PlaceOfSupply::Intrastate, PlaceOfSupply::Interstate] {
            for mode in [TaxMode::Inclusive, TaxMode::Exclusive] {
                let tax = calculate_line_tax(&item(50_000, 0), place, mode);
                assert_eq!(tax.taxable_amount.paise(), 50_000);
                assert!(tax.tax_amount.is_zero());
                assert!(tax.cgst_amount.is_zero());
                assert!(tax.sgst_amount.is_zero());
                assert!(tax.igst_amount.is_zero());
            }
        }
    }

    #[test]
    fn test_missing_rate_is_exempt() {
        let line = GstLineItem::new(Money::from_paise(50_000), None);
        let tax = calculate_line_tax(&line, PlaceOfSupply::Intrastate, TaxMode::Exclusive);
        assert_eq!(tax.taxable_amount.paise(), 50_000);
        assert!(tax.tax_amount.is_zero());
    }

    #[test]
    fn test_odd_paise_split_tolerance() {
        // ₹0.50 excl. 18% → 9 paise tax; halves round to 5 paise each.
        let tax = calculate_line_tax(&item(50, 1800), PlaceOfSupply::Intrastate, TaxMode::Exclusive);
        assert_eq!(tax.tax_amount.paise(), 9);
        assert_eq!(tax.cgst_amount.paise(), 5);
        assert_eq!(tax.sgst_amount.paise(), 5);
        // Components exceed the unsplit tax by exactly one paisa.
        assert_eq!(
            (tax.cgst_amount + tax.sgst_amount - tax.tax_amount).paise(),
            1
        );
    }

    #[test]
    fn test_inclusive_back_calculation_within_one_paisa() {
        // taxable * (1 + rate) lands within 1 paisa of the entered total
        for paise in [1, 117, 9_999, 11_800, 123_457] {
            for bps in [500, 1200, 1800, 2800] {
                let line = item(paise, bps);
                let tax = calculate_line_tax(&line, PlaceOfSupply::Interstate, TaxMode::Inclusive);
                let rebuilt = tax.taxable_amount + tax.taxable_amount.calculate_tax(line.effective_rate());
                assert!(
                    (rebuilt.paise() - paise).abs() <= 1,
                    "paise={paise} bps={bps} rebuilt={rebuilt}"
                );
                // And the two output fields always recompose the input exactly.
                assert_eq!((tax.taxable_amount + tax.tax_amount).paise(), paise);
            }
        }
    }

    #[test]
    fn test_negative_amount_flows_through() {
        // Credit note: -₹118.00 incl. 18% → negative taxable and tax
        let tax = calculate_line_tax(
            &item(-11_800, 1800),
            PlaceOfSupply::Interstate,
            TaxMode::Inclusive,
        );
        assert_eq!(tax.taxable_amount.paise(), -10_000);
        assert_eq!(tax.igst_amount.paise(), -1800);
    }

    #[test]
    fn test_hsn_code_does_not_affect_arithmetic() {
        let mut with_hsn = item(11_800, 1800);
        with_hsn.hsn_sac_code = Some("7323".to_string());
        let without_hsn = item(11_800, 1800);

        assert_eq!(
            calculate_line_tax(&with_hsn, PlaceOfSupply::Intrastate, TaxMode::Inclusive),
            calculate_line_tax(&without_hsn, PlaceOfSupply::Intrastate, TaxMode::Inclusive)
        );
    }
}
