//! # Bill Aggregation
//!
//! Runs the line-item calculator over a whole bill, groups the results
//! into a per-rate breakdown table, and sums the totals an invoice
//! displays and a collaborator persists.
//!
//! The caller re-runs this on every edit of a draft bill; it is a pure
//! function over a handful of integers, cheap enough that no memoization
//! is needed or offered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::gst::line_tax::{calculate_line_tax, GstLineItem};
use crate::gst::place_of_supply::{resolve_place_of_supply, PlaceOfSupply};
use crate::money::Money;
use crate::types::{TaxMode, TaxRate};

// =============================================================================
// Breakdown Entry
// =============================================================================

/// Aggregated contributions of every line item sharing one GST rate.
///
/// Invoices print this as the rate-wise tax table ("18%: taxable ₹300.00,
/// CGST ₹27.00, SGST ₹27.00"). Because the intrastate halves round
/// independently per line, `cgst_amount + sgst_amount` may exceed
/// `tax_amount` by one paisa per odd-tax line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxBreakdownEntry {
    /// The nominal rate this bucket aggregates.
    pub tax_rate: TaxRate,
    pub taxable_amount: Money,
    pub cgst_amount: Money,
    pub sgst_amount: Money,
    pub igst_amount: Money,
    /// Total GST at this rate (sum of per-line tax amounts).
    pub tax_amount: Money,
}

impl TaxBreakdownEntry {
    fn empty(tax_rate: TaxRate) -> Self {
        TaxBreakdownEntry {
            tax_rate,
            taxable_amount: Money::zero(),
            cgst_amount: Money::zero(),
            sgst_amount: Money::zero(),
            igst_amount: Money::zero(),
            tax_amount: Money::zero(),
        }
    }
}

// =============================================================================
// Bill Result
// =============================================================================

/// The complete output of a bill calculation.
///
/// Entirely recomputed on each invocation; rendered by the invoice UI and
/// persisted verbatim by the storage collaborator. Identities that hold
/// for every result:
///
/// - `grand_total == subtotal + tax_total`
/// - `tax_total == cgst_total + sgst_total + igst_total`
/// - Intrastate ⇒ `igst_total` is zero
/// - Interstate ⇒ `cgst_total` and `sgst_total` are zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillCalculationResult {
    /// How the bill was classified, kept for display and audit.
    pub place_of_supply: PlaceOfSupply,
    /// Sum of taxable values across all lines.
    pub subtotal: Money,
    pub cgst_total: Money,
    pub sgst_total: Money,
    pub igst_total: Money,
    /// `cgst_total + sgst_total + igst_total`.
    pub tax_total: Money,
    /// `subtotal + tax_total`, what the customer pays.
    pub grand_total: Money,
    /// Rate-wise tax table, keyed by nominal rate. Lines without a rate
    /// aggregate under the zero rate.
    pub breakdown: BTreeMap<TaxRate, TaxBreakdownEntry>,
}

// =============================================================================
// Aggregator
// =============================================================================

/// Calculates a complete bill.
///
/// Resolves the Place of Supply once (a bill has a single classification,
/// applied uniformly to every line), runs the line calculator per item,
/// groups contributions by nominal rate, and sums the totals.
///
/// An empty item slice yields all-zero sums with whatever Place of Supply
/// the jurisdictions resolve to. Item order never affects the result;
/// only membership and per-item fields do.
///
/// ## Example
/// ```rust
/// use bahi_core::gst::{calculate_bill, GstLineItem, PlaceOfSupply};
/// use bahi_core::money::Money;
/// use bahi_core::types::{TaxMode, TaxRate};
///
/// let items = vec![
///     GstLineItem::new(Money::from_paise(10_000), Some(TaxRate::from_bps(1800))),
///     GstLineItem::new(Money::from_paise(20_000), Some(TaxRate::from_bps(1800))),
/// ];
/// let bill = calculate_bill(&items, Some("29"), Some("07"), TaxMode::Exclusive);
///
/// assert_eq!(bill.place_of_supply, PlaceOfSupply::Interstate);
/// assert_eq!(bill.subtotal, Money::from_paise(30_000));
/// assert_eq!(bill.igst_total, Money::from_paise(5400));
/// assert_eq!(bill.grand_total, Money::from_paise(35_400));
/// assert_eq!(bill.breakdown.len(), 1);
/// ```
pub fn calculate_bill(
    items: &[GstLineItem],
    org_state: Option<&str>,
    counterparty_state: Option<&str>,
    tax_mode: TaxMode,
) -> BillCalculationResult {
    let place_of_supply = resolve_place_of_supply(org_state, counterparty_state);

    let mut breakdown: BTreeMap<TaxRate, TaxBreakdownEntry> = BTreeMap::new();
    let mut subtotal = Money::zero();
    let mut cgst_total = Money::zero();
    let mut sgst_total = Money::zero();
    let mut igst_total = Money::zero();

    for item in items {
        let line = calculate_line_tax(item, place_of_supply, tax_mode);

        let entry = breakdown
            .entry(item.effective_rate())
            .or_insert_with(|| TaxBreakdownEntry::empty(item.effective_rate()));
        entry.taxable_amount += line.taxable_amount;
        entry.cgst_amount += line.cgst_amount;
        entry.sgst_amount += line.sgst_amount;
        entry.igst_amount += line.igst_amount;
        entry.tax_amount += line.tax_amount;

        subtotal += line.taxable_amount;
        cgst_total += line.cgst_amount;
        sgst_total += line.sgst_amount;
        igst_total += line.igst_amount;
    }

    let tax_total = cgst_total + sgst_total + igst_total;
    let grand_total = subtotal + tax_total;

    BillCalculationResult {
        place_of_supply,
        subtotal,
        cgst_total,
        sgst_total,
        igst_total,
        tax_total,
        grand_total,
        breakdown,
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

    fn assert_identities(bill: &BillCalculationResult) {
        assert_eq!(bill.grand_total, bill.subtotal + bill.tax_total);
        assert_eq!(
            bill.tax_total,
            bill.cgst_total + bill.sgst_total + bill.igst_total
        );
        match bill.place_of_supply {
            PlaceOfSupply::Intrastate => assert!(bill.igst_total.is_zero()),
            PlaceOfSupply::Interstate => {
                assert!(bill.cgst_total.is_zero());
                assert!(bill.sgst_total.is_zero());
            }
        }
    }

    #[test]
    fn test_intrastate_inclusive_single_item() {
        // "29"/"29", ₹118.00 incl. 18%
        let bill = calculate_bill(
            &[item(11_800, 1800)],
            Some("29"),
            Some("29"),
            TaxMode::Inclusive,
        );
        assert_eq!(bill.place_of_supply, PlaceOfSupply::Intrastate);
        assert_eq!(bill.subtotal.paise(), 10_000);
        assert_eq!(bill.tax_total.paise(), 1800);
        assert_eq!(bill.cgst_total.paise(), 900);
        assert_eq!(bill.sgst_total.paise(), 900);
        assert_eq!(bill.igst_total.paise(), 0);
        assert_eq!(bill.grand_total.paise(), 11_800);
        assert_identities(&bill);
    }

    #[test]
    fn test_interstate_inclusive_single_item() {
        // "29"/"07", same item → all tax is IGST
        let bill = calculate_bill(
            &[item(11_800, 1800)],
            Some("29"),
            Some("07"),
            TaxMode::Inclusive,
        );
        assert_eq!(bill.place_of_supply, PlaceOfSupply::Interstate);
        assert_eq!(bill.subtotal.paise(), 10_000);
        assert_eq!(bill.igst_total.paise(), 1800);
        assert_eq!(bill.cgst_total.paise(), 0);
        assert_eq!(bill.sgst_total.paise(), 0);
        assert_identities(&bill);
    }

    #[test]
    fn test_missing_counterparty_state_is_interstate() {
        let bill = calculate_bill(&[item(11_800, 1800)], Some("29"), None, TaxMode::Inclusive);
        assert_eq!(bill.place_of_supply, PlaceOfSupply::Interstate);
        assert_identities(&bill);
    }

    #[test]
    fn test_same_rate_items_share_one_breakdown_entry() {
        // ₹100 + ₹200 excl. 18%, interstate → one 18% bucket
        let bill = calculate_bill(
            &[item(10_000, 1800), item(20_000, 1800)],
            Some("29"),
            Some("07"),
            TaxMode::Exclusive,
        );
        assert_eq!(bill.breakdown.len(), 1);

        let entry = &bill.breakdown[&TaxRate::from_bps(1800)];
        assert_eq!(entry.taxable_amount.paise(), 30_000);
        assert_eq!(entry.igst_amount.paise(), 5400);
        assert_eq!(entry.tax_amount.paise(), 5400);
        assert_eq!(bill.grand_total.paise(), 35_400);
        assert_identities(&bill);
    }

    #[test]
    fn test_mixed_rates_get_separate_entries() {
        let bill = calculate_bill(
            &[item(10_000, 500), item(10_000, 1800), item(5000, 1800)],
            Some("29"),
            Some("29"),
            TaxMode::Exclusive,
        );
        assert_eq!(bill.breakdown.len(), 2);
        assert_eq!(
            bill.breakdown[&TaxRate::from_bps(500)].taxable_amount.paise(),
            10_000
        );
        assert_eq!(
            bill.breakdown[&TaxRate::from_bps(1800)].taxable_amount.paise(),
            15_000
        );
        assert_identities(&bill);
    }

    #[test]
    fn test_exempt_and_missing_rate_share_zero_bucket() {
        let mut no_rate = GstLineItem::new(Money::from_paise(10_000), None);
        no_rate.hsn_sac_code = Some("0401".to_string());
        let bill = calculate_bill(
            &[no_rate, item(5000, 0)],
            Some("29"),
            Some("29"),
            TaxMode::Exclusive,
        );
        assert_eq!(bill.breakdown.len(), 1);

        let entry = &bill.breakdown[&TaxRate::zero()];
        assert_eq!(entry.taxable_amount.paise(), 15_000);
        assert!(entry.tax_amount.is_zero());
        assert_eq!(bill.subtotal.paise(), 15_000);
        assert_eq!(bill.grand_total.paise(), 15_000);
        assert_identities(&bill);
    }

    #[test]
    fn test_exclusive_intrastate_grand_total() {
        // ₹1000.00 excl. 12%, intrastate → ₹1120.00 payable
        let bill = calculate_bill(
            &[item(100_000, 1200)],
            Some("Maharashtra"),
            Some("maharashtra"),
            TaxMode::Exclusive,
        );
        assert_eq!(bill.place_of_supply, PlaceOfSupply::Intrastate);
        assert_eq!(bill.subtotal.paise(), 100_000);
        assert_eq!(bill.tax_total.paise(), 12_000);
        assert_eq!(bill.cgst_total.paise(), 6000);
        assert_eq!(bill.sgst_total.paise(), 6000);
        assert_eq!(bill.grand_total.paise(), 112_000);
        assert_identities(&bill);
    }

    #[test]
    fn test_empty_bill() {
        let bill = calculate_bill(&[], Some("29"), Some("29"), TaxMode::Exclusive);
        assert_eq!(bill.place_of_supply, PlaceOfSupply::Intrastate);
        assert!(bill.subtotal.is_zero());
        assert!(bill.tax_total.is_zero());
        assert!(bill.grand_total.is_zero());
        assert!(bill.breakdown.is_empty());
        assert_identities(&bill);
    }

    #[test]
    fn test_item_order_is_irrelevant() {
        let forward = [item(10_000, 500), item(20_000, 1800), item(50, 1800)];
        let reversed = [item(50, 1800), item(20_000, 1800), item(10_000, 500)];

        let a = calculate_bill(&forward, Some("29"), Some("29"), TaxMode::Inclusive);
        let b = calculate_bill(&reversed, Some("29"), Some("29"), TaxMode::Inclusive);
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotence() {
        let items = [item(11_800, 1800), item(50, 1800), item(9999, 500)];
        let a = calculate_bill(&items, Some("29"), Some("07"), TaxMode::Inclusive);
        let b = calculate_bill(&items, Some("29"), Some("07"), TaxMode::Inclusive);
        assert_eq!(a, b);
    }

    #[test]
    fn test_result_serializes_for_the_frontend() {
        // The breakdown map keys by basis points, which serde_json renders
        // as string keys; the UI indexes the rate table with them.
        let bill = calculate_bill(
            &[item(11_800, 1800)],
            Some("29"),
            Some("29"),
            TaxMode::Inclusive,
        );
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["place_of_supply"], "intrastate");
        assert_eq!(json["subtotal"], 10_000);
        assert_eq!(json["breakdown"]["1800"]["cgst_amount"], 900);

        let back: BillCalculationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, bill);
    }

    #[test]
    fn test_identities_over_input_table() {
        // The §-identities must survive odd-paise splits and mixed rates in
        // both modes and both classifications.
        let tables: Vec<Vec<GstLineItem>> = vec![
            vec![item(50, 1800)],                          // odd-paise tax
            vec![item(1, 2800), item(3, 500)],             // tiny amounts
            vec![item(11_800, 1800), item(-11_800, 1800)], // credit note offsets
            vec![item(99_999, 1200), item(55, 500), item(10_000, 0)],
        ];

        for items in &tables {
            for (org, party) in [(Some("29"), Some("29")), (Some("29"), Some("07"))] {
                for mode in [TaxMode::Inclusive, TaxMode::Exclusive] {
                    let bill = calculate_bill(items, org, party, mode);
                    assert_identities(&bill);

                    // Breakdown entries sum back to the totals.
                    let taxable: Money =
                        bill.breakdown.values().map(|e| e.taxable_amount).sum();
                    let cgst: Money = bill.breakdown.values().map(|e| e.cgst_amount).sum();
                    let sgst: Money = bill.breakdown.values().map(|e| e.sgst_amount).sum();
                    let igst: Money = bill.breakdown.values().map(|e| e.igst_amount).sum();
                    assert_eq!(taxable, bill.subtotal);
                    assert_eq!(cgst, bill.cgst_total);
                    assert_eq!(sgst, bill.sgst_total);
                    assert_eq!(igst, bill.igst_total);
                }
            }
        }
    }
}
