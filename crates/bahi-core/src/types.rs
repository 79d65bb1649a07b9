//! # Domain Types
//!
//! Core domain types used throughout Bahi Books.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Organization   │   │ Customer/Vendor │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  gstin          │   │  gstin          │   │  hsn_sac_code   │       │
//! │  │  state          │   │  state          │   │  price_paise    │       │
//! │  └─────────────────┘   └─────────────────┘   │  tax_rate_bps   │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  SalesInvoice   │   │  PurchaseBill   │   │    TaxRate      │       │
//! │  │  + InvoiceItem  │   │  + BillItem     │   │  bps (u32)      │       │
//! │  │  (snapshots)    │   │  (snapshots)    │   │  1800 = 18%     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business ID: (invoice_number, barcode, GSTIN, etc.) - human-readable
//!
//! The `state` field on [`Organization`], [`Customer`] and [`Vendor`] is the
//! jurisdiction string fed to the place-of-supply resolver: either a
//! two-digit GST state code ("29") or a state name ("Karnataka"). The two
//! representations are never reconciled against each other, so an
//! organization should store counterparty states in the same form it stores
//! its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::gst::{GstLineItem, PlaceOfSupply};
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// GST rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (the standard GST slab)
///
/// Storing the rate as an integer makes rate equality exact: 18 and 18.0
/// both become 1800 bps, so grouping a bill breakdown by rate can never
/// split one statutory rate into two buckets the way binary floating point
/// keys can. `Ord`/`Hash` are derived so the rate can key a map directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate (exempt / nil-rated supplies).
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Renders "18%" for whole-percent rates, "8.25%" otherwise.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

// =============================================================================
// Tax Mode
// =============================================================================

/// Whether line amounts already contain GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Line amounts include GST; the taxable value is back-calculated.
    /// Typical for purchase bills keyed in from a vendor's printed total.
    Inclusive,
    /// Line amounts exclude GST; tax is added on top.
    /// Typical for sales invoices priced pre-tax.
    Exclusive,
}

impl Default for TaxMode {
    fn default() -> Self {
        TaxMode::Exclusive
    }
}

// =============================================================================
// Organization
// =============================================================================

/// A business entity issuing invoices and recording purchase bills.
///
/// One user can operate several organizations; every document belongs to
/// exactly one of them. The organization's `state` is the "from" side of
/// every place-of-supply decision.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Organization {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Legal/trading name shown on invoices.
    pub name: String,

    /// GST registration number (15 characters), if registered.
    pub gstin: Option<String>,

    /// Jurisdiction string: two-digit state code or state name.
    pub state: Option<String>,

    /// Registered address printed on documents.
    pub address: Option<String>,

    /// Whether the organization is active (soft delete).
    pub is_active: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Customer & Vendor
// =============================================================================

/// A customer receiving sales invoices.
///
/// The customer's `state` is the "to" side of the place-of-supply decision
/// for outward supplies.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub phone: Option<String>,
    /// GST registration number, if the customer is registered (B2B).
    pub gstin: Option<String>,
    /// Jurisdiction string: two-digit state code or state name.
    pub state: Option<String>,
    pub billing_address: Option<String>,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// A vendor supplying goods recorded on purchase bills.
///
/// For inward supplies the vendor's `state` is compared against the
/// organization's state, same resolver, roles swapped.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vendor {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub gstin: Option<String>,
    /// Jurisdiction string: two-digit state code or state name.
    pub state: Option<String>,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale or purchase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Organization this product belongs to.
    pub organization_id: String,

    /// Display name shown on invoices and in search.
    pub name: String,

    /// Barcode (EAN-13, UPC-A, etc.), if the product carries one.
    pub barcode: Option<String>,

    /// HSN (goods) or SAC (services) classification code.
    /// Printed on invoices for compliance; never used in arithmetic.
    pub hsn_sac_code: Option<String>,

    /// Selling price in paise.
    pub price_paise: i64,

    /// Purchase cost in paise (for margin reporting).
    pub purchase_price_paise: Option<i64>,

    /// GST rate in basis points (1800 = 18%).
    pub tax_rate_bps: u32,

    /// Whether to track inventory for this product.
    pub track_inventory: bool,

    /// Allow selling when stock is zero or negative.
    pub allow_negative_stock: bool,

    /// Current stock level.
    pub current_stock: Option<i64>,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the selling price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }

    /// Returns the GST rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Checks if product can be sold (in stock or doesn't track inventory).
    pub fn can_sell(&self, quantity: i64) -> bool {
        if !self.track_inventory {
            return true;
        }

        let stock = self.current_stock.unwrap_or(0);
        if stock >= quantity {
            return true;
        }

        self.allow_negative_stock
    }

    /// Builds the GST engine input for `quantity` units of this product.
    pub fn gst_line(&self, quantity: i64) -> GstLineItem {
        GstLineItem {
            line_total: self.price().multiply_quantity(quantity),
            tax_rate: Some(self.tax_rate()),
            hsn_sac_code: self.hsn_sac_code.clone(),
        }
    }
}

// =============================================================================
// Invoice Status
// =============================================================================

/// The status of a sales invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Invoice is being edited; totals recompute on every change.
    Draft,
    /// Invoice has been issued to the customer.
    Issued,
    /// Payment has been received in full.
    Paid,
    /// Invoice was cancelled.
    Voided,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Draft
    }
}

// =============================================================================
// Sales Invoice
// =============================================================================

/// A sales invoice issued to a customer.
///
/// The monetary fields are the persisted copy of a
/// [`BillCalculationResult`](crate::gst::BillCalculationResult): the
/// command layer runs the GST engine and stores its output here verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesInvoice {
    pub id: String,
    pub organization_id: String,
    pub customer_id: String,
    /// Human-facing sequential number ("INV-2026-0042").
    pub invoice_number: String,
    pub status: InvoiceStatus,
    /// Whether line amounts were entered GST-inclusive.
    pub tax_mode: TaxMode,
    /// Intrastate or Interstate, resolved when the invoice was computed.
    pub place_of_supply: PlaceOfSupply,
    pub subtotal_paise: i64,
    pub cgst_paise: i64,
    pub sgst_paise: i64,
    pub igst_paise: i64,
    pub tax_paise: i64,
    pub total_paise: i64,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub issued_at: Option<DateTime<Utc>>,
}

impl SalesInvoice {
    /// Returns the pre-tax subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

/// A line item on a sales invoice.
/// Uses snapshot pattern to freeze product data at time of invoicing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceItem {
    pub id: String,
    pub invoice_id: String,
    pub product_id: String,
    /// Product name at time of invoicing (frozen).
    pub name_snapshot: String,
    /// HSN/SAC code at time of invoicing (frozen).
    pub hsn_sac_snapshot: Option<String>,
    /// Unit price in paise at time of invoicing (frozen).
    pub unit_price_paise: i64,
    /// Quantity sold.
    pub quantity: i64,
    /// Line amount (unit price × quantity), in the invoice's tax mode.
    pub line_total_paise: i64,
    /// GST rate in basis points at time of invoicing (frozen).
    pub tax_rate_bps: u32,
    /// Computed taxable value for this line.
    pub taxable_paise: i64,
    pub cgst_paise: i64,
    pub sgst_paise: i64,
    pub igst_paise: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl InvoiceItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_paise(self.line_total_paise)
    }
}

// =============================================================================
// Purchase Bill
// =============================================================================

/// A purchase bill recorded against a vendor (inward supply).
///
/// Mirror of [`SalesInvoice`] with the organization on the receiving side.
/// Vendors print GST-inclusive totals more often than not, so bills default
/// to [`TaxMode::Inclusive`] at the command layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseBill {
    pub id: String,
    pub organization_id: String,
    pub vendor_id: String,
    /// The vendor's own bill/invoice number, as printed.
    pub bill_number: String,
    pub tax_mode: TaxMode,
    pub place_of_supply: PlaceOfSupply,
    pub subtotal_paise: i64,
    pub cgst_paise: i64,
    pub sgst_paise: i64,
    pub igst_paise: i64,
    pub tax_paise: i64,
    pub total_paise: i64,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl PurchaseBill {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

/// A line item on a purchase bill (snapshot pattern, as on invoices).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseBillItem {
    pub id: String,
    pub bill_id: String,
    pub product_id: String,
    pub name_snapshot: String,
    pub hsn_sac_snapshot: Option<String>,
    pub unit_price_paise: i64,
    pub quantity: i64,
    pub line_total_paise: i64,
    pub tax_rate_bps: u32,
    pub taxable_paise: i64,
    pub cgst_paise: i64,
    pub sgst_paise: i64,
    pub igst_paise: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            organization_id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            name: "Steel Bottle 1L".to_string(),
            barcode: Some("8901234567890".to_string()),
            hsn_sac_code: Some("7323".to_string()),
            price_paise: 29_900,
            purchase_price_paise: Some(21_000),
            tax_rate_bps: 1800,
            track_inventory: true,
            allow_negative_stock: false,
            current_stock: Some(5),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(18.0).bps(), 1800);
        assert_eq!(TaxRate::from_percentage(0.25).bps(), 25);
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1800).to_string(), "18%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::zero().to_string(), "0%");
    }

    #[test]
    fn test_tax_rate_exact_equality_for_grouping() {
        // 18 and 18.0 land on the same key
        assert_eq!(TaxRate::from_percentage(18.0), TaxRate::from_bps(1800));
    }

    #[test]
    fn test_tax_mode_default() {
        assert_eq!(TaxMode::default(), TaxMode::Exclusive);
    }

    #[test]
    fn test_invoice_status_default() {
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Draft);
    }

    #[test]
    fn test_product_can_sell() {
        let mut product = sample_product();
        assert!(product.can_sell(5));
        assert!(!product.can_sell(6));

        product.allow_negative_stock = true;
        assert!(product.can_sell(6));

        product.allow_negative_stock = false;
        product.track_inventory = false;
        assert!(product.can_sell(1000));
    }

    #[test]
    fn test_product_gst_line() {
        let product = sample_product();
        let line = product.gst_line(2);
        assert_eq!(line.line_total.paise(), 59_800);
        assert_eq!(line.tax_rate, Some(TaxRate::from_bps(1800)));
        assert_eq!(line.hsn_sac_code.as_deref(), Some("7323"));
    }
}
