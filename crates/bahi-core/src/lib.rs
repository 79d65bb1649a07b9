//! # bahi-core: Pure Business Logic for Bahi Books
//!
//! This crate is the **heart** of Bahi Books, a multi-organization
//! inventory and invoicing application. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bahi Books Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React PWA)                         │   │
//! │  │   Product search ──► Invoice wizard ──► Bill preview ──► Print  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ recomputes on every keystroke          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bahi-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │    gst    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  resolver │  │   GSTIN   │  │   │
//! │  │   │  Invoice  │  │  TaxRate  │  │ line calc │  │  HSN/SAC  │  │   │
//! │  │   │  Customer │  │  rounding │  │ aggregator│  │   rates   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Hosted relational backend (separate collaborator)        │   │
//! │  │        persists BillCalculationResult fields verbatim           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Organization, Customer, Product, invoices)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`gst`] - Place of supply, line tax, and bill aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Total tax engine**: the GST functions are defined for every input and
//!    never panic or error; validation is a separate, caller-side concern
//!
//! ## Example Usage
//!
//! ```rust
//! use bahi_core::gst::{calculate_bill, PlaceOfSupply, GstLineItem};
//! use bahi_core::money::Money;
//! use bahi_core::types::{TaxMode, TaxRate};
//!
//! // ₹118.00 entered tax-inclusive at the 18% slab, both parties in
//! // Karnataka (state code 29):
//! let items = vec![GstLineItem::new(
//!     Money::from_paise(11_800),
//!     Some(TaxRate::from_bps(1800)),
//! )];
//! let bill = calculate_bill(&items, Some("29"), Some("29"), TaxMode::Inclusive);
//!
//! assert_eq!(bill.place_of_supply, PlaceOfSupply::Intrastate);
//! assert_eq!(bill.subtotal, Money::from_paise(10_000));
//! assert_eq!(bill.cgst_total, Money::from_paise(900));
//! assert_eq!(bill.sgst_total, Money::from_paise(900));
//! assert_eq!(bill.grand_total, Money::from_paise(11_800));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gst;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bahi_core::Money` instead of
// `use bahi_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use gst::{
    calculate_bill, calculate_line_tax, resolve_place_of_supply, BillCalculationResult,
    GstLineItem, LineTax, PlaceOfSupply, TaxBreakdownEntry,
};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single invoice or purchase bill.
///
/// ## Business Reason
/// Prevents runaway documents and keeps the per-keystroke recomputation
/// trivially cheap. Can be made configurable per-organization later.
pub const MAX_INVOICE_ITEMS: usize = 100;

/// Maximum quantity of a single item on a document.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Upper bound of the GST rate band, in basis points (28%).
pub const MAX_GST_RATE_BPS: u32 = 2800;

/// The standard GST rate slabs in basis points, for frontend dropdowns.
///
/// Display data only; the engine accepts any rate the caller passes.
pub const GST_RATE_SLABS: [u32; 5] = [0, 500, 1200, 1800, 2800];
