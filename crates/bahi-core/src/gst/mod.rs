//! # GST Engine
//!
//! The bill-calculation engine: the one piece of statutory math in
//! Bahi Books. Everything here is a pure function of its arguments.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GST Calculation Pipeline                           │
//! │                                                                         │
//! │  org state ──┐                                                          │
//! │              ├──► resolve_place_of_supply ──► Intrastate | Interstate  │
//! │  party state ┘                    │                                     │
//! │                                   ▼                                     │
//! │  line items ───────► calculate_line_tax (per item)                     │
//! │  (amount, rate,      ├── exempt? full amount taxable, zero tax         │
//! │   HSN code)          ├── inclusive? back-calculate taxable             │
//! │                      ├── exclusive? tax on top                         │
//! │                      └── split: CGST+SGST (intra) or IGST (inter)      │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                      calculate_bill                                     │
//! │                      ├── breakdown: one entry per GST rate             │
//! │                      └── subtotal / tax / grand total                  │
//! │                                                                         │
//! │  NO I/O • NO STATE • cheap enough to re-run on every keystroke         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! For every [`BillCalculationResult`]:
//! - `grand_total == subtotal + tax_total`
//! - `tax_total == cgst_total + sgst_total + igst_total`
//! - Intrastate bills have `igst_total == 0`
//! - Interstate bills have `cgst_total == sgst_total == 0`
//!
//! These hold bit-exact because all arithmetic is integer paise.

pub mod bill;
pub mod line_tax;
pub mod place_of_supply;

pub use bill::{calculate_bill, BillCalculationResult, TaxBreakdownEntry};
pub use line_tax::{calculate_line_tax, GstLineItem, LineTax};
pub use place_of_supply::{resolve_place_of_supply, PlaceOfSupply};
