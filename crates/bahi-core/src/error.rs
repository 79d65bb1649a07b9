//! # Error Types
//!
//! Domain-specific error types for bahi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bahi-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  The GST engine itself raises NEITHER: it is total, defined for every  │
//! │  representable input. These types exist for the command layer that     │
//! │  sits above this crate and sanitizes user input BEFORE the engine      │
//! │  runs.                                                                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → (caller's API error) → Frontend   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (GSTIN, invoice number, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Customer cannot be found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Vendor cannot be found.
    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    /// Insufficient stock to complete the sale.
    ///
    /// Raised when a product has `track_inventory = true`,
    /// `allow_negative_stock = false`, and the requested quantity exceeds
    /// what is on hand.
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),

    /// Invoice is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Adding items to an issued invoice
    /// - Voiding an already voided invoice
    /// - Marking a draft as paid
    #[error("Invoice {invoice_id} is {current_status:?}, cannot perform operation")]
    InvalidInvoiceStatus {
        invoice_id: String,
        current_status: String,
    },

    /// Invoice has exceeded maximum allowed line items.
    #[error("Invoice cannot have more than {max} items")]
    InvoiceTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed GSTIN, non-numeric HSN code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate invoice number).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product: "Steel Bottle 1L".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Steel Bottle 1L: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "gstin".to_string(),
        };
        assert_eq!(err.to_string(), "gstin is required");

        let err = ValidationError::InvalidFormat {
            field: "hsn_sac_code".to_string(),
            reason: "must be 4, 6, or 8 digits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "hsn_sac_code has invalid format: must be 4, 6, or 8 digits"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "state".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
