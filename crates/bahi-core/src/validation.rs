//! # Validation Module
//!
//! Input validation utilities for Bahi Books.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser frontend                                             │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command layer (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted database                                              │
//! │  ├── NOT NULL / UNIQUE / foreign key constraints                       │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The GST engine in [`crate::gst`] deliberately does NOT call these: it is
//! total and never rejects input. Sanitizing amounts, rates, and
//! registration numbers before the engine runs is the caller's job, and
//! these are the functions it does it with.
//!
//! ## Usage
//! ```rust,no_run
//! use bahi_core::validation::{validate_gstin, validate_hsn_sac};
//!
//! validate_gstin("29ABCDE1234F1Z5").unwrap();
//! validate_hsn_sac("7323").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_GST_RATE_BPS, MAX_INVOICE_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Registration & Classification Validators
// =============================================================================

/// Validates a GSTIN (GST Identification Number) structurally.
///
/// ## Format
/// 15 characters: 2-digit state code, 10-character PAN (5 letters,
/// 4 digits, 1 letter), entity code, literal `Z`, check character.
///
/// This is a structural check only: the mod-36 check digit is not
/// recomputed, and the state code is not matched against a state list.
///
/// ## Example
/// ```rust
/// use bahi_core::validation::validate_gstin;
///
/// assert!(validate_gstin("29ABCDE1234F1Z5").is_ok());
/// assert!(validate_gstin("29abcde1234f1z5").is_err()); // lowercase
/// assert!(validate_gstin("29ABCDE1234F15").is_err());  // 14 chars
/// ```
pub fn validate_gstin(gstin: &str) -> ValidationResult<()> {
    let gstin = gstin.trim();

    if gstin.is_empty() {
        return Err(ValidationError::Required {
            field: "gstin".to_string(),
        });
    }

    let bytes = gstin.as_bytes();
    if bytes.len() != 15 {
        return Err(ValidationError::InvalidFormat {
            field: "gstin".to_string(),
            reason: "must be exactly 15 characters".to_string(),
        });
    }

    let structure_ok = bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2..7].iter().all(|b| b.is_ascii_uppercase())
        && bytes[7..11].iter().all(|b| b.is_ascii_digit())
        && bytes[11].is_ascii_uppercase()
        && (bytes[12].is_ascii_digit() || bytes[12].is_ascii_uppercase())
        && bytes[13] == b'Z'
        && (bytes[14].is_ascii_digit() || bytes[14].is_ascii_uppercase());

    if !structure_ok {
        return Err(ValidationError::InvalidFormat {
            field: "gstin".to_string(),
            reason: "must match the 15-character GSTIN layout (state code + PAN + entity + Z + check)"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates an HSN (goods) or SAC (services) classification code.
///
/// ## Rules
/// - 4, 6, or 8 digits (the chapter/heading/sub-heading granularities)
/// - Digits only
///
/// ## Example
/// ```rust
/// use bahi_core::validation::validate_hsn_sac;
///
/// assert!(validate_hsn_sac("7323").is_ok());
/// assert!(validate_hsn_sac("73231000").is_ok());
/// assert!(validate_hsn_sac("73").is_err());
/// assert!(validate_hsn_sac("73AB").is_err());
/// ```
pub fn validate_hsn_sac(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "hsn_sac_code".to_string(),
        });
    }

    if !matches!(code.len(), 4 | 6 | 8) || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "hsn_sac_code".to_string(),
            reason: "must be 4, 6, or 8 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a GST state code: exactly two digits.
///
/// Free-text state names are legal jurisdiction values elsewhere in the
/// system; this validator is for the field that specifically wants a code
/// (the first two characters of a GSTIN, the org settings dropdown).
pub fn validate_state_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "state_code".to_string(),
        });
    }

    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "state_code".to_string(),
            reason: "must be exactly two digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a GST rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 2800 (0% to 28%, the statutory band)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_GST_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_GST_RATE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of line items on a document.
///
/// ## Rules
/// - Must not exceed MAX_INVOICE_ITEMS (100)
pub fn validate_invoice_item_count(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_INVOICE_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "invoice items".to_string(),
            min: 0,
            max: MAX_INVOICE_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use bahi_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
