//! # Place of Supply
//!
//! Classifies a transaction as intrastate (CGST + SGST) or interstate
//! (IGST) from the two jurisdiction strings on the organization and the
//! counterparty.
//!
//! A jurisdiction string is either a two-digit GST state code ("29") or a
//! free-text state name ("Karnataka"). Codes compare verbatim; names
//! compare case-insensitively after trimming. A code and a name are never
//! equal, even when they denote the same state, so callers must store both
//! sides in the same representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Place of Supply
// =============================================================================

/// The jurisdictional classification of a bill.
///
/// Determines which GST components apply:
/// - `Intrastate` → CGST + SGST (half the rate each)
/// - `Interstate` → IGST (the full rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PlaceOfSupply {
    /// Organization and counterparty are in the same state.
    Intrastate,
    /// Different states, or either state is unknown.
    Interstate,
}

impl fmt::Display for PlaceOfSupply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceOfSupply::Intrastate => write!(f, "Intra-State"),
            PlaceOfSupply::Interstate => write!(f, "Inter-State"),
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves the Place of Supply for a bill from two jurisdiction strings.
///
/// Missing or blank jurisdiction on either side resolves to `Interstate`:
/// guessing same-state would under-collect CGST/SGST, so unknown data is
/// taxed through the single IGST bucket instead.
///
/// Total function: every input, including empty strings and mixed
/// code/name pairs, resolves to one of the two variants.
///
/// ## Example
/// ```rust
/// use bahi_core::gst::{resolve_place_of_supply, PlaceOfSupply};
///
/// assert_eq!(
///     resolve_place_of_supply(Some("29"), Some("29")),
///     PlaceOfSupply::Intrastate
/// );
/// assert_eq!(
///     resolve_place_of_supply(Some("29"), Some("07")),
///     PlaceOfSupply::Interstate
/// );
/// assert_eq!(
///     resolve_place_of_supply(Some("29"), None),
///     PlaceOfSupply::Interstate
/// );
/// ```
pub fn resolve_place_of_supply(
    org_state: Option<&str>,
    counterparty_state: Option<&str>,
) -> PlaceOfSupply {
    let org = org_state.and_then(normalize_state);
    let party = counterparty_state.and_then(normalize_state);

    match (org, party) {
        (Some(org), Some(party)) if org == party => PlaceOfSupply::Intrastate,
        _ => PlaceOfSupply::Interstate,
    }
}

/// Normalizes a jurisdiction string for comparison.
///
/// Exactly two ASCII digits after trimming is a state code and is kept
/// verbatim; anything else is treated as a state name and lowercased.
/// Blank input normalizes to `None`.
fn normalize_state(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.len() == 2 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Some(trimmed.to_string())
    } else {
        Some(trimmed.to_lowercase())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_state_codes() {
        assert_eq!(
            resolve_place_of_supply(Some("29"), Some("29")),
            PlaceOfSupply::Intrastate
        );
    }

    #[test]
    fn test_different_state_codes() {
        assert_eq!(
            resolve_place_of_supply(Some("29"), Some("07")),
            PlaceOfSupply::Interstate
        );
    }

    #[test]
    fn test_state_names_case_insensitive() {
        assert_eq!(
            resolve_place_of_supply(Some("Karnataka"), Some("KARNATAKA")),
            PlaceOfSupply::Intrastate
        );
        assert_eq!(
            resolve_place_of_supply(Some("  karnataka  "), Some("Karnataka")),
            PlaceOfSupply::Intrastate
        );
        assert_eq!(
            resolve_place_of_supply(Some("Karnataka"), Some("Delhi")),
            PlaceOfSupply::Interstate
        );
    }

    #[test]
    fn test_code_never_equals_name() {
        // "29" is Karnataka's code, but the resolver has no lookup table.
        assert_eq!(
            resolve_place_of_supply(Some("29"), Some("Karnataka")),
            PlaceOfSupply::Interstate
        );
    }

    #[test]
    fn test_missing_either_side_is_interstate() {
        assert_eq!(
            resolve_place_of_supply(Some("29"), None),
            PlaceOfSupply::Interstate
        );
        assert_eq!(
            resolve_place_of_supply(None, Some("29")),
            PlaceOfSupply::Interstate
        );
        assert_eq!(
            resolve_place_of_supply(None, None),
            PlaceOfSupply::Interstate
        );
    }

    #[test]
    fn test_blank_strings_are_missing() {
        assert_eq!(
            resolve_place_of_supply(Some(""), Some("29")),
            PlaceOfSupply::Interstate
        );
        assert_eq!(
            resolve_place_of_supply(Some("   "), Some("   ")),
            PlaceOfSupply::Interstate
        );
    }

    #[test]
    fn test_codes_compare_verbatim() {
        // Padded codes still match after trimming.
        assert_eq!(
            resolve_place_of_supply(Some(" 29 "), Some("29")),
            PlaceOfSupply::Intrastate
        );
        // "029" is three characters, so it takes the name path and cannot
        // equal the code "29".
        assert_eq!(
            resolve_place_of_supply(Some("029"), Some("29")),
            PlaceOfSupply::Interstate
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PlaceOfSupply::Intrastate.to_string(), "Intra-State");
        assert_eq!(PlaceOfSupply::Interstate.to_string(), "Inter-State");
    }
}
