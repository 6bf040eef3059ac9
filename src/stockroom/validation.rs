//! Product candidate validation.
//!
//! A candidate is accepted when:
//! - its trimmed name has at least 2 characters
//! - its quantity is not negative
//! - no *other* product already uses the same name, ignoring case
//!
//! The checks run in that order and the first failure wins, so a short
//! name is reported even if the quantity is also negative.

use crate::error::ValidationError;
use crate::model::{Product, ProductDraft, ProductId};

pub const MIN_NAME_CHARS: usize = 2;

/// A candidate that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub quantity: u64,
}

/// Validates `draft` against the current `products`.
///
/// `editing` names the record being updated; it is skipped by the
/// uniqueness check so a product can keep its own name.
///
/// # Examples
/// ```
/// use stockroom::error::ValidationError;
/// use stockroom::model::ProductDraft;
/// use stockroom::validation::validate_draft;
///
/// let ok = validate_draft(&ProductDraft::new("  Mouse ", 3), &[], None).unwrap();
/// assert_eq!(ok.name, "Mouse");
///
/// assert_eq!(
///     validate_draft(&ProductDraft::new("X", -1), &[], None),
///     Err(ValidationError::NameTooShort)
/// );
/// ```
pub fn validate_draft(
    draft: &ProductDraft,
    products: &[Product],
    editing: Option<&ProductId>,
) -> Result<ValidDraft, ValidationError> {
    let name = draft.name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }

    let quantity = u64::try_from(draft.quantity).map_err(|_| ValidationError::NegativeQuantity)?;

    let lowered = name.to_lowercase();
    let clash = products
        .iter()
        .filter(|p| editing != Some(&p.id))
        .find(|p| p.name.to_lowercase() == lowered);
    if let Some(existing) = clash {
        return Err(ValidationError::DuplicateName(existing.name.clone()));
    }

    Ok(ValidDraft {
        name: name.to_string(),
        quantity,
    })
}
