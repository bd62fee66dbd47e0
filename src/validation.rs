//! Input normalization for checklist operations
//!
//! The presentation layer passes raw user-entered text. It is trimmed and
//! rejected when empty before the store touches any state. Category and
//! item IDs are opaque and matched exactly.

use crate::error::{ChecklistError, ChecklistResult};

/// Trim item text and reject it when nothing remains
///
/// # Arguments
/// * `text` - Raw text as typed by the user
///
/// # Returns
/// The trimmed text, or `ChecklistError::Validation` if it is empty
pub fn normalize_text(text: &str) -> ChecklistResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ChecklistError::Validation);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_trims() {
        assert_eq!(normalize_text("  Áo ấm  ").unwrap(), "Áo ấm");
        assert_eq!(normalize_text("Khăn").unwrap(), "Khăn");
        assert_eq!(normalize_text("\tBàn chải\n").unwrap(), "Bàn chải");
    }

    #[test]
    fn test_normalize_text_rejects_blank() {
        assert_eq!(normalize_text(""), Err(ChecklistError::Validation));
        assert_eq!(normalize_text("   "), Err(ChecklistError::Validation));
        assert_eq!(normalize_text("\n\t "), Err(ChecklistError::Validation));
    }
}
