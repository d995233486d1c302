//! Field rules for catalog books.
//!
//! Limits mirror the column definitions of the `books` table so that bad
//! input is rejected with a readable message before it reaches PostgreSQL.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Maximum length of a book title, in characters.
pub const MAX_BOOKNAME_LEN: usize = 120;

/// Maximum length of the `ISBN` field, in characters.
pub const MAX_ISBN_LEN: usize = 20;

/// Maximum length of a cover image URL, in characters.
pub const MAX_IMAGE_URL_LEN: usize = 255;

/// Number of fractional digits stored for a price (`NUMERIC(10, 2)`).
pub const PRICE_SCALE: u32 = 2;

/// Number of integer digits a price may have (`NUMERIC(10, 2)`).
pub const MAX_PRICE_INTEGER_DIGITS: u32 = 8;

/// Validate a book title: required, non-blank, at most [`MAX_BOOKNAME_LEN`] chars.
pub fn validate_bookname(bookname: &str) -> Result<(), CoreError> {
    validate_required_text("bookname", bookname, MAX_BOOKNAME_LEN)
}

/// Validate the `ISBN` field: required, non-blank, at most [`MAX_ISBN_LEN`] chars.
///
/// Only presence and length are checked. The field has been used to hold
/// author names, so no ISBN checksum is enforced.
pub fn validate_isbn(isbn: &str) -> Result<(), CoreError> {
    validate_required_text("ISBN", isbn, MAX_ISBN_LEN)
}

/// Validate a price: non-negative, at most two fractional digits, and small
/// enough to fit `NUMERIC(10, 2)`.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(CoreError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(CoreError::Validation(format!(
            "price must have at most {PRICE_SCALE} decimal places, got {price}"
        )));
    }
    let limit = Decimal::from(10_i64.pow(MAX_PRICE_INTEGER_DIGITS));
    if price >= limit {
        return Err(CoreError::Validation(format!(
            "price must be less than {limit}, got {price}"
        )));
    }
    Ok(())
}

/// Validate an optional cover image URL: at most [`MAX_IMAGE_URL_LEN`] chars.
pub fn validate_image_url(image_url: Option<&str>) -> Result<(), CoreError> {
    match image_url {
        Some(url) if url.chars().count() > MAX_IMAGE_URL_LEN => Err(CoreError::Validation(
            format!("image_url must be at most {MAX_IMAGE_URL_LEN} characters"),
        )),
        _ => Ok(()),
    }
}

fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bookname_accepts_normal_title() {
        assert!(validate_bookname("Dune").is_ok());
    }

    #[test]
    fn test_bookname_rejects_blank() {
        assert!(validate_bookname("").is_err());
        assert!(validate_bookname("   ").is_err());
    }

    #[test]
    fn test_bookname_length_limit_counts_chars() {
        assert!(validate_bookname(&"a".repeat(MAX_BOOKNAME_LEN)).is_ok());
        assert!(validate_bookname(&"a".repeat(MAX_BOOKNAME_LEN + 1)).is_err());
        // Multi-byte characters count once each.
        assert!(validate_bookname(&"é".repeat(MAX_BOOKNAME_LEN)).is_ok());
    }

    #[test]
    fn test_isbn_rules() {
        assert!(validate_isbn("978-0441013593").is_ok());
        assert!(validate_isbn("Frank Herbert").is_ok());
        assert!(validate_isbn("").is_err());
        assert!(validate_isbn(&"1".repeat(MAX_ISBN_LEN + 1)).is_err());
    }

    #[test]
    fn test_isbn_error_names_field() {
        let msg = validate_isbn("").unwrap_err().to_string();
        assert!(msg.contains("ISBN"));
    }

    #[test]
    fn test_price_accepts_valid_values() {
        assert!(validate_price(dec("0")).is_ok());
        assert!(validate_price(dec("9.99")).is_ok());
        assert!(validate_price(dec("12.5")).is_ok());
        assert!(validate_price(dec("99999999.99")).is_ok());
    }

    #[test]
    fn test_price_trailing_zeros_do_not_count_as_precision() {
        assert!(validate_price(dec("9.9900")).is_ok());
    }

    #[test]
    fn test_price_rejects_negative() {
        let msg = validate_price(dec("-0.01")).unwrap_err().to_string();
        assert!(msg.contains("negative"));
    }

    #[test]
    fn test_price_rejects_three_decimals() {
        assert!(validate_price(dec("1.999")).is_err());
    }

    #[test]
    fn test_price_rejects_overflowing_column() {
        assert!(validate_price(dec("100000000")).is_err());
    }

    #[test]
    fn test_image_url_optional() {
        assert!(validate_image_url(None).is_ok());
        assert!(validate_image_url(Some("https://covers.example/dune.jpg")).is_ok());
        assert!(validate_image_url(Some(&"x".repeat(MAX_IMAGE_URL_LEN + 1))).is_err());
    }
}
