//! Card form validation and brand detection.
//!
//! Nothing here charges a card. The checks mirror the add-card form and
//! return the first message the user needs to fix.

use crate::{error::ValidationFailure, models::CardBrand, params::NewCard};

/// A card form that passed validation, reduced to what gets stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCard {
    pub brand: CardBrand,
    pub last4: String,
    pub expiry: String,
    pub name: String,
    /// `street, city, ST zip`
    pub billing_address: String,
    pub make_default: bool,
}

/// Detect the card network from the card number's digits.
///
/// ```rust
/// use walkies_core::{models::CardBrand, payments::detect_card_brand};
///
/// assert_eq!(detect_card_brand("4242424242424242"), CardBrand::Visa);
/// assert_eq!(detect_card_brand("371449635398431"), CardBrand::AmericanExpress);
/// assert_eq!(detect_card_brand("9999"), CardBrand::Card);
/// ```
pub fn detect_card_brand(digits: &str) -> CardBrand {
    let prefix = |len: usize| -> Option<u32> { digits.get(..len).and_then(|p| p.parse().ok()) };

    if digits.starts_with('4') {
        CardBrand::Visa
    } else if prefix(2).is_some_and(|p| (51..=55).contains(&p) || (22..=27).contains(&p)) {
        CardBrand::Mastercard
    } else if digits.starts_with("34") || digits.starts_with("37") {
        CardBrand::AmericanExpress
    } else if digits.starts_with("6011") || digits.starts_with("65") {
        CardBrand::Discover
    } else {
        CardBrand::Card
    }
}

/// `MM/YY` with a month between 01 and 12.
fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let all_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(month) && all_digits(year) && matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Validate the add-card form.
pub fn validate_new_card(card: &NewCard) -> Result<ValidatedCard, ValidationFailure> {
    let number: String = card.card_number.chars().filter(|c| !c.is_whitespace()).collect();
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(13..=19).contains(&number.len()) || !all_digits(&number) {
        return Err(ValidationFailure::Card("Enter a valid card number."));
    }
    if !is_valid_expiry(&card.expiry) {
        return Err(ValidationFailure::Card("Enter expiry as MM/YY."));
    }
    if !(3..=4).contains(&card.cvv.len()) || !all_digits(&card.cvv) {
        return Err(ValidationFailure::Card("Enter a valid CVV."));
    }
    if card.name.is_empty() {
        return Err(ValidationFailure::Card("Enter the cardholder name."));
    }
    if card.billing_address.is_empty() || card.city.is_empty() || card.state.is_empty() || card.zip.is_empty() {
        return Err(ValidationFailure::Card("Complete the billing address."));
    }

    let state_code: String = card
        .state
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if state_code.len() != 2 {
        return Err(ValidationFailure::Card("Use a 2-letter state code."));
    }

    let postal_code: String = card.zip.chars().filter(|c| !c.is_whitespace()).collect();
    if postal_code.len() < 3 {
        return Err(ValidationFailure::Card("Enter a valid ZIP/postal code."));
    }

    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let last4 = digits[digits.len().saturating_sub(4)..].to_string();

    Ok(ValidatedCard {
        brand: detect_card_brand(&digits),
        last4,
        expiry: card.expiry.clone(),
        name: card.name.clone(),
        billing_address: format!(
            "{}, {}, {state_code} {postal_code}",
            card.billing_address, card.city
        ),
        make_default: card.make_default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card() -> NewCard {
        NewCard {
            card_number: "5555 5555 5555 4444".to_string(),
            expiry: "08/27".to_string(),
            cvv: "123".to_string(),
            name: "Alex Morgan".to_string(),
            billing_address: "123 Bark Ave".to_string(),
            city: "Seattle".to_string(),
            state: "wa".to_string(),
            zip: "98 101".to_string(),
            make_default: false,
        }
    }

    #[test]
    fn test_valid_card() {
        let card = validate_new_card(&valid_card()).expect("card is valid");
        assert_eq!(card.brand, CardBrand::Mastercard);
        assert_eq!(card.last4, "4444");
        assert_eq!(card.billing_address, "123 Bark Ave, Seattle, WA 98101");
    }

    #[test]
    fn test_brand_detection() {
        assert_eq!(detect_card_brand("2221000000000009"), CardBrand::Mastercard);
        assert_eq!(detect_card_brand("2721000000000004"), CardBrand::Mastercard);
        assert_eq!(detect_card_brand("2100000000000000"), CardBrand::Card);
        assert_eq!(detect_card_brand("6011111111111117"), CardBrand::Discover);
        assert_eq!(detect_card_brand("6500000000000002"), CardBrand::Discover);
        assert_eq!(detect_card_brand("3530111333300000"), CardBrand::Card);
    }

    #[test]
    fn test_number_and_cvv_must_be_digits() {
        let mut card = valid_card();
        card.card_number = "abcd efgh ijkl mnop".to_string();
        assert_eq!(
            validate_new_card(&card).err(),
            Some(ValidationFailure::Card("Enter a valid card number."))
        );

        let mut card = valid_card();
        card.cvv = "xyz".to_string();
        assert_eq!(
            validate_new_card(&card).err(),
            Some(ValidationFailure::Card("Enter a valid CVV."))
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut card = valid_card();
        card.card_number = "1234".to_string();
        card.expiry = "13/27".to_string();
        assert_eq!(
            validate_new_card(&card),
            Err(ValidationFailure::Card("Enter a valid card number."))
        );
    }

    #[test]
    fn test_field_checks() {
        let cases: [(fn(&mut NewCard), &str); 6] = [
            (|c| c.expiry = "13/27".to_string(), "Enter expiry as MM/YY."),
            (|c| c.cvv = "12".to_string(), "Enter a valid CVV."),
            (|c| c.name.clear(), "Enter the cardholder name."),
            (|c| c.city.clear(), "Complete the billing address."),
            (|c| c.state = "9".to_string(), "Use a 2-letter state code."),
            (|c| c.zip = "1 2".to_string(), "Enter a valid ZIP/postal code."),
        ];
        for (break_field, message) in cases {
            let mut card = valid_card();
            break_field(&mut card);
            assert_eq!(validate_new_card(&card), Err(ValidationFailure::Card(message)));
        }
    }
}
