//! Saved payment methods and past charges.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A stored card. Only the last four digits are ever kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    pub id: u64,
    pub brand: CardBrand,
    pub last4: String,
    /// `MM/YY`
    pub expiry: String,
    /// Cardholder name
    pub name: String,
    pub billing_address: String,
    #[serde(default)]
    pub is_default: bool,
}

impl PaymentCard {
    /// Card number with everything but the last four digits hidden.
    pub fn masked_number(&self) -> String {
        format!("**** **** **** {}", self.last4).trim().to_string()
    }
}

/// Card network, detected from the leading digits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
    #[serde(rename = "American Express")]
    AmericanExpress,
    Discover,
    /// Unrecognised prefix
    Card,
}

impl CardBrand {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::AmericanExpress => "American Express",
            CardBrand::Discover => "Discover",
            CardBrand::Card => "Card",
        }
    }
}

/// A past charge shown on the payments screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub date: Date,
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
}

/// Cards and charges together, as seeded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentData {
    #[serde(default)]
    pub cards: Vec<PaymentCard>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}
