//! Payment method operations for the AppStore.

use std::sync::Arc;

use log::info;

use super::{replace_with, AppStore};
use crate::{
    error::{Result, WalkiesError},
    models::{PaymentCard, Transaction},
    params::NewCard,
    payments::validate_new_card,
};

impl AppStore {
    /// Saved cards, in the order they were added.
    pub fn cards(&self) -> Arc<Vec<PaymentCard>> {
        Arc::clone(&self.cards)
    }

    /// Saved cards with the default first, then newest first.
    pub fn sorted_cards(&self) -> Vec<PaymentCard> {
        let mut cards = self.cards.as_ref().clone();
        cards.sort_by(|a, b| b.is_default.cmp(&a.is_default).then(b.id.cmp(&a.id)));
        cards
    }

    /// Past charges, newest first as seeded.
    pub fn transactions(&self) -> Arc<Vec<Transaction>> {
        Arc::clone(&self.transactions)
    }

    /// Validates and saves a card.
    ///
    /// The first card saved always becomes the default, as does any card
    /// saved with `make_default`; either way every other card loses the flag.
    pub fn add_card(&mut self, params: &NewCard) -> Result<PaymentCard> {
        let validated = validate_new_card(params)?;
        let is_default = validated.make_default || self.cards.is_empty();
        let card = PaymentCard {
            id: self.ids.next_id(),
            brand: validated.brand,
            last4: validated.last4,
            expiry: validated.expiry,
            name: validated.name,
            billing_address: validated.billing_address,
            is_default,
        };
        info!("Saved {} card ending {}", card.brand.as_str(), card.last4);

        let created = card.clone();
        replace_with(&mut self.cards, |cards| {
            if is_default {
                for existing in cards.iter_mut() {
                    existing.is_default = false;
                }
            }
            cards.push(card);
        });
        Ok(created)
    }

    /// Makes one card the default and clears the flag on all others.
    pub fn set_default_card(&mut self, id: u64) -> Result<PaymentCard> {
        let card = self
            .cards
            .iter()
            .find(|card| card.id == id)
            .cloned()
            .ok_or(WalkiesError::CardNotFound { id })?;
        replace_with(&mut self.cards, |cards| {
            for existing in cards.iter_mut() {
                existing.is_default = existing.id == id;
            }
        });
        info!("Default payment method is now card {id}");
        Ok(PaymentCard {
            is_default: true,
            ..card
        })
    }
}
