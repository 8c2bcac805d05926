//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper is a newtype over a `Vec` that formats its items one after
//! another and prints a short notice when there are none.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{Dog, InboxEntry, PaymentCard, PlanOverview, Transaction, WalkRecord, Walker};

macro_rules! collection_wrapper {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for item in &self.0 {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    };
}

collection_wrapper!(
    /// Dog profiles, each under its own heading.
    ///
    /// ```rust
    /// use walkies_core::display::Dogs;
    ///
    /// assert_eq!(Dogs::default().to_string(), "No dogs yet. Add your first pup!\n");
    /// ```
    Dogs,
    Dog,
    "No dogs yet. Add your first pup!"
);

collection_wrapper!(
    /// The walker catalog, or a filtered slice of it.
    Walkers,
    Walker,
    "No walkers match this filter."
);

collection_wrapper!(
    /// Walk history entries.
    Walks,
    WalkRecord,
    "No walks yet."
);

collection_wrapper!(
    /// Recurring plans with their next occurrences.
    PlanOverviews,
    PlanOverview,
    "No recurring walks yet."
);

collection_wrapper!(Cards, PaymentCard, "No saved payment methods.");

collection_wrapper!(Transactions, Transaction, "No transactions yet.");

collection_wrapper!(Inbox, InboxEntry, "No messages yet.");
