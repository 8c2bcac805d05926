//! Filter types for walker lists and walk history.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{WalkRecord, WalkStatus, Walker};

/// Sort/filter chips shown above walker lists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WalkerFilter {
    /// Catalog order (distance is not modelled)
    #[default]
    Nearest,

    /// Only walkers marked as favorite
    Favorites,

    /// Cheapest first
    Price,

    /// Highest rating first
    TopRated,
}

impl FromStr for WalkerFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(WalkerFilter::Nearest),
            "favorites" | "favourites" => Ok(WalkerFilter::Favorites),
            "price" => Ok(WalkerFilter::Price),
            "top-rated" | "top_rated" | "toprated" => Ok(WalkerFilter::TopRated),
            _ => Err(format!("Invalid walker filter: {s}")),
        }
    }
}

impl WalkerFilter {
    pub fn label(&self) -> &'static str {
        match self {
            WalkerFilter::Nearest => "Nearest",
            WalkerFilter::Favorites => "Favorites ★",
            WalkerFilter::Price => "Price",
            WalkerFilter::TopRated => "Top Rated",
        }
    }

    /// Apply the filter to a walker catalog.
    ///
    /// Sorting is stable, so walkers that compare equal keep catalog order.
    ///
    /// ```rust
    /// use walkies_core::models::{Walker, WalkerFilter};
    ///
    /// let walker = |id, price| Walker {
    ///     id,
    ///     name: format!("Walker {id}"),
    ///     avatar: String::new(),
    ///     verified: true,
    ///     rating: 4.5,
    ///     reviews: 10,
    ///     price,
    ///     bio: String::new(),
    ///     badges: vec![],
    ///     favorite: false,
    /// };
    /// let catalog = vec![walker(1, 25.0), walker(2, 22.0)];
    /// let sorted = WalkerFilter::Price.apply(&catalog);
    /// assert_eq!(sorted[0].id, 2);
    /// ```
    pub fn apply(&self, walkers: &[Walker]) -> Vec<Walker> {
        let mut result = walkers.to_vec();
        match self {
            WalkerFilter::Nearest => {}
            WalkerFilter::Favorites => result.retain(|walker| walker.favorite),
            WalkerFilter::Price => result.sort_by(|a, b| {
                a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
            }),
            WalkerFilter::TopRated => result.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
        }
        result
    }
}

/// Filter options for walk history queries.
#[derive(Debug, Clone, Default)]
pub struct WalkFilter {
    /// Only walks with this status
    pub status: Option<WalkStatus>,

    /// Only walks with this walker
    pub walker_id: Option<u64>,
}

impl WalkFilter {
    /// Filter matching finished walks only.
    pub fn completed() -> Self {
        Self {
            status: Some(WalkStatus::Completed),
            ..Default::default()
        }
    }

    pub fn matches(&self, walk: &WalkRecord) -> bool {
        self.status.map_or(true, |status| walk.status == status)
            && self.walker_id.map_or(true, |id| walk.walker.id == id)
    }
}
