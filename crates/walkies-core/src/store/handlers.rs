//! Composite reads that gather several collections into display wrappers.
//!
//! Interfaces call these instead of stitching store reads together
//! themselves, so the CLI and any later UI shell list things the same way.

use jiff::civil::Date;

use super::AppStore;
use crate::{
    dashboard::{self, HomeSummary},
    display::{Cards, Dogs, Inbox, PlanOverviews, Transactions, Walkers, Walks},
    error::{Result, WalkiesError},
    models::{PlanOverview, WalkFilter},
    params::{Id, ListWalkers, ListWalks},
    schedule::{self, DEFAULT_OCCURRENCE_COUNT},
};

impl AppStore {
    pub fn dog_list(&self) -> Dogs {
        Dogs(self.dogs.as_ref().clone())
    }

    pub fn walker_list(&self, params: &ListWalkers) -> Walkers {
        Walkers(self.list_walkers(params.filter))
    }

    /// Walk history, or only finished walks newest first.
    pub fn walk_list(&self, params: &ListWalks) -> Walks {
        if params.completed {
            let walks = self.list_walks(&WalkFilter::completed());
            Walks(dashboard::completed_walks(&walks).into_iter().cloned().collect())
        } else {
            Walks(self.walks.as_ref().clone())
        }
    }

    /// One plan with its walker, dogs and next occurrences.
    pub fn plan_overview(&self, params: &Id, today: Date) -> Result<PlanOverview> {
        let plan = self
            .recurring_plan(params.id)
            .ok_or(WalkiesError::PlanNotFound { id: params.id })?;
        Ok(PlanOverview {
            upcoming: schedule::generate_occurrences(&plan, DEFAULT_OCCURRENCE_COUNT, today),
            resolved: self.resolve_plan(&plan),
        })
    }

    /// Every plan as listed on the recurring walks screen, paused ones
    /// included.
    pub fn plan_overviews(&self, today: Date) -> PlanOverviews {
        PlanOverviews(
            self.plans
                .iter()
                .map(|plan| PlanOverview {
                    upcoming: schedule::generate_occurrences(plan, DEFAULT_OCCURRENCE_COUNT, today),
                    resolved: self.resolve_plan(plan),
                })
                .collect(),
        )
    }

    pub fn card_list(&self) -> Cards {
        Cards(self.sorted_cards())
    }

    pub fn transaction_list(&self) -> Transactions {
        Transactions(self.transactions.as_ref().clone())
    }

    pub fn inbox(&self) -> Inbox {
        Inbox(self.conversations())
    }

    /// The home screen: featured walk, the rest of the schedule and metrics.
    pub fn home_summary(&self, today: Date) -> HomeSummary {
        let featured = dashboard::upcoming_walk(&self.walks).cloned();
        let other_upcoming = dashboard::other_upcoming(&self.walks, featured.as_ref().map(|walk| walk.id))
            .into_iter()
            .cloned()
            .collect();
        let greeting_name = self
            .profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or("there")
            .to_string();

        HomeSummary {
            today,
            greeting_name,
            featured,
            other_upcoming,
            metrics: dashboard::weekly_metrics(&self.walks, today),
            unread_messages: self.unread_count(),
        }
    }
}
