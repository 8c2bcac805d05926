//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it, and reads fine
//! as plain text when it does not.

use std::fmt;

use super::datetime::{format_plan_days, format_time_display, WhenLabel, DAY_LABELS};
use crate::{
    booking::BookingDraft,
    dashboard::{format_upcoming_time, HomeSummary},
    models::{
        CardBrand, Dog, InboxEntry, PaymentCard, PlanOverview, PlanStatus, ResolvedPlan,
        Transaction, UserProfile, WalkRecord, WalkStatus, Walker,
    },
    profile::ProfileCompletion,
    schedule::Occurrence,
};

impl fmt::Display for WalkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {} {}", self.id, self.avatar, self.name)?;
        writeln!(f)?;

        let age = self
            .age
            .map(|years| format!(", {years} yrs"))
            .unwrap_or_default();
        if !self.breed.is_empty() {
            writeln!(f, "- Breed: {}{age}", self.breed)?;
        }
        let details = [
            ("Vet", &self.vet),
            ("Allergies", &self.allergies),
            ("Likes", &self.likes),
            ("Dislikes", &self.dislikes),
        ];
        for (label, value) in details {
            if !value.is_empty() {
                writeln!(f, "- {label}: {value}")?;
            }
        }

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }
        Ok(())
    }
}

impl fmt::Display for Walker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let favorite = if self.favorite { " ★" } else { "" };
        writeln!(f, "## {} (ID: {}){favorite}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Rating**: {:.1} ({} reviews)", self.rating, self.reviews)?;
        writeln!(f, "- **Price**: ${:.2} / 30 min", self.price)?;
        if self.verified {
            writeln!(f, "- **Verified**: background checked")?;
        }
        if !self.badges.is_empty() {
            writeln!(f, "- **Badges**: {}", self.badges.join(", "))?;
        }
        if !self.bio.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.bio)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for WalkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} with {} ({})",
            self.id,
            WhenLabel(self.date, self.time),
            self.walker.short_name(),
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Dogs: {}", self.dog_names())?;
        writeln!(f, "- Duration: {} min", self.duration_or_default())?;
        writeln!(f, "- Price: ${:.2}", self.price)?;
        if let Some(address) = &self.address {
            writeln!(f, "- Address: {address}")?;
        }
        if let Some(source) = self.source {
            writeln!(f, "- Source: {}", source.as_str())?;
        }
        if let Some(activity) = self.activity {
            let mut report = Vec::new();
            if activity.pee {
                report.push("pee");
            }
            if activity.poo {
                report.push("poo");
            }
            if activity.water {
                report.push("water");
            }
            if !report.is_empty() {
                writeln!(f, "- Activity: {}", report.join(", "))?;
            }
        }
        if let Some(note) = self.note.as_deref().filter(|note| !note.is_empty()) {
            writeln!(f)?;
            writeln!(f, "> {note}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", WhenLabel(self.date, Some(self.time)))
    }
}

impl fmt::Display for ResolvedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.plan;
        writeln!(f, "## {} (ID: {})", self.title(), plan.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", plan.status)?;
        writeln!(
            f,
            "- **Schedule**: {} at {}, {} min",
            format_plan_days(&plan.days_of_week, &DAY_LABELS),
            format_time_display(plan.time),
            plan.duration
        )?;
        writeln!(f, "- **Starts**: {}", plan.start_date)?;
        match &self.walker {
            Some(walker) => writeln!(f, "- **Walker**: {}", walker.name)?,
            None => writeln!(f, "- **Walker**: not assigned")?,
        }
        if !plan.address.is_empty() {
            writeln!(f, "- **Address**: {}", plan.address)?;
        }
        if let Some(date) = plan.last_confirmed_date {
            writeln!(f, "- **Last confirmed**: {date}")?;
        }
        if !plan.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", plan.notes)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolved)?;
        writeln!(f)?;
        if self.upcoming.is_empty() {
            writeln!(f, "No upcoming walks for this plan.")?;
        } else {
            writeln!(f, "Next walks:")?;
            for occurrence in &self.upcoming {
                writeln!(f, "- {occurrence}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        let fields = [
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Address", &self.address),
            ("Emergency contact", &self.emergency_contact),
            ("Preferred walk time", &self.preferred_walk_time),
        ];
        for (label, value) in fields {
            if !value.is_empty() {
                writeln!(f, "- {label}: {value}")?;
            }
        }
        if !self.bio.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.bio)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProfileCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Profile {}% complete ({}/{})",
            self.percentage, self.filled, self.total
        )?;
        if !self.missing.is_empty() {
            write!(f, ". Missing: {}", self.missing.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PaymentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = if self.is_default { " (default)" } else { "" };
        writeln!(
            f,
            "- {} {} exp {} (ID: {}){default}",
            self.brand,
            self.masked_number(),
            self.expiry,
            self.id
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {}: ${:.2}", self.date, self.description, self.amount)
    }
}

impl fmt::Display for InboxEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.conversation.unread { "● " } else { "" };
        writeln!(
            f,
            "- {marker}**{}** (walker {}): {}",
            self.walker.name, self.walker.id, self.conversation.last_message
        )
    }
}

impl fmt::Display for BookingDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Booking")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Service**: {} min walk, ${:.2}",
            self.service.duration, self.service.price
        )?;
        match self.date_time.date {
            Some(date) => writeln!(f, "- **When**: {}", WhenLabel(date, self.date_time.time))?,
            None => writeln!(f, "- **When**: not chosen")?,
        }
        if !self.address.is_empty() {
            writeln!(f, "- **Address**: {}", self.address)?;
        }
        if !self.selected_dogs.is_empty() {
            let names: Vec<&str> = self.selected_dogs.iter().map(|dog| dog.name.as_str()).collect();
            writeln!(f, "- **Dogs**: {}", names.join(", "))?;
        }
        if let Some(walker) = &self.selected_walker {
            writeln!(f, "- **Walker**: {}", walker.name)?;
        }
        if self.total > 0.0 {
            writeln!(f, "- **Total**: ${:.2}", self.total)?;
        }
        if !self.instructions.is_empty() {
            writeln!(f)?;
            writeln!(f, "> {}", self.instructions)?;
        }
        Ok(())
    }
}

impl fmt::Display for HomeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Hi, {}!", self.greeting_name)?;
        writeln!(f)?;

        match &self.featured {
            Some(walk) => {
                let heading = if walk.status == WalkStatus::InProgress {
                    "In progress"
                } else {
                    "Next walk"
                };
                writeln!(f, "## {heading}: with {}", walk.walker.name)?;
                writeln!(f)?;
                writeln!(f, "- When: {}", format_upcoming_time(walk, self.today))?;
                writeln!(f, "- Duration: {} min", walk.duration_or_default())?;
                writeln!(f, "- Dogs: {}", walk.dog_names())?;
            }
            None => writeln!(f, "No walks scheduled. Book one to get started.")?,
        }
        writeln!(f)?;

        let metrics = &self.metrics;
        writeln!(f, "## This week")?;
        writeln!(f)?;
        writeln!(f, "- Walks this week: {}", metrics.walks_this_week)?;
        writeln!(f, "- Scheduled: {}", metrics.scheduled_count)?;
        writeln!(f, "- Minutes booked: {} ({})", metrics.total_minutes, metrics.rating_caption())?;
        if self.unread_messages > 0 {
            writeln!(f, "- Unread messages: {}", self.unread_messages)?;
        }

        if !self.other_upcoming.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Coming up")?;
            writeln!(f)?;
            for walk in &self.other_upcoming {
                writeln!(
                    f,
                    "- {} with {} ({})",
                    format_upcoming_time(walk, self.today),
                    walk.walker.short_name(),
                    walk.dog_names()
                )?;
            }
        }
        Ok(())
    }
}
