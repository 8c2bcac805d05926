//! Command handlers for the walkies CLI.
//!
//! [`Cli`] owns the session's store and renderer. Each `handle_*` method
//! converts clap arguments into core parameters, calls the store and prints
//! the result either as markdown through the renderer or as JSON.

use std::fmt::Display;

use anyhow::Result;
use jiff::civil::Date;
use log::debug;
use serde::Serialize;
use walkies_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::{DogUpdate, PlanStatus, RecurringPlanUpdate, Sender},
    params::{Id, OccurrenceQuery, OccurrenceRef},
    AppStore, BookingWizard, WalkiesError,
};

use crate::{
    args::{
        BookArgs, CardCommands, DogCommands, InboxCommands, PlanCommands, ProfileCommands,
        WalkCommands, WalkerCommands,
    },
    renderer::TerminalRenderer,
};

/// One CLI session over a freshly seeded store.
pub struct Cli {
    store: AppStore,
    renderer: TerminalRenderer,
    today: Date,
    json: bool,
}

impl Cli {
    pub fn new(store: AppStore, renderer: TerminalRenderer, today: Date, json: bool) -> Self {
        Self {
            store,
            renderer,
            today,
            json,
        }
    }

    /// Print `data` as JSON, or `text` through the renderer.
    fn emit<T: Serialize>(&self, data: &T, text: impl Display) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(data)?);
            Ok(())
        } else {
            self.renderer.render(&text.to_string())
        }
    }

    /// Print a value whose `Display` impl is also its markdown form.
    fn show<T: Serialize + Display>(&self, value: &T) -> Result<()> {
        self.emit(value, value)
    }

    fn status(&self, message: impl Into<String>) -> Result<()> {
        let status = OperationStatus::success(message);
        self.emit(&serde_json::json!({ "message": status.message }), status)
    }

    /// The home screen.
    pub fn handle_home(&self) -> Result<()> {
        self.show(&self.store.home_summary(self.today))
    }

    pub fn handle_dog_command(&mut self, command: DogCommands) -> Result<()> {
        match command {
            DogCommands::List => self.show(&self.store.dog_list()),
            DogCommands::Show(args) => {
                let Id { id } = args.into();
                let dog = self.store.dog(id).ok_or(WalkiesError::DogNotFound { id })?;
                self.show(&dog)
            }
            DogCommands::Add(args) => {
                let dog = self.store.add_dog(args.into());
                self.emit(&dog, CreateResult::new(dog.clone()))
            }
            DogCommands::Update(args) => {
                let update = DogUpdate::from(&args);
                let changes = update.changed_fields().into_iter().map(String::from).collect();
                let dog = self.store.update_dog(args.id, &update)?;
                self.emit(&dog, UpdateResult::with_changes(dog.clone(), changes))
            }
            DogCommands::Delete(args) => {
                let Id { id } = args.into();
                let dog = self.store.dog(id).ok_or(WalkiesError::DogNotFound { id })?;
                self.store.delete_dog(id)?;
                self.emit(&dog, DeleteResult::new(dog.clone()))
            }
        }
    }

    pub fn handle_walker_command(&mut self, command: WalkerCommands) -> Result<()> {
        match command {
            WalkerCommands::List(args) => self.show(&self.store.walker_list(&args.into())),
            WalkerCommands::Show(args) => {
                let Id { id } = args.into();
                let walker = self.store.walker(id).ok_or(WalkiesError::WalkerNotFound { id })?;
                self.show(&walker)
            }
            WalkerCommands::Favorite(args) => {
                let Id { id } = args.into();
                let favorite = self.store.toggle_walker_favorite(id)?;
                let message = if favorite {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                };
                self.status(format!("{message} (walker {id})"))
            }
        }
    }

    pub fn handle_walk_command(&self, command: WalkCommands) -> Result<()> {
        match command {
            WalkCommands::List(args) => self.show(&self.store.walk_list(&args.into())),
            WalkCommands::Show(args) => {
                let Id { id } = args.into();
                let walk = self.store.walk(id).ok_or(WalkiesError::WalkNotFound { id })?;
                self.show(&walk)
            }
        }
    }

    pub fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List => self.show(&self.store.plan_overviews(self.today)),
            PlanCommands::Show(args) => self.show(&self.store.plan_overview(&args.into(), self.today)?),
            PlanCommands::Next(args) => {
                let query = OccurrenceQuery::from(args);
                let occurrences = self.store.upcoming_occurrences(&query, self.today)?;
                let text = if occurrences.is_empty() {
                    "No upcoming walks for this plan.\n".to_string()
                } else {
                    occurrences
                        .iter()
                        .map(|occurrence| format!("- {occurrence}\n"))
                        .collect()
                };
                self.emit(&occurrences, text)
            }
            PlanCommands::Create(args) => {
                let params = args.into_params(self.today);
                params.validate().map_err(WalkiesError::from)?;
                let plan = self.store.create_recurring_plan(params);
                let resolved = self.store.resolve_plan(&plan);
                self.emit(&plan, CreateResult::new(resolved))
            }
            PlanCommands::Update(args) => {
                let update = RecurringPlanUpdate::from(&args);
                let plan = self.store.edit_recurring_plan(args.id, &update)?;
                let resolved = self.store.resolve_plan(&plan);
                self.emit(&plan, UpdateResult::new(resolved))
            }
            PlanCommands::Toggle(args) => {
                let Id { id } = args.into();
                let status = self.store.toggle_recurring_plan_status(id)?;
                let message = match status {
                    PlanStatus::Active => "Plan resumed",
                    PlanStatus::Paused => "Plan paused",
                };
                self.status(format!("{message} (plan {id})"))
            }
            PlanCommands::Delete(args) => {
                let Id { id } = args.into();
                let plan = self
                    .store
                    .recurring_plan(id)
                    .ok_or(WalkiesError::PlanNotFound { id })?;
                self.store.delete_recurring_plan(id)?;
                self.emit(&plan, DeleteResult::new(plan.clone()))
            }
            PlanCommands::Confirm(args) => {
                let occurrence = OccurrenceRef::from(args);
                let walk = self.store.confirm_occurrence(&occurrence)?;
                self.emit(&walk, CreateResult::new(walk.clone()))
            }
            PlanCommands::Review(args) => {
                let prefill = self.store.review_occurrence(&args.into())?;
                let wizard = BookingWizard::with_prefill(&prefill, &self.store, self.today);
                self.show(wizard.draft())
            }
        }
    }

    /// Drive the booking wizard from plan details to confirmation.
    pub fn handle_book(&mut self, args: BookArgs) -> Result<()> {
        let mut wizard = match (args.plan, args.on) {
            (Some(plan_id), Some(date)) => {
                let prefill = self.store.review_occurrence(&OccurrenceRef { plan_id, date })?;
                BookingWizard::with_prefill(&prefill, &self.store, self.today)
            }
            _ => BookingWizard::new(self.today),
        };

        if let Some(service) = args.service {
            wizard.select_service(service.into());
        }
        if let Some(date) = args.date {
            wizard.set_date(date)?;
        }
        if let Some(time) = args.time {
            wizard.set_time(time);
        }
        if let Some(address) = args.address {
            wizard.set_address(address);
        }
        if let Some(instructions) = args.instructions {
            wizard.set_instructions(instructions);
        }
        for id in args.dogs {
            let dog = self.store.dog(id).ok_or(WalkiesError::DogNotFound { id })?;
            let already_selected = wizard.draft().selected_dogs.iter().any(|selected| selected.id == id);
            if !already_selected {
                wizard.toggle_dog(&dog);
            }
        }

        let walkers = self.store.walkers();
        wizard.advance(&walkers)?;
        if let Some(id) = args.walker {
            let walker = self.store.walker(id).ok_or(WalkiesError::WalkerNotFound { id })?;
            wizard.select_walker(walker);
        }
        let step = wizard.advance(&walkers)?;
        debug!("Booking reached {}", step.label());

        if args.dry_run {
            return self.show(wizard.draft());
        }
        let walk = wizard.confirm(&mut self.store)?;
        self.emit(&walk, CreateResult::new(walk.clone()))
    }

    pub fn handle_profile_command(&mut self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Show => {
                let profile = self.store.user_profile();
                let completion = self.store.profile_completion();
                self.emit(
                    &serde_json::json!({ "profile": &*profile, "completion": completion }),
                    format!("{profile}\n{completion}"),
                )
            }
            ProfileCommands::Update(args) => {
                let profile = self.store.update_user_profile(&args.into());
                let completion = self.store.profile_completion();
                self.emit(&profile, format!("{profile}\n{completion}"))
            }
        }
    }

    pub fn handle_card_command(&mut self, command: CardCommands) -> Result<()> {
        match command {
            CardCommands::List => {
                let cards = self.store.card_list();
                let transactions = self.store.transaction_list();
                self.emit(
                    &serde_json::json!({ "cards": cards, "transactions": transactions }),
                    format!("## Payment methods\n\n{cards}\n## Transactions\n\n{transactions}"),
                )
            }
            CardCommands::Add(args) => {
                let card = self.store.add_card(&args.into())?;
                self.emit(&card, CreateResult::new(card.clone()))
            }
            CardCommands::Default(args) => {
                let Id { id } = args.into();
                let card = self.store.set_default_card(id)?;
                self.status(format!("{} ending {} is now your default card", card.brand, card.last4))
            }
        }
    }

    pub fn handle_inbox_command(&self, command: InboxCommands) -> Result<()> {
        match command {
            InboxCommands::List => self.show(&self.store.inbox()),
            InboxCommands::Chat(args) => {
                let Id { id } = args.into();
                let walker = self.store.walker(id).ok_or(WalkiesError::WalkerNotFound { id })?;
                let messages = self.store.chat_thread(id);
                let mut text = format!("## Chat with {}\n\n", walker.name);
                if messages.is_empty() {
                    text.push_str("No messages yet.\n");
                }
                for message in &messages {
                    let author = match message.sender {
                        Sender::Walker => walker.name.as_str(),
                        Sender::User => "You",
                    };
                    text.push_str(&format!("- **{author}**: {}\n", message.text));
                }
                self.emit(&messages, text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use walkies_core::StoreBuilder;

    use super::*;

    fn create_test_cli() -> Cli {
        let store = StoreBuilder::new()
            .with_demo_data()
            .build()
            .expect("demo data loads");
        Cli::new(store, TerminalRenderer::new(false), date(2025, 9, 17), false)
    }

    #[test]
    fn test_book_dry_run_leaves_history_alone() {
        let mut cli = create_test_cli();
        let before = cli.store.walk_history().len();
        let args = BookArgs {
            plan: Some(1),
            on: Some(date(2025, 9, 19)),
            service: None,
            date: None,
            time: None,
            address: None,
            dogs: Vec::new(),
            instructions: None,
            walker: None,
            dry_run: true,
        };
        cli.handle_book(args).expect("prefilled booking is complete");
        assert_eq!(cli.store.walk_history().len(), before);
    }

    #[test]
    fn test_dog_commands_mutate_session_store() {
        let mut cli = create_test_cli();
        cli.handle_dog_command(DogCommands::Delete(crate::args::IdArgs { id: 2 }))
            .expect("delete Lucy");
        assert!(cli.store.dog(2).is_none());

        let err = cli
            .handle_dog_command(DogCommands::Delete(crate::args::IdArgs { id: 2 }))
            .expect_err("already deleted");
        assert!(matches!(
            err.downcast_ref::<WalkiesError>(),
            Some(WalkiesError::DogNotFound { id: 2 })
        ));
    }
}
