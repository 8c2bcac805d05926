//! Command-line argument definitions using clap.
//!
//! The CLI side of the parameter wrapper pattern: each argument struct
//! carries clap derives and converts into a `walkies_core::params` type (or a
//! model update request) with `From`, so the core stays free of clap.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → AppStore
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::{Date, Time};
use walkies_core::{
    models::{DogUpdate, ProfileUpdate, RecurringPlanUpdate, WalkerFilter},
    params::{CreateRecurringPlan, Id, ListWalkers, ListWalks, NewCard, NewDog, OccurrenceQuery, OccurrenceRef},
    schedule::DEFAULT_OCCURRENCE_COUNT,
    ServiceOption,
};

/// Book and manage dog walks from the terminal.
///
/// Every invocation starts from the bundled demo data; changes last for the
/// duration of the command only.
#[derive(Parser)]
#[command(version, about, name = "walkies")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Reference date (YYYY-MM-DD) used instead of the system date
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands. Running without one shows the home screen.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage your dogs
    #[command(alias = "d")]
    Dog {
        #[command(subcommand)]
        command: DogCommands,
    },
    /// Browse walkers and pick favorites
    Walker {
        #[command(subcommand)]
        command: WalkerCommands,
    },
    /// Walk history
    Walk {
        #[command(subcommand)]
        command: WalkCommands,
    },
    /// Recurring walk plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Book a walk through the booking wizard
    #[command(alias = "b")]
    Book(BookArgs),
    /// Your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Payment methods
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
    /// Messages with walkers
    Inbox {
        #[command(subcommand)]
        command: InboxCommands,
    },
}

/// Identifies one record by id.
#[derive(ClapArgs)]
pub struct IdArgs {
    /// Unique identifier of the record
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

// ============================================================================
// Dogs
// ============================================================================

/// Dog profile fields shared by `add` and `update`.
#[derive(ClapArgs)]
pub struct DogFieldArgs {
    /// Emoji or image URL
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(short, long)]
    pub breed: Option<String>,
    /// Age in years
    #[arg(short, long)]
    pub age: Option<u32>,
    /// Care notes for the walker
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub vet: Option<String>,
    #[arg(long)]
    pub allergies: Option<String>,
    #[arg(long)]
    pub likes: Option<String>,
    #[arg(long)]
    pub dislikes: Option<String>,
}

#[derive(ClapArgs)]
pub struct AddDogArgs {
    /// The dog's name
    pub name: String,
    #[command(flatten)]
    pub fields: DogFieldArgs,
}

impl From<AddDogArgs> for NewDog {
    fn from(val: AddDogArgs) -> Self {
        let fields = val.fields;
        NewDog {
            name: val.name,
            avatar: fields.avatar,
            breed: fields.breed.unwrap_or_default(),
            age: fields.age,
            notes: fields.notes.unwrap_or_default(),
            vet: fields.vet.unwrap_or_default(),
            allergies: fields.allergies.unwrap_or_default(),
            likes: fields.likes.unwrap_or_default(),
            dislikes: fields.dislikes.unwrap_or_default(),
        }
    }
}

#[derive(ClapArgs)]
pub struct UpdateDogArgs {
    /// ID of the dog to update
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    #[command(flatten)]
    pub fields: DogFieldArgs,
}

impl From<&UpdateDogArgs> for DogUpdate {
    fn from(val: &UpdateDogArgs) -> Self {
        let fields = &val.fields;
        DogUpdate {
            name: val.name.clone(),
            avatar: fields.avatar.clone(),
            breed: fields.breed.clone(),
            age: fields.age,
            notes: fields.notes.clone(),
            vet: fields.vet.clone(),
            allergies: fields.allergies.clone(),
            likes: fields.likes.clone(),
            dislikes: fields.dislikes.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum DogCommands {
    /// List all dogs
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one dog's profile
    #[command(alias = "s")]
    Show(IdArgs),
    /// Add a dog
    #[command(alias = "a")]
    Add(AddDogArgs),
    /// Update fields of a dog's profile
    #[command(alias = "u")]
    Update(UpdateDogArgs),
    /// Remove a dog
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

// ============================================================================
// Walkers and walks
// ============================================================================

#[derive(ClapArgs)]
pub struct ListWalkersArgs {
    /// nearest, favorites, price or top-rated
    #[arg(short, long, default_value = "nearest")]
    pub filter: WalkerFilter,
}

impl From<ListWalkersArgs> for ListWalkers {
    fn from(val: ListWalkersArgs) -> Self {
        ListWalkers { filter: val.filter }
    }
}

#[derive(Subcommand)]
pub enum WalkerCommands {
    /// List walkers
    #[command(aliases = ["l", "ls"])]
    List(ListWalkersArgs),
    /// Show a walker's profile
    #[command(alias = "s")]
    Show(IdArgs),
    /// Add or remove a walker from favorites
    #[command(alias = "f")]
    Favorite(IdArgs),
}

#[derive(ClapArgs)]
pub struct ListWalksArgs {
    /// Only finished walks, newest first
    #[arg(short, long)]
    pub completed: bool,
}

impl From<ListWalksArgs> for ListWalks {
    fn from(val: ListWalksArgs) -> Self {
        ListWalks {
            completed: val.completed,
        }
    }
}

#[derive(Subcommand)]
pub enum WalkCommands {
    /// List walk history
    #[command(aliases = ["l", "ls"])]
    List(ListWalksArgs),
    /// Show one walk
    #[command(alias = "s")]
    Show(IdArgs),
}

// ============================================================================
// Recurring plans
// ============================================================================

#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    /// Weekdays as numbers, 0 = Sunday, comma-separated (e.g. 1,3,5)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub days: Vec<i32>,
    /// IDs of the dogs on this plan, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub dogs: Vec<u64>,
    /// Preferred walker ID
    #[arg(short, long)]
    pub walker: Option<u64>,
    /// Pickup address
    #[arg(short, long, default_value = "")]
    pub address: String,
    /// Optional display name
    #[arg(short, long, default_value = "")]
    pub label: String,
    /// Start time (HH:MM), 09:00 when omitted
    #[arg(short, long)]
    pub time: Option<Time>,
    /// Length in minutes, 30 when omitted
    #[arg(long)]
    pub duration: Option<u32>,
    /// First possible date (YYYY-MM-DD), today when omitted
    #[arg(short, long)]
    pub start: Option<Date>,
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

impl CreatePlanArgs {
    /// Core parameters, with `today` standing in for a missing start date.
    pub fn into_params(self, today: Date) -> CreateRecurringPlan {
        CreateRecurringPlan {
            label: self.label,
            dog_ids: self.dogs,
            walker_id: self.walker,
            days_of_week: self.days,
            time: self.time,
            duration: self.duration,
            start_date: self.start.unwrap_or(today),
            address: self.address,
            notes: self.notes,
        }
    }
}

#[derive(ClapArgs)]
pub struct UpdatePlanArgs {
    /// ID of the plan to update
    pub id: u64,
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub days: Option<Vec<i32>>,
    #[arg(long, value_delimiter = ',')]
    pub dogs: Option<Vec<u64>>,
    #[arg(short, long)]
    pub walker: Option<u64>,
    #[arg(short, long)]
    pub address: Option<String>,
    #[arg(short, long)]
    pub label: Option<String>,
    #[arg(short, long)]
    pub time: Option<Time>,
    #[arg(long)]
    pub duration: Option<u32>,
    #[arg(short, long)]
    pub start: Option<Date>,
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<&UpdatePlanArgs> for RecurringPlanUpdate {
    fn from(val: &UpdatePlanArgs) -> Self {
        RecurringPlanUpdate {
            label: val.label.clone(),
            dog_ids: val.dogs.clone(),
            walker_id: val.walker,
            days_of_week: val.days.clone(),
            time: val.time,
            duration: val.duration,
            start_date: val.start,
            address: val.address.clone(),
            notes: val.notes.clone(),
            last_confirmed_date: None,
        }
    }
}

#[derive(ClapArgs)]
pub struct NextOccurrencesArgs {
    /// ID of the plan
    pub id: u64,
    /// How many dates to list
    #[arg(short, long, default_value_t = DEFAULT_OCCURRENCE_COUNT)]
    pub count: usize,
    /// List from this date instead of today
    #[arg(short, long)]
    pub from: Option<Date>,
}

impl From<NextOccurrencesArgs> for OccurrenceQuery {
    fn from(val: NextOccurrencesArgs) -> Self {
        OccurrenceQuery {
            plan_id: val.id,
            count: val.count,
            from: val.from,
        }
    }
}

#[derive(ClapArgs)]
pub struct OccurrenceArgs {
    /// ID of the plan
    pub id: u64,
    /// Date of the occurrence (YYYY-MM-DD)
    pub date: Date,
}

impl From<OccurrenceArgs> for OccurrenceRef {
    fn from(val: OccurrenceArgs) -> Self {
        OccurrenceRef {
            plan_id: val.id,
            date: val.date,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List recurring plans with their next walks
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one plan
    #[command(alias = "s")]
    Show(IdArgs),
    /// List a plan's upcoming dates
    #[command(alias = "n")]
    Next(NextOccurrencesArgs),
    /// Create a recurring plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Update fields of a plan
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Pause an active plan or resume a paused one
    #[command(alias = "t")]
    Toggle(IdArgs),
    /// Delete a plan; walks already booked from it are kept
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Book one occurrence as an upcoming walk
    Confirm(OccurrenceArgs),
    /// Show the booking an occurrence would prefill
    Review(OccurrenceArgs),
}

// ============================================================================
// Booking
// ============================================================================

#[derive(Clone, Copy, ValueEnum)]
pub enum ServiceArg {
    #[value(name = "30")]
    HalfHour,
    #[value(name = "60")]
    Hour,
}

impl From<ServiceArg> for ServiceOption {
    fn from(val: ServiceArg) -> Self {
        match val {
            ServiceArg::HalfHour => ServiceOption::HalfHour,
            ServiceArg::Hour => ServiceOption::Hour,
        }
    }
}

/// Answers for each step of the booking wizard.
#[derive(ClapArgs)]
pub struct BookArgs {
    /// Start from this recurring plan's occurrence (needs --on)
    #[arg(long, requires = "on")]
    pub plan: Option<u64>,
    /// Occurrence date for --plan
    #[arg(long, requires = "plan")]
    pub on: Option<Date>,
    /// Walk length in minutes
    #[arg(short, long, value_enum)]
    pub service: Option<ServiceArg>,
    /// Walk date (YYYY-MM-DD), tomorrow when omitted
    #[arg(short, long)]
    pub date: Option<Date>,
    /// Start time (HH:MM), 10:00 when omitted
    #[arg(short, long)]
    pub time: Option<Time>,
    /// Pickup address
    #[arg(short, long)]
    pub address: Option<String>,
    /// IDs of the dogs to walk, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub dogs: Vec<u64>,
    /// Instructions for the walker
    #[arg(short, long)]
    pub instructions: Option<String>,
    /// Walker ID
    #[arg(short, long)]
    pub walker: Option<u64>,
    /// Show the review step without booking
    #[arg(long)]
    pub dry_run: bool,
}

// ============================================================================
// Profile, cards and inbox
// ============================================================================

#[derive(ClapArgs)]
pub struct UpdateProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub emergency_contact: Option<String>,
    #[arg(long)]
    pub preferred_walk_time: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}

impl From<UpdateProfileArgs> for ProfileUpdate {
    fn from(val: UpdateProfileArgs) -> Self {
        ProfileUpdate {
            name: val.name,
            email: val.email,
            phone: val.phone,
            address: val.address,
            bio: val.bio,
            emergency_contact: val.emergency_contact,
            preferred_walk_time: val.preferred_walk_time,
            avatar: val.avatar,
        }
    }
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile and how complete it is
    #[command(alias = "s")]
    Show,
    /// Update profile fields
    #[command(alias = "u")]
    Update(UpdateProfileArgs),
}

#[derive(ClapArgs)]
pub struct AddCardArgs {
    /// Card number; spaces allowed
    #[arg(long)]
    pub number: String,
    /// Expiry as MM/YY
    #[arg(long)]
    pub expiry: String,
    #[arg(long)]
    pub cvv: String,
    /// Cardholder name
    #[arg(long)]
    pub name: String,
    /// Billing street address
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub city: String,
    /// Two-letter state code
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub zip: String,
    /// Make this the default payment method
    #[arg(long)]
    pub default: bool,
}

impl From<AddCardArgs> for NewCard {
    fn from(val: AddCardArgs) -> Self {
        NewCard {
            card_number: val.number,
            expiry: val.expiry,
            cvv: val.cvv,
            name: val.name,
            billing_address: val.address,
            city: val.city,
            state: val.state,
            zip: val.zip,
            make_default: val.default,
        }
    }
}

#[derive(Subcommand)]
pub enum CardCommands {
    /// List saved cards and recent transactions
    #[command(aliases = ["l", "ls"])]
    List,
    /// Save a new card
    #[command(alias = "a")]
    Add(AddCardArgs),
    /// Make a saved card the default
    Default(IdArgs),
}

#[derive(Subcommand)]
pub enum InboxCommands {
    /// List conversations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show the messages with one walker
    Chat(IdArgs),
}
