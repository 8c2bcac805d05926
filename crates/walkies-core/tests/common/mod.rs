use jiff::civil::{date, Date};
use walkies_core::{AppStore, StoreBuilder};

/// Reference date used throughout: Wednesday 2025-09-17, the day before the
/// demo plan starts.
pub const TODAY: Date = date(2025, 9, 17);

/// Helper function to create a store seeded with the demo data
pub fn create_demo_store() -> AppStore {
    StoreBuilder::new()
        .with_demo_data()
        .build()
        .expect("Failed to build demo store")
}
