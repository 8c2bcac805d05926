//! Result wrapper types for displaying operation outcomes.
//!
//! Create, update and delete results share one format per operation; each
//! record type only says what it is called through [`Resource`].

use std::fmt;

use crate::models::{Dog, PaymentCard, RecurringPlan, ResolvedPlan, WalkRecord};

/// A record that can be reported on by the result wrappers.
pub trait Resource {
    /// Lower-case noun used in messages, e.g. `dog`
    const KIND: &'static str;

    fn resource_id(&self) -> u64;

    /// Name shown in deletion confirmations.
    fn resource_name(&self) -> String;
}

impl Resource for Dog {
    const KIND: &'static str = "dog";

    fn resource_id(&self) -> u64 {
        self.id
    }

    fn resource_name(&self) -> String {
        self.name.clone()
    }
}

impl Resource for WalkRecord {
    const KIND: &'static str = "walk";

    fn resource_id(&self) -> u64 {
        self.id
    }

    fn resource_name(&self) -> String {
        format!("{} on {}", self.dog_names(), self.date)
    }
}

impl Resource for RecurringPlan {
    const KIND: &'static str = "recurring plan";

    fn resource_id(&self) -> u64 {
        self.id
    }

    fn resource_name(&self) -> String {
        if self.label.is_empty() {
            "Recurring walk".to_string()
        } else {
            self.label.clone()
        }
    }
}

impl Resource for ResolvedPlan {
    const KIND: &'static str = RecurringPlan::KIND;

    fn resource_id(&self) -> u64 {
        self.plan.id
    }

    fn resource_name(&self) -> String {
        self.title()
    }
}

impl Resource for PaymentCard {
    const KIND: &'static str = "card";

    fn resource_id(&self) -> u64 {
        self.id
    }

    fn resource_name(&self) -> String {
        format!("{} ending {}", self.brand, self.last4)
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use walkies_core::{display::CreateResult, params::NewDog, StoreBuilder};
///
/// let mut store = StoreBuilder::new().build()?;
/// let dog = store.add_dog(NewDog {
///     name: "Pepper".to_string(),
///     ..Default::default()
/// });
/// let output = CreateResult::new(dog).to_string();
/// assert!(output.starts_with("Created dog with ID: 1"));
/// # Ok::<(), walkies_core::WalkiesError>(())
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource + fmt::Display> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.resource_id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing which fields changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource + fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.resource_id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying deletion confirmations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.resource_name(),
            self.resource.resource_id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pepper() -> Dog {
        Dog {
            id: 12,
            name: "Pepper".to_string(),
            avatar: "🐶".to_string(),
            breed: "Beagle".to_string(),
            age: Some(3),
            notes: String::new(),
            vet: String::new(),
            allergies: String::new(),
            likes: String::new(),
            dislikes: String::new(),
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(pepper(), vec!["breed".to_string()]);
        let output = result.to_string();
        assert!(output.starts_with("Updated dog with ID: 12"));
        assert!(output.contains("Changes made:\n- breed"));
        assert!(output.contains("- Breed: Beagle, 3 yrs"));
    }

    #[test]
    fn test_delete_result() {
        let output = DeleteResult::new(pepper()).to_string();
        assert_eq!(output, "Deleted dog 'Pepper' (ID: 12)\n");
    }
}
