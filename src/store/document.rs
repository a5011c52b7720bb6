//! The root document holding every collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::models::{
    Analytics, Assignment, Customer, Event, FoodItem, Shift, StaffMember, User,
};

/// The single persisted JSON object all domain data lives in.
///
/// Every slot defaults to empty, so a partial or absent document parses to
/// whatever subset is actually present. Wire keys are camelCase; that is the
/// storage contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub food_items: Vec<FoodItem>,
    #[serde(default)]
    pub analytics: Analytics,
}

impl Document {
    /// Display name of the user with the given id, or "Unknown" for a
    /// dangling reference.
    pub fn user_name(&self, id: &str) -> &str {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Title of the event with the given id, or "Unknown Event" for a
    /// dangling reference.
    pub fn event_title(&self, id: &str) -> &str {
        self.events
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.title.as_str())
            .unwrap_or("Unknown Event")
    }

    /// Display name of the customer with the given id, or "Unknown" for a
    /// dangling reference.
    pub fn customer_name(&self, id: &str) -> &str {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown")
    }
}

/// A record type stored as one named, ordered sequence in the [`Document`].
///
/// Implementations tie a record type to its wire key and its slot, which is
/// what lets [`Store::read`](super::Store::read) and
/// [`Store::write`](super::Store::write) address collections by type.
pub trait Collection: Serialize + DeserializeOwned + Clone {
    /// Wire key of this collection inside the document.
    const KEY: &'static str;

    fn records(doc: &Document) -> &[Self];
    fn records_mut(doc: &mut Document) -> &mut Vec<Self>;
}

macro_rules! impl_collection {
    ($ty:ty, $key:literal, $slot:ident) => {
        impl Collection for $ty {
            const KEY: &'static str = $key;

            fn records(doc: &Document) -> &[Self] {
                &doc.$slot
            }

            fn records_mut(doc: &mut Document) -> &mut Vec<Self> {
                &mut doc.$slot
            }
        }
    };
}

impl_collection!(User, "users", users);
impl_collection!(Event, "events", events);
impl_collection!(Assignment, "assignments", assignments);
impl_collection!(Shift, "shifts", shifts);
impl_collection!(StaffMember, "staff", staff);
impl_collection!(Customer, "customers", customers);
impl_collection!(FoodItem, "foodItems", food_items);
