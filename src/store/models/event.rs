//! Wedding event records.

use serde::{Deserialize, Serialize};

/// A booked or planned wedding in the `events` collection.
///
/// `customer_id` is a plain string reference resolved by linear scan at read
/// time; a dangling id is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub customer_id: String,
    pub title: String,
    pub date: String,
    pub venue: String,
    pub guests: u32,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}
