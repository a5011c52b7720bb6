//! Work assignment records.

use serde::{Deserialize, Serialize};

/// A task assigned to a manager for a specific event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub manager_id: String,
    pub event_id: String,
    pub task: String,
    pub priority: String,
    pub due_date: String,
    pub status: String,
    pub created_at: String,
}
