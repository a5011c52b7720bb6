//! Duty shift records.

use serde::{Deserialize, Serialize};

/// A scheduled duty window for a manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub manager_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
