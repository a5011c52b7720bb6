//! Operational staff records.

use serde::{Deserialize, Serialize};

/// A staff member available for event duty.
///
/// `assigned_to` is an explicit null on the wire when the member is
/// unassigned, so it is serialized even when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub department: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
}
