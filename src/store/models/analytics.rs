//! Derived-statistics block.
//!
//! Unlike the other document slots, `analytics` is a single nested object,
//! not a sequence of records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default)]
    pub customers: CustomerStats,
    #[serde(default)]
    pub monthly_data: Vec<MonthlyStat>,
}

/// Booking funnel counters shown on the analytics dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub booked: u32,
    pub confirmed: u32,
    pub canceled: u32,
    pub walkins: u32,
}

/// One month of booking volume and revenue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    pub month: String,
    pub bookings: u32,
    pub revenue: u64,
}
