use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person or resource attached to a group, one physical row each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubItem {
    pub name: String,
    pub identifier: String,
}

/// One payment record: an event with its client, date, amount and staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub counterpart: String,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

impl Group {
    /// Physical rows this group occupies. Never zero.
    pub fn row_count(&self) -> usize {
        self.sub_items.len().max(1)
    }
}

pub fn total_lines(groups: &[Group]) -> usize {
    groups.iter().map(Group::row_count).sum()
}
