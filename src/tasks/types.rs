use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::shared::models::TaskPriority;

/// Body of POST /api/addtask. Title and description are required but arrive
/// as options so the handler can answer missing fields with the API's own
/// validation message instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Trimmed title and description, or None when either is missing or
    /// blank.
    pub fn trimmed_fields(&self) -> Option<(String, String)> {
        let title = self.title.as_deref().unwrap_or("").trim();
        let description = self.description.as_deref().unwrap_or("").trim();
        if title.is_empty() || description.is_empty() {
            return None;
        }
        Some((title.to_string(), description.to_string()))
    }
}
