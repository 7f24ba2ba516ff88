use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: Id,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: Id,

    pub title: String,

    #[serde(default)]
    pub estimated_hours: Option<f64>,
}

/// Progress entry of one topic, `id` is the topic id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicProgress {
    pub id: Id,

    pub status: TopicStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub topic_id: Id,
    pub status: TopicStatus,
    pub progress_percent: u8,
}

impl TopicStatus {
    /// The percentage reported along with a status when the caller gives none.
    pub fn default_percent(self) -> u8 {
        match self {
            TopicStatus::NotStarted => 0,
            TopicStatus::InProgress => 50,
            TopicStatus::Completed => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TopicStatus::NotStarted => "not_started",
            TopicStatus::InProgress => "in_progress",
            TopicStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProgressUpdate {
    pub fn new(topic_id: Id, status: TopicStatus, percent: Option<u8>) -> Self {
        Self {
            topic_id,
            status,
            progress_percent: percent.unwrap_or(status.default_percent()).min(100),
        }
    }
}
