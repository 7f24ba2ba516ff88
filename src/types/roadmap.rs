use serde::{Deserialize, Serialize};

use super::Id;

/// A roadmap the current user has started, as listed by `/roadmaps/my-progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRoadmap {
    pub id: Id,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub started_at: String,

    #[serde(default)]
    pub last_accessed: String,

    pub total_nodes: u32,

    pub completed_nodes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyProgressResponse {
    #[serde(default)]
    pub roadmaps: Vec<UserRoadmap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: Id,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub difficulty: String,

    #[serde(default)]
    pub estimated_hours: f64,

    #[serde(default)]
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: Id,

    pub phase_number: u32,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: Id,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub estimated_hours: f64,
}

/// Learning material attached to a roadmap node or a learning topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Id,

    #[serde(default)]
    pub resource_type: String,

    pub title: String,

    pub url: String,

    #[serde(default, alias = "duration")]
    pub duration_minutes: Option<u32>,

    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeResourcesResponse {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Roadmap {
    pub fn node_count(&self) -> usize {
        self.phases.iter().map(|p| p.nodes.len()).sum()
    }
}
