use serde::Serialize;

use crate::types::learning::{Topic, TopicProgress, TopicStatus};
use crate::types::roadmap::UserRoadmap;
use crate::types::Id;

/// `completed / total` as a rounded percentage, 0 for an empty total.
pub fn progress_percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (f64::from(completed) / f64::from(total) * 100.0).round();
    percent as u32
}

pub fn roadmap_percentage(roadmap: &UserRoadmap) -> u32 {
    progress_percentage(roadmap.completed_nodes, roadmap.total_nodes)
}

/// Status of a topic, topics without a progress entry are not started.
pub fn topic_status(progress: &[TopicProgress], topic: Id) -> TopicStatus {
    progress
        .iter()
        .find(|p| p.id == topic)
        .map(|p| p.status)
        .unwrap_or_default()
}

/// Share of the path's topics that are completed. Progress entries for
/// topics outside the path are ignored, never above 100.
pub fn path_completion(topics: &[Topic], progress: &[TopicProgress]) -> u32 {
    let completed = topics
        .iter()
        .filter(|t| topic_status(progress, t.id) == TopicStatus::Completed)
        .count();
    progress_percentage(completed as u32, topics.len() as u32)
}

/// A skill backed by progress on a roadmap, as shown on the CV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedSkill {
    pub name: String,
    pub verified: bool,
    pub completed_at: String,
}

/// Every roadmap with at least one completed node counts as a verified skill.
pub fn verified_skills(roadmaps: &[UserRoadmap]) -> Vec<VerifiedSkill> {
    roadmaps
        .iter()
        .filter(|r| r.completed_nodes > 0)
        .map(|r| VerifiedSkill {
            name: r.name.clone(),
            verified: true,
            completed_at: r.last_accessed.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap(name: &str, completed: u32, total: u32) -> UserRoadmap {
        UserRoadmap {
            id: 1,
            name: name.to_string(),
            description: String::new(),
            icon: String::new(),
            category: String::new(),
            started_at: String::new(),
            last_accessed: String::from("2025-03-01T00:00:00Z"),
            total_nodes: total,
            completed_nodes: completed,
        }
    }

    fn topic(id: Id) -> Topic {
        Topic {
            id,
            title: format!("topic {id}"),
            estimated_hours: None,
        }
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(0, 0), 0);
        assert_eq!(progress_percentage(5, 0), 0);
        assert_eq!(progress_percentage(0, 3), 0);
        assert_eq!(progress_percentage(1, 3), 33);
        assert_eq!(progress_percentage(2, 3), 67);
        assert_eq!(progress_percentage(1, 8), 13);
        assert_eq!(progress_percentage(4, 4), 100);
    }

    #[test]
    fn test_topic_status() {
        let progress = vec![
            TopicProgress {
                id: 1,
                status: TopicStatus::Completed,
            },
            TopicProgress {
                id: 2,
                status: TopicStatus::InProgress,
            },
        ];
        assert_eq!(topic_status(&progress, 1), TopicStatus::Completed);
        assert_eq!(topic_status(&progress, 2), TopicStatus::InProgress);
        assert_eq!(topic_status(&progress, 3), TopicStatus::NotStarted);
    }

    #[test]
    fn test_path_completion() {
        let topics = vec![topic(1), topic(2), topic(3)];
        let progress = vec![
            TopicProgress {
                id: 1,
                status: TopicStatus::Completed,
            },
            TopicProgress {
                id: 2,
                status: TopicStatus::InProgress,
            },
        ];
        assert_eq!(path_completion(&topics, &progress), 33);
        assert_eq!(path_completion(&[], &progress), 0);
    }

    #[test]
    fn test_path_completion_ignores_foreign_entries() {
        let topics = vec![topic(1)];
        let progress = vec![
            TopicProgress {
                id: 1,
                status: TopicStatus::Completed,
            },
            TopicProgress {
                id: 1,
                status: TopicStatus::Completed,
            },
            TopicProgress {
                id: 9,
                status: TopicStatus::Completed,
            },
        ];
        assert_eq!(path_completion(&topics, &progress), 100);
    }

    #[test]
    fn test_verified_skills() {
        let roadmaps = vec![roadmap("Backend", 2, 10), roadmap("Mobile", 0, 8)];
        let skills = verified_skills(&roadmaps);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Backend");
        assert!(skills[0].verified);
        assert_eq!(skills[0].completed_at, "2025-03-01T00:00:00Z");
    }
}
