use log::warn;
use serde::Serialize;

use crate::api::Api;
use crate::client::RequestError;
use crate::progress::{path_completion, roadmap_percentage, verified_skills, VerifiedSkill};
use crate::types::learning::{LearningPath, Topic, TopicProgress};
use crate::types::roadmap::UserRoadmap;
use crate::types::user::User;
use crate::types::Id;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapProgress {
    #[serde(flatten)]
    pub roadmap: UserRoadmap,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MyLearning {
    LoggedOut,
    Empty,
    Roadmaps(Vec<RoadmapProgress>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathView {
    pub path: LearningPath,
    pub progress: Vec<TopicProgress>,
    pub completion: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LearningView {
    NoPaths,
    Path(PathView),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileView {
    LoggedOut,
    Profile {
        user: User,
        skills: Vec<VerifiedSkill>,
    },
}

/// The "my learning" page: started roadmaps with their completion.
///
/// Without a token nothing is requested. A 401 or 403 answer drops the
/// token and shows the logged out state, other errors are returned.
pub async fn load_my_learning(api: &Api) -> Result<MyLearning, RequestError> {
    if api.session().token().is_none() {
        return Ok(MyLearning::LoggedOut);
    }

    let roadmaps = match api.my_roadmaps().await {
        Ok(roadmaps) => roadmaps,
        Err(err) if err.is_unauthorized() || err.is_forbidden() => {
            warn!("Load learning progress rejected: {err}");
            api.session().evict_token();
            return Ok(MyLearning::LoggedOut);
        }
        Err(err) => return Err(err),
    };

    if roadmaps.is_empty() {
        return Ok(MyLearning::Empty);
    }
    let roadmaps = roadmaps
        .into_iter()
        .map(|roadmap| RoadmapProgress {
            percent: roadmap_percentage(&roadmap),
            roadmap,
        })
        .collect();
    Ok(MyLearning::Roadmaps(roadmaps))
}

/// Loads a learning path and its progress. Both requests are in flight at the
/// same time, the view is built once both have answered.
pub async fn load_path(api: &Api, id: Id) -> Result<PathView, RequestError> {
    let (path, progress) = tokio::try_join!(api.path(id), api.path_progress(id))?;
    let completion = path_completion(&path.topics, &progress);
    Ok(PathView {
        path,
        progress,
        completion,
    })
}

/// The learning page: the requested path, or the user's first path when none
/// is given.
pub async fn load_learning(api: &Api, id: Option<Id>) -> Result<LearningView, RequestError> {
    let id = match id {
        Some(id) => id,
        None => match api.my_paths().await?.first() {
            Some(path) => path.id,
            None => return Ok(LearningView::NoPaths),
        },
    };
    let view = load_path(api, id).await?;
    Ok(LearningView::Path(view))
}

/// The CV page: the profile from `/auth/me` plus the verified skills.
///
/// A failing profile fetch means logged out. A failing progress fetch only
/// leaves the skill list empty.
pub async fn load_profile(api: &Api) -> ProfileView {
    if api.session().token().is_none() {
        return ProfileView::LoggedOut;
    }

    let user = match api.me().await {
        Ok(user) => user,
        Err(err) => {
            warn!("Fetch user profile failed: {err}");
            return ProfileView::LoggedOut;
        }
    };

    let skills = match api.my_roadmaps().await {
        Ok(roadmaps) => verified_skills(&roadmaps),
        Err(err) => {
            warn!("Fetch skills failed: {err}");
            Vec::new()
        }
    };

    ProfileView::Profile { user, skills }
}

impl PathView {
    /// The topic shown first, the first one of the path.
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.path.topics.first()
    }
}
