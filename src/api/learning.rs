use serde_json::Value;

use crate::client::RequestError;
use crate::types::learning::{LearningPath, ProgressUpdate, TopicProgress};
use crate::types::roadmap::Resource;
use crate::types::Id;

use super::Api;

pub const MY_PATHS_PATH: &str = "/learning/my-paths";
pub const PROGRESS_PATH: &str = "/learning/progress";

impl Api {
    pub async fn my_paths(&self) -> Result<Vec<LearningPath>, RequestError> {
        self.client.get(MY_PATHS_PATH).await
    }

    pub async fn path(&self, id: Id) -> Result<LearningPath, RequestError> {
        self.client.get(&format!("/learning/paths/{id}")).await
    }

    pub async fn path_progress(&self, id: Id) -> Result<Vec<TopicProgress>, RequestError> {
        self.client.get(&format!("{PROGRESS_PATH}/{id}")).await
    }

    pub async fn topic_resources(&self, topic: Id) -> Result<Vec<Resource>, RequestError> {
        self.client
            .get(&format!("/learning/topics/{topic}/resources"))
            .await
    }

    pub async fn update_progress(&self, update: &ProgressUpdate) -> Result<(), RequestError> {
        let _: Value = self.client.post(PROGRESS_PATH, Some(update)).await?;
        Ok(())
    }
}
