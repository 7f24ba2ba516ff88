use serde_json::Value;

use crate::client::{RequestError, NO_BODY};
use crate::types::roadmap::{
    MyProgressResponse, NodeResourcesResponse, Resource, Roadmap, UserRoadmap,
};
use crate::types::Id;

use super::Api;

pub const MY_PROGRESS_PATH: &str = "/roadmaps/my-progress";

impl Api {
    /// Roadmaps the user has started, with node counts.
    pub async fn my_roadmaps(&self) -> Result<Vec<UserRoadmap>, RequestError> {
        let resp: MyProgressResponse = self.client.get(MY_PROGRESS_PATH).await?;
        Ok(resp.roadmaps)
    }

    pub async fn roadmap(&self, id: Id) -> Result<Roadmap, RequestError> {
        self.client.get(&format!("/roadmaps/{id}")).await
    }

    pub async fn node_resources(&self, id: Id, node: Id) -> Result<Vec<Resource>, RequestError> {
        let resp: NodeResourcesResponse = self
            .client
            .get(&format!("/roadmaps/{id}/nodes/{node}/resources"))
            .await?;
        Ok(resp.resources)
    }

    pub async fn start_roadmap(&self, id: Id) -> Result<(), RequestError> {
        let _: Value = self
            .client
            .post(&format!("/roadmaps/{id}/start"), NO_BODY)
            .await?;
        Ok(())
    }
}
