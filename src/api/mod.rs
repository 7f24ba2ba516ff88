pub mod auth;
pub mod learning;
pub mod roadmaps;

use crate::client::{Client, RequestError};
use crate::session::Session;
use crate::types::skill::Skill;

pub const SKILLS_PATH: &str = "/skills";

/// Typed access to the VLE endpoints. Every payload is decoded into its
/// schema at this boundary, a mismatch is a [`RequestError::Schema`].
#[derive(Clone)]
pub struct Api {
    client: Client,
}

impl Api {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, RequestError> {
        self.client.get(SKILLS_PATH).await
    }
}
