use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::display::display_json;

use super::{ConfigArgs, RunCommand};

/// Display the client configuration in use, in JSON format.
#[derive(Args)]
pub struct ShowConfigArgs {}

#[async_trait]
impl RunCommand for ShowConfigArgs {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let factory = config.build_factory()?;
        display_json(factory.config())
    }
}
