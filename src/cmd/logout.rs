use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use super::{ConfigArgs, RunCommand};

/// Forget the local session.
#[derive(Args)]
pub struct LogoutArgs {}

#[async_trait]
impl RunCommand for LogoutArgs {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let api = config.build_api()?;
        api.logout()?;
        println!("Logged out");
        Ok(())
    }
}
