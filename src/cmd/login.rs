use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use super::{read_password, ConfigArgs, RunCommand};

/// Log in and keep the session for later commands.
#[derive(Args)]
pub struct LoginArgs {
    /// Account email.
    pub email: String,

    /// Account password, read from stdin when omitted.
    #[arg(long, short)]
    pub password: Option<String>,
}

#[async_trait]
impl RunCommand for LoginArgs {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let password = read_password(&self.password)?;
        let api = config.build_api()?;

        let user = api.login(&self.email, &password).await?;
        println!("Welcome back, {}", user.display_name());
        Ok(())
    }
}
