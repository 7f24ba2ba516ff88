use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use super::{read_password, ConfigArgs, RunCommand};

/// Create an account, the new session is kept like after `login`.
#[derive(Args)]
pub struct SignupArgs {
    /// Full name shown on the profile.
    #[arg(long, short)]
    pub name: String,

    pub email: String,

    /// Account password, read from stdin when omitted.
    #[arg(long, short)]
    pub password: Option<String>,
}

#[async_trait]
impl RunCommand for SignupArgs {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let password = read_password(&self.password)?;
        let api = config.build_api()?;

        let user = api.signup(&self.name, &self.email, &password).await?;
        println!("Account created, welcome {}", user.display_name());
        Ok(())
    }
}
