use anyhow::{bail, Result};
use async_trait::async_trait;
use clap::Args;

use crate::display::display_json;

use super::{ConfigArgs, RunCommand};

/// Display the current user.
#[derive(Args)]
pub struct WhoamiArgs {
    /// Show the user record cached at login instead of asking the server.
    #[arg(long)]
    pub cached: bool,
}

#[async_trait]
impl RunCommand for WhoamiArgs {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let api = config.build_api()?;

        if self.cached {
            return match api.session().user() {
                Some(user) => display_json(&user),
                None => bail!("no cached user, please login first"),
            };
        }

        if api.session().token().is_none() {
            bail!("not logged in, please login first");
        }
        let user = api.me().await?;
        display_json(&user)
    }
}
