use anyhow::{bail, Result};
use async_trait::async_trait;
use clap::Args;
use serde_json::json;

use crate::display::{display_json, display_list, DisplayStyle};
use crate::view::{load_profile, ProfileView};

use super::{ConfigArgs, RunCommand};

/// Show your profile and the skills verified by roadmap progress.
#[derive(Args)]
pub struct ProfileArgs {
    #[arg(short, long, default_value = "table")]
    pub output: DisplayStyle,
}

#[async_trait]
impl RunCommand for ProfileArgs {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let api = config.build_api()?;

        let (user, skills) = match load_profile(&api).await {
            ProfileView::LoggedOut => bail!("not logged in, please login first"),
            ProfileView::Profile { user, skills } => (user, skills),
        };

        if let DisplayStyle::Json = self.output {
            return display_json(&json!({
                "user": user,
                "skills": skills,
            }));
        }

        println!("{}", user.display_name());
        if !user.email.is_empty() {
            println!("{}", user.email);
        }
        println!();
        if skills.is_empty() {
            println!("No verified skills yet, complete roadmap nodes to earn some");
            return Ok(());
        }
        display_list(&skills, self.output)
    }
}
