use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::display::{display_list, DisplayStyle};

use super::{ConfigArgs, RunCommand};

/// List the skills available on the platform.
#[derive(Args)]
pub struct SkillsArgs {
    /// Only show skills whose name or tags contain this text.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only show skills with this tag.
    #[arg(long, short)]
    pub tag: Option<String>,

    #[arg(short, long, default_value = "table")]
    pub output: DisplayStyle,
}

#[async_trait]
impl RunCommand for SkillsArgs {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let api = config.build_api()?;
        let mut skills = api.skills().await?;

        if let Some(ref tag) = self.tag {
            skills.retain(|s| s.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)));
        }
        if let Some(ref search) = self.search {
            let search = search.to_lowercase();
            skills.retain(|s| {
                s.name.to_lowercase().contains(&search)
                    || s.tags.iter().any(|t| t.to_lowercase().contains(&search))
            });
        }

        display_list(&skills, self.output)
    }
}
