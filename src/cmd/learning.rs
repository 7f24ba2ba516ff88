use anyhow::Result;
use async_trait::async_trait;
use clap::{Args, Subcommand};

use crate::display::{display_list, DisplayStyle};
use crate::progress::topic_status;
use crate::table::Table;
use crate::types::learning::{ProgressUpdate, TopicStatus};
use crate::types::Id;
use crate::view::{load_learning, LearningView, PathView};

use super::{ConfigArgs, RunCommand};

/// Learning paths, their topics and your progress on them.
#[derive(Args)]
pub struct LearningCommand {
    #[command(subcommand)]
    pub command: LearningCommands,
}

#[derive(Subcommand)]
pub enum LearningCommands {
    /// Learning paths you follow.
    Paths {
        #[arg(short, long, default_value = "table")]
        output: DisplayStyle,
    },

    /// Topics of a path with their status, your first path when no id is given.
    Show { id: Option<Id> },

    /// Learning resources of a topic.
    Resources {
        topic: Id,

        #[arg(short, long, default_value = "table")]
        output: DisplayStyle,
    },

    /// Record progress on a topic.
    Update {
        topic: Id,

        status: TopicStatus,

        /// Defaults to 0, 50 or 100 depending on the status.
        #[arg(long, short)]
        percent: Option<u8>,
    },
}

#[async_trait]
impl RunCommand for LearningCommand {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let api = config.build_api()?;

        match self.command {
            LearningCommands::Paths { output } => {
                let paths = api.my_paths().await?;
                display_list(&paths, output)
            }
            LearningCommands::Show { id } => {
                match load_learning(&api, id).await? {
                    LearningView::NoPaths => {
                        println!("You are not following any learning path yet");
                    }
                    LearningView::Path(view) => print!("{}", render_path(&view)),
                }
                Ok(())
            }
            LearningCommands::Resources { topic, output } => {
                let resources = api.topic_resources(topic).await?;
                display_list(&resources, output)
            }
            LearningCommands::Update {
                topic,
                status,
                percent,
            } => {
                let update = ProgressUpdate::new(topic, status, percent);
                api.update_progress(&update).await?;
                println!(
                    "Topic {topic} marked {} ({}%)",
                    update.status, update.progress_percent
                );
                Ok(())
            }
        }
    }
}

fn render_path(view: &PathView) -> String {
    let path = &view.path;
    let mut out = format!("{} - {}% complete\n", path.name, view.completion);
    if !path.description.is_empty() {
        out.push_str(&format!("{}\n", path.description));
    }
    if path.topics.is_empty() {
        out.push_str("This path has no topics yet\n");
        return out;
    }

    let mut table = Table::with_titles(&["ID", "Topic", "Hours", "Status"], path.topics.len());
    for topic in path.topics.iter() {
        table.add(vec![
            topic.id.to_string(),
            topic.title.clone(),
            topic
                .estimated_hours
                .map(|h| h.to_string())
                .unwrap_or_default(),
            topic_status(&view.progress, topic.id).to_string(),
        ]);
    }
    out.push_str(&table.render());
    out
}
