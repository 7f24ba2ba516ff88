use anyhow::{bail, Result};
use async_trait::async_trait;
use clap::{Args, Subcommand};

use crate::display::{display_json, display_list, DisplayStyle};
use crate::types::roadmap::Roadmap;
use crate::types::Id;
use crate::view::{load_my_learning, MyLearning};

use super::{ConfigArgs, RunCommand};

/// Roadmaps: your progress, details, starting one.
#[derive(Args)]
pub struct RoadmapsCommand {
    #[command(subcommand)]
    pub command: RoadmapsCommands,
}

#[derive(Subcommand)]
pub enum RoadmapsCommands {
    /// Roadmaps you have started, with their completion.
    Progress {
        #[arg(short, long, default_value = "table")]
        output: DisplayStyle,
    },

    /// Phases and nodes of a roadmap.
    Show {
        id: Id,

        #[arg(short, long, default_value = "table")]
        output: DisplayStyle,
    },

    /// Start a roadmap, it then shows up in `roadmaps progress`.
    Start { id: Id },

    /// Learning resources of one roadmap node.
    Resources {
        id: Id,

        node: Id,

        #[arg(short, long, default_value = "table")]
        output: DisplayStyle,
    },
}

#[async_trait]
impl RunCommand for RoadmapsCommand {
    async fn run(&self, config: &ConfigArgs) -> Result<()> {
        let api = config.build_api()?;

        match self.command {
            RoadmapsCommands::Progress { output } => match load_my_learning(&api).await? {
                MyLearning::LoggedOut => bail!("not logged in, please login first"),
                MyLearning::Empty => {
                    println!("No roadmaps started yet, use `vle roadmaps start <id>`");
                    Ok(())
                }
                MyLearning::Roadmaps(roadmaps) => display_list(&roadmaps, output),
            },
            RoadmapsCommands::Show { id, output } => {
                let roadmap = api.roadmap(id).await?;
                match output {
                    DisplayStyle::Json => display_json(&roadmap),
                    DisplayStyle::Table => {
                        print!("{}", render_roadmap(&roadmap));
                        Ok(())
                    }
                }
            }
            RoadmapsCommands::Start { id } => {
                if api.session().token().is_none() {
                    bail!("please login to start a roadmap");
                }
                api.start_roadmap(id).await?;
                println!("Roadmap started, check your progress with `vle roadmaps progress`");
                Ok(())
            }
            RoadmapsCommands::Resources { id, node, output } => {
                let resources = api.node_resources(id, node).await?;
                display_list(&resources, output)
            }
        }
    }
}

fn render_roadmap(roadmap: &Roadmap) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} [{}] {}, {}h, {} nodes\n",
        roadmap.name,
        roadmap.category,
        roadmap.difficulty,
        roadmap.estimated_hours,
        roadmap.node_count()
    ));
    if !roadmap.description.is_empty() {
        out.push_str(&format!("{}\n", roadmap.description));
    }
    for phase in roadmap.phases.iter() {
        out.push_str(&format!("\nPhase {}: {}\n", phase.phase_number, phase.title));
        for node in phase.nodes.iter() {
            out.push_str(&format!(
                "  #{} {} ({}h)\n",
                node.id, node.title, node.estimated_hours
            ));
        }
    }
    out
}
