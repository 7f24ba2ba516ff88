use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::progress::VerifiedSkill;
use crate::table::Table;
use crate::time::format_date;
use crate::types::learning::LearningPath;
use crate::types::roadmap::Resource;
use crate::types::skill::Skill;
use crate::view::RoadmapProgress;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DisplayStyle {
    Table,
    Json,
}

pub trait TerminalDisplay {
    fn table_titles() -> Vec<&'static str>;
    fn table_row(&self) -> Vec<String>;
}

pub fn display_json<T: Serialize + ?Sized>(o: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(o)?);
    Ok(())
}

pub fn display_list<T: Serialize + TerminalDisplay>(list: &[T], style: DisplayStyle) -> Result<()> {
    match style {
        DisplayStyle::Table => {
            if list.is_empty() {
                println!("<empty list>");
                return Ok(());
            }
            let mut table = Table::with_titles(&T::table_titles(), list.len());
            for item in list {
                table.add(item.table_row());
            }
            table.show()?;
        }
        DisplayStyle::Json => display_json(list)?,
    }
    Ok(())
}

impl TerminalDisplay for Skill {
    fn table_titles() -> Vec<&'static str> {
        vec!["ID", "Name", "Tags", "Description"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.tags.join(","),
            self.description.clone(),
        ]
    }
}

impl TerminalDisplay for RoadmapProgress {
    fn table_titles() -> Vec<&'static str> {
        vec!["ID", "Name", "Category", "Progress", "Started", "Last Accessed"]
    }

    fn table_row(&self) -> Vec<String> {
        let roadmap = &self.roadmap;
        vec![
            roadmap.id.to_string(),
            roadmap.name.clone(),
            roadmap.category.clone(),
            format!(
                "{}% ({}/{})",
                self.percent, roadmap.completed_nodes, roadmap.total_nodes
            ),
            format_date(&roadmap.started_at),
            format_date(&roadmap.last_accessed),
        ]
    }
}

impl TerminalDisplay for Resource {
    fn table_titles() -> Vec<&'static str> {
        vec!["ID", "Type", "Title", "Duration", "Provider", "URL"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.resource_type.clone(),
            self.title.clone(),
            match self.duration_minutes {
                Some(minutes) => format!("{minutes} min"),
                None => String::new(),
            },
            self.provider.clone().unwrap_or_default(),
            self.url.clone(),
        ]
    }
}

impl TerminalDisplay for LearningPath {
    fn table_titles() -> Vec<&'static str> {
        vec!["ID", "Name", "Topics", "Description"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.topics.len().to_string(),
            self.description.clone(),
        ]
    }
}

impl TerminalDisplay for VerifiedSkill {
    fn table_titles() -> Vec<&'static str> {
        vec!["Skill", "Verified", "Last Activity"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            if self.verified { "yes" } else { "no" }.to_string(),
            format_date(&self.completed_at),
        ]
    }
}
