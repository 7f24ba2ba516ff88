mod config;
mod learning;
mod login;
mod logout;
mod profile;
mod roadmaps;
mod signup;
mod skills;
mod whoami;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};

use crate::api::Api;
use crate::client::factory::ClientFactory;
use crate::config::PathSet;
use crate::logs;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Directory holding `client.toml`. Defaults to `$VLE_CONFIG`, then
    /// `~/.config/vle`.
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Directory for local data such as the session. Defaults to `$VLE_DATA`,
    /// then `~/.local/share/vle`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level: error, warn, info or debug.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

impl ConfigArgs {
    pub fn build_path_set(&self) -> Result<PathSet> {
        PathSet::new(self.config_dir.clone(), self.data_dir.clone())
    }

    pub fn build_factory(&self) -> Result<ClientFactory> {
        let ps = self.build_path_set()?;
        ClientFactory::load(&ps)
    }

    pub fn build_api(&self) -> Result<Api> {
        self.build_factory()?.build_api()
    }
}

#[async_trait]
pub trait RunCommand {
    async fn run(&self, config: &ConfigArgs) -> Result<()>;
}

/// Command line client of the VLE learning platform.
#[derive(Parser)]
#[command(author, version, about)]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    Config(config::ShowConfigArgs),
    Learning(learning::LearningCommand),
    Login(login::LoginArgs),
    Logout(logout::LogoutArgs),
    Profile(profile::ProfileArgs),
    Roadmaps(roadmaps::RoadmapsCommand),
    Signup(signup::SignupArgs),
    Skills(skills::SkillsArgs),
    Whoami(whoami::WhoamiArgs),
}

impl App {
    pub async fn run(&self) -> Result<()> {
        logs::init(&self.config.log_level)?;

        let config = &self.config;
        match &self.command {
            Commands::Config(args) => args.run(config).await,
            Commands::Learning(args) => args.run(config).await,
            Commands::Login(args) => args.run(config).await,
            Commands::Logout(args) => args.run(config).await,
            Commands::Profile(args) => args.run(config).await,
            Commands::Roadmaps(args) => args.run(config).await,
            Commands::Signup(args) => args.run(config).await,
            Commands::Skills(args) => args.run(config).await,
            Commands::Whoami(args) => args.run(config).await,
        }
    }
}

/// The given password, or one line read from stdin.
fn read_password(password: &Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password.clone());
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("password cannot be empty");
    }
    Ok(password)
}
