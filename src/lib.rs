pub mod api;
pub mod client;
pub mod cmd;
pub mod config;
pub mod dirs;
pub mod display;
pub mod filelock;
pub mod logs;
pub mod progress;
pub mod session;
pub mod table;
pub mod time;
pub mod types;
pub mod view;
