pub mod learning;
pub mod roadmap;
pub mod skill;
pub mod user;

/// Numeric identifier the VLE API uses for every record.
pub type Id = u64;
