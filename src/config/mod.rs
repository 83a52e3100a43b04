#[cfg(feature = "cli")]
pub mod cli;
pub mod restaurant;

#[cfg(feature = "cli")]
use crate::utils::error::{MenuError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "chef-menu")]
#[command(about = "Manage a restaurant menu, plan a custom menu and preview the guest view")]
pub struct CliConfig {
    /// Restaurant information TOML file (built-in details are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Answer yes to every removal confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if path.trim().is_empty() || path.contains('\0') {
                return Err(MenuError::InvalidConfigValueError {
                    field: "config".to_string(),
                    value: path.clone(),
                    reason: "Path cannot be empty or contain null bytes".to_string(),
                });
            }
        }
        Ok(())
    }
}
