//! Read-only commands: show the policy and the effective configuration.

use crate::config::Config;
use crate::error::Result;
use rolecheck_classifier::{POLICY_TEXT, REQUIRED_FIELDS};

/// Execute the policy command.
pub fn execute_policy() -> Result<()> {
    println!("{}", POLICY_TEXT);
    println!();
    println!("Required fields: {}", REQUIRED_FIELDS.join(", "));
    Ok(())
}

/// Execute the config command.
pub fn execute_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
