//! Command implementations.

mod inspect;
mod run;

pub use inspect::{execute_config, execute_policy};
pub use run::{execute_run, run_batch};
