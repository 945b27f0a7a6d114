//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule. The core library never prints;
//! everything user-facing happens here.

pub mod analyze;
pub mod generate;
pub mod types;

pub use analyze::{execute_analyze, AnalyzeOptions};
pub use generate::{execute_generate, GenerateOptions};
pub use types::execute_list_types;
