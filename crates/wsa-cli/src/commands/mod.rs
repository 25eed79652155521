//! Command handlers. Each one turns parsed arguments into calls on the core
//! crate and renders the result through [`crate::output::OutputManager`].

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
