//! Hosts command: lists the supported hosting platforms.

use anyhow::Result;
use clap::Parser;

use crate::issue::dialect::{dialects, DIALECTS};
use crate::vcs::Backend;

/// Lists the hosts whose closing keywords are understood.
#[derive(Parser, Debug)]
pub struct HostsCommand {
    /// Only lists hosts for this backend (git or hg).
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<Backend>,
}

impl HostsCommand {
    /// Executes the hosts command.
    pub fn execute(self) -> Result<()> {
        println!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        match self.backend {
            Some(backend) => super::formatting::format_hosts(dialects(backend)),
            None => super::formatting::format_hosts(DIALECTS),
        }
    }
}
