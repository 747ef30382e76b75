use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod list;
mod solve;

#[derive(From, Subcommand)]
pub enum Applet {
    List(list::List),
    Solve(solve::Solve),
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::List(a) => Ok(a.execute()?),
            Applet::Solve(a) => Ok(a.execute()?),
        }
    }
}
