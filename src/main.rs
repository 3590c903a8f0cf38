use std::io::{self, BufWriter, Write};

use anyhow::Result;

use deck_shuffle::{
    self,
    cli::{Cli, Parser},
    seed::ClockSeedSource,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let mut out = BufWriter::new(io::stdout().lock());
    deck_shuffle::run(&cli, ClockSeedSource::new(), &mut out)?;
    out.flush()?;

    Ok(())
}
