use std::io;

use anyhow::Result;
use historian::cli::{self, Opts};
use lib::cli::Output;

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    lib::cli::install_logger(opts.log_level())?;

    let stdout = io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    if let Err(error) = cli::run(&opts, &mut o) {
        if opts.json {
            o.error(format_args!("{error:#}"))?;
        }

        return Err(error);
    }

    Ok(())
}
