//! Splits the verbs read from stdin (one per line) into subject + TAM prefix and object marker + root.

use clap::Parser;
use hcs2ud::segment::{separate_cc_compounds, split_verb};
use log::warn;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[clap(
    version,
    author,
    about = "Split verbs into the subject and TAM prefix and the object marker and root"
)]
struct Opts {
    /// Also separate `na` from fused pronouns before splitting.
    #[clap(long)]
    compounds: bool,
}

fn main() -> Result<(), hcs2ud::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if opts.compounds {
            let separated = separate_cc_compounds(word);
            if separated != word {
                writeln!(out, "{}", separated)?;
                continue;
            }
        }

        match split_verb(word) {
            Ok((prefix, stem)) => writeln!(out, "{}\t{}", prefix, stem)?,
            Err(error) => {
                warn!("{}", error);
                writeln!(out, "{}", word)?;
            }
        }
    }

    Ok(())
}
