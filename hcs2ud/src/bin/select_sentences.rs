//! Randomly selects sentences from a CoNLL file within length bounds.

use clap::Parser;
use fs_err::File;
use hcs2ud::sample::{self, SampleOptions};
use log::info;
use std::{
    io::{self, BufReader},
    path::PathBuf,
};

#[derive(Parser)]
#[clap(
    version,
    author,
    about = "Randomly select sentences from the entire corpus using length constraints"
)]
struct Opts {
    /// The path to the full conll file to read in.
    #[clap(long = "conll-file")]
    conll_file: PathBuf,
    /// Sentences shorter than this length will be discarded.
    #[clap(long = "min-length", default_value = "0")]
    min_length: usize,
    /// Sentences longer than this length will be discarded.
    #[clap(long = "max-length", default_value = "20")]
    max_length: usize,
    /// The number of sentences to randomly select.
    #[clap(long = "n-select", default_value = "200")]
    n_select: usize,
    /// Seed for a reproducible selection.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), hcs2ud::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let sentences = sample::read_conll(BufReader::new(File::open(&opts.conll_file)?))?;
    info!("Read {} sentences.", sentences.len());

    let selected = sample::select(
        sentences,
        &SampleOptions {
            min_length: opts.min_length,
            max_length: opts.max_length,
            n_select: opts.n_select,
            seed: opts.seed,
        },
    );

    let stdout = io::stdout();
    sample::write_sample(&selected, stdout.lock())
}
