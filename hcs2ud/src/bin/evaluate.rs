//! Prints a classification report of predictions from a sentence tagger against a gold file.

use clap::Parser;
use fs_err::File;
use hcs2ud::evaluate::evaluate;
use std::{io::BufReader, path::PathBuf};

#[derive(Parser)]
#[clap(
    version,
    author,
    about = "Process the prediction output from allennlp and generate a classification report"
)]
struct Opts {
    /// The path to the predictions file from allennlp.
    #[clap(long = "predictions-file")]
    in_file: PathBuf,
    /// The path to the gold standard file.
    #[clap(long = "gold-file")]
    gold_file: PathBuf,
}

fn main() -> Result<(), hcs2ud::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let report = evaluate(
        BufReader::new(File::open(&opts.in_file)?),
        BufReader::new(File::open(&opts.gold_file)?),
    )?;

    println!("{}", report);
    Ok(())
}
