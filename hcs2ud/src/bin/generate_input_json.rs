//! Generates the JSON input of a sentence tagging predictor from a file with one sentence per line.

use clap::Parser;
use fs_err::File;
use hcs2ud::corpus::prediction_input;
use log::info;
use std::{
    io::{BufReader, BufWriter},
    path::PathBuf,
};

#[derive(Parser)]
#[clap(
    version,
    author,
    about = "Generate json file for prediction from input file with one sentence per line"
)]
struct Opts {
    /// The path to the file to process.
    #[clap(long = "in_file")]
    in_file: PathBuf,
    /// The path to write the output json file to.
    #[clap(long = "out_file")]
    out_file: PathBuf,
}

fn main() -> Result<(), hcs2ud::Error> {
    env_logger::init();
    let opts = Opts::parse();

    info!("Writing json file {}.", opts.out_file.display());
    let n = prediction_input(
        BufReader::new(File::open(&opts.in_file)?),
        BufWriter::new(File::create(&opts.out_file)?),
    )?;
    info!("Wrote {} sentences.", n);

    Ok(())
}
