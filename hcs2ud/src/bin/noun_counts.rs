//! Counts the words tagged as nouns in a gold file or in the output of a tagger.

use clap::{ArgGroup, Parser};
use fs_err::File;
use hcs2ud::counts;
use std::{
    io::{BufReader, BufWriter},
    path::PathBuf,
};

#[derive(Parser)]
#[clap(
    version,
    author,
    about = "Generate a count of the nouns in a predictions file from allennlp or a gold standard file",
    group(ArgGroup::new("input").required(true).args(&["in_file", "gold_file"]))
)]
struct Opts {
    /// The path to the predictions file from allennlp.
    #[clap(long = "predictions-file")]
    in_file: Option<PathBuf>,
    /// The path to the gold standard file.
    #[clap(long = "gold-file")]
    gold_file: Option<PathBuf>,
    /// Where to write the counts.
    #[clap(long = "out-file", default_value = "noun_counts.txt")]
    out_file: PathBuf,
}

fn main() -> Result<(), hcs2ud::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let counter = match (&opts.in_file, &opts.gold_file) {
        (Some(path), _) => counts::predicted_noun_counts(BufReader::new(File::open(path)?))?,
        (None, Some(path)) => counts::gold_noun_counts(BufReader::new(File::open(path)?))?,
        (None, None) => unreachable!("clap requires one of the inputs"),
    };

    counter.write(BufWriter::new(File::create(&opts.out_file)?))
}
