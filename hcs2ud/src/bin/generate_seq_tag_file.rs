//! Generates a sequence tagging file from a Korp JSON export of the Helsinki corpus.

use clap::Parser;
use hcs2ud::{ConvertOptions, Document, Label};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(
    version,
    author,
    about = "Generate sequence tagging files from the Helsinki Corpus's json format"
)]
struct Opts {
    /// The input file from the Helsinki corpus to process.
    #[clap(long = "in_json")]
    in_file: PathBuf,
    /// The filepath where the sequence tagging format file should be written.
    #[clap(long = "out_file")]
    out_file: PathBuf,
    /// The label to write after each word: 'pos', 'func', 'morph' or 'ud-morph'.
    #[clap(long)]
    label: Option<Label>,
    /// A JSON file with conversion options.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Remove bracketed word-specific annotations from the MSD.
    #[clap(long = "strip_msd")]
    strip_msd: bool,
}

fn main() -> Result<(), hcs2ud::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let mut options = match &opts.config {
        Some(path) => ConvertOptions::from_path(path)?,
        None => ConvertOptions::default(),
    };
    if let Some(label) = opts.label {
        options.label = label;
    }
    options.strip_msd |= opts.strip_msd;

    let mut document = Document::from_json(&opts.in_file)?;
    info!("Read {} sentences.", document.len());

    document.prepare(&options);
    document.to_seq_tag_format(&opts.out_file, options.label)?;
    info!(
        "Wrote {} sentences with label '{}' to {}.",
        document.len(),
        options.label,
        opts.out_file.display()
    );

    Ok(())
}
