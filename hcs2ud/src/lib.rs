//! Conversion of the Helsinki Corpus of Swahili (HCS) into Universal Dependencies (UD) tagging data.
//! # Overview
//!
//! hcs2ud has the following core abstractions:
//! - A [SwahiliTag][tag::SwahiliTag] holding one annotated token with its legacy part-of-speech and MSD string.
//!   Tag-setting passes derive the noun class, TAM marker and verbal affixes, and map the legacy tag to a UPOS tag.
//! - A [Document][corpus::Document] of [Sentence][corpus::Sentence]s read from a Korp JSON export and written to
//!   the `WORD###TAG` sequence tagging format.
//! - [Features][types::Features], the UD feature bundle derived from the MSD string by the rules in [morph].
//!
//! # Examples
//!
//! Derive UD features for a single verb:
//!
//! ```
//! use hcs2ud::tag::SwahiliTag;
//!
//! let mut tag = SwahiliTag::new("anapenda", Some("V"), "SUB-PREF=SG3 TAM=PR:na")
//!     .with_msd_extra("SVO");
//! tag.set_verb_tags();
//! tag.set_upos();
//!
//! assert_eq!(tag.upos().map(|x| x.as_str()), Some("VERB"));
//! assert_eq!(
//!     tag.ud_morph_feats().to_string(),
//!     "Aspect=Imp|Mood=Ind|NounClass=Bantu1|Number=Sing|Person=3|Polarity=Pos|Subcat=Tran|Tense=Pres|Voice=Act"
//! );
//! ```
//!
//! Split a verb into its subject/TAM prefix and the object marker plus root:
//!
//! ```
//! use hcs2ud::segment::split_verb;
//!
//! assert_eq!(split_verb("anapenda")?, ("ana".to_string(), "penda".to_string()));
//! # Ok::<(), hcs2ud::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod corpus;
pub mod counts;
pub mod evaluate;
pub mod morph;
pub mod options;
pub mod sample;
pub mod segment;
pub mod tag;
pub mod types;
pub(crate) mod utils;

pub use corpus::{Document, Sentence};
pub use options::ConvertOptions;
pub use tag::SwahiliTag;
pub use types::{Features, Label, Upos};

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error of a corpus export, prediction file or config.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unknown label '{0}'. Valid labels are 'pos', 'func', 'morph' and 'ud-morph'")]
    UnknownLabel(String),
    #[error("unknown part-of-speech tag '{0}'")]
    UnknownPos(String),
    #[error("malformed feature '{0}', expected 'Attribute=Value'")]
    MalformedFeature(String),
    #[error("verb '{0}' could not be split into a prefix and a stem")]
    UnsplittableVerb(String),
    #[error("word '{word}' has no value for label '{label}'")]
    MissingLabel { word: String, label: Label },
    #[error("sentence {index} has {predicted} predicted tags but {gold} gold tags")]
    LengthMismatch {
        index: usize,
        predicted: usize,
        gold: usize,
    },
}
