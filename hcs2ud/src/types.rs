//! Fundamental types used by this crate.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str::FromStr};

use crate::Error;

/// A Universal Part-of-Speech tag.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[allow(missing_docs)]
pub enum Upos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl Upos {
    pub fn as_str(&self) -> &'static str {
        match self {
            Upos::Adj => "ADJ",
            Upos::Adp => "ADP",
            Upos::Adv => "ADV",
            Upos::Aux => "AUX",
            Upos::Cconj => "CCONJ",
            Upos::Det => "DET",
            Upos::Intj => "INTJ",
            Upos::Noun => "NOUN",
            Upos::Num => "NUM",
            Upos::Part => "PART",
            Upos::Pron => "PRON",
            Upos::Propn => "PROPN",
            Upos::Punct => "PUNCT",
            Upos::Sconj => "SCONJ",
            Upos::Sym => "SYM",
            Upos::Verb => "VERB",
            Upos::X => "X",
        }
    }
}

impl fmt::Display for Upos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Upos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ADJ" => Upos::Adj,
            "ADP" => Upos::Adp,
            "ADV" => Upos::Adv,
            "AUX" => Upos::Aux,
            "CCONJ" => Upos::Cconj,
            "DET" => Upos::Det,
            "INTJ" => Upos::Intj,
            "NOUN" => Upos::Noun,
            "NUM" => Upos::Num,
            "PART" => Upos::Part,
            "PRON" => Upos::Pron,
            "PROPN" => Upos::Propn,
            "PUNCT" => Upos::Punct,
            "SCONJ" => Upos::Sconj,
            "SYM" => Upos::Sym,
            "VERB" => Upos::Verb,
            "X" => Upos::X,
            _ => return Err(Error::UnknownPos(s.to_owned())),
        })
    }
}

/// A part-of-speech tag as it appears in the Helsinki corpus.
///
/// Punctuation marks are tagged with their name in the corpus (e.g. `COMMA`) and are all collapsed into
/// [HelsinkiPos::Punctuation].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum HelsinkiPos {
    AUninfl,
    Abbr,
    Adj,
    Adv,
    /// `na` marking the oblique agent of a passive.
    AgPart,
    Cc,
    Conj,
    ConjCc,
    Dem,
    Exclam,
    GenCon,
    GenConKwa,
    Interrog,
    N,
    Num,
    NumRom,
    /// `mwenye`, `penye`, `zenye` style relatives meaning "which has".
    PossPron,
    Prep,
    /// A false compound: the corpus counts these as one word with a space inside.
    PrepAdv,
    Pron,
    Propname,
    RelLi,
    RelLiVyo,
    RelSi,
    RelSiVyo,
    Title,
    V,
    VBe,
    /// Frozen, uninflected verbs, mostly of Arabic origin.
    VDef,
    Punctuation,
}

impl FromStr for HelsinkiPos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "A-UNINFL" => HelsinkiPos::AUninfl,
            "ABBR" => HelsinkiPos::Abbr,
            "ADJ" => HelsinkiPos::Adj,
            "ADV" => HelsinkiPos::Adv,
            "AG-PART" => HelsinkiPos::AgPart,
            "CC" => HelsinkiPos::Cc,
            "CONJ" => HelsinkiPos::Conj,
            "CONJ/CC" => HelsinkiPos::ConjCc,
            "DEM" => HelsinkiPos::Dem,
            "EXCLAM" => HelsinkiPos::Exclam,
            "GEN-CON" => HelsinkiPos::GenCon,
            "GEN-CON-KWA" => HelsinkiPos::GenConKwa,
            "INTERROG" => HelsinkiPos::Interrog,
            "N" => HelsinkiPos::N,
            "NUM" => HelsinkiPos::Num,
            "NUM-ROM" => HelsinkiPos::NumRom,
            "POSS-PRON" => HelsinkiPos::PossPron,
            "PREP" => HelsinkiPos::Prep,
            "PREP/ADV" => HelsinkiPos::PrepAdv,
            "PRON" => HelsinkiPos::Pron,
            "PROPNAME" => HelsinkiPos::Propname,
            "REL-LI" => HelsinkiPos::RelLi,
            "REL-LI-VYO" => HelsinkiPos::RelLiVyo,
            "REL-SI" => HelsinkiPos::RelSi,
            "REL-SI-VYO" => HelsinkiPos::RelSiVyo,
            "TITLE" => HelsinkiPos::Title,
            "V" => HelsinkiPos::V,
            "V-BE" => HelsinkiPos::VBe,
            "V-DEF" => HelsinkiPos::VDef,
            "COLON"
            | "COMMA"
            | "DOUBLE-QUOTE"
            | "DOUBLE-QUOTE-CLOSING"
            | "DOUBLE-QUOTE-OPENING"
            | "HYPHEN"
            | "LEFT-PARENTHESIS"
            | "PERCENT-MARK"
            | "QUESTION-MARK"
            | "RIGHT-PARENTHESIS"
            | "SEMI-COLON"
            | "SINGLE-QUOTE"
            | "SINGLE-QUOTE-CLOSING"
            | "SINGLE-QUOTE-OPENING"
            | "SLASH"
            | "EQUAL-MARK"
            | "DOLLAR-SIGN"
            | "STOP" => HelsinkiPos::Punctuation,
            _ => return Err(Error::UnknownPos(s.to_owned())),
        })
    }
}

impl HelsinkiPos {
    /// The UPOS tag this Helsinki tag maps to when nothing else about the word is known.
    ///
    /// Relative markers built on `-li-` are pronouns here; they become verbs when their syntactic function
    /// is verbal, see [SwahiliTag::upos_tag][crate::tag::SwahiliTag::upos_tag].
    pub fn upos(&self) -> Upos {
        match self {
            HelsinkiPos::AUninfl | HelsinkiPos::Adj => Upos::Adj,
            // the examples in the corpus are mostly adverbs syntactically
            HelsinkiPos::Abbr => Upos::Sym,
            HelsinkiPos::Adv | HelsinkiPos::PrepAdv => Upos::Adv,
            HelsinkiPos::AgPart
            | HelsinkiPos::GenCon
            | HelsinkiPos::GenConKwa
            | HelsinkiPos::Prep => Upos::Adp,
            HelsinkiPos::Cc | HelsinkiPos::ConjCc => Upos::Cconj,
            // plain CONJ is used for everything that is not coordinating
            HelsinkiPos::Conj | HelsinkiPos::PossPron => Upos::Sconj,
            HelsinkiPos::Dem => Upos::Det,
            HelsinkiPos::Exclam => Upos::Intj,
            // UD treats inflected relatives as pronouns, not subordinating conjunctions
            HelsinkiPos::Interrog
            | HelsinkiPos::Pron
            | HelsinkiPos::RelLi
            | HelsinkiPos::RelLiVyo
            | HelsinkiPos::RelSi
            | HelsinkiPos::RelSiVyo => Upos::Pron,
            HelsinkiPos::N => Upos::Noun,
            HelsinkiPos::Num | HelsinkiPos::NumRom => Upos::Num,
            HelsinkiPos::Propname | HelsinkiPos::Title => Upos::Propn,
            HelsinkiPos::V | HelsinkiPos::VDef => Upos::Verb,
            HelsinkiPos::VBe => Upos::Aux,
            HelsinkiPos::Punctuation => Upos::Punct,
        }
    }
}

/// The tag written after each word in the sequence tagging format.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Label {
    /// The UPOS tag.
    Pos,
    /// The syntactic function from the corpus.
    Func,
    /// The UPOS tag and the legacy morphological string, separated by `:`.
    Morph,
    /// The UD feature string.
    UdMorph,
}

impl Default for Label {
    fn default() -> Self {
        Label::Pos
    }
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Pos => "pos",
            Label::Func => "func",
            Label::Morph => "morph",
            Label::UdMorph => "ud-morph",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pos" => Label::Pos,
            "func" => Label::Func,
            "morph" => Label::Morph,
            "ud-morph" => Label::UdMorph,
            _ => return Err(Error::UnknownLabel(s.to_owned())),
        })
    }
}

impl TryFrom<String> for Label {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_owned()
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum Number {
    Sing,
    Plur,
    /// Mass nouns, reserved for class 11 in the corpus.
    Coll,
}

impl Number {
    /// Parses the `SG` / `PL` suffix of a class marker like `7-SG`.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "SG" => Some(Number::Sing),
            "PL" => Some(Number::Plur),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Sing => "Sing",
            Number::Plur => "Plur",
            Number::Coll => "Coll",
        }
    }
}

/// Grammatical person of a subject, object or relative marker.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::First => "1",
            Person::Second => "2",
            Person::Third => "3",
        }
    }
}

/// A bundle of UD morphological features.
///
/// Features are kept in insertion order and rendered in alphabetical order with exact duplicates removed,
/// joined by `|`. An empty bundle renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    features: Vec<String>,
}

impl Features {
    pub fn new() -> Self {
        Features::default()
    }

    /// Adds the feature `{attribute}={value}`.
    pub fn push<A: fmt::Display, V: fmt::Display>(&mut self, attribute: A, value: V) {
        self.features.push(format!("{}={}", attribute, value));
    }

    /// Adds a feature whose attribute is prefixed, e.g. `Obj` + `Person` gives `ObjPerson`.
    pub fn push_prefixed<V: fmt::Display>(&mut self, prefix: &str, attribute: &str, value: V) {
        self.features
            .push(format!("{}{}={}", prefix, attribute, value));
    }

    pub fn extend(&mut self, other: Features) {
        self.features.extend(other.features);
    }

    /// Whether the exact feature `feature` (e.g. `Voice=Act`) is in this bundle.
    pub fn contains(&self, feature: &str) -> bool {
        self.features.iter().any(|x| x == feature)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// The features in insertion order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|x| x.as_str())
    }

    /// The features as they are rendered: sorted, without duplicates.
    pub fn sorted(&self) -> Vec<&str> {
        self.iter().sorted().dedup().collect()
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sorted().join("|"))
    }
}

/// Parses a UD feature string like `NounClass[Subj]=Bantu1|Tense=Pres` into a map from attribute to value.
///
/// The empty string and `_` denote the absence of features.
pub fn parse_morph_features(morph_tags: &str) -> Result<IndexMap<String, String>, Error> {
    let mut features = IndexMap::new();

    let morph_tags = morph_tags.trim();
    if morph_tags.is_empty() || morph_tags == "_" {
        return Ok(features);
    }

    for feature in morph_tags.split('|') {
        match feature.split('=').collect::<Vec<_>>().as_slice() {
            [attribute, value] => {
                features.insert((*attribute).to_owned(), (*value).to_owned());
            }
            _ => return Err(Error::MalformedFeature(feature.to_owned())),
        }
    }

    Ok(features)
}
