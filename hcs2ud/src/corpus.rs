//! Sentences and documents of the Helsinki corpus, reading Korp JSON exports and writing sequence tagging files.
//!
//! The sequence tagging format has one sentence per line. Every word is followed by `###` and its label, and
//! word / label pairs are terminated by a tab:
//!
//! ```text
//! WORD###TAG<TAB>WORD###TAG<TAB>
//! ```

use fs::File;
use fs_err as fs;
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{
    convert::TryInto,
    fmt,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{options::ConvertOptions, tag::SwahiliTag, types::Label, Error};

const DELIMITER: &str = "###";

/// An ordered list of words together with information about the document it was taken from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentence {
    words: Vec<SwahiliTag>,
    id: String,
    author: Option<String>,
    year: Option<i32>,
    title: Option<String>,
    filename: Option<String>,
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let surfaces: Vec<_> = self.words.iter().map(|x| x.surface()).collect();
        write!(f, "{}", surfaces.join(" "))
    }
}

impl Sentence {
    pub fn new(words: Vec<SwahiliTag>) -> Self {
        Sentence {
            words,
            ..Sentence::default()
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = id.into();
        self
    }

    pub fn words(&self) -> &[SwahiliTag] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [SwahiliTag] {
        &mut self.words
    }

    pub fn set_words(&mut self, words: Vec<SwahiliTag>) {
        self.words = words;
    }

    pub fn add_word(&mut self, word: SwahiliTag) {
        self.words.push(word);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn set_verb_tags(&mut self) {
        self.words.iter_mut().for_each(SwahiliTag::set_verb_tags);
    }

    pub fn set_noun_classes(&mut self) {
        self.words.iter_mut().for_each(SwahiliTag::set_noun_class);
    }

    pub fn strip_msd(&mut self) {
        self.words.iter_mut().for_each(SwahiliTag::strip_msd);
    }

    /// Sets the UPOS tag of every word. Returns the number of words without a mapping.
    pub fn set_upos_tags(&mut self) -> usize {
        self.words
            .iter_mut()
            .map(|word| word.set_upos())
            .filter(Option::is_none)
            .count()
    }

    /// The words which do not have a UPOS tag.
    pub fn untagged_words(&self) -> impl Iterator<Item = &SwahiliTag> {
        self.words.iter().filter(|word| word.upos().is_none())
    }

    /// Renders the sentence as an interlinear gloss: the surface forms on the first line and the part-of-speech
    /// tags aligned below. The UPOS tag is used if it is set, the Helsinki tag otherwise.
    pub fn interlinear(&self) -> String {
        let annotations: Vec<String> = self
            .words
            .iter()
            .map(|word| match (word.upos(), word.pos()) {
                (Some(upos), _) => upos.to_string(),
                (None, Some(pos)) => pos.to_owned(),
                (None, None) => "_".to_owned(),
            })
            .collect();

        let mut text_line = String::new();
        let mut annotation_line = String::new();

        for (word, annotation) in self.words.iter().zip(annotations.iter()) {
            let width = word
                .surface()
                .chars()
                .count()
                .max(annotation.chars().count())
                + 2;

            text_line += &format!("{:<width$}", word.surface(), width = width);
            annotation_line += &format!("{:<width$}", annotation, width = width);
        }

        format!("{}\n{}", text_line, annotation_line)
    }

    /// The label of every word in this sentence.
    pub fn labels(&self, label: Label) -> Result<Vec<String>, Error> {
        self.words
            .iter()
            .map(|word| {
                let value = match label {
                    Label::Pos => word.upos().map(|x| x.to_string()),
                    Label::Func => word.func().map(|x| x.to_owned()),
                    Label::Morph => word
                        .upos()
                        .map(|upos| format!("{}:{}", upos, word.morph_feats())),
                    Label::UdMorph => Some(word.ud_morph_feats().to_string()),
                };

                value.ok_or_else(|| Error::MissingLabel {
                    word: word.surface().to_owned(),
                    label,
                })
            })
            .collect()
    }

    /// Formats this sentence as one line of the sequence tagging format, without the line break.
    pub fn to_seq_tag_line(&self, label: Label) -> Result<String, Error> {
        let mut line = String::new();

        for (word, value) in self.words.iter().zip(self.labels(label)?) {
            line += word.surface();
            line += DELIMITER;
            line += &value;
            line.push('\t');
        }

        Ok(line)
    }
}

/// A sequence of sentences, usually all hits of one Korp export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Document { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn add_sentence(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// Removes the sentence at `index`. Returns `None` if the index is out of bounds.
    pub fn pop_sent(&mut self, index: usize) -> Option<Sentence> {
        if index < self.sentences.len() {
            Some(self.sentences.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn set_verb_tags(&mut self) {
        self.sentences.iter_mut().for_each(Sentence::set_verb_tags);
    }

    pub fn set_noun_classes(&mut self) {
        self.sentences
            .iter_mut()
            .for_each(Sentence::set_noun_classes);
    }

    pub fn strip_msd_tags(&mut self) {
        self.sentences.iter_mut().for_each(Sentence::strip_msd);
    }

    /// Sets the UPOS tag of every word. Returns the number of words without a mapping.
    pub fn set_upos_tags(&mut self) -> usize {
        self.sentences
            .iter_mut()
            .map(Sentence::set_upos_tags)
            .sum()
    }

    /// Removes all sentences which contain a word without a UPOS tag. Returns the number of removed sentences.
    pub fn remove_missing(&mut self) -> usize {
        let before = self.sentences.len();

        self.sentences.retain(|sentence| {
            let keep = sentence.untagged_words().next().is_none();
            if !keep {
                debug!("removing untagged sentence {}: {}", sentence.id(), sentence);
            }
            keep
        });

        before - self.sentences.len()
    }

    /// Runs all tag-setting passes in order and removes untagged sentences unless `options.keep_untagged` is set.
    pub fn prepare(&mut self, options: &ConvertOptions) {
        if options.strip_msd {
            self.strip_msd_tags();
        }

        self.set_verb_tags();
        self.set_noun_classes();
        let n_unmapped = self.set_upos_tags();
        info!("{} words have no UPOS mapping.", n_unmapped);

        if !options.keep_untagged {
            let n_removed = self.remove_missing();
            info!(
                "Removed {} sentences with untagged words, {} remain.",
                n_removed,
                self.sentences.len()
            );
        }
    }

    /// Reads a document from a Korp JSON export.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let export: KwicExport = serde_json::from_reader(reader)?;

        Ok(Document {
            sentences: export.kwic.into_iter().map(Sentence::from).collect(),
        })
    }

    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        info!("Reading corpus export {}.", path.as_ref().display());
        let reader = BufReader::new(File::open(path.as_ref())?);
        Document::from_json_reader(reader)
    }

    /// Writes all sentences in the sequence tagging format.
    pub fn to_seq_tag_writer<W: Write>(&self, mut writer: W, label: Label) -> Result<(), Error> {
        for sentence in &self.sentences {
            writeln!(writer, "{}", sentence.to_seq_tag_line(label)?)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn to_seq_tag_format<P: AsRef<Path>>(&self, path: P, label: Label) -> Result<(), Error> {
        let writer = BufWriter::new(File::create(path.as_ref())?);
        self.to_seq_tag_writer(writer, label)
    }
}

/// Parses a line of the sequence tagging format into `(word, tag)` pairs. Chunks without a `###` are skipped.
pub fn read_seq_tag_line(line: &str) -> Vec<(&str, &str)> {
    line.trim_end_matches(&['\n', '\r'][..])
        .split('\t')
        .filter_map(|chunk| chunk.split_once(DELIMITER))
        .collect()
}

/// Reads all lines of a sequence tagging file as `(word, tag)` pairs.
pub fn read_seq_tag<R: BufRead>(reader: R) -> Result<Vec<Vec<(String, String)>>, Error> {
    reader
        .lines()
        .map(|line| {
            let line = line?;
            Ok(read_seq_tag_line(&line)
                .into_iter()
                .map(|(word, tag)| (word.to_owned(), tag.to_owned()))
                .collect())
        })
        .collect()
}

#[derive(Serialize)]
struct PredictionInput<'a> {
    sentence: &'a str,
}

/// Converts a file with one sentence per line into the JSON input of a sentence tagging predictor:
/// a list of `{"sentence": ...}` objects.
pub fn prediction_input<R: BufRead, W: Write>(reader: R, writer: W) -> Result<usize, Error> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    let inputs: Vec<_> = lines
        .iter()
        .map(|line| PredictionInput { sentence: line })
        .collect();

    serde_json::to_writer(writer, &inputs)?;
    Ok(inputs.len())
}

#[derive(Deserialize)]
struct KwicExport {
    kwic: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    #[serde(default)]
    structs: Structs,
    #[serde(default)]
    tokens: Vec<RawToken>,
}

#[derive(Deserialize, Default)]
struct Structs {
    #[serde(default, deserialize_with = "deserialize_year")]
    text_year: Option<i32>,
    #[serde(default)]
    text_author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    sentence_id: Option<String>,
    #[serde(default)]
    text_title: Option<String>,
    #[serde(default)]
    text_filename: Option<String>,
}

#[derive(Deserialize)]
struct RawToken {
    word: String,
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    syntax: Option<String>,
    #[serde(default)]
    msd: Option<String>,
    #[serde(default)]
    msdextra: Option<String>,
    #[serde(default)]
    lemma: Option<String>,
    #[serde(default)]
    gloss: Option<String>,
}

impl From<RawToken> for SwahiliTag {
    fn from(token: RawToken) -> Self {
        SwahiliTag::new(
            token.word,
            token.pos.as_deref(),
            token.msd.as_deref().unwrap_or(""),
        )
        .with_msd_extra(token.msdextra.as_deref().unwrap_or(""))
        .with_func(token.syntax.as_deref())
        .with_lemma(token.lemma.as_deref())
        .with_gloss(token.gloss.as_deref())
    }
}

impl From<Hit> for Sentence {
    fn from(hit: Hit) -> Self {
        Sentence {
            words: hit.tokens.into_iter().map(SwahiliTag::from).collect(),
            id: hit.structs.sentence_id.unwrap_or_default(),
            author: hit.structs.text_author,
            year: hit.structs.text_year,
            title: hit.structs.text_title,
            filename: hit.structs.text_filename,
        }
    }
}

// Korp exports structural attributes as strings, but numbers are accepted too.
fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_i64().and_then(|x| x.try_into().ok()),
        Some(Value::String(string)) => string.trim().parse().ok(),
        _ => None,
    })
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(string)) => Some(string),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
