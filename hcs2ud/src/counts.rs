//! Counting how often each word is tagged as a noun, either in gold data or in the output of a tagger.

use indexmap::IndexMap;
use serde::Deserialize;
use std::io::{BufRead, Write};

use crate::{corpus::read_seq_tag_line, types::Upos, Error};

/// One line of the JSON lines output of a sentence tagging predictor.
#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub words: Vec<String>,
    pub tags: Vec<String>,
}

/// Reads the JSON lines output of a predictor. Blank lines are skipped.
pub fn read_predictions<R: BufRead>(reader: R) -> Result<Vec<Prediction>, Error> {
    let mut predictions = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        predictions.push(serde_json::from_str(&line)?);
    }

    Ok(predictions)
}

/// Occurrence counts of words, in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    counts: IndexMap<String, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Counter::default()
    }

    pub fn add<S: AsRef<str>>(&mut self, word: S) {
        *self.counts.entry(word.as_ref().to_owned()).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The counts from least to most frequent. Ties keep the order in which the words were first seen.
    pub fn ascending(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<_> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        counts.sort_by_key(|(_, count)| *count);
        counts
    }

    /// Writes one `word<TAB>count` line per word, see [Counter::ascending].
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for (word, count) in self.ascending() {
            writeln!(writer, "{}\t{}", word, count)?;
        }
        Ok(())
    }
}

/// Counts the nouns of a gold file in the sequence tagging format.
pub fn gold_noun_counts<R: BufRead>(reader: R) -> Result<Counter, Error> {
    let mut counter = Counter::new();
    let noun = Upos::Noun.as_str();

    for line in reader.lines() {
        let line = line?;
        for (word, tag) in read_seq_tag_line(&line) {
            if tag == noun {
                counter.add(word);
            }
        }
    }

    Ok(counter)
}

/// Counts the nouns of a predictions file.
pub fn predicted_noun_counts<R: BufRead>(reader: R) -> Result<Counter, Error> {
    let mut counter = Counter::new();
    let noun = Upos::Noun.as_str();

    for prediction in read_predictions(reader)? {
        for (word, tag) in prediction.words.iter().zip(prediction.tags.iter()) {
            if tag == noun {
                counter.add(word);
            }
        }
    }

    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_nouns_are_counted() {
        let gold = "mtoto###NOUN\tanakula###VERB\tchakula###NOUN\t\n\
                    chakula###NOUN\tkitamu###ADJ\t\n";
        let counter = gold_noun_counts(gold.as_bytes()).unwrap();

        assert_eq!(counter.len(), 2);
        assert_eq!(counter.get("chakula"), 2);
        assert_eq!(counter.get("kitamu"), 0);

        let mut out = Vec::new();
        counter.write(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "mtoto\t1\nchakula\t2\n");
    }

    #[test]
    fn predicted_nouns_are_counted() {
        let predictions = r#"{"words": ["kitabu", "kizuri", "kitabu"], "tags": ["NOUN", "ADJ", "NOUN"]}

{"words": ["nyumba"], "tags": ["NOUN"]}
"#;
        let counter = predicted_noun_counts(predictions.as_bytes()).unwrap();

        assert_eq!(counter.ascending(), vec![("nyumba", 1), ("kitabu", 2)]);
    }

    #[test]
    fn invalid_predictions_are_an_error() {
        assert!(matches!(
            predicted_noun_counts("{\"words\": []}".as_bytes()),
            Err(Error::Json(_))
        ));
    }
}
