//! Random selection of sentences from a CoNLL file, e.g. to pick sentences for manual annotation.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::io::{BufRead, Write};

use crate::Error;

/// Length bounds and size of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// Sentences with this many tokens or fewer are discarded.
    pub min_length: usize,
    /// Sentences with this many tokens or more are discarded.
    pub max_length: usize,
    pub n_select: usize,
    /// Fixes the random order. Uses entropy from the OS if not set.
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            min_length: 0,
            max_length: 20,
            n_select: 200,
            seed: None,
        }
    }
}

/// A sentence of a CoNLL file, kept as its raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConllSentence {
    /// The position of the sentence in the file.
    pub index: usize,
    pub lines: Vec<String>,
}

/// Reads the sentences of a CoNLL file. Sentences are separated by empty lines.
pub fn read_conll<R: BufRead>(reader: R) -> Result<Vec<ConllSentence>, Error> {
    let mut sentences = Vec::new();
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            sentences.push(ConllSentence {
                index: sentences.len(),
                lines: std::mem::take(&mut lines),
            });
        } else {
            lines.push(line);
        }
    }

    if !lines.is_empty() {
        sentences.push(ConllSentence {
            index: sentences.len(),
            lines,
        });
    }

    Ok(sentences)
}

/// Randomly selects up to `options.n_select` sentences within the length bounds.
pub fn select(sentences: Vec<ConllSentence>, options: &SampleOptions) -> Vec<ConllSentence> {
    let mut candidates: Vec<_> = sentences
        .into_iter()
        .filter(|x| x.lines.len() > options.min_length && x.lines.len() < options.max_length)
        .collect();

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    candidates.shuffle(&mut rng);
    candidates.truncate(options.n_select);
    candidates
}

/// Writes each sentence preceded by a `# <index>` comment and followed by an empty line.
pub fn write_sample<W: Write>(sentences: &[ConllSentence], mut writer: W) -> Result<(), Error> {
    for sentence in sentences {
        writeln!(writer, "# {}", sentence.index)?;
        for line in &sentence.lines {
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONLL: &str = "1\tMimi\n2\tni\n3\tmwalimu\n\n1\tNdiyo\n\n1\tHabari\n2\tyako\n";

    #[test]
    fn conll_is_read() {
        let sentences = read_conll(CONLL.as_bytes()).unwrap();

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].lines.len(), 3);
        assert_eq!(sentences[2].index, 2);
        assert_eq!(sentences[2].lines, vec!["1\tHabari", "2\tyako"]);
    }

    #[test]
    fn sample_respects_bounds() {
        let sentences = read_conll(CONLL.as_bytes()).unwrap();
        let options = SampleOptions {
            min_length: 1,
            max_length: 3,
            n_select: 10,
            seed: Some(42),
        };

        let sample = select(sentences, &options);
        assert_eq!(sample.len(), 1);
        assert_eq!(sample[0].index, 2);

        let mut out = Vec::new();
        write_sample(&sample, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# 2\n1\tHabari\n2\tyako\n\n");
    }

    #[test]
    fn seeded_samples_are_reproducible() {
        let sentences: Vec<_> = (0..50)
            .map(|index| ConllSentence {
                index,
                lines: vec!["1\tx".to_owned()],
            })
            .collect();
        let options = SampleOptions {
            n_select: 5,
            seed: Some(7),
            ..SampleOptions::default()
        };

        let first = select(sentences.clone(), &options);
        let second = select(sentences, &options);
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }
}
