//! Scoring of predicted tag sequences against gold tags.

use indexmap::IndexMap;
use std::{collections::BTreeSet, fmt, io::BufRead};

use crate::{corpus::read_seq_tag, counts::read_predictions, Error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    true_positives: usize,
    predicted: usize,
    gold: usize,
}

/// Precision, recall and F1 of one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScore {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// The number of gold occurrences of the label.
    pub support: usize,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl From<Tally> for LabelScore {
    fn from(tally: Tally) -> Self {
        let precision = ratio(tally.true_positives, tally.predicted);
        let recall = ratio(tally.true_positives, tally.gold);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        LabelScore {
            precision,
            recall,
            f1,
            support: tally.gold,
        }
    }
}

/// A classification report over all labels of a flattened set of tag sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    scores: IndexMap<String, LabelScore>,
    correct: usize,
    total: usize,
}

impl Report {
    /// Compares predicted and gold tag sequences sentence by sentence.
    pub fn new<P, G, S>(predictions: &[P], gold: &[G]) -> Result<Self, Error>
    where
        P: AsRef<[S]>,
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        if predictions.len() != gold.len() {
            return Err(Error::LengthMismatch {
                index: predictions.len().min(gold.len()),
                predicted: predictions.len(),
                gold: gold.len(),
            });
        }

        let mut tallies: IndexMap<String, Tally> = IndexMap::new();
        let mut correct = 0;
        let mut total = 0;

        for (index, (predicted, gold)) in predictions.iter().zip(gold.iter()).enumerate() {
            let (predicted, gold) = (predicted.as_ref(), gold.as_ref());
            if predicted.len() != gold.len() {
                return Err(Error::LengthMismatch {
                    index,
                    predicted: predicted.len(),
                    gold: gold.len(),
                });
            }

            for (predicted, gold) in predicted.iter().zip(gold.iter()) {
                let (predicted, gold) = (predicted.as_ref(), gold.as_ref());

                tallies.entry(predicted.to_owned()).or_default().predicted += 1;
                tallies.entry(gold.to_owned()).or_default().gold += 1;
                if predicted == gold {
                    tallies.entry(gold.to_owned()).or_default().true_positives += 1;
                    correct += 1;
                }
                total += 1;
            }
        }

        let labels: BTreeSet<_> = tallies.keys().cloned().collect();
        let scores = labels
            .into_iter()
            .map(|label| {
                let tally = tallies[&label];
                (label, LabelScore::from(tally))
            })
            .collect();

        Ok(Report {
            scores,
            correct,
            total,
        })
    }

    /// The scores per label, sorted alphabetically by label.
    pub fn scores(&self) -> &IndexMap<String, LabelScore> {
        &self.scores
    }

    pub fn score(&self, label: &str) -> Option<&LabelScore> {
        self.scores.get(label)
    }

    /// The ratio of correctly predicted tags.
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.total)
    }

    /// The unweighted mean of per-label scores.
    pub fn macro_average(&self) -> LabelScore {
        let n = self.scores.len().max(1) as f64;
        let sum = |f: fn(&LabelScore) -> f64| self.scores.values().map(f).sum::<f64>() / n;

        LabelScore {
            precision: sum(|x| x.precision),
            recall: sum(|x| x.recall),
            f1: sum(|x| x.f1),
            support: self.total,
        }
    }

    /// The mean of per-label scores, weighted by the support of each label.
    pub fn weighted_average(&self) -> LabelScore {
        let support: usize = self.scores.values().map(|x| x.support).sum();
        let weighted = |f: fn(&LabelScore) -> f64| {
            let sum = self
                .scores
                .values()
                .map(|x| f(x) * x.support as f64)
                .sum::<f64>();
            if support == 0 {
                0.0
            } else {
                sum / support as f64
            }
        };

        LabelScore {
            precision: weighted(|x| x.precision),
            recall: weighted(|x| x.recall),
            f1: weighted(|x| x.f1),
            support,
        }
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    score: &LabelScore,
    width: usize,
) -> fmt::Result {
    writeln!(
        f,
        "{:>width$} {:>10.8} {:>10.8} {:>10.8} {:>10}",
        label,
        score.precision,
        score.recall,
        score.f1,
        score.support,
        width = width
    )
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .scores
            .keys()
            .map(|x| x.chars().count())
            .chain(std::iter::once("weighted avg".len()))
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:>width$} {:>10} {:>10} {:>10} {:>10}",
            "",
            "precision",
            "recall",
            "f1-score",
            "support",
            width = width
        )?;
        writeln!(f)?;

        for (label, score) in &self.scores {
            write_row(f, label, score, width)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$} {:>10} {:>10} {:>10.8} {:>10}",
            "accuracy",
            "",
            "",
            self.accuracy(),
            self.total,
            width = width
        )?;
        write_row(f, "macro avg", &self.macro_average(), width)?;
        write_row(f, "weighted avg", &self.weighted_average(), width)
    }
}

/// Scores a predictions file (JSON lines with `tags`) against a gold file in the sequence tagging format.
/// Blank lines in the gold file are skipped.
pub fn evaluate<P: BufRead, G: BufRead>(predictions: P, gold: G) -> Result<Report, Error> {
    let predicted: Vec<Vec<String>> = read_predictions(predictions)?
        .into_iter()
        .map(|x| x.tags)
        .collect();
    let gold: Vec<Vec<String>> = read_seq_tag(gold)?
        .into_iter()
        .filter(|x| !x.is_empty())
        .map(|x| x.into_iter().map(|(_, tag)| tag).collect())
        .collect();

    Report::new(&predicted, &gold)
}
