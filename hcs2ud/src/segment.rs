//! Splitting of Swahili words into smaller units.
//!
//! [split_verb] separates the subject and TAM prefixes of a verb from the object marker and the verb root,
//! [separate_cc_compounds] splits the conjunction `na` from a fused pronoun.

use lazy_static::lazy_static;
use regex::Regex;

use crate::Error;

const SUBJECT_PREFIXES: [&str; 6] = ["a", "u", "ni", "tu", "m", "wa"];
// `ha` has to come last, otherwise it matches before the longer prefixes
const NEGATED_SUBJECT_PREFIXES: [&str; 6] = ["si", "hu", "hatu", "ham", "hawa", "ha"];
const NOUN_CLASS_SUBJECT_PREFIXES: [&str; 15] = [
    "a", "wa", "u", "i", "li", "ya", "ki", "vi", "i", "zi", "u", "ku", "pa", "ku", "m",
];
const NEGATED_NOUN_CLASS_SUBJECT_PREFIXES: [&str; 13] = [
    "hau", "hai", "hali", "haya", "haki", "havi", "hai", "hazi", "hau", "haku", "hapa", "haku",
    "ham",
];
const NOUN_CLASS_OBJECT_PREFIXES: [&str; 19] = [
    "m", "wa", "m", "i", "li", "ya", "ki", "vi", "i", "zi", "u", "zi", "u", "zi", "u", "ku", "pa",
    "ku", "mu",
];
const TENSE_MARKERS: [&str; 5] = ["na", "ta", "li", "ngeli", "ki"];

fn alternation<'a>(options: impl IntoIterator<Item = &'a &'a str>) -> String {
    format!(
        "({})",
        options.into_iter().copied().collect::<Vec<_>>().join("|")
    )
}

lazy_static! {
    static ref SUBJECT: String = alternation(
        SUBJECT_PREFIXES
            .iter()
            .chain(NOUN_CLASS_SUBJECT_PREFIXES.iter())
    );
    static ref NEGATED_SUBJECT: String = alternation(
        NEGATED_NOUN_CLASS_SUBJECT_PREFIXES
            .iter()
            .chain(NEGATED_SUBJECT_PREFIXES.iter())
    );
    static ref TENSE: String = alternation(TENSE_MARKERS.iter());
    static ref OBJECT: String = alternation(NOUN_CLASS_OBJECT_PREFIXES.iter());

    static ref NEGATED: Regex =
        Regex::new(&format!("^{}", *NEGATED_SUBJECT)).expect("static regex is valid");
    // negated `ki` is almost never the tense marker, so it is read as an object marker
    static ref NEGATED_KI: Regex =
        Regex::new(&format!("^{}ki", *NEGATED_SUBJECT)).expect("static regex is valid");
    static ref NEGATED_PREFIX: Regex = Regex::new(&format!(
        "^{}{}?{}?",
        *NEGATED_SUBJECT, *TENSE, *OBJECT
    ))
    .expect("static regex is valid");
    // without negation the tense marker is required
    static ref AFFIRMATIVE_PREFIX: Regex =
        Regex::new(&format!("^{}{}{}?", *SUBJECT, *TENSE, *OBJECT))
            .expect("static regex is valid");
    static ref CC_COMPOUND: Regex =
        Regex::new(r"(na)(ye|yo|o|mi|we|si|nyi|lo|cho|vyo|zo|ko|po|mo)")
            .expect("static regex is valid");
}

/// Splits a verb into the subject + TAM prefix and the object marker + root.
///
/// ```
/// use hcs2ud::segment::split_verb;
///
/// assert_eq!(split_verb("walizipenda")?, ("wali".to_string(), "zipenda".to_string()));
/// assert_eq!(split_verb("hazipendi")?, ("hazi".to_string(), "pendi".to_string()));
/// # Ok::<(), hcs2ud::Error>(())
/// ```
pub fn split_verb(verb: &str) -> Result<(String, String), Error> {
    let with_whitespace = if NEGATED.is_match(verb) {
        if NEGATED_KI.is_match(verb) {
            NEGATED.replace(verb, "${1} ")
        } else {
            NEGATED_PREFIX.replace(verb, "${1}${2} ${3}")
        }
    } else {
        AFFIRMATIVE_PREFIX.replace(verb, "${1}${2} ${3}")
    };

    match with_whitespace.split_whitespace().collect::<Vec<_>>().as_slice() {
        [prefix, stem] => Ok(((*prefix).to_owned(), (*stem).to_owned())),
        _ => Err(Error::UnsplittableVerb(verb.to_owned())),
    }
}

/// Separates `na` from a following pronoun, e.g. `nami` becomes `na mi` and `nao` becomes `na o`.
pub fn separate_cc_compounds(word: &str) -> String {
    CC_COMPOUND.replace_all(word, "${1} ${2}").into_owned()
}
