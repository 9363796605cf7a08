//! A single annotated word of the Helsinki corpus.

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::fmt;

use crate::types::{Features, HelsinkiPos, Number, Upos};

lazy_static! {
    static ref NOUN_CLASS: Regex =
        Regex::new(r"([0-9/]+)-(PLSG|SG|PL)").expect("static regex is valid");
    static ref TAM: Regex =
        Regex::new(r"TAM=([A-Z]+)(?:-([A-Z]+))?(?::([a-z]+))?").expect("static regex is valid");
    static ref BRACKETED: Regex = Regex::new(r"\[.*\]").expect("static regex is valid");
}

const PUNCT_WORDS: [&str; 11] = [".", "?", ",", "'", "...", ").", ")", "(", ">", "\"", ";"];

/// The number of the first noun class marker in an MSD string. `PLSG` counts as plural.
pub(crate) fn first_class_number(msd: &str) -> Option<Number> {
    let captures = NOUN_CLASS.captures(msd)?;

    match captures.get(2)?.as_str() {
        "SG" => Some(Number::Sing),
        _ => Some(Number::Plur),
    }
}

/// A Tense-Aspect-Mood marker from a verb MSD, e.g. `TAM=PAST-NEG` or `TAM=COND:nge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tam {
    pub marker: String,
    pub modifier: Option<String>,
    pub form: Option<String>,
}

impl Tam {
    /// Finds the first TAM marker in an MSD string.
    pub fn from_msd(msd: &str) -> Option<Self> {
        let captures = TAM.captures(msd)?;

        Some(Tam {
            marker: captures.get(1)?.as_str().to_owned(),
            modifier: captures.get(2).map(|x| x.as_str().to_owned()),
            form: captures.get(3).map(|x| x.as_str().to_owned()),
        })
    }

    /// Whether one of the components of this marker is exactly `component`.
    pub fn has(&self, component: &str) -> bool {
        self.marker == component
            || self.modifier.as_deref() == Some(component)
            || self.form.as_deref() == Some(component)
    }
}

impl fmt::Display for Tam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker)?;
        if let Some(modifier) = &self.modifier {
            write!(f, "-{}", modifier)?;
        }
        if let Some(form) = &self.form {
            write!(f, ":{}", form)?;
        }
        Ok(())
    }
}

/// One annotated word: the surface form together with the Helsinki annotation and the information derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SwahiliTag {
    word: String,
    pos: Option<String>,
    upos: Option<Upos>,
    msd: String,
    msd_extra: String,
    func: Option<String>,
    lemma: Option<String>,
    gloss: Option<String>,
    noun_class: Option<String>,
    tam: Option<Tam>,
    subj: Option<String>,
    obj: Option<String>,
    rel: Option<String>,
}

impl SwahiliTag {
    pub fn new<S: Into<String>>(word: S, pos: Option<&str>, msd: &str) -> Self {
        SwahiliTag {
            word: word.into(),
            pos: pos.map(|x| x.to_owned()),
            upos: None,
            msd: msd.to_owned(),
            msd_extra: String::new(),
            func: None,
            lemma: None,
            gloss: None,
            noun_class: None,
            tam: None,
            subj: None,
            obj: None,
            rel: None,
        }
    }

    pub fn with_msd_extra(mut self, msd_extra: &str) -> Self {
        self.msd_extra = msd_extra.to_owned();
        self
    }

    pub fn with_func(mut self, func: Option<&str>) -> Self {
        self.func = func.map(|x| x.to_owned());
        self
    }

    pub fn with_lemma(mut self, lemma: Option<&str>) -> Self {
        self.lemma = lemma.map(|x| x.to_owned());
        self
    }

    pub fn with_gloss(mut self, gloss: Option<&str>) -> Self {
        self.gloss = gloss.map(|x| x.to_owned());
        self
    }

    pub fn surface(&self) -> &str {
        &self.word
    }

    /// The part-of-speech tag from the Helsinki corpus.
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    /// The UPOS tag. Only set after [SwahiliTag::set_upos] found a mapping.
    pub fn upos(&self) -> Option<Upos> {
        self.upos
    }

    pub fn msd(&self) -> &str {
        &self.msd
    }

    pub fn msd_extra(&self) -> &str {
        &self.msd_extra
    }

    /// The syntactic function, e.g. `@SUBJ`.
    pub fn func(&self) -> Option<&str> {
        self.func.as_deref()
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    pub fn set_lemma<S: Into<String>>(&mut self, lemma: S) {
        self.lemma = Some(lemma.into());
    }

    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    /// The raw noun class, e.g. `1/2` or `11`.
    pub fn noun_class(&self) -> Option<&str> {
        self.noun_class.as_deref()
    }

    pub fn tam(&self) -> Option<&Tam> {
        self.tam.as_ref()
    }

    /// The subject prefix piece of the MSD, e.g. `SUB-PREF=SG3`.
    pub fn subj(&self) -> Option<&str> {
        self.subj.as_deref()
    }

    pub fn obj(&self) -> Option<&str> {
        self.obj.as_deref()
    }

    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    /// Sets the noun class from the first class marker in the MSD. Only applies to nouns.
    pub fn set_noun_class(&mut self) {
        if self.pos() != Some("N") {
            return;
        }

        if let Some(captures) = NOUN_CLASS.captures(&self.msd) {
            self.noun_class = captures.get(1).map(|x| x.as_str().to_owned());
        }
    }

    /// Sets the TAM marker and the subject, object and relative prefixes from the MSD. Only applies to verbs.
    pub fn set_verb_tags(&mut self) {
        if self.pos() != Some("V") {
            return;
        }

        if let Some(tam) = Tam::from_msd(&self.msd) {
            self.tam = Some(tam);
        }

        for piece in self.msd.split(' ') {
            if piece.starts_with("SUB-PREF=") {
                self.subj = Some(piece.to_owned());
            }
            if piece.starts_with("OBJ-PREF=") {
                self.obj = Some(piece.to_owned());
            }
            if piece.starts_with("REL-PREF=") {
                self.rel = Some(piece.to_owned());
            }
        }
    }

    /// Removes bracketed, word-specific annotations from the MSD. These are too sparse to be predicted.
    pub fn strip_msd(&mut self) {
        self.msd = BRACKETED.replace(&self.msd, "").trim().to_owned();
    }

    /// Computes the UPOS tag of this word. Returns `None` if the Helsinki tag has no mapping.
    ///
    /// Punctuation is recognized from the surface form first since it is often poorly annotated.
    pub fn upos_tag(&self) -> Option<Upos> {
        if PUNCT_WORDS.contains(&self.word.as_str()) || self.word == "!" {
            return Some(Upos::Punct);
        }

        let pos = match self.pos() {
            Some(pos) => pos,
            None => {
                warn!("{}\thas no part-of-speech tag", self.word);
                return None;
            }
        };

        match pos.parse::<HelsinkiPos>() {
            Ok(HelsinkiPos::Punctuation) => Some(Upos::Punct),
            _ if pos.contains("REL-LI") => {
                if self.func().map_or(false, |func| func.contains('V')) {
                    Some(Upos::Verb)
                } else {
                    Some(Upos::Pron)
                }
            }
            Ok(helsinki_pos) => Some(helsinki_pos.upos()),
            Err(_) => {
                warn!("{}\t{}", self.word, pos);
                None
            }
        }
    }

    /// Sets the UPOS tag, see [SwahiliTag::upos_tag]. Returns the tag that was set.
    pub fn set_upos(&mut self) -> Option<Upos> {
        self.upos = self.upos_tag();
        self.upos
    }

    /// The derived morphological information in a legacy format: class, TAM, subject, object and relative,
    /// separated by `||`. Unset fields are `_`.
    pub fn morph_feats(&self) -> String {
        let field = |x: Option<&str>| x.unwrap_or("_").to_owned();

        [
            field(self.noun_class()),
            self.tam().map_or_else(|| "_".to_owned(), |x| x.to_string()),
            field(self.subj()),
            field(self.obj()),
            field(self.rel()),
        ]
        .join("||")
    }

    /// UD morphological features derived from the MSD. See [crate::morph] for the mapping.
    pub fn ud_morph_feats(&self) -> Features {
        crate::morph::ud_morph_feats(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_class_is_set_for_nouns_only() {
        let mut noun = SwahiliTag::new("watoto", Some("N"), "1/2-PL");
        noun.set_noun_class();
        assert_eq!(noun.noun_class(), Some("1/2"));

        let mut adj = SwahiliTag::new("wazuri", Some("ADJ"), "1/2-PL");
        adj.set_noun_class();
        assert_eq!(adj.noun_class(), None);
    }

    #[test]
    fn verb_tags_are_set() {
        let mut verb = SwahiliTag::new(
            "aliyekipenda",
            Some("V"),
            "SUB-PREF=SG3 TAM=PAST REL-PREF=1-SG OBJ-PREF=7-SG",
        );
        verb.set_verb_tags();

        assert_eq!(
            verb.tam(),
            Some(&Tam {
                marker: "PAST".into(),
                modifier: None,
                form: None
            })
        );
        assert_eq!(verb.subj(), Some("SUB-PREF=SG3"));
        assert_eq!(verb.obj(), Some("OBJ-PREF=7-SG"));
        assert_eq!(verb.rel(), Some("REL-PREF=1-SG"));
        assert_eq!(
            verb.morph_feats(),
            "_||PAST||SUB-PREF=SG3||OBJ-PREF=7-SG||REL-PREF=1-SG"
        );
    }

    #[test]
    fn tam_components() {
        let tam = Tam::from_msd("SUB-PREF=SG1 TAM=PAST-NEG").unwrap();
        assert!(tam.has("PAST"));
        assert!(tam.has("NEG"));
        assert!(!tam.has("PAS"));
        assert_eq!(tam.to_string(), "PAST-NEG");

        let tam = Tam::from_msd("TAM=COND:ngeli").unwrap();
        assert_eq!(tam.form.as_deref(), Some("ngeli"));
        assert_eq!(tam.to_string(), "COND:ngeli");

        assert!(Tam::from_msd("1/2-SG").is_none());
    }

    #[test]
    fn msd_is_stripped() {
        let mut tag = SwahiliTag::new("mtu", Some("N"), "1/2-SG [mtu] AN");
        tag.strip_msd();
        assert_eq!(tag.msd(), "1/2-SG  AN");

        let mut tag = SwahiliTag::new("mtu", Some("N"), "1/2-SG [mtu]");
        tag.strip_msd();
        assert_eq!(tag.msd(), "1/2-SG");
    }

    #[test]
    fn upos_tags() {
        let upos = |word: &str, pos: Option<&str>, func: Option<&str>| {
            SwahiliTag::new(word, pos, "").with_func(func).upos_tag()
        };

        assert_eq!(upos(",", Some("COMMA"), None), Some(Upos::Punct));
        assert_eq!(upos("!", Some("EXCLAM"), None), Some(Upos::Punct));
        assert_eq!(upos("\"", None, None), Some(Upos::Punct));
        assert_eq!(upos("-", Some("HYPHEN"), None), Some(Upos::Punct));
        assert_eq!(upos("ambaye", Some("REL-LI"), Some("@SUBJ")), Some(Upos::Pron));
        assert_eq!(upos("aliye", Some("REL-LI"), Some("@FMAINV")), Some(Upos::Verb));
        assert_eq!(upos("aliyo", Some("REL-LI-X"), None), Some(Upos::Pron));
        assert_eq!(upos("kitabu", Some("N"), Some("@SUBJ")), Some(Upos::Noun));
        assert_eq!(upos("ni", Some("V-BE"), None), Some(Upos::Aux));
        assert_eq!(upos("kitabu", Some("FOO"), None), None);
        assert_eq!(upos("kitabu", None, None), None);
    }
}
