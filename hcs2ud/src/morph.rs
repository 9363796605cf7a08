//! Mapping of Helsinki MSD strings to UD morphological features.
//!
//! Per UD version 2, nouns are annotated with `Number` in addition to `NounClass`, even though the number can be
//! inferred from the Bantu class.
//!
//! Verbs carry the agreement of their subject, object and relative prefixes. Subject agreement is written with
//! plain attributes (`Person`, `NounClass`, `Number`) for compatibility with existing treebanks, object and
//! relative agreement with prefixed attributes (`ObjPerson`, `RelNounClass`, ...).

use log::warn;

use crate::{
    tag::SwahiliTag,
    types::{Features, Number, Person, Upos},
    utils,
};

/// The category of a word that decides which set of rules applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Other,
}

impl Category {
    /// Determines the category from the UPOS tag if it is set, from the Helsinki tag otherwise.
    pub fn of(tag: &SwahiliTag) -> Self {
        match tag.upos() {
            Some(Upos::Noun) => Category::Noun,
            Some(Upos::Verb) => Category::Verb,
            Some(Upos::Adj) | Some(Upos::Num) => Category::Adjective,
            Some(_) => Category::Other,
            None => match tag.pos() {
                Some("N") => Category::Noun,
                Some("V") => Category::Verb,
                Some("ADJ") | Some("NUM") => Category::Adjective,
                _ => Category::Other,
            },
        }
    }
}

/// The verbal slot an agreement prefix occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Subject,
    Object,
    Relative,
}

impl Slot {
    /// The prefix of the feature attributes for this slot.
    pub fn prefix(&self) -> &'static str {
        match self {
            Slot::Subject => "",
            Slot::Object => "Obj",
            Slot::Relative => "Rel",
        }
    }
}

/// Agreement encoded by a subject, object or relative prefix like `SUB-PREF=SG1` or `OBJ-PREF=7-SG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agreement {
    /// Agreement with a participant. First and second person use class 1 / 2 by convention.
    Personal { person: Person, number: Number },
    /// The `hu-` habitual prefix, which only marks number.
    Habitual(Number),
    /// Agreement with a noun class. Always third person.
    Class {
        class: String,
        number: Option<Number>,
    },
    /// A prefix that could not be interpreted.
    Malformed(String),
}

impl Agreement {
    pub fn parse(affix: &str) -> Self {
        const PERSONAL: [(&str, Person, Number); 6] = [
            ("SG1", Person::First, Number::Sing),
            ("PL1", Person::First, Number::Plur),
            ("SG2", Person::Second, Number::Sing),
            ("PL2", Person::Second, Number::Plur),
            ("SG3", Person::Third, Number::Sing),
            ("PL3", Person::Third, Number::Plur),
        ];

        if let Some((_, person, number)) = PERSONAL.iter().find(|(key, _, _)| affix.contains(key))
        {
            return Agreement::Personal {
                person: *person,
                number: *number,
            };
        }

        if affix.contains("HABIT-SG") {
            return Agreement::Habitual(Number::Sing);
        }
        if affix.contains("HABIT-PL") {
            return Agreement::Habitual(Number::Plur);
        }

        let value = affix.split('=').nth(1).unwrap_or("");
        match value.split('-').collect::<Vec<_>>().as_slice() {
            [class, number] if !class.is_empty() => Agreement::Class {
                class: (*class).to_owned(),
                number: Number::from_marker(number),
            },
            _ => Agreement::Malformed(affix.to_owned()),
        }
    }

    /// The UD features of this agreement, with attributes prefixed according to `slot`.
    pub fn features(&self, slot: Slot) -> Features {
        let prefix = slot.prefix();
        let mut features = Features::new();

        match self {
            Agreement::Personal { person, number } => {
                let class = match number {
                    Number::Sing => "Bantu1",
                    _ => "Bantu2",
                };
                features.push_prefixed(prefix, "Person", person.as_str());
                features.push_prefixed(prefix, "NounClass", class);
                features.push_prefixed(prefix, "Number", number.as_str());
            }
            Agreement::Habitual(number) => {
                features.push_prefixed(prefix, "Number", number.as_str());
            }
            Agreement::Class { class, number } => {
                features.push_prefixed(prefix, "NounClass", format!("Bantu{}", class));
                if let Some(number) = number {
                    features.push_prefixed(prefix, "Number", number.as_str());
                }
                features.push_prefixed(prefix, "Person", Person::Third.as_str());
            }
            Agreement::Malformed(affix) => {
                warn!("agreement marker {} not possible", affix);
                features.push_prefixed(prefix, "Person", Person::Third.as_str());
            }
        }

        features
    }
}

/// Agreement features of an optional prefix.
pub fn agreement_feats(affix: Option<&str>, slot: Slot) -> Features {
    match affix {
        Some(affix) if !affix.is_empty() => Agreement::parse(affix).features(slot),
        _ => Features::new(),
    }
}

pub fn noun_feats(tag: &SwahiliTag) -> Features {
    let mut features = Features::new();

    if tag.msd_extra().contains("MASS") {
        features.push("Number", Number::Coll.as_str());
    }

    let number = crate::tag::first_class_number(tag.msd());
    if let Some(number) = number {
        features.push("Number", number.as_str());
    }

    let class = match tag.noun_class() {
        Some(class) => class,
        None => return features,
    };

    let bare_class = match class.split_once('/') {
        None => class,
        Some((singular, _)) if number == Some(Number::Sing) => singular,
        Some((_, plural)) => plural,
    };

    features.push("NounClass", format!("Bantu{}", bare_class));
    features
}

pub fn verb_feats(tag: &SwahiliTag) -> Features {
    let mut features = Features::new();
    let msd = tag.msd();
    let msd_extra = tag.msd_extra();
    let tam_has = |component: &str| tag.tam().map_or(false, |tam| tam.has(component));

    // transitivity
    if utils::has_token(msd_extra, "SVOO") {
        features.push("Subcat", "Ditran");
    } else if utils::has_token(msd_extra, "SVO") {
        features.push("Subcat", "Tran");
    } else if utils::has_token(msd_extra, "SV") {
        features.push("Subcat", "Intr");
    }

    // voice values are not mutually exclusive
    if utils::has_token(msd_extra, "APPL") {
        features.push("Voice", "Appl");
    }
    if utils::has_token(msd_extra, "CAUS") {
        features.push("Voice", "Cau");
    }
    if utils::has_token(msd_extra, "PASS") || utils::has_token(msd_extra, "PS") {
        features.push("Voice", "Pass");
    } else {
        features.push("Voice", "Act");
    }
    if utils::has_token(msd_extra, "REC") {
        features.push("Voice", "Rcp");
    }

    if tam_has("PERF") {
        features.push("Aspect", "Perf");
    } else {
        features.push("Aspect", "Imp");
    }

    if tam_has("SBJN") {
        features.push("Mood", "Sub");
    } else if tam_has("IMP") {
        features.push("Mood", "Imp");
    } else {
        features.push("Mood", "Ind");
    }

    // `-singe-` encodes mood, tense and polarity at once, so polarity has to be decided in the same cascade
    if msd.contains("TAM=COND:ngeli") {
        features.push("Mood", "Cnd");
        features.push("Tense", "Past");
        features.push("Polarity", "Pos");
    } else if msd.contains("TAM=COND:nge") || msd.contains("TAM=COND:ki") {
        features.push("Mood", "Cnd");
        features.push("Tense", "Pres");
    } else if msd.contains("TAM=COND:singe") {
        features.push("Mood", "Cnd");
        features.push("Tense", "Pres");
        features.push("Polarity", "Neg");
    } else if msd.contains("TAM=PAST-NEG") {
        features.push("Tense", "Past");
        features.push("Polarity", "Neg");
    } else if msd.contains("TAM=PAST") {
        features.push("Tense", "Past");
        features.push("Polarity", "Pos");
    } else if tam_has("NEG") {
        features.push("Polarity", "Neg");
    } else {
        features.push("Polarity", "Pos");
    }

    if tam_has("PR") {
        features.push("Tense", "Pres");
    } else if tam_has("PAST") {
        features.push("Tense", "Past");
    } else if tam_has("FUT") {
        features.push("Tense", "Fut");
    }

    // habitual aspect is marked on the subject prefix in Swahili
    if msd.contains("HABIT-PL") || msd.contains("HABIT-SG") {
        features.push("Aspect", "Hab");
    }

    features.extend(agreement_feats(tag.subj(), Slot::Subject));
    features.extend(agreement_feats(tag.obj(), Slot::Object));
    features.extend(agreement_feats(tag.rel(), Slot::Relative));
    features
}

pub fn adj_feats(tag: &SwahiliTag) -> Features {
    let mut features = Features::new();
    let msd = tag.msd();

    if msd.contains("CARD") {
        features.push("NumType", "Card");
    } else if msd.contains("ORD") {
        features.push("NumType", "Ord");
    }

    let is_adjective = match tag.upos() {
        Some(upos) => upos == Upos::Adj,
        None => tag.pos() == Some("ADJ"),
    };

    if msd.contains("COMP") {
        features.push("Degree", "Cmp");
    } else if msd.contains("SUPER") {
        features.push("Degree", "Sup");
    } else if is_adjective {
        features.push("Degree", "Pos");
    }

    if msd.contains("NUM-INFL") || msd.contains("A-INFL") {
        features.extend(class_feats(msd));
    }

    features
}

/// Noun class agreement of any other word, taken from all class markers in the MSD.
pub fn class_feats(msd: &str) -> Features {
    let mut features = Features::new();

    for (class, number) in utils::class_markers(msd) {
        features.push("NounClass", format!("Bantu{}", class));
        features.push("Number", number.as_str());
    }

    features
}

/// UD features of a word, chosen by its [Category].
pub fn ud_morph_feats(tag: &SwahiliTag) -> Features {
    match Category::of(tag) {
        Category::Noun => noun_feats(tag),
        Category::Verb => verb_feats(tag),
        Category::Adjective => adj_feats(tag),
        Category::Other => class_feats(tag.msd()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(msd: &str, msd_extra: &str) -> String {
        let mut tag = SwahiliTag::new("x", Some("N"), msd).with_msd_extra(msd_extra);
        tag.set_noun_class();
        tag.set_upos();
        tag.ud_morph_feats().to_string()
    }

    fn verb(msd: &str, msd_extra: &str) -> Features {
        let mut tag = SwahiliTag::new("x", Some("V"), msd).with_msd_extra(msd_extra);
        tag.set_verb_tags();
        tag.set_upos();
        tag.ud_morph_feats()
    }

    #[test]
    fn noun_classes_follow_number() {
        assert_eq!(noun("1/2-SG", ""), "NounClass=Bantu1|Number=Sing");
        assert_eq!(noun("1/2-PL", ""), "NounClass=Bantu2|Number=Plur");
        assert_eq!(noun("9/10-PLSG", ""), "NounClass=Bantu10|Number=Plur");
        assert_eq!(noun("11-SG", "MASS"), "NounClass=Bantu11|Number=Coll|Number=Sing");
        assert_eq!(noun("AN", ""), "");
    }

    #[test]
    fn personal_agreement() {
        let features = verb("SUB-PREF=PL1 OBJ-PREF=SG2 TAM=FUT", "SVO");

        assert!(features.contains("Person=1"));
        assert!(features.contains("NounClass=Bantu2"));
        assert!(features.contains("Number=Plur"));
        assert!(features.contains("ObjPerson=2"));
        assert!(features.contains("ObjNounClass=Bantu1"));
        assert!(features.contains("ObjNumber=Sing"));
        assert!(features.contains("Tense=Fut"));
    }

    #[test]
    fn class_agreement() {
        let features = verb("SUB-PREF=7-SG REL-PREF=10-PL TAM=PR:na", "SV");

        assert_eq!(
            features.to_string(),
            "Aspect=Imp|Mood=Ind|NounClass=Bantu7|Number=Sing|Person=3|Polarity=Pos|RelNounClass=Bantu10|\
             RelNumber=Plur|RelPerson=3|Subcat=Intr|Tense=Pres|Voice=Act"
        );
    }

    #[test]
    fn habitual_agreement() {
        let features = verb("SUB-PREF=HABIT-SG", "");

        assert!(features.contains("Aspect=Hab"));
        assert!(features.contains("Number=Sing"));
        assert!(!features.iter().any(|x| x.starts_with("Person=")));

        let features = verb("SUB-PREF=HABIT-PL", "");
        assert_eq!(
            features.to_string(),
            "Aspect=Hab|Aspect=Imp|Mood=Ind|Number=Plur|Polarity=Pos|Voice=Act"
        );
    }

    #[test]
    fn malformed_agreement_only_marks_person() {
        assert_eq!(Agreement::parse("OBJ-PREF=7"), Agreement::Malformed("OBJ-PREF=7".into()));
        assert_eq!(
            Agreement::parse("OBJ-PREF=7").features(Slot::Object).to_string(),
            "ObjPerson=3"
        );
    }

    #[test]
    fn conditionals() {
        let features = verb("SUB-PREF=SG1 TAM=COND:ngeli", "");
        assert!(features.contains("Mood=Cnd"));
        assert!(features.contains("Tense=Past"));
        assert!(features.contains("Polarity=Pos"));

        let features = verb("SUB-PREF=SG1 TAM=COND:nge", "");
        assert!(features.contains("Tense=Pres"));
        assert!(!features.contains("Tense=Past"));

        let features = verb("SUB-PREF=SG1 TAM=COND:ki", "");
        assert!(features.contains("Mood=Cnd"));
        assert!(features.contains("Tense=Pres"));
        assert!(!features.contains("Polarity=Neg"));

        let features = verb("SUB-PREF=SG1 TAM=COND:singe", "");
        assert!(features.contains("Polarity=Neg"));
        assert!(features.contains("Mood=Cnd"));
    }

    #[test]
    fn negation_and_voice() {
        let features = verb("SUB-PREF=SG3 TAM=PAST-NEG", "SVO PASS APPL");
        assert!(features.contains("Tense=Past"));
        assert!(features.contains("Polarity=Neg"));
        assert!(features.contains("Voice=Pass"));
        assert!(features.contains("Voice=Appl"));
        assert!(!features.contains("Voice=Act"));

        let features = verb("SUB-PREF=SG3 TAM=PR-NEG", "SVOO CAUS REC");
        assert!(features.contains("Polarity=Neg"));
        assert!(features.contains("Tense=Pres"));
        assert!(features.contains("Subcat=Ditran"));
        assert!(features.contains("Voice=Cau"));
        assert!(features.contains("Voice=Rcp"));
        assert!(features.contains("Voice=Act"));

        let features = verb("SUB-PREF=SG3 TAM=PAST:li", "SVO PS");
        assert!(features.contains("Voice=Pass"));
        assert!(!features.contains("Voice=Act"));
    }

    #[test]
    fn mood_and_aspect() {
        let features = verb("SUB-PREF=SG2 TAM=SBJN", "");
        assert!(features.contains("Mood=Sub"));
        assert!(features.contains("Aspect=Imp"));

        let features = verb("SUB-PREF=SG2 TAM=PERF:me", "");
        assert!(features.contains("Aspect=Perf"));
        assert!(features.contains("Mood=Ind"));

        let features = verb("SUB-PREF=SG2 TAM=IMP", "");
        assert!(features.contains("Mood=Imp"));
        assert!(!features.contains("Mood=Ind"));
    }

    #[test]
    fn adjectives() {
        let mut tag = SwahiliTag::new("mzuri", Some("ADJ"), "A-INFL 1/2-SG 1-SG");
        tag.set_upos();
        assert_eq!(
            tag.ud_morph_feats().to_string(),
            "Degree=Pos|NounClass=Bantu1|Number=Sing"
        );

        let mut tag = SwahiliTag::new("wawili", Some("NUM"), "NUM-INFL CARD 2-PL");
        tag.set_upos();
        assert_eq!(
            tag.ud_morph_feats().to_string(),
            "NounClass=Bantu2|NumType=Card|Number=Plur"
        );
    }

    #[test]
    fn fallback_class_agreement() {
        let mut tag = SwahiliTag::new("hiki", Some("DEM"), "7-SG");
        tag.set_upos();
        assert_eq!(Category::of(&tag), Category::Other);
        assert_eq!(tag.ud_morph_feats().to_string(), "NounClass=Bantu7|Number=Sing");
    }

    #[test]
    fn category_uses_helsinki_tag_before_upos_pass() {
        let tag = SwahiliTag::new("kitabu", Some("N"), "7/8-SG");
        assert_eq!(Category::of(&tag), Category::Noun);

        let tag = SwahiliTag::new("ni", Some("V-BE"), "");
        assert_eq!(Category::of(&tag), Category::Other);
    }
}
