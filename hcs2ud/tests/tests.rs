use hcs2ud::{
    corpus::read_seq_tag,
    segment::{separate_cc_compounds, split_verb},
    types::parse_morph_features,
    ConvertOptions, Document, Label, SwahiliTag,
};
use lazy_static::lazy_static;
use quickcheck_macros::quickcheck;

const CONFIG_PATH: &str = "configs/convert.json";

const EXPORT: &str = r#"{
    "kwic": [
        {
            "structs": {"sentence_id": "a1", "text_year": "1995", "text_author": "Mwandishi"},
            "tokens": [
                {"word": "Kitabu", "pos": "N", "syntax": "@SUBJ", "msd": "7/8-SG [kitabu]", "msdextra": ""},
                {"word": "kilisomwa", "pos": "V", "syntax": "@FMAINV", "msd": "SUB-PREF=7-SG TAM=PAST:li", "msdextra": "SVO PASS"},
                {"word": "!", "pos": "EXCLAM", "syntax": null, "msd": null, "msdextra": null}
            ]
        },
        {
            "structs": {"sentence_id": "a2"},
            "tokens": [
                {"word": "Nami", "pos": "PRON", "syntax": "@SUBJ", "msd": "PERS SG1", "msdextra": ""},
                {"word": "ninaipenda", "pos": "V", "syntax": "@FMAINV", "msd": "SUB-PREF=SG1 TAM=PR:na OBJ-PREF=9-SG", "msdextra": "SVO"}
            ]
        },
        {
            "structs": {"sentence_id": "a3"},
            "tokens": [
                {"word": "hmm", "msd": "", "msdextra": ""}
            ]
        }
    ]
}"#;

const MSD_PIECES: [&str; 8] = [
    "SUB-PREF=SG3",
    "SUB-PREF=9-SG",
    "OBJ-PREF=PL2",
    "REL-PREF=7-SG",
    "TAM=PAST:li",
    "TAM=COND:ngeli",
    "TAM=PR:na",
    "HABIT-SG",
];

const EXTRA_PIECES: [&str; 7] = ["SV", "SVO", "APPL", "CAUS", "REC", "PASS", "PS"];

lazy_static! {
    static ref DOCUMENT: Document = {
        let mut document = Document::from_json_reader(EXPORT.as_bytes()).unwrap();
        document.prepare(&ConvertOptions::default());
        document
    };
}

fn pick<'a>(pieces: &[&'a str], mask: u16) -> String {
    pieces
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, x)| *x)
        .collect::<Vec<_>>()
        .join(" ")
}

fn verb(msd: &str, msd_extra: &str) -> SwahiliTag {
    let mut tag = SwahiliTag::new("x", Some("V"), msd).with_msd_extra(msd_extra);
    tag.set_verb_tags();
    tag.set_upos();
    tag
}

#[test]
fn untagged_sentences_are_dropped() {
    assert_eq!(DOCUMENT.len(), 2);
    assert!(DOCUMENT.sentences().iter().all(|x| x.id() != "a3"));
}

#[test]
fn document_converts_to_pos_tags() {
    let mut out = Vec::new();
    DOCUMENT.to_seq_tag_writer(&mut out, Label::Pos).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Kitabu###NOUN\tkilisomwa###VERB\t!###PUNCT\t\n\
         Nami###PRON\tninaipenda###VERB\t\n"
    );
}

#[test]
fn document_converts_to_ud_features() {
    let mut out = Vec::new();
    DOCUMENT.to_seq_tag_writer(&mut out, Label::UdMorph).unwrap();
    let sentences = read_seq_tag(out.as_slice()).unwrap();

    assert_eq!(sentences.len(), 2);
    assert_eq!(
        sentences[0][0],
        ("Kitabu".to_owned(), "NounClass=Bantu7|Number=Sing".to_owned())
    );
    assert_eq!(
        sentences[0][1].1,
        "Aspect=Imp|Mood=Ind|NounClass=Bantu7|Number=Sing|Person=3|Polarity=Pos|Subcat=Tran|Tense=Past|Voice=Pass"
    );
    assert_eq!(
        sentences[1][1].1,
        "Aspect=Imp|Mood=Ind|NounClass=Bantu1|Number=Sing|ObjNounClass=Bantu9|ObjNumber=Sing|ObjPerson=3|Person=1|Polarity=Pos|Subcat=Tran|Tense=Pres|Voice=Act"
    );
}

#[test]
fn function_labels_are_written() {
    let line = DOCUMENT.sentences()[1].to_seq_tag_line(Label::Func).unwrap();
    assert_eq!(line, "Nami###@SUBJ\tninaipenda###@FMAINV\t");
}

#[test]
fn config_is_applied() {
    let options = ConvertOptions::from_path(CONFIG_PATH).unwrap();
    assert_eq!(options.label, Label::UdMorph);
    assert!(options.strip_msd);

    let mut document = Document::from_json_reader(EXPORT.as_bytes()).unwrap();
    document.prepare(&options);

    assert_eq!(document.sentences()[0].words()[0].msd(), "7/8-SG");
}

#[test]
fn verbs_and_compounds_are_split() {
    assert_eq!(
        split_verb("ninaipenda").unwrap(),
        ("nina".to_owned(), "ipenda".to_owned())
    );
    // only lowercase `na` is separated
    assert_eq!(separate_cc_compounds("nasi"), "na si");
    assert_eq!(separate_cc_compounds("Nami"), "Nami");
}

#[test]
fn morph_features_are_parsed() {
    let features = parse_morph_features("Number=Sing|NounClass=Bantu7").unwrap();

    assert_eq!(features.len(), 2);
    assert_eq!(features["NounClass"], "Bantu7");
    assert!(parse_morph_features("_").unwrap().is_empty());
    assert!(parse_morph_features("Number").is_err());
}

#[quickcheck]
fn voice_is_active_unless_passive(mask: u16) -> bool {
    let extra = pick(&EXTRA_PIECES, mask);
    let features = verb("TAM=PR:na", &extra).ud_morph_feats();

    features.contains("Voice=Act") != extra.split_whitespace().any(|x| x == "PASS" || x == "PS")
}

#[quickcheck]
fn noun_classes_carry_number(class: u8, plural: bool) -> bool {
    let class = class % 18 + 1;
    let marker = if plural { "PL" } else { "SG" };
    let mut tag = SwahiliTag::new("x", Some("N"), &format!("{}-{} AN", class, marker));
    tag.set_noun_class();
    tag.set_upos();

    let features = tag.ud_morph_feats();
    let number = if plural { "Number=Plur" } else { "Number=Sing" };

    features.contains(&format!("NounClass=Bantu{}", class)) && features.contains(number)
}

#[quickcheck]
fn rendered_features_are_sorted(msd_mask: u16, extra_mask: u16) -> bool {
    let rendered = verb(&pick(&MSD_PIECES, msd_mask), &pick(&EXTRA_PIECES, extra_mask))
        .ud_morph_feats()
        .to_string();
    let features: Vec<_> = rendered.split('|').collect();

    features.windows(2).all(|x| x[0] < x[1])
}

#[quickcheck]
fn can_split_anything(word: String) -> bool {
    let _ = split_verb(&word);
    separate_cc_compounds(&word);
    true
}

#[quickcheck]
fn can_parse_any_feature_string(text: String) -> bool {
    let _ = parse_morph_features(&text);
    true
}
