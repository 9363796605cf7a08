use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Number;

lazy_static! {
    // only anchored at the start, `7-SG+` still counts
    static ref CLASS_PIECE: Regex = Regex::new(r"^([0-9]+)-(SG|PL)").expect("static regex is valid");
}

/// Finds noun class agreement markers like `7-SG` or `10-PL` in the whitespace-separated pieces of an MSD string.
pub fn class_markers(msd: &str) -> impl Iterator<Item = (&str, Number)> + '_ {
    msd.split_whitespace().filter_map(|piece| {
        let captures = CLASS_PIECE.captures(piece)?;
        let class = captures.get(1)?.as_str();
        let number = Number::from_marker(captures.get(2)?.as_str())?;

        Some((class, number))
    })
}

/// Whether `needle` is one of the whitespace-separated tokens of `haystack`.
pub fn has_token(haystack: &str, needle: &str) -> bool {
    haystack.split_whitespace().any(|x| x == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_markers_are_found() {
        let markers: Vec<_> = class_markers("A-INFL 9/10-PL 7-SG 10-PL").collect();
        assert_eq!(markers, vec![("7", Number::Sing), ("10", Number::Plur)]);
    }

    #[test]
    fn tokens_are_matched_exactly() {
        assert!(has_token("SVO APPL", "SVO"));
        assert!(!has_token("SVOO APPL", "SVO"));
    }
}
