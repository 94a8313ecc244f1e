//! Property tests over arbitrary embedded-JSON fragments.

use jsonlit_common::VirtualCharSequence;
use jsonlit_parser::parse;
use jsonlit_syntax::{JsonOptions, Tree, dump};
use proptest::prelude::*;

/// Short inputs built from JSON punctuation, words and trivia, so that most
/// cases hit recovery paths.
fn fragment_strategy() -> impl Strategy<Value = String> {
    "[\\[\\]{}(),:'\"a-z0-9 \\t\\n/*\\\\.+-]{0,40}"
}

fn parse_both(text: &str) -> (Tree, Tree) {
    let chars = VirtualCharSequence::from_str(text);
    let loose = parse(&chars, JsonOptions::Loose).expect("loose tree");
    let strict = parse(&chars, JsonOptions::Strict).expect("strict tree");
    (loose, strict)
}

fn check_lossless(text: &str) -> Result<(), TestCaseError> {
    let (loose, strict) = parse_both(text);
    prop_assert_eq!(loose.to_text(), text);
    prop_assert_eq!(strict.to_text(), text);
    Ok(())
}

fn check_same_shape(text: &str) -> Result<(), TestCaseError> {
    let (loose, strict) = parse_both(text);
    prop_assert_eq!(dump(&loose), dump(&strict));
    Ok(())
}

fn check_diagnostics_ordered(text: &str) -> Result<(), TestCaseError> {
    let (loose, strict) = parse_both(text);
    for tree in [&loose, &strict] {
        let starts: Vec<usize> = tree.diagnostics().iter().map(|d| d.start()).collect();
        prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]), "{:?}", starts);
        for diag in tree.diagnostics() {
            prop_assert!(diag.start() + diag.length() <= text.len());
        }
        prop_assert_eq!(tree.first_diagnostic(), tree.diagnostics().first());
    }
    Ok(())
}

proptest! {
    #[test]
    fn parse_is_lossless(text in fragment_strategy()) {
        check_lossless(&text)?;
    }

    #[test]
    fn mode_only_changes_diagnostics(text in fragment_strategy()) {
        check_same_shape(&text)?;
    }

    #[test]
    fn diagnostics_are_ordered_and_in_range(text in fragment_strategy()) {
        check_diagnostics_ordered(&text)?;
    }

    #[test]
    fn every_edit_still_parses(text in fragment_strategy(), cut in 0usize..40) {
        let cut = cut.min(text.len());
        check_lossless(&text[..cut])?;
        check_lossless(&text[cut..])?;

        let mut deleted = text.clone();
        if cut < deleted.len() {
            deleted.remove(cut);
        }
        check_lossless(&deleted)?;
    }

    #[test]
    fn valid_json_has_no_diagnostics(values in prop::collection::vec(0i64..1000, 0..8)) {
        let text = serde_json::to_string(&serde_json::json!({ "values": values })).expect("json");
        let (loose, strict) = parse_both(&text);
        prop_assert!(!loose.has_diagnostics());
        prop_assert!(!strict.has_diagnostics());
    }
}
