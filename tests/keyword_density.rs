use content_core::document::Document;
use content_core::keywords::{
    contains_keyword, find_occurrences, keyword_density, keyword_positions,
};

#[test]
fn density_counts_word_sequences_case_insensitively() {
    let doc = Document::parse("Green tea is calming. I drink GREEN TEA daily. Tea helps.");
    let density = keyword_density(&doc, "green tea");

    assert_eq!(density.occurrences, 2);
    assert_eq!(density.total_words, 11);
    assert!((density.ratio - 2.0 / 11.0).abs() < 1e-12);
    assert!((density.percent() - 200.0 / 11.0).abs() < 1e-9);
}

#[test]
fn density_of_empty_document_is_zero() {
    let density = keyword_density(&Document::parse(""), "anything");
    assert_eq!(density.occurrences, 0);
    assert_eq!(density.ratio, 0.0);
}

#[test]
fn matches_do_not_span_sentences() {
    let doc = Document::parse("I like green. Tea is nice.");
    assert_eq!(keyword_density(&doc, "green tea").occurrences, 0);
}

#[test]
fn occurrences_respect_sentence_limit() {
    let doc = Document::parse("Dogs bark. Cats purr. Dogs run.");
    let needle = vec!["dogs".to_string()];

    assert_eq!(find_occurrences(&doc, &needle, None), vec![0, 4]);
    assert_eq!(find_occurrences(&doc, &needle, Some(2)), vec![0]);
    assert!(find_occurrences(&doc, &[], None).is_empty());
}

#[test]
fn presence_check_runs_across_sentence_breaks() {
    let doc = Document::parse("I asked Yahoo! Answers helped. Cats purr.");
    let needle = vec!["yahoo".to_string(), "answers".to_string()];

    assert!(find_occurrences(&doc, &needle, None).is_empty());
    assert!(contains_keyword(&doc, &needle, None));
    assert!(contains_keyword(&doc, &needle, Some(1)));
    assert!(!contains_keyword(&doc, &["cats".to_string()], Some(2)));
    assert!(contains_keyword(&doc, &["cats".to_string()], Some(3)));
    assert!(!contains_keyword(&doc, &[], None));
}

#[test]
fn positions_are_byte_offsets() {
    assert_eq!(keyword_positions("SEO tips: seo matters", "seo"), vec![0, 10]);
    assert_eq!(keyword_positions("aaa", "aa"), vec![0, 1]);
    assert_eq!(keyword_positions("Café café", "CAFÉ"), vec![0, 6]);
    assert!(keyword_positions("text", "").is_empty());
}
