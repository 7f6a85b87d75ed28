use content_core::document::Document;
use content_core::types::SkipReason;
use content_core::{ContentEngine, EngineError, InsertionOptions};

fn count_word(text: &str, word: &str) -> usize {
    Document::parse(text).words().filter(|w| *w == word).count()
}

#[test]
fn inserts_missing_keyword_once() {
    let engine = ContentEngine::default();
    let result = engine.insert_keyword("Cats are great pets.", "dogs").unwrap();

    assert!(!result.skipped);
    assert_eq!(result.reason, None);
    assert_eq!(result.modified_text, "When it comes to dogs, Cats are great pets.");
    assert!(result.modified_text.contains("Cats"));
    assert_eq!(result.modified_text.matches("dogs").count(), 1);
    for original in ["Cats", "are", "great", "pets"] {
        assert_eq!(count_word(&result.modified_text, original), 1, "{original}");
    }
}

#[test]
fn insertion_span_locates_keyword() {
    let engine = ContentEngine::default();
    let result = engine.insert_keyword("Cats are great pets.", "dogs").unwrap();
    let span = result.insertion_offset.unwrap();

    assert_eq!(span.byte_start, 17);
    assert_eq!(span.byte_end, 21);
    assert_eq!(&result.modified_text[span.byte_start..span.byte_end], "dogs");

    assert_eq!((span.word_start, span.word_end), (4, 5));
    let doc = Document::parse(&result.modified_text);
    assert_eq!(doc.words().nth(span.word_start), Some("dogs"));
}

#[test]
fn invariant_second_insertion_is_skipped() {
    let engine = ContentEngine::default();
    let cases = [
        ("Cats are great pets.", "dogs"),
        ("When it rains, cats stay inside.", "dogs"),
        ("Short intro. A much longer second sentence follows here.", "local SEO"),
    ];

    for (text, keyword) in cases {
        let first = engine.insert_keyword(text, keyword).unwrap();
        assert!(!first.skipped);

        let second = engine.insert_keyword(&first.modified_text, keyword).unwrap();
        assert!(second.skipped);
        assert_eq!(second.reason, Some(SkipReason::AlreadyPresent));
        assert_eq!(second.reason.map(|r| r.as_str()), Some("already present"));
        assert_eq!(second.modified_text, first.modified_text);
        assert_eq!(second.insertion_offset, None);
    }
}

#[test]
fn existing_keyword_is_matched_case_insensitively_by_word() {
    let engine = ContentEngine::default();

    let present = engine.insert_keyword("Local SEO matters.", "local seo").unwrap();
    assert!(present.skipped);

    // "dogs" inside "Hotdogs" is not an occurrence.
    let absent = engine.insert_keyword("Hotdogs are tasty.", "dogs").unwrap();
    assert!(!absent.skipped);
}

#[test]
fn empty_document_is_skipped_not_raised() {
    let engine = ContentEngine::default();
    for text in ["", "   ", "..."] {
        let result = engine.insert_keyword(text, "dogs").unwrap();
        assert!(result.skipped);
        assert_eq!(result.reason, Some(SkipReason::EmptyDocument));
        assert_eq!(result.modified_text, text);
    }
}

#[test]
fn empty_keyword_is_validation_error() {
    let engine = ContentEngine::default();
    for keyword in ["", "   ", "!!!"] {
        assert!(matches!(
            engine.insert_keyword("Cats are great pets.", keyword),
            Err(EngineError::Validation(_))
        ));
    }
}

#[test]
fn picks_shortest_sentence_in_lede() {
    let engine = ContentEngine::default();
    let text = "Search engines crawl every page daily. Rankings shift. Content matters a lot. \
                Links help. Speed counts. Users stay.";
    let result = engine.insert_keyword(text, "local SEO").unwrap();

    assert_eq!(
        result.modified_text,
        "Search engines crawl every page daily. When it comes to local SEO, Rankings shift. \
         Content matters a lot. Links help. Speed counts. Users stay."
    );
    let span = result.insertion_offset.unwrap();
    assert_eq!(&result.modified_text[span.byte_start..span.byte_end], "local SEO");
    assert_eq!((span.word_start, span.word_end), (10, 12));
}

#[test]
fn subordinate_opening_takes_keyword_after_clause() {
    let engine = ContentEngine::default();
    let result = engine
        .insert_keyword("When it rains, cats stay inside.", "dogs")
        .unwrap();

    assert_eq!(
        result.modified_text,
        "When it rains, especially for dogs, cats stay inside."
    );
    let span = result.insertion_offset.unwrap();
    assert_eq!(span.word_start, 5);
    assert_eq!(&result.modified_text[span.byte_start..span.byte_end], "dogs");
}

#[test]
fn sentence_words_keep_their_case() {
    let engine = ContentEngine::default();

    let acronym = engine.insert_keyword("SEO takes time.", "patience").unwrap();
    assert_eq!(acronym.modified_text, "When it comes to patience, SEO takes time.");

    let proper_noun = engine.insert_keyword("Paris hosts the games.", "travel").unwrap();
    assert_eq!(
        proper_noun.modified_text,
        "When it comes to travel, Paris hosts the games."
    );
}

#[test]
fn keyword_with_terminal_punctuation_is_inserted_once() {
    let engine = ContentEngine::default();
    let first = engine
        .insert_keyword("Cats are great pets.", "Yahoo! Answers")
        .unwrap();
    assert_eq!(
        first.modified_text,
        "When it comes to Yahoo! Answers, Cats are great pets."
    );

    let second = engine
        .insert_keyword(&first.modified_text, "Yahoo! Answers")
        .unwrap();
    assert!(second.skipped);
    assert_eq!(second.reason, Some(SkipReason::AlreadyPresent));
    assert_eq!(second.modified_text, first.modified_text);

    // The keyword starts in the first sentence even though it ends in the second.
    let options = InsertionOptions {
        tolerance: Some(1),
        ..InsertionOptions::default()
    };
    let windowed = engine
        .insert_keyword_with(&first.modified_text, "Yahoo! Answers", &options)
        .unwrap();
    assert!(windowed.skipped);
}

#[test]
fn force_inserts_despite_presence() {
    let engine = ContentEngine::default();
    let options = InsertionOptions {
        force: true,
        ..InsertionOptions::default()
    };
    let result = engine.insert_keyword_with("Dogs rule.", "dogs", &options).unwrap();

    assert!(!result.skipped);
    assert_eq!(result.modified_text, "When it comes to dogs, Dogs rule.");
    assert_eq!(result.modified_text.to_lowercase().matches("dogs").count(), 2);
}

#[test]
fn tolerance_limits_presence_scan() {
    let engine = ContentEngine::default();
    let text = "Cats nap. Birds sing. Dogs bark.";

    let whole = engine.insert_keyword(text, "dogs").unwrap();
    assert!(whole.skipped);

    let options = InsertionOptions {
        tolerance: Some(1),
        ..InsertionOptions::default()
    };
    let windowed = engine.insert_keyword_with(text, "dogs", &options).unwrap();
    assert!(!windowed.skipped);
    assert_eq!(
        windowed.modified_text,
        "When it comes to dogs, Cats nap. Birds sing. Dogs bark."
    );
}
