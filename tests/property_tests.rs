//! Property-based tests for rust_text_logger using proptest

use proptest::prelude::*;
use rust_text_logger::core::join_items;
use rust_text_logger::core::template::render_template;
use rust_text_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::All),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
        Just(LogLevel::None),
    ]
}

fn short_error(err: &dyn ErrorValue) -> String {
    format!("{}: {}", err.type_name(), err.message())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Admission follows the severity order and the None/All extremes
    #[test]
    fn test_admits_matches_rank(level in any_level(), threshold in any_level()) {
        let expected = threshold != LogLevel::None && (level as u8) >= (threshold as u8);
        prop_assert_eq!(admits(level, threshold), expected);
    }

    #[test]
    fn test_none_blocks_all_admits(level in any_level()) {
        prop_assert!(!admits(level, LogLevel::None));
        prop_assert!(admits(level, LogLevel::All));
        if level != LogLevel::None {
            prop_assert!(admits(level, level));
        }
    }

    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }
}

// ============================================================================
// Item Joining Tests
// ============================================================================

proptest! {
    /// Joining non-empty texts equals a plain join with the delimiter
    #[test]
    fn test_join_non_empty_texts(
        texts in prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..8),
        delimiter in "[ :|,;-]{1,3}"
    ) {
        let items: Vec<LogItem> = texts.iter().map(LogItem::from).collect();
        let joined = join_items(&items, &delimiter, short_error);

        prop_assert_eq!(joined.body, texts.join(delimiter.as_str()));
        prop_assert!(joined.first_error.is_none());
    }

    #[test]
    fn test_join_pair(x in any::<i64>(), y in "[a-z]{1,10}") {
        let items = [LogItem::from(x), LogItem::from(y.as_str())];
        let joined = join_items(&items, " : ", short_error);
        prop_assert_eq!(joined.body, format!("{} : {}", x, y));
    }

    /// The first error item is the one captured, wherever it sits
    #[test]
    fn test_first_error_position(
        before in 0usize..4,
        after in 0usize..4,
        message in "[a-z]{1,10}"
    ) {
        let mut items: Vec<LogItem> = (0..before).map(|i| LogItem::from(i)).collect();
        items.push(LogItem::from(CapturedError::new("p::First", message.clone())));
        items.push(LogItem::from(CapturedError::new("p::Second", "later")));
        items.extend((0..after).map(|_| LogItem::Null));

        let joined = join_items(&items, " : ", short_error);
        let first = joined.first_error.expect("an error item was present");
        prop_assert_eq!(first.type_name(), "First");
        prop_assert_eq!(first.message(), message);
    }
}

// ============================================================================
// Template Tests
// ============================================================================

proptest! {
    /// Text without braces renders unchanged
    #[test]
    fn test_template_plain_text(text in "[^{}]*") {
        let rendered = render_template(&text, &[], short_error).unwrap();
        prop_assert_eq!(rendered, text);
    }

    /// Any index past the argument list is an error
    #[test]
    fn test_template_out_of_range(argc in 0usize..5, extra in 0usize..5) {
        let args: Vec<LogItem> = (0..argc).map(LogItem::from).collect();
        let template = format!("{{{}}}", argc + extra);
        prop_assert!(render_template(&template, &args, short_error).is_err());
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// Divider lines are always 79 copies of the glyph
    #[test]
    fn test_divider_width(glyph in prop::char::range('!', '~')) {
        let writer = MemoryWriter::new();
        let logger = Logger::builder()
            .destination("divider.log")
            .divider_char(glyph)
            .writer(writer.clone())
            .build();

        logger.divider().unwrap();
        let lines = writer.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].chars().count(), 79);
        prop_assert!(lines[0].chars().all(|c| c == glyph));
    }

    /// Each admitted call writes exactly one line for non-error items
    #[test]
    fn test_one_line_per_admitted_call(level in any_level(), threshold in any_level()) {
        let writer = MemoryWriter::new();
        let logger = Logger::builder()
            .destination("levels.log")
            .threshold(threshold)
            .writer(writer.clone())
            .build();

        logger.log(level, ["entry"]).unwrap();
        let expected = usize::from(admits(level, threshold));
        prop_assert_eq!(writer.lines().len(), expected);
    }
}
