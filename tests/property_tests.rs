//! Property-based tests for rust_leveled_logger using proptest

use proptest::prelude::*;
use rust_leveled_logger::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::VALUES.to_vec())
}

fn generic_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Debug),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
    ]
}

fn field_value() -> impl Strategy<Value = FieldValue> {
    let leaf = prop_oneof![
        Just(FieldValue::Null),
        any::<bool>().prop_map(FieldValue::Bool),
        any::<i64>().prop_map(FieldValue::Int),
        // quarter steps are exact in binary and in decimal
        (-4_000_000i64..4_000_000).prop_map(|n| FieldValue::Float(n as f64 / 4.0 + 0.25)),
        "\\PC{0,16}".prop_map(FieldValue::String),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
            .prop_map(|fields| FieldValue::Map(fields.into_iter().collect()))
    })
}

fn log_data() -> impl Strategy<Value = LogData> {
    prop::collection::btree_map("[a-z_]{1,8}", field_value(), 1..6)
        .prop_map(|fields| fields.into_iter().collect())
}

fn capturing_logger(threshold: LogLevel) -> (Logger, Arc<WriterSink<Vec<u8>>>) {
    let sink = Arc::new(WriterSink::new("capture", Vec::new(), RecordStyle::Json));
    let mut builder = Logger::builder().threshold(threshold).console(false);
    for channel in Channel::ALL {
        builder = builder.sink(channel, sink.clone());
    }
    (builder.build().unwrap(), sink)
}

fn written_lines(sink: &WriterSink<Vec<u8>>) -> Vec<String> {
    sink.with_writer(|buf| {
        String::from_utf8_lossy(buf)
            .lines()
            .map(str::to_string)
            .collect()
    })
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let lower: LogLevel = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    /// Test that LogLevel ordering follows the discriminants
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1.satisfies(level2), level2 != LogLevel::None && val1 >= val2);
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A generic call produces output iff the threshold satisfies its level
    #[test]
    fn test_emission_matches_threshold(threshold in any_level(), level in generic_level()) {
        let (logger, sink) = capturing_logger(threshold);
        logger.log(level, "probe", None);

        let emitted = !written_lines(&sink).is_empty();
        prop_assert_eq!(emitted, threshold.satisfies(level));
        prop_assert_eq!(logger.metrics().filtered_count(), u64::from(!emitted));
    }

    /// Access records follow the same threshold rule
    #[test]
    fn test_access_emission_matches_threshold(threshold in any_level()) {
        let (logger, sink) = capturing_logger(threshold);
        logger.access(chrono::Utc::now(), &ResponseMeta::new("GET", "/", "HTTP/1.1"));

        let emitted = !written_lines(&sink).is_empty();
        prop_assert_eq!(emitted, threshold >= LogLevel::Access);
    }

    /// Payloads written as JSON parse back to the same mapping
    #[test]
    fn test_payload_roundtrip(data in log_data(), message in "\\PC{0,32}") {
        let (logger, sink) = capturing_logger(LogLevel::All);
        logger.info_with_data(message, data.clone());

        let lines = written_lines(&sink);
        prop_assert_eq!(lines.len(), 1);

        let record: GenericLogRecord = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(record.data, Some(data));
    }

    /// Console rendering never leaks escapes into JSON and always colors the tag
    #[test]
    fn test_console_and_json_renderings(level in generic_level(), message in "\\PC{0,32}") {
        let formatter = RecordFormatter::new(FormatterConfig::new().shared());
        let record: LogRecord = GenericLogRecord::new(level, message).into();

        let console = formatter.console_line(&record);
        let json = RecordFormatter::json_line(&record).unwrap();

        let color = level.color().unwrap();
        let expected_tag = format!("\x1b[{}m[{}]\x1b[0m", color.to_fg_str(), level);
        prop_assert!(console.starts_with(&expected_tag));
        prop_assert!(!json.contains('\x1b'));
        prop_assert_eq!(json.matches('\n').count(), 1);
    }
}
