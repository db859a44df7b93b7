// tests/line_format_tests.rs
use scrawl::{LineFormatter, LoggerConfig, Severity};

#[test]
fn test_prefix_block_exact_spacing() {
    println!("=== Testing Line Format: Prefix spacing ===");

    let config = LoggerConfig {
        use_timestamp: false,
        ..Default::default()
    };
    let formatter = LineFormatter::new(&config);

    assert_eq!(
        formatter.format_line("disk low", Severity::Warning),
        "WARNING :  disk low"
    );
    assert_eq!(formatter.format_line("ready", Severity::Log), "LOG     :  ready");
    assert_eq!(
        formatter.format_line("probe sent", Severity::Debug),
        "DEBUG   :  probe sent"
    );
    assert_eq!(
        formatter.format_line("mount failed", Severity::Error),
        "ERROR   :  mount failed"
    );
    println!("✓ Prefix block uses 8/3 padding for every severity");
}

#[test]
fn test_message_verbatim_without_prefix_and_timestamp() {
    println!("=== Testing Line Format: Bare messages ===");

    let config = LoggerConfig {
        use_timestamp: false,
        use_prefix: false,
        ..Default::default()
    };
    let formatter = LineFormatter::new(&config);

    for severity in [
        Severity::Log,
        Severity::Debug,
        Severity::Warning,
        Severity::Error,
    ] {
        assert_eq!(formatter.format_line("disk low", severity), "disk low");
    }
    println!("✓ Messages pass through verbatim");
}

#[test]
fn test_timestamp_prepended_in_front_of_prefix() {
    println!("=== Testing Line Format: Timestamp ordering ===");

    let formatter = LineFormatter::new(&LoggerConfig::default());
    let line = formatter.format_line("disk low", Severity::Warning);

    assert!(line.ends_with("---WARNING :  disk low"));
    let stamp = line.strip_suffix("---WARNING :  disk low").unwrap();
    assert!(!stamp.is_empty());
    // default representation: date, space, time with microseconds
    assert_eq!(stamp.len(), 26);
    println!("✓ Timestamp sits in front of the prefix block");
}

#[test]
fn test_timestamp_only_lines() {
    println!("=== Testing Line Format: Timestamp without prefix ===");

    let config = LoggerConfig {
        use_prefix: false,
        ..Default::default()
    };
    let formatter = LineFormatter::new(&config);
    let line = formatter.format_line("disk low", Severity::Warning);

    assert!(line.ends_with("---disk low"));
    assert!(!line.contains("WARNING"));
    println!("✓ Prefix block can be disabled independently");
}

#[test]
fn test_custom_timestamp_pattern_is_used() {
    println!("=== Testing Line Format: Custom pattern ===");

    let config = LoggerConfig {
        timestamp_format: Some("%H:%M".to_string()),
        ..Default::default()
    };
    let formatter = LineFormatter::new(&config);
    let line = formatter.format_line("up", Severity::Log);

    let stamp = line.strip_suffix("---LOG     :  up").unwrap();
    assert_eq!(stamp.len(), 5);
    assert_eq!(&stamp[2..3], ":");
    println!("✓ Caller patterns drive the timestamp");
}
