// tests/header_tests.rs
use scrawl::{LineFormatter, LoggerConfig, StyleTable};

fn formatter(frame_width: usize) -> LineFormatter {
    let config = LoggerConfig {
        frame_width,
        ..Default::default()
    };
    LineFormatter::new(&config)
}

#[test]
fn test_header_block_exact_layout() {
    println!("=== Testing Header: Exact layout ===");

    let block = formatter(10).format_header("A\nBB", &StyleTable::new(false));
    assert_eq!(
        block,
        "|----------|\n|    A     |\n|    BB    |\n|----------|\n"
    );
    assert_eq!(block.lines().count(), 4);
    println!("✓ Border, centered rows, border");
}

#[test]
fn test_header_rows_are_bold_when_colored() {
    println!("=== Testing Header: Bold rows ===");

    let block = formatter(10).format_header("Title", &StyleTable::new(true));
    assert!(block.contains("\x1b[1m"));
    assert!(block.contains("\x1b[0m"));
    // Borders stay unstyled
    assert!(block.starts_with("|----------|\n"));
    println!("✓ Rows wrapped in bold, borders plain");
}

#[test]
fn test_over_length_row_is_not_truncated() {
    println!("=== Testing Header: Width overflow ===");

    let block = formatter(4).format_header("ABCDEF", &StyleTable::new(false));
    assert_eq!(block, "|----|\n|ABCDEF|\n|----|\n");
    println!("✓ Over-length rows pass through unpadded");
}

#[test]
fn test_default_frame_width() {
    println!("=== Testing Header: Default width ===");

    let block = LineFormatter::new(&LoggerConfig::default())
        .format_header("Startup", &StyleTable::new(false));
    let border = block.lines().next().unwrap();
    assert_eq!(border.len(), 82); // pipe + 80 dashes + pipe
    println!("✓ Frame width defaults to 80");
}

#[test]
fn test_empty_message_still_produces_a_row() {
    println!("=== Testing Header: Empty message ===");

    let block = formatter(4).format_header("", &StyleTable::new(false));
    assert_eq!(block, "|----|\n|    |\n|----|\n");
    println!("✓ Empty input yields one blank centered row");
}
