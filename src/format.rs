use crate::colors::StyleTable;
use crate::config::LoggerConfig;
use crate::severity::Severity;
use chrono::Local;

/// Width the severity prefix is padded to
pub const PREFIX_WIDTH: usize = 8;
/// Width the separator is padded to
pub const SEPARATOR_WIDTH: usize = 3;
/// Separator between the prefix block and the message
pub const SEPARATOR: &str = ":";

/// Timestamp rendering used when no pattern is configured
const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Builds single log lines and boxed header blocks
#[derive(Debug, Clone)]
pub struct LineFormatter {
    timestamp_format: Option<String>,
    use_timestamp: bool,
    use_prefix: bool,
    frame_width: usize,
}

impl LineFormatter {
    pub fn new(config: &LoggerConfig) -> Self {
        LineFormatter {
            timestamp_format: config.timestamp_format.clone(),
            use_timestamp: config.use_timestamp,
            use_prefix: config.use_prefix,
            frame_width: config.frame_width,
        }
    }

    /// Render the current local time. Each call reflects the instant of
    /// invocation; an invalid pattern is a caller bug and fails inside
    /// chrono's formatter.
    pub fn timestamp(&self) -> String {
        let pattern = self
            .timestamp_format
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT);
        Local::now().format(pattern).to_string()
    }

    /// Build one log line: the message, the padded prefix block in front of
    /// it, then the timestamp in front of both. No trailing newline. The
    /// ordering is the wire format shared by console and file.
    pub fn format_line(&self, message: &str, severity: Severity) -> String {
        let mut line = message.to_string();
        if self.use_prefix {
            line = format!(
                "{}{}{}",
                pad(severity.prefix(), PREFIX_WIDTH),
                pad(SEPARATOR, SEPARATOR_WIDTH),
                line
            );
        }
        if self.use_timestamp {
            line = format!("{}---{}", self.timestamp(), line);
        }
        line
    }

    /// Build a boxed header block: a border, one bold centered row per input
    /// line, a closing border, and a trailing newline.
    pub fn format_header(&self, message: &str, styles: &StyleTable) -> String {
        let border = format!("|{}|", "-".repeat(self.frame_width));
        let mut block = String::new();
        block.push_str(&border);
        block.push('\n');
        for line in message.split('\n') {
            block.push_str(&format!(
                "|{}{}{}|\n",
                styles.bold,
                center(line, self.frame_width),
                styles.reset
            ));
        }
        block.push_str(&border);
        block.push('\n');
        block
    }
}

/// Left-justify to `width` with space fill. Text longer than the width is
/// returned in full, never truncated.
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut padded = String::with_capacity(width);
    padded.push_str(text);
    for _ in len..width {
        padded.push(' ');
    }
    padded
}

/// Center within `width`, the odd extra space going to the right.
/// Over-length text passes through unpadded and untruncated.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
