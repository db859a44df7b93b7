use crate::colors::StyleTable;
use crate::config::LoggerConfig;
use crate::error::ConfigError;
use crate::format::LineFormatter;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, FileSink};
use crate::tty::should_use_colors;
use std::io;
use std::path::Path;

/// Leveled logger writing to the console and, optionally, one log file.
///
/// Every operation follows the same shape: format the message once, write
/// the colored form to the console, append the color-stripped form to the
/// file. A file-sink failure is reported on stderr and never propagated;
/// the console write for the same record has already happened by then.
pub struct Logger {
    styles: StyleTable,
    formatter: LineFormatter,
    console: ConsoleSink,
    file: FileSink,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        let use_colors = config.color.unwrap_or_else(should_use_colors);
        let styles = StyleTable::new(use_colors);
        let formatter = LineFormatter::new(&config);
        let console = ConsoleSink::new(styles.clone(), config.debug);
        let file = FileSink::new(config.log_dir.clone(), config.log_file_name.clone());
        Logger {
            styles,
            formatter,
            console,
            file,
        }
    }

    /// Build a logger from a YAML configuration file
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Logger::new(LoggerConfig::from_yaml_file(path)?))
    }

    /// The log file name, once configured or derived
    pub fn file_name(&self) -> Option<&str> {
        self.file.file_name()
    }

    /// Log a message as a bordered header block
    pub fn log_header(&self, message: &str) {
        let block = self.formatter.format_header(message, &self.styles);
        self.emit(&block, Severity::Log);
    }

    /// Log a plain message
    pub fn log(&self, message: &str) {
        let line = self.formatter.format_line(message, Severity::Log);
        self.emit(&line, Severity::Log);
    }

    /// Log a debug message; shown on the console only when debug is
    /// enabled, always written to the file
    pub fn debug(&self, message: &str) {
        let line = self.formatter.format_line(message, Severity::Debug);
        self.emit(&line, Severity::Debug);
    }

    /// Log a warning message, shown in yellow
    pub fn warning(&self, message: &str) {
        let line = self.formatter.format_line(message, Severity::Warning);
        self.emit(&line, Severity::Warning);
    }

    /// Log an error message, shown in red
    pub fn error(&self, message: &str) {
        let line = self.formatter.format_line(message, Severity::Error);
        self.emit(&line, Severity::Error);
    }

    fn emit(&self, text: &str, severity: Severity) {
        // stdout write failures must not abort the caller
        let stdout = io::stdout();
        let _ = self.console.write_line(&mut stdout.lock(), text, severity);
        if let Err(err) = self.file.append(text, || self.formatter.timestamp()) {
            eprintln!("scrawl: warning: {}", err);
        }
    }
}
