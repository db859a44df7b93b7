use crate::colors::StyleTable;
use std::fmt;

/// Severity of a single log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Log,
    Debug,
    Warning,
    Error,
}

impl Severity {
    /// Fixed prefix label, left-justified to the prefix width in formatted lines
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Log => "LOG",
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Console style for this severity; LOG stays uncolored
    pub fn style<'a>(&self, styles: &'a StyleTable) -> &'a str {
        match self {
            Severity::Log => "",
            Severity::Debug => styles.info,
            Severity::Warning => styles.warning,
            Severity::Error => styles.fail,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" => Ok(Severity::Log),
            "debug" => Ok(Severity::Debug),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}
