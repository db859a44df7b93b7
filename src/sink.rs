use crate::colors::{strip_styles, StyleTable};
use crate::error::SinkError;
use crate::severity::Severity;
use once_cell::sync::OnceCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Console half of the dispatch: severity coloring plus debug gating
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    styles: StyleTable,
    debug_enabled: bool,
}

impl ConsoleSink {
    pub fn new(styles: StyleTable, debug_enabled: bool) -> Self {
        ConsoleSink {
            styles,
            debug_enabled,
        }
    }

    /// Write one formatted line. DEBUG lines are dropped unless debug is
    /// enabled; everything else is written exactly once, wrapped in the
    /// severity style when the table carries one.
    pub fn write_line<W: Write>(
        &self,
        output: &mut W,
        text: &str,
        severity: Severity,
    ) -> std::io::Result<()> {
        if severity == Severity::Debug && !self.debug_enabled {
            return Ok(());
        }
        let style = severity.style(&self.styles);
        if style.is_empty() {
            writeln!(output, "{}", text)
        } else {
            writeln!(output, "{}{}{}", style, text, self.styles.reset)
        }
    }
}

/// File half of the dispatch: append-only plain text, one file per logger
pub struct FileSink {
    dir: Option<PathBuf>,
    file_name: OnceCell<String>,
}

impl FileSink {
    /// A preset file name skips derivation entirely
    pub fn new(dir: Option<PathBuf>, file_name: Option<String>) -> Self {
        let cell = OnceCell::new();
        if let Some(name) = file_name {
            let _ = cell.set(name);
        }
        FileSink {
            dir,
            file_name: cell,
        }
    }

    /// The resolved file name, once configured or derived
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.get().map(String::as_str)
    }

    /// Append one record. A sink without a directory accepts and discards
    /// everything. The file name is derived from `derive_stamp` on the first
    /// append and reused for the lifetime of the sink; the file itself is
    /// opened in append-create mode and closed again on every call.
    pub fn append<F>(&self, text: &str, derive_stamp: F) -> Result<(), SinkError>
    where
        F: FnOnce() -> String,
    {
        let dir = match &self.dir {
            Some(dir) => dir,
            None => return Ok(()),
        };
        let name = self
            .file_name
            .get_or_init(|| file_name_from_stamp(&derive_stamp()));
        fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
            dir: dir.clone(),
            source,
        })?;
        let path = dir.join(name);
        let stripped = strip_styles(text);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Append {
                path: path.clone(),
                source,
            })?;
        writeln!(file, "{}", stripped).map_err(|source| SinkError::Append { path, source })?;
        Ok(())
    }
}

/// Turn a timestamp into a usable file name: field and path separators
/// become underscores.
pub fn file_name_from_stamp(stamp: &str) -> String {
    stamp.replace(':', "_").replace(' ', "_").replace('/', "_")
}
