/// ANSI style codes for console log output
#[derive(Debug, Clone)]
pub struct StyleTable {
    pub header: &'static str,    // Magenta for banner text
    pub info: &'static str,      // Blue for debug lines
    pub accent: &'static str,    // Cyan for highlighted values
    pub ok: &'static str,        // Green for success notes
    pub warning: &'static str,   // Yellow for warning lines
    pub fail: &'static str,      // Red for error lines
    pub bold: &'static str,      // Bold for header rows
    pub underline: &'static str, // Underline for emphasis
    pub reset: &'static str,     // Reset to default styling
}

impl StyleTable {
    /// Create a style table for console output
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                header: "\x1b[95m",   // Magenta for banner text
                info: "\x1b[94m",     // Blue for debug lines
                accent: "\x1b[96m",   // Cyan for highlighted values
                ok: "\x1b[92m",       // Green for success notes
                warning: "\x1b[93m",  // Yellow for warning lines
                fail: "\x1b[91m",     // Red for error lines
                bold: "\x1b[1m",      // Bold for header rows
                underline: "\x1b[4m", // Underline for emphasis
                reset: "\x1b[0m",     // Reset
            }
        } else {
            // All empty strings for no-color mode
            Self {
                header: "",
                info: "",
                accent: "",
                ok: "",
                warning: "",
                fail: "",
                bold: "",
                underline: "",
                reset: "",
            }
        }
    }
}

/// Every escape sequence a StyleTable can emit. The file sink strips
/// exactly these; sequences outside the table pass through untouched.
pub const STYLE_CODES: [&str; 9] = [
    "\x1b[95m", // header
    "\x1b[94m", // info
    "\x1b[96m", // accent
    "\x1b[92m", // ok
    "\x1b[93m", // warning
    "\x1b[91m", // fail
    "\x1b[1m",  // bold
    "\x1b[4m",  // underline
    "\x1b[0m",  // reset
];

/// Remove the defined style codes from a line before it reaches the log file
pub fn strip_styles(text: &str) -> String {
    let mut stripped = text.to_string();
    for code in STYLE_CODES {
        stripped = stripped.replace(code, "");
    }
    stripped
}
