//! Configuration file handling for the headless runner.
//!
//! The simulator keeps a five-line plain-text configuration file: output
//! folder pattern, snapshot file pattern, maximum tick count, rows, and
//! columns. A missing or invalid file is replaced with a freshly written
//! default so the program always starts with usable values.

use std::{fmt, fs, path::Path};

use anyhow::Context as _;

const DEFAULT_FOLDER_PATTERN: &str = "output";
const DEFAULT_FILE_PATTERN: &str = "tick";
const DEFAULT_MAX_TICKS: u32 = 50;
const DEFAULT_ROWS: u32 = 10;
const DEFAULT_COLS: u32 = 10;

/// Values supplied to the engine and the snapshot store at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RunConfig {
    /// Folder the snapshot store writes into.
    pub(crate) folder_pattern: String,
    /// File name prefix for per-tick snapshot files.
    pub(crate) file_pattern: String,
    /// Soft cap on how far the simulation may advance.
    pub(crate) max_ticks: u32,
    /// Board rows, fixed for the run.
    pub(crate) rows: u32,
    /// Board columns, fixed for the run.
    pub(crate) cols: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            folder_pattern: DEFAULT_FOLDER_PATTERN.to_owned(),
            file_pattern: DEFAULT_FILE_PATTERN.to_owned(),
            max_ticks: DEFAULT_MAX_TICKS,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl RunConfig {
    /// Parses the five-line configuration format.
    pub(crate) fn parse(text: &str) -> Result<Self, ConfigParseError> {
        let mut lines = text.lines().map(str::trim);
        let folder_pattern = next_value(&mut lines, "folder pattern")?;
        let file_pattern = next_value(&mut lines, "file pattern")?;
        let max_ticks = parse_count(next_value(&mut lines, "max ticks")?, "max ticks")?;
        let rows = parse_count(next_value(&mut lines, "rows")?, "rows")?;
        let cols = parse_count(next_value(&mut lines, "cols")?, "cols")?;
        if rows == 0 || cols == 0 {
            return Err(ConfigParseError::NonPositiveDimension { rows, cols });
        }
        Ok(Self {
            folder_pattern,
            file_pattern,
            max_ticks,
            rows,
            cols,
        })
    }

    /// Renders the configuration back into its file format.
    pub(crate) fn to_file_string(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n",
            self.folder_pattern, self.file_pattern, self.max_ticks, self.rows, self.cols
        )
    }

    /// Loads the configuration, rewriting a default file when needed.
    ///
    /// An unreadable or malformed file is not an error for the runner: the
    /// original values are replaced with defaults on disk, mirroring how
    /// the program has always recovered from a broken configuration.
    pub(crate) fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => match Self::parse(&text) {
                Ok(config) => Ok(config),
                Err(error) => {
                    eprintln!("invalid configuration file ({error}); writing defaults");
                    Self::write_default(path)
                }
            },
            Err(_) => Self::write_default(path),
        }
    }

    fn write_default(path: &Path) -> anyhow::Result<Self> {
        let config = Self::default();
        fs::write(path, config.to_file_string())
            .with_context(|| format!("writing default configuration to {}", path.display()))?;
        Ok(config)
    }
}

fn next_value<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<String, ConfigParseError> {
    match lines.next() {
        Some(line) if !line.is_empty() => Ok(line.to_owned()),
        _ => Err(ConfigParseError::MissingField(field)),
    }
}

fn parse_count(value: String, field: &'static str) -> Result<u32, ConfigParseError> {
    value
        .parse::<u32>()
        .map_err(|_| ConfigParseError::InvalidCount { field, value })
}

/// Reasons a configuration file fails to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ConfigParseError {
    /// A required line was missing or blank.
    MissingField(&'static str),
    /// A numeric field did not parse as a non-negative integer.
    InvalidCount {
        /// Which field was malformed.
        field: &'static str,
        /// The offending line.
        value: String,
    },
    /// Rows or columns were configured as zero.
    NonPositiveDimension {
        /// Configured row count.
        rows: u32,
        /// Configured column count.
        cols: u32,
    },
}

impl fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing {field} line"),
            Self::InvalidCount { field, value } => {
                write!(f, "{field} value '{value}' is not a non-negative integer")
            }
            Self::NonPositiveDimension { rows, cols } => {
                write!(f, "dimensions {rows}x{cols} must both be positive")
            }
        }
    }
}
