//! File-level parser for MAINTAINERS files.
//!
//! Reads the input line by line, classifies each line and collects one
//! [`Maintainer`](crate::Maintainer) per recognised line.

use super::error::ParseError;
use super::lexer::{classify_line, split_lines};
use crate::collection::Maintainers;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Configuration options for the parser.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// If true, malformed lines are skipped (lenient mode).
    /// If false, the first malformed line aborts the parse (strict mode).
    pub ignore_errors: bool,
}

impl ParserConfig {
    /// Creates a new parser config with default settings (strict mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that aborts on the first malformed line.
    pub fn strict() -> Self {
        Self {
            ignore_errors: false,
        }
    }

    /// Creates a config that skips malformed lines.
    pub fn lenient() -> Self {
        Self {
            ignore_errors: true,
        }
    }

    /// Sets whether malformed lines are skipped.
    pub fn with_ignore_errors(mut self, value: bool) -> Self {
        self.ignore_errors = value;
        self
    }
}

/// Parses lines from `reader`.
///
/// `source` names the input in [`ParseError::Malformed`]. Lines end at `\n`,
/// `\r\n` or a lone `\r`; a final line without a terminator is kept whole.
pub fn parse_reader<R: BufRead>(
    mut reader: R,
    source: &Path,
    config: &ParserConfig,
) -> Result<Maintainers, ParseError> {
    debug!(
        "Parsing maintainers from {} (ignore_errors={})",
        source.display(),
        config.ignore_errors
    );
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let mut maintainers = Maintainers::new();
    let mut skipped = 0usize;

    for (line_idx, line) in split_lines(&content).enumerate() {
        let line_num = line_idx + 1; // 1-based line numbers

        let maintainer = classify_line(line).to_maintainer();
        match maintainer {
            Some(maintainer) => {
                trace!("Line {}: {}", line_num, maintainer);
                maintainers.push(maintainer);
            }
            None if config.ignore_errors => {
                debug!("Line {}: skipping malformed maintainer {:?}", line_num, line);
                skipped += 1;
            }
            None => return Err(ParseError::malformed(source, line_num, line)),
        }
    }

    debug!(
        "Parsing complete: {} maintainers, {} skipped",
        maintainers.len(),
        skipped
    );
    Ok(maintainers)
}

/// Parses in-memory MAINTAINERS content.
pub fn parse_str(
    input: &str,
    source: impl AsRef<Path>,
    config: &ParserConfig,
) -> Result<Maintainers, ParseError> {
    parse_reader(input.as_bytes(), source.as_ref(), config)
}

/// Parses the MAINTAINERS file at `path` with the given configuration.
///
/// Open and read failures are returned as [`ParseError::Io`] unchanged.
pub fn parse_with_config(
    path: impl AsRef<Path>,
    config: &ParserConfig,
) -> Result<Maintainers, ParseError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), path, config)
}

/// Parses the MAINTAINERS file at `path`.
///
/// With `ignore_errors` set, malformed lines are skipped; otherwise the first
/// one aborts the parse and no maintainers are returned.
pub fn parse(path: impl AsRef<Path>, ignore_errors: bool) -> Result<Maintainers, ParseError> {
    parse_with_config(path, &ParserConfig::new().with_ignore_errors(ignore_errors))
}
