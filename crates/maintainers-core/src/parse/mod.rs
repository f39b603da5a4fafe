//! Parser module for MAINTAINERS files.
//!
//! Each line of a MAINTAINERS file describes one maintainer in one of three
//! layouts:
//!
//! ```text
//! octocat
//! octocat <octocat@example.com>
//! Mona Lisa <mona@example.com> (@octocat)
//! ```
//!
//! # Example
//!
//! ```rust
//! use maintainers_core::parse::{parse_str, ParserConfig};
//!
//! let input = "octocat\nMona Lisa <mona@example.com> (@monalisa)\n";
//!
//! let maintainers = parse_str(input, "MAINTAINERS", &ParserConfig::strict()).unwrap();
//! for maintainer in &maintainers {
//!     println!("{}", maintainer);
//! }
//! ```

mod error;
mod lexer;
mod parser;

// Re-export public types
pub use error::ParseError;
pub use lexer::{LineKind, classify_line, split_lines};
pub use parser::{ParserConfig, parse, parse_reader, parse_str, parse_with_config};
