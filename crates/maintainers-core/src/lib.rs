//! MAINTAINERS Parser Core
//!
//! A library for reading MAINTAINERS files into maintainer records.
//!
//! # Features
//!
//! - **Parser**: Classify each line as a bare login, `login <email>` or
//!   `Name <email> (@login)`
//! - **Strict Mode**: Stop at the first malformed line
//! - **Lenient Mode**: Skip malformed lines and keep going
//! - **Serialization**: Records serialize to JSON with `name`, `login` and `email` keys
//!
//! # Quick Start
//!
//! ```no_run
//! use maintainers_core::{Maintainer, parse};
//!
//! let maintainers = parse("MAINTAINERS", false)?;
//! println!("{}", maintainers);
//!
//! let jane = Maintainer::from_login("janedoe").with_email("jane@example.com");
//! if maintainers.is_maintainer(&jane) {
//!     println!("{}", jane.to_json());
//! }
//! # Ok::<(), maintainers_core::ParseError>(())
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Line classification and file parsing
//! - [`generate`]: Synthetic MAINTAINERS content (with the `generate` feature)

pub mod collection;
#[cfg(feature = "generate")]
pub mod generate;
pub mod maintainer;
pub mod parse;

// Re-export commonly used types at the crate root
pub use collection::Maintainers;
pub use maintainer::Maintainer;
pub use parse::{ParseError, ParserConfig, parse, parse_with_config};
