//! Parser for Debian control files.
//!
//! Control files (`debian/control`, `Packages`, `Sources`, ...) consist of
//! paragraphs separated by blank lines. Each paragraph holds `Name: value`
//! fields, whose values can continue on following lines that start with a
//! space or tab.
//!
//! How those continuation lines are joined depends on the field:
//!
//! * **folded** fields, such as `Build-Depends`, are one logical line wrapped
//!   for readability. Continuation lines are stripped and concatenated without
//!   a separator.
//! * **multiline** fields, such as `Description` or `Files`, keep every
//!   continuation line verbatim, indentation included, joined by newlines.
//!
//! The classification is a [`FieldModes`] table owned by the [`Parser`].
//! Fields not in the table are multiline, so no line structure is lost.
//!
//! ```
//! let paragraphs = debcontrol::parse_str(
//!     "Source: bti\nBuild-Depends: debhelper (>= 8),\n libxml2-dev\n\nPackage: bti\nDescription: tweet\n from the shell\n",
//! )
//! .unwrap();
//! assert_eq!(paragraphs.len(), 2);
//! assert_eq!(paragraphs[0].get("Build-Depends"), Some("debhelper (>= 8),libxml2-dev"));
//! assert_eq!(paragraphs[1].get("Description"), Some("tweet\n from the shell"));
//! ```

mod error;
pub mod fields;
mod lex;
mod paragraph;
mod parse;

pub use error::Error;
pub use fields::{FieldMode, FieldModes};
pub use paragraph::{Field, Paragraph};
pub use parse::{DuplicatePolicy, ParseOptions, Paragraphs, Parser};

/// Parse all paragraphs from a reader, using the default field classification.
pub fn parse<R: std::io::Read>(reader: R) -> Result<Vec<Paragraph>, Error> {
    Parser::default().parse(std::io::BufReader::new(reader))
}

/// Parse all paragraphs from a string, using the default field classification.
pub fn parse_str(text: &str) -> Result<Vec<Paragraph>, Error> {
    Parser::default().parse_str(text)
}
