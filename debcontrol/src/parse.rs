//! The paragraph scanner.
//!
//! Input is read one line at a time. Each line is classified by
//! [`crate::lex::classify`] and fed into a small state machine holding the
//! paragraph being built and the field currently accumulating continuation
//! lines. A paragraph is only handed out once a blank line or the end of the
//! input has finalized it.
use std::io::BufRead;

use crate::fields::{FieldMode, FieldModes};
use crate::lex::{classify, strip_terminator, Line};
use crate::{Error, Paragraph};

/// What to do when a field name occurs twice in one paragraph.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DuplicatePolicy {
    /// The later value replaces the earlier one; the field keeps its first position.
    #[default]
    Replace,

    /// Fail with [`Error::DuplicateField`].
    Reject,
}

/// Options controlling the parser.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// How to handle repeated field names.
    pub duplicates: DuplicatePolicy,

    /// Skip lines starting with `#`, as allowed in `debian/control`.
    ///
    /// When disabled such lines are parsed like any other header line.
    pub comments: bool,
}

/// A control file parser.
///
/// The parser owns the field classification table and options; it holds no
/// per-parse state and can be reused and shared freely.
///
/// ```
/// use debcontrol::{FieldMode, FieldModes, Parser};
///
/// let parser = Parser::new(FieldModes::default().with("X-Wrapped", FieldMode::Folded));
/// let paragraphs = parser
///     .parse_str("Package: foo\nX-Wrapped: a,\n b\n")
///     .unwrap();
/// assert_eq!(paragraphs[0].get("X-Wrapped"), Some("a,b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    modes: FieldModes,
    options: ParseOptions,
}

impl Parser {
    /// Create a parser using the given field classification.
    pub fn new(modes: FieldModes) -> Self {
        Self::with_options(modes, ParseOptions::default())
    }

    /// Create a parser using the given field classification and options.
    pub fn with_options(modes: FieldModes, options: ParseOptions) -> Self {
        Self { modes, options }
    }

    /// The field classification table.
    pub fn modes(&self) -> &FieldModes {
        &self.modes
    }

    /// The parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse all paragraphs from a reader.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Vec<Paragraph>, Error> {
        self.paragraphs(reader).collect()
    }

    /// Parse all paragraphs from a string.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Paragraph>, Error> {
        self.parse(text.as_bytes())
    }

    /// Stream paragraphs from a reader.
    ///
    /// This returns an iterator that yields each paragraph as soon as it is
    /// complete, so only one paragraph is held in memory at a time.
    pub fn paragraphs<R: BufRead>(&self, reader: R) -> Paragraphs<'_, R> {
        Paragraphs {
            parser: self,
            reader,
            line: String::new(),
            lineno: 0,
            paragraph: Paragraph::new(),
            field: None,
            finished: false,
        }
    }
}

/// A field whose value is still accumulating continuation lines.
#[derive(Debug)]
struct PendingField {
    name: String,
    value: String,
    mode: FieldMode,
    lineno: usize,
}

impl PendingField {
    fn push_continuation(&mut self, line: &str) {
        match self.mode {
            FieldMode::Folded => self.value.push_str(line.trim()),
            FieldMode::Multiline => {
                self.value.push('\n');
                self.value.push_str(line);
            }
        }
    }
}

/// Iterator over the paragraphs of a control file.
///
/// Created by [`Parser::paragraphs`]. After an error has been returned the
/// iterator is exhausted.
pub struct Paragraphs<'p, R> {
    parser: &'p Parser,
    reader: R,
    line: String,
    lineno: usize,
    paragraph: Paragraph,
    field: Option<PendingField>,
    finished: bool,
}

impl<R: BufRead> Paragraphs<'_, R> {
    /// Move the pending field, if any, into the current paragraph.
    fn commit_field(&mut self) -> Result<(), Error> {
        let Some(field) = self.field.take() else {
            return Ok(());
        };
        if self.paragraph.contains_key(&field.name) {
            match self.parser.options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateField {
                        line: field.lineno,
                        name: field.name,
                    });
                }
                DuplicatePolicy::Replace => {
                    log::debug!(
                        "line {}: field {:?} repeated, replacing earlier value",
                        field.lineno,
                        field.name
                    );
                }
            }
        }
        self.paragraph.set_owned(field.name, field.value);
        Ok(())
    }

    /// Finalize the current paragraph, returning it if it has any fields.
    fn finish_paragraph(&mut self) -> Result<Option<Paragraph>, Error> {
        self.commit_field()?;
        if self.paragraph.is_empty() {
            return Ok(None);
        }
        let paragraph = std::mem::take(&mut self.paragraph);
        log::trace!(
            "paragraph with {} fields complete at line {}",
            paragraph.len(),
            self.lineno
        );
        Ok(Some(paragraph))
    }

    /// Feed one line into the state machine.
    ///
    /// Returns a paragraph if this line completed one.
    fn step(&mut self) -> Result<Option<Paragraph>, Error> {
        let line = std::mem::take(&mut self.line);
        let result = self.step_line(strip_terminator(&line));
        self.line = line;
        result
    }

    fn step_line(&mut self, text: &str) -> Result<Option<Paragraph>, Error> {
        let kind = classify(text, self.parser.options.comments).ok_or_else(|| {
            Error::MalformedHeader {
                line: self.lineno,
                text: text.to_string(),
            }
        })?;

        match kind {
            Line::Blank => self.finish_paragraph(),
            Line::Comment => Ok(None),
            Line::Continuation(rest) => match self.field.as_mut() {
                Some(field) => {
                    field.push_continuation(rest);
                    Ok(None)
                }
                None => Err(Error::OrphanContinuation {
                    line: self.lineno,
                    text: text.to_string(),
                }),
            },
            Line::Header { name, value } => {
                self.commit_field()?;
                self.field = Some(PendingField {
                    name: name.to_string(),
                    value: value.to_string(),
                    mode: self.parser.modes.mode(name),
                    lineno: self.lineno,
                });
                Ok(None)
            }
        }
    }
}

impl<R: BufRead> Iterator for Paragraphs<'_, R> {
    type Item = Result<Paragraph, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.line.clear();
            let result = match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.finished = true;
                    return self.finish_paragraph().transpose();
                }
                Ok(_) => {
                    self.lineno += 1;
                    self.step()
                }
                Err(e) => Err(Error::Io(e)),
            };

            match result {
                Ok(Some(paragraph)) => return Some(Ok(paragraph)),
                Ok(None) => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Paragraphs<'_, R> {}
