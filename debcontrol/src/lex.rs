//! Line classification.

/// A single line of input, classified by its first character.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Line<'a> {
    /// An empty line, separating paragraphs.
    Blank,

    /// A `#` comment line. Only produced when comments are enabled.
    Comment,

    /// A line starting with a space or tab. Holds the whole line, indentation included.
    Continuation(&'a str),

    /// A `Name: value` line.
    Header {
        /// Text before the first colon.
        name: &'a str,
        /// Text after the first colon, with leading whitespace removed.
        value: &'a str,
    },
}

/// Strip a trailing `\n` or `\r\n` from a line.
pub(crate) fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Whether `name` is usable as a field name.
///
/// Names are non-empty and contain no whitespace or control characters.
fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
}

/// Classify a line whose terminator has already been stripped.
///
/// Returns `None` if the line is not a valid header and nothing else either.
pub(crate) fn classify(line: &str, comments: bool) -> Option<Line<'_>> {
    match line.chars().next() {
        None => Some(Line::Blank),
        Some(' ') | Some('\t') => Some(Line::Continuation(line)),
        Some('#') if comments => Some(Line::Comment),
        Some(_) => {
            let (name, value) = line.split_once(':')?;
            if !valid_name(name) {
                return None;
            }
            Some(Line::Header {
                name,
                value: value.trim_start(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("Package: foo\n"), "Package: foo");
        assert_eq!(strip_terminator("Package: foo\r\n"), "Package: foo");
        assert_eq!(strip_terminator("Package: foo"), "Package: foo");
        assert_eq!(strip_terminator("\n"), "");
        assert_eq!(strip_terminator("\r\n"), "");
        // Only one terminator is removed
        assert_eq!(strip_terminator("foo\n\n"), "foo\n");
    }

    #[test]
    fn test_classify_header() {
        assert_eq!(
            classify("Package: hello", false),
            Some(Line::Header {
                name: "Package",
                value: "hello"
            })
        );
        assert_eq!(
            classify("Files:", false),
            Some(Line::Header {
                name: "Files",
                value: ""
            })
        );
        assert_eq!(
            classify("Key:    value   ", false),
            Some(Line::Header {
                name: "Key",
                value: "value   "
            })
        );
        // Everything after the first colon belongs to the value
        assert_eq!(
            classify("Depends: bash-completion (>= 1:1.1-3)", false),
            Some(Line::Header {
                name: "Depends",
                value: "bash-completion (>= 1:1.1-3)"
            })
        );
    }

    #[test]
    fn test_classify_continuation() {
        assert_eq!(
            classify(" Some more text", false),
            Some(Line::Continuation(" Some more text"))
        );
        assert_eq!(classify("\t.", false), Some(Line::Continuation("\t.")));
        assert_eq!(
            classify(" Key: value", false),
            Some(Line::Continuation(" Key: value"))
        );
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify("", false), Some(Line::Blank));
        assert_eq!(classify("", true), Some(Line::Blank));
    }

    #[test]
    fn test_classify_comment() {
        assert_eq!(classify("# A comment", true), Some(Line::Comment));
        // With comments disabled, '#' is an ordinary first character
        assert_eq!(classify("# A comment", false), None);
        assert_eq!(
            classify("#Key: value", false),
            Some(Line::Header {
                name: "#Key",
                value: "value"
            })
        );
    }

    #[test]
    fn test_classify_malformed() {
        assert_eq!(classify("Package hello", false), None);
        assert_eq!(classify(": value", false), None);
        assert_eq!(classify("Two words: value", false), None);
        assert_eq!(classify("Bad\u{7}: value", false), None);
    }
}
