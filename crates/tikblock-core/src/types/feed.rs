/// Raw feed body as downloaded from the intelligence source.
///
/// A document is consumed by [`FeedDocument::into_lines`]; iterating again means
/// fetching again.
#[derive(Debug, Clone)]
pub struct FeedDocument {
    source: String,
    body: String,
}

impl FeedDocument {
    /// Wrap a downloaded body
    #[must_use]
    pub fn new(source: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            body: body.into(),
        }
    }

    /// URL the document was fetched from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Body size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the body is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Turn the document into a single-pass iterator over its lines
    #[must_use]
    pub fn into_lines(self) -> FeedLines {
        FeedLines {
            body: self.body,
            pos: 0,
        }
    }
}

/// Lines of a [`FeedDocument`], split on `\n` with a trailing `\r` removed.
///
/// Lines are otherwise untouched: no trimming, filtering or deduplication.
#[derive(Debug)]
pub struct FeedLines {
    body: String,
    pos: usize,
}

impl Iterator for FeedLines {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.body.get(self.pos..).filter(|r| !r.is_empty())?;

        let (line, advance) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        let line = line.strip_suffix('\r').unwrap_or(line).to_owned();
        self.pos += advance;

        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(body: &str) -> Vec<String> {
        FeedDocument::new("test", body).into_lines().collect()
    }

    #[test]
    fn test_split_on_newlines() {
        assert_eq!(
            lines("1.2.3.4\n8.8.8.8\nnot-an-ip\n9.9.9.9"),
            vec!["1.2.3.4", "8.8.8.8", "not-an-ip", "9.9.9.9"]
        );
    }

    #[test]
    fn test_trailing_newline_and_crlf() {
        assert_eq!(lines("1.1.1.1\r\n2.2.2.2\r\n"), vec!["1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_kept() {
        assert_eq!(lines("a\n\n  b \n"), vec!["a", "", "  b "]);
    }

    #[test]
    fn test_empty_document() {
        let doc = FeedDocument::new("test", "");
        assert!(doc.is_empty());
        assert_eq!(doc.into_lines().count(), 0);
    }
}
