//! Separator tokenizer.
//!
//! Splits text around a string separator. The separator itself never ends
//! up in a token, and joining the tokens with the separator gives back the
//! original text.

/// Borrowing iterator over the tokens of a string.
///
/// Created by [`Tokens::new`] or collected eagerly with [`split`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: Option<&'a str>,
    separator: &'a str,
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `text` around `separator`.
    pub fn new(text: &'a str, separator: &'a str) -> Self {
        Self {
            rest: Some(text),
            separator,
        }
    }

    /// The untokenized remainder, separators included.
    ///
    /// Returns `None` once the final token has been yielded.
    pub fn remainder(&self) -> Option<&'a str> {
        self.rest
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;

        // An empty separator never matches anything useful.
        if self.separator.is_empty() {
            self.rest = None;
            return Some(rest);
        }

        match rest.find(self.separator) {
            Some(pos) => {
                self.rest = Some(&rest[pos + self.separator.len()..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Split `text` around every occurrence of `separator`.
///
/// `""` yields `[""]`, and a trailing separator yields a trailing empty
/// token.
///
/// ```
/// use wirc_proto::split;
///
/// assert_eq!(split("A\r\nB\r\n", "\r\n"), ["A", "B", ""]);
/// assert_eq!(split("", ";"), [""]);
/// ```
pub fn split<'a>(text: &'a str, separator: &'a str) -> Vec<&'a str> {
    Tokens::new(text, separator).collect()
}
