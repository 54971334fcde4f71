//! Syntax configuration: every marker character the scanner reacts to.
//!
//! All markers are plain `char` fields configured at parser construction, so
//! hosts can restyle the language (say, `%arg%` placeholders instead of
//! `{arg}`) without touching the engine. This is also why the tag scanner is
//! hand-rolled rather than a static lexer: the alphabet is not known at
//! compile time.

/// Marker characters of the LML dialect understood by a parser session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syntax {
    /// Opens a tag. Default `<`.
    pub tag_open: char,
    /// Closes a tag. Default `>`.
    pub tag_close: char,
    /// Marks a closing tag (`</x>`) or a self-closing tag (`<x/>`). Default `/`.
    pub closed_tag_marker: char,
    /// First character of a comment tag (`<!-- -->` or `<! >`). Default `!`.
    pub comment_marker: char,
    /// Alternative comment opener (`<? ?>`). Default `?`.
    pub schema_comment_marker: char,
    /// Distinguishes macro tags from actor tags. Default `@`.
    pub macro_marker: char,
    /// Opens an argument placeholder. Default `{`.
    pub argument_open: char,
    /// Closes an argument placeholder. Default `}`.
    pub argument_close: char,
    /// Separates attributes inside a tag. Default `' '`; when set to a space,
    /// any ASCII whitespace separates.
    pub attribute_separator: char,
    /// Joins an attribute name to its value. Default `=`.
    pub attribute_assignment: char,
    /// Prefixes a reference to a registered action. Default `$`.
    pub action_marker: char,
    /// Separates array elements. Default `;`.
    pub array_separator: char,
    /// Opens a numeric range inside an array element. Default `[`.
    pub range_open: char,
    /// Separates range bounds. Default `,`.
    pub range_separator: char,
    /// Closes a numeric range. Default `]`.
    pub range_close: char,
    /// Quotes attribute values that contain separators. Default `"`.
    pub quotation: char,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            tag_open: '<',
            tag_close: '>',
            closed_tag_marker: '/',
            comment_marker: '!',
            schema_comment_marker: '?',
            macro_marker: '@',
            argument_open: '{',
            argument_close: '}',
            attribute_separator: ' ',
            attribute_assignment: '=',
            action_marker: '$',
            array_separator: ';',
            range_open: '[',
            range_separator: ',',
            range_close: ']',
            quotation: '"',
        }
    }
}

impl Syntax {
    /// Whether `c` separates attributes. A space separator matches any ASCII
    /// whitespace so templates can mix spaces, tabs, and newlines inside tags.
    #[inline]
    pub fn is_attribute_separator(&self, c: char) -> bool {
        if self.attribute_separator == ' ' {
            c.is_ascii_whitespace()
        } else {
            c == self.attribute_separator
        }
    }

    /// Strip the action marker from a reference, if present.
    #[inline]
    pub fn strip_action_marker<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.strip_prefix(self.action_marker)
    }

    /// Strip surrounding quotation marks, if the text carries them.
    pub fn unquote<'a>(&self, text: &'a str) -> &'a str {
        let quoted = text.len() >= 2
            && text.starts_with(self.quotation)
            && text.ends_with(self.quotation);
        if quoted {
            &text[self.quotation.len_utf8()..text.len() - self.quotation.len_utf8()]
        } else {
            text
        }
    }
}
