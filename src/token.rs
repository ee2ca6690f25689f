use std::fmt::{self, Display};

use crate::Diagnostic;

/// What kind of thing a [`Token`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The command line has been exhausted.
    End,
    /// A free-standing argument, e.g. `/dev/null`.
    Argument,
    /// A long option, e.g. `--verbose`.
    LongOption,
    /// A short option, e.g. `-q`.
    ShortOption,
}

/// A single item pulled from the command line.
///
/// `key` holds the option name (without dashes) or the text of a positional
/// argument. It's only missing for [`TokenKind::End`] and for a malformed
/// long option like `--=foo`.
///
/// `val` is only ever set for options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The option name or argument text.
    pub key: Option<String>,
    /// The value attached to an option.
    pub val: Option<String>,
    /// Anything that looked wrong while producing this token.
    pub diagnostic: Option<Diagnostic>,
}

impl Token {
    /// The token signalling the end of the command line.
    pub fn end() -> Token {
        Token::new(TokenKind::End, None)
    }

    /// A positional argument.
    pub fn argument(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Argument, Some(text.into()))
    }

    /// A short option without a value.
    pub fn short(ch: char) -> Token {
        Token::new(TokenKind::ShortOption, Some(ch.to_string()))
    }

    /// A long option without a value.
    pub fn long(name: impl Into<String>) -> Token {
        Token::new(TokenKind::LongOption, Some(name.into()))
    }

    pub(crate) fn new(kind: TokenKind, key: Option<String>) -> Token {
        Token {
            kind,
            key,
            val: None,
            diagnostic: None,
        }
    }

    /// Attach a value.
    pub fn with_val(mut self, val: impl Into<String>) -> Token {
        self.val = Some(val.into());
        self
    }

    /// Attach a diagnostic.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Token {
        self.diagnostic = Some(diagnostic);
        self
    }

    /// Whether this is the end of the command line.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    /// Whether this is a positional argument.
    pub fn is_arg(&self) -> bool {
        self.kind == TokenKind::Argument
    }

    /// Whether this is the short option `-{ch}`.
    pub fn is_short(&self, ch: char) -> bool {
        if self.kind != TokenKind::ShortOption {
            return false;
        }
        let mut buf = [0; 4];
        self.key.as_deref() == Some(&*ch.encode_utf8(&mut buf))
    }

    /// Whether this is the long option `--{name}`.
    pub fn is_long(&self, name: &str) -> bool {
        self.kind == TokenKind::LongOption && self.key.as_deref() == Some(name)
    }
}

/// Show the token roughly the way it was written.
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or("");
        match self.kind {
            TokenKind::End => f.write_str("<end>"),
            TokenKind::Argument => f.write_str(key),
            TokenKind::ShortOption => match &self.val {
                Some(val) => write!(f, "-{} {}", key, val),
                None => write!(f, "-{}", key),
            },
            TokenKind::LongOption => match &self.val {
                Some(val) => write!(f, "--{}={}", key, val),
                None => write!(f, "--{}", key),
            },
        }
    }
}
