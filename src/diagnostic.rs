/// A problem noticed while scanning.
///
/// None of these stop the scanner. The token that triggered one is still
/// returned, with its key and value filled in as far as they could be
/// determined, and the diagnostic attached to it. It's up to the caller to
/// decide whether it's worth complaining about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A long option had a separator right after the dashes, as in `--=foo`.
    #[error("empty long option key in '{arg}'")]
    EmptyLongKey {
        /// The whole argument.
        arg: String,
    },

    /// A boolean option was given a value anyway, as in `--verbose=yes`.
    ///
    /// The value is still reported on the token.
    #[error("option '{key}' does not take a value (got '{value}')")]
    UnexpectedValue {
        /// The option, including dashes.
        key: String,
        /// The value it was given.
        value: String,
    },

    /// A separator was required between an option and its value but none
    /// was found.
    #[error("expected separator after '{key}'")]
    MissingSeparator {
        /// The option, including dashes.
        key: String,
    },

    /// An option needed a value but the command line ran out.
    #[error("argument expected for option '{key}'")]
    MissingValue {
        /// The option, including dashes.
        key: String,
    },
}

impl Diagnostic {
    /// The option the diagnostic is about, if it has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Diagnostic::EmptyLongKey { .. } => None,
            Diagnostic::UnexpectedValue { key, .. }
            | Diagnostic::MissingSeparator { key }
            | Diagnostic::MissingValue { key } => Some(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let diag = Diagnostic::MissingValue { key: "-o".into() };
        assert_eq!(diag.to_string(), "argument expected for option '-o'");
        assert_eq!(diag.key(), Some("-o"));

        let diag = Diagnostic::UnexpectedValue {
            key: "--verbose".into(),
            value: "yes".into(),
        };
        assert_eq!(
            diag.to_string(),
            "option '--verbose' does not take a value (got 'yes')"
        );

        let diag = Diagnostic::EmptyLongKey { arg: "--=x".into() };
        assert_eq!(diag.to_string(), "empty long option key in '--=x'");
        assert_eq!(diag.key(), None);
    }

    #[test]
    fn test_into_boxed_error() {
        fn dispatch() -> Result<(), Box<dyn std::error::Error>> {
            let scanned: Result<(), Diagnostic> = Err(Diagnostic::MissingSeparator {
                key: "--out".into(),
            });
            scanned?;
            Ok(())
        }
        let err = dispatch().unwrap_err();
        assert_eq!(err.to_string(), "expected separator after '--out'");
    }
}
