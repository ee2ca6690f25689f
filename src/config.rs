use std::collections::HashSet;

/// The grammar a [`Scanner`][crate::Scanner] follows.
///
/// By default every option takes a value, values may be attached directly
/// (`-oVal`) or given as the next argument (`-o Val`), and both `=` and `:`
/// work as separators (`-o=Val`, `--out:Val`).
///
/// ```
/// let config = argtok::Config::default()
///     .short_bools("vq".chars())
///     .long_bools(["verbose", "quiet"])
///     .stop_words(["exec"]);
/// assert!(config.is_short_bool('v'));
/// assert!(!config.is_long_bool("output"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    short_bools: HashSet<char>,
    long_bools: HashSet<String>,
    require_separator: bool,
    sep_chars: Vec<char>,
    stop_words: HashSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            short_bools: HashSet::new(),
            long_bools: HashSet::new(),
            require_separator: false,
            sep_chars: vec!['=', ':'],
            stop_words: HashSet::new(),
        }
    }
}

impl Config {
    /// Short options that never take a value, so they can be clustered
    /// (`-abc`).
    pub fn short_bools<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.short_bools.extend(chars);
        self
    }

    /// Long options that never take a value.
    pub fn long_bools<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.long_bools.extend(names.into_iter().map(Into::into));
        self
    }

    /// Only accept values joined to their option by a separator.
    ///
    /// With this set `-o Val` and `--out Val` no longer take `Val` as a
    /// value, and `-oVal` is read as a cluster.
    pub fn require_separator(mut self, yes: bool) -> Self {
        self.require_separator = yes;
        self
    }

    /// Replace the key/value separators. The default is `=` and `:`.
    pub fn sep_chars<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.sep_chars = chars.into_iter().collect();
        self
    }

    /// Positional arguments after which no more options are recognized.
    ///
    /// Unlike `--` the stop word itself is reported as an argument.
    pub fn stop_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.stop_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Whether `ch` names a boolean short option.
    pub fn is_short_bool(&self, ch: char) -> bool {
        self.short_bools.contains(&ch)
    }

    /// Whether `name` names a boolean long option.
    pub fn is_long_bool(&self, name: &str) -> bool {
        self.long_bools.contains(name)
    }

    /// Whether values must be joined to options with a separator.
    pub fn requires_separator(&self) -> bool {
        self.require_separator
    }

    /// Whether `ch` is a key/value separator.
    pub fn is_separator(&self, ch: char) -> bool {
        self.sep_chars.contains(&ch)
    }

    /// Whether `arg` is a stop word.
    pub fn is_stop_word(&self, arg: &str) -> bool {
        self.stop_words.contains(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.is_separator('='));
        assert!(config.is_separator(':'));
        assert!(!config.is_separator('-'));
        assert!(!config.requires_separator());
        assert!(!config.is_short_bool('a'));
        assert!(!config.is_stop_word("--"));
    }

    #[test]
    fn test_builder() {
        let config = Config::default()
            .short_bools(['a', 'b'])
            .short_bools(['c'])
            .long_bools(vec![String::from("all")])
            .sep_chars(['+'])
            .require_separator(true)
            .stop_words(["run"]);
        assert!(config.is_short_bool('a'));
        assert!(config.is_short_bool('c'));
        assert!(config.is_long_bool("all"));
        assert!(config.is_separator('+'));
        assert!(!config.is_separator('='));
        assert!(config.requires_separator());
        assert!(config.is_stop_word("run"));
        assert!(!config.is_stop_word("ru"));
    }
}
