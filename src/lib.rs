//! A configurable command line tokenizer.
//!
//! Most argument parsers are declarative: you tell them what to parse,
//! and they do it.
//!
//! This one turns the command line into a stream of tokens (options,
//! their values, and positional arguments) and lets you figure out the
//! rest. Which options are boolean, which characters separate a key from
//! its value, and which words end option processing is up to the
//! [`Config`] you hand it.
//!
//! ## Example
//! ```
//! use argtok::{Config, Scanner, TokenKind};
//!
//! let config = Config::default().short_bools(['f']).long_bools(["follow"]);
//! let mut scanner = Scanner::from_args(["-fn", "20", "--follow", "log.txt"], config);
//!
//! let mut follow = false;
//! let mut number = 10;
//! let mut file = None;
//! for token in scanner.tokens() {
//!     if token.is_short('f') || token.is_long("follow") {
//!         follow = true;
//!     } else if token.is_short('n') || token.is_long("number") {
//!         number = token.val.as_deref().unwrap_or("10").parse().unwrap();
//!     } else if token.kind == TokenKind::Argument {
//!         file = token.key;
//!     }
//! }
//! assert!(follow);
//! assert_eq!(number, 20);
//! assert_eq!(file.as_deref(), Some("log.txt"));
//! ```
//!
//! ## Grammar
//!
//! - `-abc` is a cluster of short options. Boolean ones are reported one
//!   at a time; the first one that takes a value swallows the rest of the
//!   cluster (`-oVal`, `-o=Val`) or, if the cluster is used up, the next
//!   argument (`-o Val`).
//! - `--key=val`, `--key:val` and `--key val` are long options with values.
//! - `--` is swallowed and everything after it is positional.
//! - A stop word is reported as a positional argument, and everything after
//!   it is positional too.
//! - `-` on its own is a positional argument.
//!
//! Nothing here is fatal. Problems are attached to the token they concern
//! as a [`Diagnostic`], and scanning carries on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::iter::FusedIterator;

use log::{debug, trace};

mod config;
mod diagnostic;
mod token;

pub use config::Config;
pub use diagnostic::Diagnostic;
pub use token::{Token, TokenKind};

/// A tokenizer for command line arguments.
#[derive(Debug, Clone)]
pub struct Scanner {
    input: Vec<String>,
    bin_name: Option<String>,
    // Index of the next unconsumed argument
    cursor: usize,
    // The current string of short options being processed, and how far
    // into it we are. Never holds an exhausted string.
    shorts: Option<(String, usize)>,
    // Whether we passed "--" or a stop word and know no more options are coming
    stopped: bool,
    config: Config,
}

impl Scanner {
    /// Create a scanner from the environment using [`std::env::args_os`].
    ///
    /// Arguments that aren't valid unicode are converted lossily.
    pub fn from_env(config: Config) -> Scanner {
        let mut source = std::env::args_os()
            .map(|arg| arg.into_string().unwrap_or_else(|arg| arg.to_string_lossy().into_owned()));
        let bin_name = source.next();
        Scanner {
            input: source.collect(),
            bin_name,
            cursor: 0,
            shorts: None,
            stopped: false,
            config,
        }
    }

    /// Create a scanner from an iterator. This may be useful for testing.
    ///
    /// The executable name must not be included.
    pub fn from_args<I>(args: I, config: Config) -> Scanner
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Scanner {
            input: args.into_iter().map(Into::into).collect(),
            bin_name: None,
            cursor: 0,
            shorts: None,
            stopped: false,
            config,
        }
    }

    /// Get the next token.
    ///
    /// Each call returns exactly one token. Once the command line is
    /// exhausted this keeps returning [`TokenKind::End`].
    pub fn advance(&mut self) -> Token {
        let token = self.step();
        if let Some(diagnostic) = &token.diagnostic {
            debug!("{}", diagnostic);
        }
        trace!("token {:?} (cursor {})", token, self.cursor);
        token
    }

    /// Iterate over the remaining tokens, stopping before the end.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    /// The index of the next argument that hasn't been consumed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether `--` or a stop word has been seen.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The configuration this scanner was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The arguments that haven't been consumed yet.
    ///
    /// Returns `None` while in the middle of a cluster like `-abc`, since
    /// part of the current argument has already been used.
    pub fn remaining(&self) -> Option<&[String]> {
        if self.shorts.is_some() {
            return None;
        }
        self.input.get(self.cursor..)
    }

    /// Get the name that was used to invoke the program.
    ///
    /// Only available if constructed by [`Scanner::from_env`].
    pub fn bin_name(&self) -> Option<&str> {
        self.bin_name.as_deref()
    }

    fn step(&mut self) -> Token {
        loop {
            if let Some((cluster, pos)) = self.shorts.take() {
                if let Some(ch) = cluster[pos..].chars().next() {
                    let pos = pos + ch.len_utf8();
                    return self.short_step(ch, cluster, pos);
                }
            }

            let arg = match self.input.get(self.cursor) {
                Some(arg) => arg,
                None => return Token::end(),
            };

            if self.stopped || !arg.starts_with('-') {
                let token = Token::argument(arg.as_str());
                if self.config.is_stop_word(arg) && !self.stopped {
                    debug!("stop word {:?}, no more options", arg);
                    self.stopped = true;
                }
                self.cursor += 1;
                return token;
            }

            if arg == "--" {
                debug!("found '--', no more options");
                self.stopped = true;
                self.cursor += 1;
                continue;
            }

            if arg.starts_with("--") {
                let param = arg.clone();
                return self.long_step(param);
            }

            if arg == "-" {
                self.cursor += 1;
                return Token::argument("-");
            }

            self.shorts = Some((arg[1..].to_owned(), 0));
        }
    }

    /// Emit the short option `ch`, which was just taken from `cluster`.
    /// `pos` points right after it.
    fn short_step(&mut self, ch: char, cluster: String, pos: usize) -> Token {
        let rest = &cluster[pos..];
        let drained = rest.is_empty();
        if drained {
            self.cursor += 1;
        }
        let token = Token::short(ch);

        if self.config.is_short_bool(ch) {
            if !drained {
                self.shorts = Some((cluster, pos));
            }
            return token;
        }

        let sep = rest.chars().next().filter(|&c| self.config.is_separator(c));
        if self.config.requires_separator() && sep.is_none() {
            // No separator, so no value. The rest of the cluster is more options.
            if !drained {
                self.shorts = Some((cluster, pos));
            }
            return token;
        }

        // The rest of the argument is ours
        if !drained {
            self.cursor += 1;
        }
        let value = match sep {
            Some(sep) => &rest[sep.len_utf8()..],
            None => rest,
        };
        if !value.is_empty() {
            return token.with_val(value);
        }
        self.next_value(token, format!("-{}", ch))
    }

    /// Emit the long option in `param`, which starts with `--`.
    fn long_step(&mut self, param: String) -> Token {
        self.cursor += 1;
        let body = &param[2..];

        match body.char_indices().find(|&(_, c)| self.config.is_separator(c)) {
            Some((0, _)) => {
                Token::new(TokenKind::LongOption, None).with_diagnostic(Diagnostic::EmptyLongKey {
                    arg: param.clone(),
                })
            }
            Some((ind, sep)) => {
                let key = &body[..ind];
                let value = &body[ind + sep.len_utf8()..];
                let token = Token::long(key).with_val(value);
                if self.config.is_long_bool(key) {
                    token.with_diagnostic(Diagnostic::UnexpectedValue {
                        key: format!("--{}", key),
                        value: value.to_owned(),
                    })
                } else {
                    token
                }
            }
            None => {
                let token = Token::long(body);
                if self.config.is_long_bool(body) {
                    token
                } else if self.config.requires_separator() {
                    token.with_diagnostic(Diagnostic::MissingSeparator {
                        key: format!("--{}", body),
                    })
                } else {
                    self.next_value(token, format!("--{}", body))
                }
            }
        }
    }

    /// Take the next whole argument as the value for `token`, even if it
    /// looks like an option.
    fn next_value(&mut self, token: Token, flag: String) -> Token {
        match self.input.get(self.cursor) {
            Some(value) => {
                let token = token.with_val(value.as_str());
                self.cursor += 1;
                token
            }
            None => token.with_diagnostic(Diagnostic::MissingValue { key: flag }),
        }
    }
}

/// An iterator over the tokens of a [`Scanner`].
///
/// Created by [`Scanner::tokens`]. The final [`TokenKind::End`] token is
/// not yielded; the iterator simply ends.
#[derive(Debug)]
pub struct Tokens<'a> {
    scanner: &'a mut Scanner,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.scanner.advance();
        if token.is_end() {
            self.done = true;
            return None;
        }
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
