#![no_main]
use argtok::{Config, Scanner, TokenKind};
use libfuzzer_sys::fuzz_target;

// We check some basic invariants but mainly make sure that it
// doesn't panic or hang.
fuzz_target!(|data: &[u8]| {
    let (settings, data) = match data.split_first() {
        Some((&settings, data)) => (settings, data),
        None => (0, data),
    };
    let text = String::from_utf8_lossy(data);
    // Arguments can't contain null bytes (on Unix) so it's a
    // reasonable separator
    let args: Vec<&str> = text.split('\0').collect();

    let mut config = Config::default()
        .short_bools("abc".chars())
        .long_bools(["all", "both"])
        .require_separator(settings & 1 != 0)
        .stop_words(["stop"]);
    if settings & 2 != 0 {
        config = config.sep_chars(['=']);
    }

    let limit = text.chars().count() + args.len() + 1;
    let mut p = Scanner::from_args(args.iter().copied(), config);
    let mut count = 0;
    loop {
        let cursor = p.cursor();
        let token = p.advance();
        assert!(p.cursor() >= cursor);
        match token.kind {
            TokenKind::End => break,
            TokenKind::Argument => assert!(token.val.is_none()),
            TokenKind::ShortOption | TokenKind::LongOption => (),
        }
        count += 1;
        assert!(count <= limit);
    }
    assert_eq!(p.remaining().map(<[String]>::len), Some(0));
    assert!(p.advance().is_end());
    assert!(p.advance().is_end());
});
