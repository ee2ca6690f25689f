//! Print the tokens of this program's own command line.
//!
//! ```text
//! $ cargo run --example dump -- -vvo out.txt --level=3 run -x
//! ShortOption  -v
//! ShortOption  -v
//! ShortOption  -o out.txt
//! LongOption   --level=3
//! Argument     run
//! Argument     -x
//! ```
//!
//! Set `RUST_LOG=argtok=trace` to watch the scanner work.

use argtok::{Config, Scanner};

fn main() {
    env_logger::init();

    let config = Config::default()
        .short_bools(['v', 'q', 'h'])
        .long_bools(["verbose", "quiet", "help"])
        .stop_words(["run"]);
    let mut scanner = Scanner::from_env(config);
    let name = scanner.bin_name().unwrap_or("dump").to_owned();

    for token in scanner.tokens() {
        println!("{:<12} {}", format!("{:?}", token.kind), token);
        if let Some(diagnostic) = token.diagnostic {
            eprintln!("{}: warning: {}", name, diagnostic);
        }
    }
}
