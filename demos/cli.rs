use tile_equations::{ChainPolicy, Checker, CheckerConfig};
use std::io::{BufRead, BufReader};

/// Reads one arrangement per line, with tiles separated by whitespace
/// (e.g. `1 2 + 3 = 1 5`), and prints the verdict for each.
///
/// Pass `--chain` to accept equations with more than one `=`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chain = if std::env::args().skip(1).any(|arg| arg == "--chain") {
        ChainPolicy::AllEqual
    } else {
        ChainPolicy::ExactlyTwo
    };
    let checker = Checker::new(CheckerConfig::new().with_chain(chain));

    let stdin = std::io::stdin();
    let mut valid = 0;
    let mut total = 0;

    for line in BufReader::new(stdin.lock()).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let verdict = checker.check(line.split_whitespace());
        total += 1;
        if verdict.is_valid() {
            valid += 1;
        }

        println!("{}", verdict);
    }

    println!("{}/{} valid", valid, total);

    Ok(())
}
