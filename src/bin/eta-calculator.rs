extern crate eta_calculator as eta;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

use clap::Parser;
use env_logger::Builder;
use eta::{Breakdown, Request, Time};
use failure::Error;
use itertools::Itertools;
use std::io::{BufRead, BufWriter, Write};
use std::str::FromStr;

/// Compute when a resource runs out, given the periods at which each of its
/// consumers takes one unit.
///
/// Each request is a capacity followed by one period per consumer, all
/// whitespace-separated integers. Requests are read from standard input, one
/// per line, unless one is given on the command line.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Follow each result with its breakdown into days, hours, minutes and seconds
    #[clap(long)]
    human: bool,

    /// A single request: CAPACITY PERIOD...
    #[clap(allow_hyphen_values = true)]
    request: Vec<String>,
}

fn answer(out: &mut impl Write, request: &Request, human: bool) -> Result<(), Error> {
    debug!(
        "capacity {}, periods {}",
        request.capacity(),
        request.periods().iter().join(" ")
    );
    let t: Time = request.eta();
    if human {
        writeln!(out, "{}s OR {}", t, Breakdown::from_seconds(t))?;
    } else {
        writeln!(out, "{}", t)?;
    }
    Ok(())
}

fn run(input: impl BufRead, out: &mut impl Write, human: bool) -> Result<(), Error> {
    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request = Request::from_str(&line)
            .map_err(|e| format_err!("line {}: {}", lineno + 1, e))?;
        answer(out, &request, human)?;
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.request.is_empty() {
        let stdin = std::io::stdin();
        run(stdin.lock(), &mut out, args.human)?;
    } else {
        let request = Request::from_str(&args.request.join(" "))?;
        answer(&mut out, &request, args.human)?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_str(input: &str, human: bool) -> Result<String, Error> {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, human)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn one_line_per_request() -> Result<(), Error> {
        assert_eq!(
            run_str("4 3 7\n15 2 4 3 6\n16 2 4 3 6\n1 1\n0 5 10\n", false)?,
            "9\n12\n14\n1\n0\n"
        );
        Ok(())
    }

    #[test]
    fn blank_lines_skipped() -> Result<(), Error> {
        assert_eq!(run_str("\n4 3 7\n   \n1 1", false)?, "9\n1\n");
        assert_eq!(run_str("", false)?, "");
        Ok(())
    }

    #[test]
    fn human_readable() -> Result<(), Error> {
        assert_eq!(run_str("16 2 4 3 6\n", true)?, "14s OR 0days 0h 0m 14s\n");
        assert_eq!(run_str("90061 1\n", true)?, "90061s OR 1days 1h 1m 1s\n");
        Ok(())
    }

    #[test]
    fn errors_name_the_line() {
        let err = run_str("4 3 7\n\n5 0\n", false).unwrap_err();
        assert_eq!(err.to_string(), "line 3: period #0 must be positive, got 0");

        let err = run_str("4 x\n", false).unwrap_err();
        assert!(err.to_string().starts_with("line 1: bad number"));
    }

    #[test]
    fn args_parse() {
        let args = Args::parse_from(&["eta-calculator", "--human", "16", "2", "4"]);
        assert!(args.human);
        assert_eq!(args.request, vec!["16", "2", "4"]);

        let args = Args::parse_from(&["eta-calculator"]);
        assert!(!args.human);
        assert!(args.request.is_empty());
    }
}
