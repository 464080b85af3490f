//! Interactive query loop.
//!
//! Prompt, read one line, lowercase it, print the matching articles. An
//! empty (or whitespace-only) query or end of input ends the session.

use std::io::{self, BufRead, Write};

use textsearch_search::{evaluate, InvertedIndex, QueryOutcome, TitleMap};
use tracing::debug;

use crate::format::write_results;

/// Prompt printed before every query.
pub const PROMPT: &str = "Query (empty query to stop): ";

/// Run queries from `input` until an empty query or end of input.
///
/// Returns the number of queries answered.
pub fn run_search_loop<R: BufRead, W: Write>(
    index: &InvertedIndex,
    titles: &TitleMap,
    mut input: R,
    out: &mut W,
) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut answered = 0;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF: finish the prompt line
            writeln!(out)?;
            break;
        }

        let mut line = buf.as_slice();
        while let [rest @ .., b'\n' | b'\r'] = line {
            line = rest;
        }
        let query = line.to_ascii_lowercase();

        let results = match evaluate(index, &query) {
            QueryOutcome::Empty => break,
            QueryOutcome::Results(results) => results,
        };
        debug!(
            target: "textsearch::query",
            query = %String::from_utf8_lossy(&query),
            results = results.len(),
            "Query evaluated"
        );

        write_results(out, &query, &results, titles)?;
        answered += 1;
    }

    Ok(answered)
}
