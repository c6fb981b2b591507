//! Interactive collection of ranges and replacement sequences.
//!
//! Both loops share `collect_items`; they differ only in the label shown to
//! the operator and in the validator used to turn a line into an item.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::nucleotide::validate_replacement;
use crate::range::{parse_range, Range};

/// Typed at any prompt to finish that loop.
pub const QUIT_SENTINEL: &str = "Q";

pub const RANGE_PROMPT: &str = "-------------- Input Sequence Ranges to be Mutated (q to exit) --------------\nExample Usage: 300-550";
pub const SEQUENCE_PROMPT: &str = "------------- Input Insert Sequences to Mutate With (q to exit) -------------\nExample Usage: ATGTAA";

/// Trim surrounding whitespace and uppercase.
pub fn normalize_input(line: &str) -> String {
    line.trim().to_uppercase()
}

/// Prompt until the operator quits with at least one accepted item.
///
/// Blank lines are ignored. Lines rejected by `validate` are reported and
/// leave the collected list untouched. Since the sentinel is matched after
/// `normalize`, an item that normalizes to `Q` can never be entered.
pub fn collect_items<T, R, W, N, V>(
    input: &mut R,
    output: &mut W,
    label: &str,
    prompt: &str,
    normalize: N,
    mut validate: V,
) -> Result<Vec<T>>
where
    T: Display,
    R: BufRead,
    W: Write,
    N: Fn(&str) -> String,
    V: FnMut(&str) -> Result<T>,
{
    let mut items: Vec<T> = Vec::new();
    let mut line = String::new();

    writeln!(output, "{}\n", prompt).map_err(Error::Console)?;

    loop {
        writeln!(output, "Current {}s: {}", label, format_list(&items)).map_err(Error::Console)?;
        write!(output, "{}: ", label).map_err(Error::Console)?;
        output.flush().map_err(Error::Console)?;

        line.clear();
        if input.read_line(&mut line).map_err(Error::Console)? == 0 {
            return Err(Error::InputClosed(label.to_lowercase()));
        }

        let entry = normalize(&line);
        if entry.is_empty() {
            continue;
        }
        if entry == QUIT_SENTINEL {
            if items.is_empty() {
                writeln!(
                    output,
                    "\nERROR: Must have at least one valid {} before quitting input.\n",
                    label.to_lowercase()
                )
                .map_err(Error::Console)?;
                continue;
            }
            writeln!(output).map_err(Error::Console)?;
            break;
        }

        match validate(&entry) {
            Ok(item) => {
                items.push(item);
                writeln!(output).map_err(Error::Console)?;
            }
            Err(e) => {
                log::debug!("rejected {} '{}': {}", label.to_lowercase(), entry, e);
                writeln!(output, "\nERROR: {}\n", e).map_err(Error::Console)?;
            }
        }
    }

    Ok(items)
}

/// Collect ranges valid for a sequence of `seq_len` bases.
pub fn collect_ranges<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    seq_len: usize,
) -> Result<Vec<Range>> {
    collect_items(input, output, "Range", RANGE_PROMPT, normalize_input, |text| {
        parse_range(seq_len, text)
    })
}

/// Collect replacement sequences over A, T, G, C.
pub fn collect_replacements<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    collect_items(
        input,
        output,
        "Sequence",
        SEQUENCE_PROMPT,
        normalize_input,
        validate_replacement,
    )
}

fn format_list<T: Display>(items: &[T]) -> String {
    let inner: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", inner.join(", "))
}
