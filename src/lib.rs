pub mod collect;
pub mod error;
pub mod fasta;
pub mod mutate;
pub mod nucleotide;
pub mod range;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub use crate::error::{Error, Result};
pub use crate::fasta::{load_first_record, output_path, write_records, LoadedSequence};
pub use crate::mutate::{mutate_sequences, splice, MutatedRecord};
pub use crate::range::{parse_range, Range};

#[derive(Parser, Debug, Clone)]
#[command(name = "seqmutate", version, about = "Quickly mutate DNA sequences in batches")]
pub struct Args {
    /// Path to FASTA file (.fasta)
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Print the banner shown once the input has been loaded.
pub fn print_info<W: Write>(
    output: &mut W,
    loaded: &LoadedSequence,
    output_name: &str,
) -> io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "------------------------ Synthesis: batch DNA mutagenesis ------------------------"
    )?;
    writeln!(output)?;
    writeln!(
        output,
        "Successfully Opened: {}  |  Sequence Length: {} bp",
        loaded.file_name,
        loaded.len()
    )?;
    writeln!(output)?;
    writeln!(
        output,
        "1. Input base ranges for the regions of the input file sequence to be mutated."
    )?;
    writeln!(
        output,
        "2. Input insert sequences that will replace those sequences in the ranges you provided."
    )?;
    writeln!(output)?;
    writeln!(
        output,
        "All the mutated sequences will be stored in a single file --> {}",
        output_name
    )?;
    writeln!(output)?;
    Ok(())
}

/// Run one interactive session, writing the result into `out_dir`.
///
/// Returns the path of the written FASTA file.
pub fn run_session<R: BufRead, W: Write>(
    args: &Args,
    out_dir: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf> {
    let loaded = load_first_record(&args.file)?;
    log::info!(
        "Using record '{}' from {} ({} bp)",
        loaded.id,
        loaded.file_name,
        loaded.len()
    );

    let out_path = output_path(out_dir, &loaded.file_name);
    let out_name = out_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    print_info(output, &loaded, &out_name).map_err(Error::Console)?;

    let ranges = collect::collect_ranges(input, output, loaded.len())?;
    let replacements = collect::collect_replacements(input, output)?;

    let records = mutate_sequences(&loaded.sequence, &ranges, &replacements);
    log::info!(
        "Generated {} records from {} ranges x {} replacements",
        records.len(),
        ranges.len(),
        replacements.len()
    );

    write_records(&out_path, &records)?;
    writeln!(output, "SUCCESS: {}", out_path.display()).map_err(Error::Console)?;
    Ok(out_path)
}

/// Run against the process console, writing into the working directory.
pub fn run_seqmutate(args: Args) -> Result<PathBuf> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&args, Path::new("."), &mut stdin.lock(), &mut stdout.lock())
}
