use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::mutate::MutatedRecord;

/// Residues per sequence line in written records.
pub const LINE_WIDTH: usize = 60;

/// The first record of an input FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSequence {
    pub id: String,
    pub sequence: String,
    /// File name without its directory.
    pub file_name: String,
}

impl LoadedSequence {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Read the first record of `path`, stopping at the next header.
///
/// Lines before the first `>` are ignored and whitespace inside sequence
/// lines is dropped. A record whose sequence is empty or contains non-ASCII
/// bytes, or a file that is not UTF-8, counts as no record at all.
pub fn load_first_record(path: &Path) -> Result<LoadedSequence> {
    let file = File::open(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut id: Option<String> = None;
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line.map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => Error::Parse {
                path: path.to_path_buf(),
            },
            _ => Error::File {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let line = line.trim();
        if let Some(header) = line.strip_prefix('>') {
            if id.is_some() {
                break;
            }
            id = Some(header.split_whitespace().next().unwrap_or("").to_string());
        } else if id.is_some() {
            sequence.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    let id = match id {
        Some(id) if !sequence.is_empty() && sequence.is_ascii() => id,
        _ => {
            return Err(Error::Parse {
                path: path.to_path_buf(),
            })
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    log::debug!("Loaded record '{}' ({} bp) from {}", id, sequence.len(), path.display());
    Ok(LoadedSequence {
        id,
        sequence,
        file_name,
    })
}

/// `dir/mutated_<stem>.fasta` for an input file called `<stem>.<ext>`.
pub fn output_path(dir: &Path, input_file_name: &str) -> PathBuf {
    let stem = Path::new(input_file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("mutated_{}.fasta", stem))
}

/// Write all records to `path`, replacing any existing file.
pub fn write_records(path: &Path, records: &[MutatedRecord]) -> Result<()> {
    let to_write_error = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    write_fasta(&mut writer, records).map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;

    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn write_fasta<W: Write>(writer: &mut W, records: &[MutatedRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, ">{} {}", record.id, record.description)?;
        for chunk in record.sequence.as_bytes().chunks(LINE_WIDTH) {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_drops_extension() {
        let p = output_path(Path::new("out"), "gene.fasta");
        assert_eq!(p, Path::new("out").join("mutated_gene.fasta"));
        let p = output_path(Path::new("."), "plasmid.fa");
        assert_eq!(p, Path::new(".").join("mutated_plasmid.fasta"));
        let p = output_path(Path::new("."), "noext");
        assert_eq!(p, Path::new(".").join("mutated_noext.fasta"));
    }

    #[test]
    fn long_sequences_wrap_at_sixty() {
        let record = MutatedRecord {
            id: "1".to_string(),
            description: "Mutated WT Range (1, 1) with A".to_string(),
            sequence: "A".repeat(130),
        };
        let mut buf = Vec::new();
        write_fasta(&mut buf, &[record]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ">1 Mutated WT Range (1, 1) with A");
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 10);
        assert_eq!(lines.len(), 4);
    }
}
