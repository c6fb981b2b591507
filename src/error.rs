use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while loading, collecting or writing.
///
/// `Range` and `Nucleotide` are validation failures: the collection loop
/// reports them and asks again. The rest end the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no sequence record found in {}", path.display())]
    Parse { path: PathBuf },

    #[error("{0}")]
    Range(String),

    #[error("The sequence must only include DNA nucleotides A, T, G, C (found '{found}' at position {position})")]
    Nucleotide { found: char, position: usize },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[source] io::Error),

    #[error("input closed while collecting {0}s")]
    InputClosed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
