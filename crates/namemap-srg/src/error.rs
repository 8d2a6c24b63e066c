use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = MappingError> = std::result::Result<T, E>;

/// The three tables of a [`crate::SymbolMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingTable {
    Classes,
    Fields,
    Methods,
}

impl fmt::Display for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MappingTable::Classes => "class",
            MappingTable::Fields => "field",
            MappingTable::Methods => "method",
        })
    }
}

/// Failure to build a mapping table. Loading is all-or-nothing: no partial table is ever
/// returned alongside one of these.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to open mapping file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read mapping line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("malformed mapping line {line}: {reason}")]
    MalformedMappingLine { line: usize, reason: String },

    #[error("line {line}: duplicate {table} mapping {entry}")]
    DuplicateMapping {
        line: usize,
        table: MappingTable,
        entry: String,
    },
}
