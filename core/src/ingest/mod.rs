pub mod csv_reader;

pub use csv_reader::{load_cumulative, load_launches, read_cumulative, read_launches};

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("opening {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("decoding csv: {0}")]
    Csv(#[from] csv::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;
