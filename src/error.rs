use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the viewer. File problems are fatal by design:
/// a single-shot display tool has nothing sensible to fall back to.
#[derive(Error, Debug)]
pub enum SidediffError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("render failed: {0}")]
    Render(#[from] io::Error),
}
