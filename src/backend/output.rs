//! Writing the generated artifact into the output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::backend::executor::GeneratedArtifact;

/// Write the artifact under `out_dir`, creating the directory if needed.
///
/// Returns the path of the written file.
pub fn write_artifact(artifact: &GeneratedArtifact, out_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(&artifact.file_name);
    fs::write(&path, &artifact.source)?;
    Ok(path)
}
