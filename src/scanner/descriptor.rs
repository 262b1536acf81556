//! Candidate descriptors and the manifest provider.
//!
//! The generator never introspects compiled artifacts itself. Whatever produces
//! extension metadata (a build script, a package index, a hand-written file)
//! describes each candidate type in a JSON manifest; this module loads those
//! manifests and hands the descriptors to the scanner in discovery order.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum manifest file size (10 MB)
///
/// Manifests beyond this are rejected to prevent out-of-memory conditions when
/// a wrong file is passed on the command line.
const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Shape facts for one candidate extension startup type.
///
/// Identity is the fully qualified type path. The boolean facts are asserted by
/// the manifest producer; the scanner only classifies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDescriptor {
    /// Fully qualified type path, e.g. `sample_ext::SampleExtensionStartup`.
    pub type_path: String,
    /// Whether the type implements the startup trait.
    pub implements_startup: bool,
    /// Whether the type has a parameterless constructor (a `Default` impl).
    pub has_default_constructor: bool,
}

/// One manifest file: the candidates contributed by one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub extensions: Vec<CandidateDescriptor>,
}

/// Errors loading candidate manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot access manifest '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("manifest '{path}' is too large ({len} bytes)")]
    TooLarge { path: String, len: u64 },

    #[error("cannot read manifest '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse manifest '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a single manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let display = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|source| ManifestError::Access {
        path: display.clone(),
        source,
    })?;
    if metadata.len() > MAX_MANIFEST_SIZE {
        return Err(ManifestError::TooLarge {
            path: display,
            len: metadata.len(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
        path: display,
        source,
    })
}

/// Load every manifest and flatten the descriptors in discovery order.
///
/// Discovery order is the manifest argument order, then in-file order; the
/// scanner and emitter preserve it all the way into the generated source.
pub fn collect_candidates(paths: &[impl AsRef<Path>]) -> Result<Vec<CandidateDescriptor>, ManifestError> {
    let mut candidates = Vec::new();
    for path in paths {
        let manifest = load_manifest(path.as_ref())?;
        candidates.extend(manifest.extensions);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = Manifest {
            extensions: vec![CandidateDescriptor {
                type_path: "sample_ext::SampleExtensionStartup".to_string(),
                implements_startup: true,
                has_default_constructor: true,
            }],
        };
        let json = serde_json::to_string(&manifest).expect("serialize");
        let parsed: Manifest = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn manifest_parses_from_literal_json() {
        let json = r#"{
            "extensions": [
                {
                    "type_path": "sample_ext::SampleExtensionStartup",
                    "implements_startup": true,
                    "has_default_constructor": false
                }
            ]
        }"#;
        let parsed: Manifest = serde_json::from_str(json).expect("parse");
        assert_eq!(parsed.extensions.len(), 1);
        assert!(!parsed.extensions[0].has_default_constructor);
    }

    #[test]
    fn missing_manifest_is_an_access_error() {
        let err = load_manifest(Path::new("does/not/exist.json")).expect_err("missing file");
        assert!(matches!(err, ManifestError::Access { .. }));
    }
}
