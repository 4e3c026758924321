use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::slice;

use engine_logging::engine_debug;

use crate::CounterError;

/// Ordered list of files to count, one per manifest line.
///
/// Lines are kept verbatim. A blank line becomes an empty path, which fails
/// later when it is opened for counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    paths: Vec<PathBuf>,
}

impl Manifest {
    /// Read the manifest at `path`. The file is closed before returning.
    pub fn read(path: &Path) -> Result<Self, CounterError> {
        let invalid = |source| CounterError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(invalid)?;
        let mut paths = Vec::new();
        for line in BufReader::new(file).lines() {
            paths.push(PathBuf::from(line.map_err(invalid)?));
        }
        engine_debug!("Read {} entries from manifest {:?}", paths.len(), path);
        Ok(Self { paths })
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a PathBuf;
    type IntoIter = slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
