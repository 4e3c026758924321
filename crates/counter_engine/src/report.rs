use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use counter_core::{render_report, RankedEntry};
use engine_logging::engine_info;

use crate::CounterError;

/// Destination file for the ranked report.
///
/// Every [`ReportFile::write`] replaces the whole content, so writing twice
/// leaves exactly one report behind. The handle is closed on drop.
#[derive(Debug)]
pub struct ReportFile {
    path: PathBuf,
    file: File,
}

impl ReportFile {
    /// Open (create or truncate) `path` for writing.
    pub fn create(path: &Path) -> Result<Self, CounterError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| CounterError::OutputAccess {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&mut self, entries: &[RankedEntry]) -> Result<(), CounterError> {
        let content = render_report(entries);
        self.rewrite(content.as_bytes())
            .map_err(|source| CounterError::ReportWrite {
                path: self.path.clone(),
                source,
            })?;
        engine_info!("Wrote {} report lines to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn rewrite(&mut self, content: &[u8]) -> std::io::Result<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        let mut writer = BufWriter::new(&mut self.file);
        writer.write_all(content)?;
        writer.flush()?;
        Ok(())
    }
}
