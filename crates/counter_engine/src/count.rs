use std::fs::File;
use std::io::Read;
use std::path::Path;

use counter_core::FrequencyMap;
use engine_logging::engine_debug;

use crate::CounterError;

/// Count the tokens of one file from scratch.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before tokenizing.
pub fn count_file(path: &Path) -> Result<FrequencyMap, CounterError> {
    let access = |source| CounterError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(access)?;

    let map = FrequencyMap::from_text(&String::from_utf8_lossy(&bytes));
    engine_debug!(
        "Counted {:?}: {} bytes, {} unique tokens",
        path,
        bytes.len(),
        map.len()
    );
    Ok(map)
}
