use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use counter_engine::{
    rank, render_report, CountSettings, Counter, CounterError, Manifest, RankedEntry, ReportFile,
};
use engine_logging::{engine_error, engine_info};

pub const USAGE: &str = "Usage: counter <input-manifest-path> <output-path>";

/// Process outcome, mapped one-to-one onto exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Usage,
    InvalidArgument,
    Failure,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Usage => 1,
            Exit::InvalidArgument => 2,
            Exit::Failure => 3,
        }
    }
}

/// Run one `counter <manifest> <output>` invocation, echoing to `out`.
pub fn run(args: &[OsString], settings: CountSettings, out: &mut impl Write) -> Exit {
    let [input, output] = args else {
        let _ = writeln!(out, "{USAGE}");
        return Exit::Usage;
    };
    let output = Path::new(output);

    match count_to_file(Path::new(input), output, settings) {
        Ok(entries) => {
            let _ = writeln!(out, "Output written to {}:", output.display());
            let _ = out.write_all(render_report(&entries).as_bytes());
            Exit::Success
        }
        Err(err) if err.is_invalid_argument() => {
            engine_error!("{}", err);
            let _ = writeln!(out, "Invalid argument: {err}");
            Exit::InvalidArgument
        }
        Err(err) => {
            engine_error!("{}", err);
            let _ = writeln!(out, "{err}");
            Exit::Failure
        }
    }
}

/// The output file is only opened once counting has succeeded.
fn count_to_file(
    input: &Path,
    output: &Path,
    settings: CountSettings,
) -> Result<Vec<RankedEntry>, CounterError> {
    let manifest = Manifest::read(input)?;
    engine_info!("Manifest {:?} lists {} files", input, manifest.len());

    let totals = Counter::new(settings).process(&manifest)?;
    let entries = rank(&totals);

    let mut report = ReportFile::create(output)?;
    report.write(&entries)?;
    Ok(entries)
}
