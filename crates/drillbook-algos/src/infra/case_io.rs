//! Case file I/O operations
//!
//! Case files are UTF-8 text with one case per line:
//! `<drill>\t<arg>\t<arg>...`. Blank lines and lines starting with `#` are
//! skipped. Report files mirror the input with one `<drill>\t<result>` line
//! per case.

use crate::app::catalog::CaseError;
use crate::app::runner::Case;
use crate::constants::{CASE_FIELD_SEPARATOR, COMMENT_PREFIX};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extension appended to the input file name for reports
pub const REPORT_EXTENSION: &str = "report.tsv";

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Get the default report path for a case file
///
/// Format: `{dir}/{stem}.report.tsv`
pub fn get_report_path(cases_path: impl AsRef<Path>) -> PathBuf {
    let path = cases_path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cases".to_string());
    path.with_file_name(format!("{}.{}", stem, REPORT_EXTENSION))
}

/// Parse cases from any buffered reader
///
/// Errors carry the 1-based line number of the offending line.
pub fn parse_cases(reader: impl BufRead) -> Result<Vec<Case>, CaseError> {
    let mut cases = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim_end_matches('\r');
        if content.trim().is_empty() || content.trim_start().starts_with(COMMENT_PREFIX) {
            continue;
        }

        let fields: Vec<&str> = content.split(CASE_FIELD_SEPARATOR).collect();
        let case = Case::from_fields(&fields).map_err(|e| CaseError::Parse {
            line: index + 1,
            source: Box::new(e),
        })?;
        cases.push(case);
    }

    Ok(cases)
}

/// Load cases from file
pub fn load_cases(path: impl AsRef<Path>) -> Result<Vec<Case>, CaseError> {
    let file = File::open(path)?;
    parse_cases(BufReader::new(file))
}

/// Check that every argument fits on a single case line
///
/// Arguments are stored verbatim, so the field separator and line breaks
/// cannot appear inside them.
fn ensure_storable(cases: &[Case]) -> Result<(), CaseError> {
    for case in cases {
        for (index, arg) in case.args.iter().enumerate() {
            if arg.contains([CASE_FIELD_SEPARATOR, '\n', '\r']) {
                return Err(CaseError::InvalidArgument {
                    drill: case.drill,
                    index,
                    value: arg.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Save cases to file in the case file format
///
/// Arguments containing a tab or line break are rejected before the file is
/// created.
pub fn save_cases(path: impl AsRef<Path>, cases: &[Case]) -> Result<(), CaseError> {
    ensure_storable(cases)?;
    ensure_parent_dir(path.as_ref())?;
    let mut writer = BufWriter::new(File::create(path)?);

    for case in cases {
        write!(writer, "{}", case.drill)?;
        for arg in &case.args {
            write!(writer, "{}{}", CASE_FIELD_SEPARATOR, arg)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save a report with one line per case
///
/// Failed cases are written as `<drill>\terror: <message>`.
pub fn save_report(
    path: impl AsRef<Path>,
    cases: &[Case],
    results: &[Result<String, CaseError>],
) -> Result<(), CaseError> {
    ensure_parent_dir(path.as_ref())?;
    let mut writer = BufWriter::new(File::create(path)?);

    for (case, result) in cases.iter().zip(results) {
        match result {
            Ok(rendered) => writeln!(writer, "{}{}{}", case.drill, CASE_FIELD_SEPARATOR, rendered)?,
            Err(e) => writeln!(writer, "{}{}error: {}", case.drill, CASE_FIELD_SEPARATOR, e)?,
        }
    }

    writer.flush()?;
    Ok(())
}
