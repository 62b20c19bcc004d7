/// Interactive folder selection.
///
/// The prompt writes to the supplied writer (stderr in the binary) so a
/// JSON report on stdout is never interleaved with it.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Folder analysed when the user just presses Enter.
pub const DEFAULT_FOLDER: &str = "./documents";

/// Return `arg` if given, otherwise ask for a path on `input`.
///
/// An empty answer, or end of input, falls back to [`DEFAULT_FOLDER`].
pub fn resolve_folder<R: BufRead, W: Write>(
    arg: Option<PathBuf>,
    input: &mut R,
    output: &mut W,
) -> io::Result<PathBuf> {
    if let Some(path) = arg.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }

    writeln!(output, "Enter the path of the folder to analyse:")?;
    writeln!(output, "   (e.g. /Users/name/Documents)")?;
    writeln!(output)?;
    write!(output, "Path: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        writeln!(output, "\n→ Using default folder: {DEFAULT_FOLDER}\n")?;
        Ok(PathBuf::from(DEFAULT_FOLDER))
    } else {
        Ok(PathBuf::from(answer))
    }
}
