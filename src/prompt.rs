//! Interactive confirmation on standard input.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Ask `question` and wait for a single line on standard input.
///
/// The answer is trimmed and compared case-sensitively against `yes`. This
/// is the run's only suspension point: it waits indefinitely for one line,
/// with no timeout. EOF counts as a decline.
pub async fn confirm(question: &str, yes: &str) -> Result<bool> {
    use std::io::Write;

    let mut out = std::io::stdout();
    writeln!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    let bytes_read = reader.read_line(&mut line).await?;
    if bytes_read == 0 {
        return Ok(false);
    }

    Ok(line.trim() == yes)
}
