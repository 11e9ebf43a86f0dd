//! Input resolution for the import command.
//!
//! Supports three input sources:
//! - Inline JSON string via `--json`
//! - JSON file via a positional `FILE`
//! - Stdin via `-`

use std::io::Read;
use std::path::Path;

/// Resolves the import text from CLI arguments.
///
/// Priority: `FILE` (or `-` for stdin) takes precedence over `--json`.
/// The text is only trimmed here; the importer reports malformed JSON.
pub fn resolve_input(inline: Option<&str>, input_file: Option<&str>) -> anyhow::Result<String> {
    match (input_file, inline) {
        (Some("-"), _) => read_from_stdin(),
        (Some(path), _) => read_from_file(path),
        (None, Some(json)) => Ok(json.trim().to_string()),
        (None, None) => anyhow::bail!("no input: pass a FILE, `-` for stdin, or --json"),
    }
}

/// Reads content from a file path.
fn read_from_file(path: &str) -> anyhow::Result<String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("input file not found: {path}");
    }
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read input file: {e}"))?;
    Ok(content.trim().to_string())
}

/// Reads content from stdin.
fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(buffer.trim().to_string())
}
