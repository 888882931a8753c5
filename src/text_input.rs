use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::Command;

/// Load the input text in one read:
/// - No path: read stdin to EOF.
/// - `.pdf`: call `pdftotext file.pdf -` and capture stdout.
/// - `.docx`: call `pandoc -f docx -t plain file.docx` and capture stdout.
/// - Anything else is opened as plain text.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    };

    let ext = path
        .extension()
        .unwrap_or_default()
        .to_string_lossy()
        .to_lowercase();

    match ext.as_str() {
        "pdf" => converter_output(Command::new("pdftotext").arg(path).arg("-"), "pdftotext"),
        "docx" => converter_output(
            Command::new("pandoc").args(["-f", "docx", "-t", "plain"]).arg(path),
            "pandoc",
        ),
        _ => fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
    }
}

fn converter_output(cmd: &mut Command, name: &str) -> Result<String> {
    let output = cmd
        .output()
        .map_err(|e| anyhow!("failed to run {name}: {e}"))?;
    if !output.status.success() {
        return Err(anyhow!("{name} exited with {}", output.status));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::read_input;
    use std::io::Write;

    #[test]
    fn plain_text_file_read_verbatim() {
        let dir = std::env::temp_dir();
        let path = dir.join("embedding_heatmap_demo_input.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "Hi there!").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "Hi there!");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::path::Path::new("/nonexistent/input.txt");
        assert!(read_input(Some(path)).is_err());
    }
}
