//! Output writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{LemmatizerError, Result};
use crate::types::{Document, FileResult};

/// Output path for `input`: its file name with a trailing `input_suffix`
/// replaced by `output_suffix`, placed in `output_dir`.
///
/// Names lacking the input suffix get the output suffix appended.
pub fn output_path_for(
    input: &Path,
    output_dir: &Path,
    input_suffix: &str,
    output_suffix: &str,
) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(input_suffix).unwrap_or(&name);
    output_dir.join(format!("{}{}", stem, output_suffix))
}

/// One output line: lemmas of alphabetic non-stop tokens joined by spaces
pub fn render_line(doc: &Document) -> String {
    doc.content_lemmas().collect::<Vec<_>>().join(" ")
}

/// Write one line per document to `path`, overwriting it.
///
/// Returns the number of tokens written.
pub fn write_file_result(result: &FileResult, path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| LemmatizerError::io(path, e))?;
    let mut out = BufWriter::new(file);
    let mut written = 0;

    for doc in &result.documents {
        let line = render_line(doc);
        written += doc.content_lemmas().count();
        writeln!(out, "{}", line).map_err(|e| LemmatizerError::io(path, e))?;
    }

    out.flush().map_err(|e| LemmatizerError::io(path, e))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{setup_pipeline, Profile};
    use std::fs;

    #[test]
    fn test_output_path_replaces_suffix() {
        let out = output_path_for(
            Path::new("/in/a.txt"),
            Path::new("/out"),
            ".txt",
            "_processed.txt",
        );
        assert_eq!(out, PathBuf::from("/out/a_processed.txt"));
    }

    #[test]
    fn test_output_path_only_touches_trailing_suffix() {
        let out = output_path_for(
            Path::new("notes.txt.txt"),
            Path::new("out"),
            ".txt",
            "_processed.txt",
        );
        assert_eq!(out, PathBuf::from("out/notes.txt_processed.txt"));
    }

    #[test]
    fn test_render_line() {
        let pipeline = setup_pipeline(Profile::Extreme).unwrap();
        let doc = pipeline.analyze("The cats are jumping, 42!").unwrap();
        assert_eq!(render_line(&doc), "cat jump");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_processed.txt");
        fs::write(&path, "stale content\nmore\n").unwrap();

        let pipeline = setup_pipeline(Profile::Extreme).unwrap();
        let result = FileResult::new(
            "a.txt",
            vec![
                pipeline.analyze("Cats sleep.").unwrap(),
                pipeline.analyze("the").unwrap(),
            ],
        );
        let written = write_file_result(&result, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "cat sleep\n\n");
        assert_eq!(written, 2);
    }

    #[test]
    fn test_empty_result_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_processed.txt");
        write_file_result(&FileResult::new("empty.txt", Vec::new()), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.txt");
        let err = write_file_result(&FileResult::new("x.txt", Vec::new()), &path).unwrap_err();
        assert!(matches!(err, LemmatizerError::Io { .. }));
    }
}
