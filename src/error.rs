use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while producing target text for a session.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("no matching characters in source for the configured alphabet")]
    EmptySource,
    #[error("not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("no .txt files in {}", .0.display())]
    NoFilesInFolder(PathBuf),
    #[error("file has no words: {}", .0.display())]
    EmptyFile(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TextError {
    /// Typeable stand-in text shown instead of a generated prompt, so a
    /// session can always be started.
    pub fn placeholder(&self) -> String {
        match self {
            TextError::Config(msg) => format!("INVALID CONFIG: {msg}"),
            TextError::EmptySource => "NO MATCHING CHARACTERS IN SOURCE FOR FILTER MODE.".to_string(),
            TextError::FileNotFound(path) => format!(
                "NOT FOUND: {}. Create it and add .txt files or a word list.",
                path.display()
            ),
            TextError::NoFilesInFolder(path) => format!(
                "NO .TXT FILES IN {}. Download books from Project Gutenberg.",
                path.display()
            ),
            TextError::EmptyFile(path) => format!("NO WORDS IN {}.", path.display()),
            TextError::ReadFailure { path, .. } => {
                format!("FAILED TO READ {}.", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_single_line_and_nonempty() {
        let errors = [
            TextError::Config("alphabet is empty".into()),
            TextError::EmptySource,
            TextError::FileNotFound(PathBuf::from("books")),
            TextError::NoFilesInFolder(PathBuf::from("books")),
            TextError::EmptyFile(PathBuf::from("words.txt")),
            TextError::ReadFailure {
                path: PathBuf::from("books/a.txt"),
                source: io::Error::other("boom"),
            },
        ];
        for err in &errors {
            let text = err.placeholder();
            assert!(!text.is_empty());
            assert!(!text.contains('\n'));
        }
    }

    #[test]
    fn read_failure_keeps_source() {
        let err = TextError::ReadFailure {
            path: PathBuf::from("x.txt"),
            source: io::Error::other("denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("x.txt"));
    }
}
