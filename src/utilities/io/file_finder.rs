use crate::api::{enums::diagnostic::Diagnostic, input_text::InputText};
use crate::utilities::encoding::utf8::decode;
use std::fs::{read, read_dir};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Represents errors that prevent a folder from being loaded at all.
///
/// Problems with individual files are not errors; they are reported
/// as [`Diagnostic`]s so the remaining files can still be analyzed.
#[derive(Debug, Error)]
pub enum FileLoadError {
    #[error("Failed to read directory '{path}': {error}")]
    ReadDirectory {
        path: String,
        #[source]
        error: std::io::Error,
    },
}

/// Iterates through all files directly within a given directory,
/// passing each loaded text (or the reason it could not be loaded) to the callback.
///
/// # Arguments
///
/// * `directory_path` - The full path to the directory to search
/// * `callback` - Function that will be called for each file found
///
/// # Remarks
///
/// Subdirectories are not searched. Files are visited in order of file name,
/// which makes the input order, and thus ranking tie breaks, reproducible.
/// Texts are identified by their file name.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be listed.
pub fn find_texts<P, F>(directory_path: P, mut callback: F) -> Result<(), FileLoadError>
where
    P: AsRef<Path>,
    F: FnMut(Result<InputText, Diagnostic>),
{
    let directory_path = directory_path.as_ref();
    let to_error = |error| FileLoadError::ReadDirectory {
        path: directory_path.display().to_string(),
        error,
    };

    let mut files = Vec::new();
    for entry in read_dir(directory_path).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        let path = entry.path();
        // Follows symlinks, like reading the file would.
        if path.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    debug!(count = files.len(), directory = %directory_path.display(), "Found files");

    for (name, path) in files {
        let loaded = match read(&path) {
            Ok(bytes) => match decode(bytes) {
                Ok(text) => Ok(InputText::new(name, text)),
                Err(error) => Err(Diagnostic::EncodingFailure { input: name, error }),
            },
            Err(error) => Err(Diagnostic::ReadFailure { input: name, error }),
        };

        if let Err(diagnostic) = &loaded {
            warn!("{}", diagnostic);
        }
        callback(loaded);
    }

    Ok(())
}

/// Loads every file directly within a given directory.
///
/// # Returns
///
/// The loaded texts in file name order, and the diagnostics of files which could not be loaded.
pub fn load_texts<P: AsRef<Path>>(
    directory_path: P,
) -> Result<(Vec<InputText>, Vec<Diagnostic>), FileLoadError> {
    let mut texts = Vec::new();
    let mut diagnostics = Vec::new();
    find_texts(directory_path, |loaded| match loaded {
        Ok(text) => texts.push(text),
        Err(diagnostic) => diagnostics.push(diagnostic),
    })?;
    Ok((texts, diagnostics))
}
