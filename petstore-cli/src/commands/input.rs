use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("no data piped in")]
    NoDataPipedIn,
    #[error("input file does not exist")]
    MissingFile,
}

/// `-` is an alias for stdin
///
/// ```
/// # use std::path::PathBuf;
/// # use petstore_cli::commands::input::normalize_input_path;
/// assert_eq!(None, normalize_input_path(Some(PathBuf::from("-"))));
/// assert_eq!(
///     Some(PathBuf::from("payload.xml")),
///     normalize_input_path(Some(PathBuf::from("payload.xml")))
/// );
/// ```
pub fn normalize_input_path(input_file: Option<PathBuf>) -> Option<PathBuf> {
    input_file.filter(|path| path.as_path() != Path::new("-"))
}

/// Check that there is something to read before doing any work
pub fn check_input(input_file: Option<&Path>, stdin_is_tty: bool) -> Result<(), InputError> {
    match input_file {
        None if stdin_is_tty => Err(InputError::NoDataPipedIn),
        Some(path) if !path.exists() => Err(InputError::MissingFile),
        _ => Ok(()),
    }
}

pub fn read_input(input_file: Option<&Path>) -> Result<String> {
    let mut content = String::new();

    match input_file {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("trying to read file {:?}", path))?
                .read_to_string(&mut content)?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut content)
                .with_context(|| "Couldn't read from STDIN")?;
        }
    }

    log::debug!("read {} bytes of input", content.len());
    Ok(content)
}

/// Open `output_file` for writing, or stdout when there is none
pub fn open_output(output_file: Option<&Path>) -> Result<Box<dyn Write>> {
    match output_file {
        Some(path) => Ok(Box::new(
            File::create(path).with_context(|| format!("trying to write onto file {:?}", path))?,
        )),
        None => Ok(Box::new(io::stdout())),
    }
}
