use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One source of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// JSON-lines inputs hold one record per line; `.json` files hold a
    /// single document. Stdin is sniffed when loaded.
    pub fn is_json_lines(&self) -> bool {
        match self {
            Input::Stdin => false,
            Input::File(path) => path.extension().is_some_and(|ext| ext == "jsonl"),
        }
    }

    pub fn path(&self) -> PathBuf {
        match self {
            Input::Stdin => PathBuf::from("<stdin>"),
            Input::File(path) => path.clone(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "json" || ext == "jsonl")
}

/// Expands the command line paths into inputs.
///
/// No paths means stdin, as does `-`. Files are taken as given whatever their
/// extension; directories are walked for `*.json` and `*.jsonl` files, sorted
/// so that output order is stable.
pub fn discover_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        return Ok(vec![Input::Stdin]);
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            inputs.push(Input::Stdin);
        } else if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry?;
                let path = entry.path();
                if path.is_file() && is_record_file(path) {
                    found.push(path.to_path_buf());
                }
            }
            found.sort();
            inputs.extend(found.into_iter().map(Input::File));
        } else if path.is_file() {
            inputs.push(Input::File(path.clone()));
        } else {
            return Err(Error::MissingInput(path.clone()));
        }
    }
    Ok(inputs)
}
