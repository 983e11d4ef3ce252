use crate::discover::Input;
use crate::error::{Error, Result};
use natex::Value;
use std::io::Read;
use std::path::Path;

/// A JSON record together with its position in the input.
#[derive(Debug, Clone)]
pub struct Record {
    /// 1-based line number for JSON lines, element number for a top-level
    /// array, `1` for a single document.
    pub index: usize,
    pub json: serde_json::Value,
    pub value: Value,
}

impl Record {
    fn new(index: usize, json: serde_json::Value) -> Self {
        let value = Value::from(json.clone());
        Self { index, json, value }
    }
}

pub fn read_input(input: &Input) -> Result<String> {
    let mut content = String::new();
    match input {
        Input::Stdin => {
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|source| Error::ReadInput {
                    path: input.path(),
                    source,
                })?;
        }
        Input::File(path) => {
            content = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
                path: path.clone(),
                source,
            })?;
        }
    }
    Ok(content)
}

pub fn load_records(input: &Input, whole: bool) -> Result<Vec<Record>> {
    let content = read_input(input)?;
    parse_records(&content, input, whole)
}

/// Splits `content` into records.
///
/// `.jsonl` inputs are read line by line. Anything else is read as one
/// document, except that stdin falls back to JSON lines when it does not
/// parse as a single document. A top-level array yields one record per
/// element unless `whole` is set.
pub fn parse_records(content: &str, input: &Input, whole: bool) -> Result<Vec<Record>> {
    let path = input.path();
    if input.is_json_lines() {
        return parse_lines(content, &path);
    }
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(document) => Ok(split_document(document, whole)),
        Err(_) if *input == Input::Stdin && content.trim().lines().count() > 1 => {
            parse_lines(content, &path)
        }
        Err(source) => Err(Error::ParseJson {
            line: source.line(),
            path,
            source,
        }),
    }
}

fn split_document(document: serde_json::Value, whole: bool) -> Vec<Record> {
    match document {
        serde_json::Value::Array(items) if !whole => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Record::new(i + 1, item))
            .collect(),
        document => vec![Record::new(1, document)],
    }
}

fn parse_lines(content: &str, path: &Path) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let json = serde_json::from_str(line).map_err(|source| Error::ParseJson {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        records.push(Record::new(i + 1, json));
    }
    Ok(records)
}
