use crate::discover::Input;
use crate::error::Result;
use crate::input::{load_records, Record};
use natex::Natex;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub invert: bool,
    pub whole: bool,
    pub sequential: bool,
}

#[derive(Debug)]
pub struct InputResult {
    pub input: Input,
    pub total: usize,
    pub matched: Vec<Record>,
}

impl InputResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

/// Keeps the records `natex` selects, or rejects when `invert` is set.
pub fn filter_records(natex: &Natex, records: Vec<Record>, invert: bool) -> (usize, Vec<Record>) {
    let total = records.len();
    let matched = records
        .into_iter()
        .filter(|record| natex.matches(&record.value) != invert)
        .collect();
    (total, matched)
}

pub fn run_input(natex: &Natex, input: &Input, options: &Options) -> Result<InputResult> {
    let records = load_records(input, options.whole)?;
    let (total, matched) = filter_records(natex, records, options.invert);
    tracing::debug!(input = %input, total, matched = matched.len(), "filtered input");
    Ok(InputResult {
        input: input.clone(),
        total,
        matched,
    })
}

/// Runs every input, in parallel unless `options.sequential` is set.
///
/// Each parallel task works on a fork of `natex` with its own parse cache and
/// variable bindings. Results come back in input order.
pub fn run_inputs(natex: &Natex, inputs: &[Input], options: &Options) -> Vec<Result<InputResult>> {
    if options.sequential || inputs.len() == 1 {
        inputs
            .iter()
            .map(|input| run_input(natex, input, options))
            .collect()
    } else {
        inputs
            .par_iter()
            .map(|input| run_input(&natex.fork(), input, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_records;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn records(content: &str) -> Vec<Record> {
        parse_records(content, &Input::File(PathBuf::from("t.json")), false).unwrap()
    }

    #[test]
    fn test_filter_records() {
        let natex = Natex::new("age:>30");
        let (total, matched) = filter_records(
            &natex,
            records(r#"[{"age": 25}, {"age": 40}, {"name": "x"}]"#),
            false,
        );
        assert_eq!(total, 3);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].index, 2);
    }

    #[test]
    fn test_filter_records_inverted() {
        let natex = Natex::new("age:>30");
        let (_, matched) = filter_records(
            &natex,
            records(r#"[{"age": 25}, {"age": 40}, {"name": "x"}]"#),
            true,
        );
        let indexes: Vec<_> = matched.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 3]);
    }

    #[test]
    fn test_bindings_reset_per_record() {
        let natex = Natex::new("$x,$x");
        let (_, matched) = filter_records(
            &natex,
            records(r#"[["a", "a"], ["b", "b"], ["a", "b"]]"#),
            false,
        );
        let indexes: Vec<_> = matched.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let tmp = TempDir::new().unwrap();
        let mut inputs = Vec::new();
        for i in 0..8 {
            let path = tmp.path().join(format!("{}.jsonl", i));
            let lines: Vec<String> = (0..20)
                .map(|n| format!(r#"{{"n": {}, "file": {}}}"#, n, i))
                .collect();
            fs::write(&path, lines.join("\n")).unwrap();
            inputs.push(Input::File(path));
        }

        let natex = Natex::new("n:5-9");
        let parallel = run_inputs(&natex, &inputs, &Options::default());
        let sequential = run_inputs(
            &natex,
            &inputs,
            &Options {
                sequential: true,
                ..Options::default()
            },
        );

        assert_eq!(parallel.len(), 8);
        for (p, s) in parallel.iter().zip(&sequential) {
            let p = p.as_ref().unwrap();
            let s = s.as_ref().unwrap();
            assert_eq!(p.input, s.input);
            assert_eq!(p.total, 20);
            assert_eq!(p.matched_count(), 5);
            assert_eq!(s.matched_count(), 5);
        }
    }

    #[test]
    fn test_run_input_propagates_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{").unwrap();
        let natex = Natex::new("*");
        assert!(run_input(&natex, &Input::File(path), &Options::default()).is_err());
    }
}
