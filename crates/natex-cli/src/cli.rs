use clap::{Parser, ValueEnum};
use natex::{Mode, Natex};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "natex",
    about = "Filter JSON records with natural expressions",
    version
)]
pub struct Cli {
    /// Pattern each record is matched against, e.g. "age:>30 name:A*"
    pub pattern: String,

    /// JSON / JSON-lines files or directories to search, or "-" for stdin
    pub paths: Vec<PathBuf>,

    /// How list patterns relate to list values
    #[arg(short, long, value_enum, default_value_t = ModeArg::Exact)]
    pub mode: ModeArg,

    /// Match keywords and globs case-sensitively (regular expressions always are)
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Print records that do not match
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Print only the number of matching records
    #[arg(short, long)]
    pub count: bool,

    /// Match a top-level JSON array as one record instead of one per element
    #[arg(long)]
    pub whole: bool,

    /// Process inputs sequentially instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Exact,
    Inclusive,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => Mode::Exact,
            ModeArg::Inclusive => Mode::Inclusive,
        }
    }
}

impl Cli {
    pub fn natex(&self) -> Natex {
        Natex::new(self.pattern.as_str())
            .mode(self.mode.into())
            .case_insensitive(!self.case_sensitive)
    }
}
