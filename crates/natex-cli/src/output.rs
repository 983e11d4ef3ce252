use crate::input::Record;
use crate::runner::InputResult;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
    stderr: StandardStream,
    show_location: bool,
}

impl Output {
    pub fn new(color: bool, show_location: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
            stderr: StandardStream::stderr(color_choice),
            show_location,
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    fn print_location(&mut self, result: &InputResult, index: Option<usize>) -> io::Result<()> {
        if !self.show_location {
            return Ok(());
        }
        self.set_color(Color::Magenta);
        write!(self.stdout, "{}", result.input)?;
        self.reset();
        self.set_dim();
        write!(self.stdout, ":")?;
        if let Some(index) = index {
            self.reset();
            self.set_color(Color::Green);
            write!(self.stdout, "{}", index)?;
            self.reset();
            self.set_dim();
            write!(self.stdout, ":")?;
        }
        self.reset();
        Ok(())
    }

    pub fn print_record(&mut self, result: &InputResult, record: &Record) -> io::Result<()> {
        self.print_location(result, Some(record.index))?;
        writeln!(self.stdout, "{}", record.json)
    }

    pub fn print_matches(&mut self, result: &InputResult) -> io::Result<()> {
        for record in &result.matched {
            self.print_record(result, record)?;
        }
        self.stdout.flush()
    }

    pub fn print_count(&mut self, result: &InputResult) -> io::Result<()> {
        self.print_location(result, None)?;
        writeln!(self.stdout, "{}", result.matched_count())
    }

    pub fn print_error(&mut self, error: &anyhow::Error) {
        let _ = self
            .stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(self.stderr, "error");
        let _ = self.stderr.reset();
        let _ = writeln!(self.stderr, ": {:#}", error);
    }
}
