use clap::Parser;
use natex_cli::cli::Cli;
use natex_cli::discover::discover_inputs;
use natex_cli::output::Output;
use natex_cli::runner::{run_inputs, Options};

const EXIT_MATCH: i32 = 0;
const EXIT_NO_MATCH: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();
    natex_cli::init_tracing();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);

    let inputs = match discover_inputs(&cli.paths) {
        Ok(inputs) => inputs,
        Err(e) => {
            Output::new(use_color, false).print_error(&e.into());
            std::process::exit(EXIT_ERROR);
        }
    };

    let show_location = inputs.len() > 1 || cli.paths.iter().any(|p| p.is_dir());
    let mut output = Output::new(use_color, show_location);

    let natex = cli.natex();
    let options = Options {
        invert: cli.invert,
        whole: cli.whole,
        sequential: cli.sequential,
    };

    let mut matched = 0;
    let mut failed = false;
    for result in run_inputs(&natex, &inputs, &options) {
        match result {
            Ok(result) => {
                matched += result.matched_count();
                let written = if cli.count {
                    output.print_count(&result)
                } else {
                    output.print_matches(&result)
                };
                if let Err(e) = written {
                    failed = true;
                    output.print_error(&anyhow::Error::new(e).context("Failed to write output"));
                    break;
                }
            }
            Err(e) => {
                failed = true;
                output.print_error(&e.into());
            }
        }
    }

    let code = if failed {
        EXIT_ERROR
    } else if matched > 0 {
        EXIT_MATCH
    } else {
        EXIT_NO_MATCH
    };
    std::process::exit(code);
}
