use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jcol::cli::{Cli, ColorMode};
use jcol::config::Config;
use jcol::line::{LineKind, NumberedLine};
use jcol::output::{format_header, format_row};
use jcol::{Columnizer, JcolError, JsonlColumnizer};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when jcol exits early.
    reset_sigpipe();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("jcol: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(JcolError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jcol: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), JcolError> {
    let columnizer = config.columnizer();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if cli.priority {
        for path in &cli.files {
            let name = path.to_string_lossy();
            writeln!(writer, "{name}\t{}", columnizer.priority(&name, &[]))?;
        }
        writer.flush()?;
        return Ok(());
    }

    let use_color = resolve_color_mode(config.color_mode);
    let mut line_buf = String::new();

    if config.header {
        format_header(columnizer.column_names(), config, use_color, &mut line_buf);
        if !line_buf.is_empty() {
            writeln!(writer, "{line_buf}")?;
        }
    }

    if cli.files.is_empty() {
        let stdin = io::stdin();
        process(stdin.lock(), "<stdin>", &columnizer, config, &mut line_buf, &mut writer)?;
    } else {
        for path in &cli.files {
            if path == Path::new("-") {
                let stdin = io::stdin();
                process(stdin.lock(), "<stdin>", &columnizer, config, &mut line_buf, &mut writer)?;
                continue;
            }

            let file = File::open(path).map_err(|e| {
                JcolError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot open {}: {e}", path.display()),
                ))
            })?;
            let name = path.to_string_lossy();
            let priority = columnizer.priority(&name, &[]);
            tracing::debug!(file = %name, %priority, "reading file");
            process(BufReader::new(file), &name, &columnizer, config, &mut line_buf, &mut writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Columnize every line of `reader` and write one row per line.
///
/// Invalid UTF-8 is replaced rather than rejected so that corrupt files still
/// produce one row per line.
fn process<R: BufRead, W: Write>(
    mut reader: R,
    source: &str,
    columnizer: &JsonlColumnizer,
    config: &Config,
    line_buf: &mut String,
    writer: &mut W,
) -> Result<(), JcolError> {
    let mut bytes = Vec::new();
    let mut number = 0;
    let mut fallbacks = 0usize;

    loop {
        bytes.clear();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            break;
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        let line = NumberedLine::new(number, String::from_utf8_lossy(&bytes));
        number += 1;

        let record = columnizer.split_line(&line);
        if record.kind() == LineKind::Raw {
            fallbacks += 1;
            if tracing::enabled!(tracing::Level::DEBUG)
                && let Err(e) = jcol::decoder::try_decode(&line.text)
            {
                tracing::debug!(
                    source,
                    line = line.number + 1,
                    error = %e,
                    "line kept as raw text"
                );
            }
        }

        line_buf.clear();
        format_row(&record, columnizer.column_names(), config, line_buf);
        writeln!(writer, "{line_buf}")?;
    }

    tracing::debug!(source, lines = number, fallbacks, "finished input");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "jcol=debug" } else { "jcol=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a filter like `jcol`, restoring `SIG_DFL` lets the OS handle the
/// signal normally when the reader goes away.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
