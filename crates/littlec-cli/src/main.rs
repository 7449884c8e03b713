//! Little C tokenizer CLI

mod error;
mod printer;

use clap::{ArgAction, Parser, ValueEnum};
use error::{CliError, Result};
use littlec_error::{DiagnosticRenderer, SourceCache};
use littlec_lexer::{Lexer, LexerConfig, MinusPolicy, ReadSource, MAX_LEXEME_LEN};
use printer::{JsonPrinter, TextPrinter, TokenSink};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Token listing format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// One human-readable line per token (default)
    #[default]
    Text,
    /// One JSON object per token
    Json,
}

#[derive(Parser)]
#[command(name = "littlec")]
#[command(version)]
#[command(about = "Tokenizes a Little C source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Longest lexeme kept, in characters
    #[arg(long, value_name = "N", default_value_t = MAX_LEXEME_LEN, value_parser = parse_lexeme_len)]
    max_lexeme_len: usize,

    /// Emit `-` as a subtraction operator after an operand
    #[arg(long)]
    contextual_minus: bool,

    /// Disable colors in diagnostics
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn lexer_config(&self) -> LexerConfig {
        let minus = if self.contextual_minus {
            MinusPolicy::Contextual
        } else {
            MinusPolicy::Fold
        };

        LexerConfig::new()
            .with_max_lexeme_len(self.max_lexeme_len)
            .with_minus_policy(minus)
    }
}

fn parse_lexeme_len(arg: &str) -> std::result::Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("littlec: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = File::open(&cli.input).map_err(|source| CliError::Open {
        path: cli.input.clone(),
        source,
    })?;
    tracing::info!(path = %cli.input.display(), "tokenizing");

    let mut cache = SourceCache::new();
    let file_id = cache.add_streamed(cli.input.display().to_string());

    let mut lexer =
        Lexer::with_config(ReadSource::new(file), cli.lexer_config()).with_file_id(file_id);

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    match cli.format {
        Format::Text => drive(&mut lexer, TextPrinter::new(out))?,
        Format::Json => drive(&mut lexer, JsonPrinter::new(out))?,
    }

    let mut renderer = DiagnosticRenderer::new(&cache);
    if cli.no_color || !io::stderr().is_terminal() {
        renderer = renderer.without_colors();
    }
    report(&mut lexer, &renderer, &cli.input, &mut io::stderr())
}

/// Renders the scan's diagnostics, then surfaces any read error.
/// Diagnostics raised before a failed read are still shown.
fn report<R, W>(
    lexer: &mut Lexer<ReadSource<R>>,
    renderer: &DiagnosticRenderer<'_>,
    path: &Path,
    errors: &mut W,
) -> Result<()>
where
    R: Read,
    W: Write,
{
    let diagnostics = lexer.take_diagnostics();
    if !diagnostics.is_empty() {
        writeln!(errors, "{}", diagnostics.render(renderer))?;
    }

    match lexer.source_mut().take_error() {
        Some(source) => Err(CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(()),
    }
}

/// Requests tokens until end of input, handing each to the sink
fn drive<S, K>(lexer: &mut Lexer<S>, mut sink: K) -> io::Result<()>
where
    S: littlec_lexer::CharSource,
    K: TokenSink,
{
    for token in lexer.by_ref() {
        sink.accept(&token)?;
    }
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["littlec", "prog.lc"]).unwrap();
        let config = cli.lexer_config();
        assert_eq!(config.max_lexeme_len, MAX_LEXEME_LEN);
        assert_eq!(config.minus, MinusPolicy::Fold);
        assert!(matches!(cli.format, Format::Text));
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "littlec",
            "--format",
            "json",
            "--max-lexeme-len",
            "12",
            "--contextual-minus",
            "-vv",
            "prog.lc",
        ])
        .unwrap();

        assert!(matches!(cli.format, Format::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.lexer_config().max_lexeme_len, 12);
        assert_eq!(cli.lexer_config().minus, MinusPolicy::Contextual);
    }

    #[test]
    fn test_missing_file_argument_is_rejected() {
        assert!(Cli::try_parse_from(["littlec"]).is_err());
    }

    #[test]
    fn test_zero_lexeme_len_is_rejected() {
        assert!(Cli::try_parse_from(["littlec", "--max-lexeme-len", "0", "a.lc"]).is_err());
    }

    #[test]
    fn test_diagnostics_are_rendered_before_read_error() {
        let mut cache = SourceCache::new();
        let file_id = cache.add_streamed("prog.lc");

        let input = io::Cursor::new(&b"abcdef "[..]).chain(FailingReader);
        let config = LexerConfig::new().with_max_lexeme_len(2);
        let mut lexer = Lexer::with_config(ReadSource::new(input), config).with_file_id(file_id);

        let mut listing = Vec::new();
        drive(&mut lexer, TextPrinter::new(&mut listing)).unwrap();

        let renderer = DiagnosticRenderer::new(&cache).without_colors();
        let mut errors = Vec::new();
        let result = report(&mut lexer, &renderer, Path::new("prog.lc"), &mut errors);

        assert!(matches!(result, Err(CliError::Read { .. })));
        let errors = String::from_utf8(errors).unwrap();
        assert!(errors.contains("error[EL001]"));
        assert!(errors.contains("prog.lc:1:1"));
    }

    #[test]
    fn test_report_without_diagnostics_or_errors() {
        let cache = SourceCache::new();
        let mut lexer = Lexer::new(ReadSource::new(&b"x"[..]));
        lexer.tokenize();

        let renderer = DiagnosticRenderer::new(&cache);
        let mut errors = Vec::new();
        assert!(report(&mut lexer, &renderer, Path::new("x.lc"), &mut errors).is_ok());
        assert!(errors.is_empty());
    }
}
