//! Lex command implementation.
//!
//! Loads each input file, lexes it and prints its tokens. Files are lexed
//! in parallel on a rayon pool; output is written afterwards in the order
//! the files were given, so it does not depend on scheduling.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use lucidc_lex::{LexError, Token};
use lucidc_util::SourceFile;
use rayon::prelude::*;
use tracing::debug;

use crate::commands::common::{error_messages, OutputFormat, TokenRecord};
use crate::config::{Config, LexConfig};
use crate::error::{LucidtError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Output format; falls back to the configuration.
    pub format: Option<OutputFormat>,
    /// Leave trivia out of the output.
    pub skip_trivia: bool,
    /// Number of parallel jobs; falls back to the configuration.
    pub jobs: Option<u32>,
}

/// A successfully lexed file.
#[derive(Debug)]
pub struct LexedFile {
    /// The loaded source.
    pub source: SourceFile,
    /// Its tokens, without an end-of-input marker.
    pub tokens: Vec<Token>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, printing tokens to stdout and failures to
    /// stderr.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut out = BufWriter::new(stdout.lock());
        let mut err = stderr.lock();
        self.run_with(&mut out, &mut err)?;
        Ok(())
    }

    /// Execute the command against the given writers.
    pub fn run_with(&self, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
        let start_time = Instant::now();
        self.validate_input_files()?;
        let settings = self.get_lex_config();
        if settings.jobs == 0 {
            return Err(LucidtError::Validation(error_messages::ZERO_JOBS.to_string()));
        }

        let outcomes = self.lex_all(settings.jobs)?;

        let total = outcomes.len();
        let mut failed = 0;
        for outcome in &outcomes {
            match outcome {
                Ok(file) => {
                    if total > 1 && settings.format == OutputFormat::Text {
                        writeln!(out, "{}:", file.source.name())?;
                    }
                    write_tokens(out, &file.tokens, settings.format, settings.skip_trivia)?;
                },
                Err(e) => {
                    failed += 1;
                    writeln!(err, "error: {e}")?;
                },
            }
        }
        out.flush()?;

        let elapsed = start_time.elapsed();
        debug!(files = total, failed, elapsed_ms = elapsed.as_millis() as u64, "lex finished");
        if self.args.verbose {
            writeln!(
                err,
                "lexed {total} file(s), {failed} failed, in {:.2}s",
                elapsed.as_secs_f64()
            )?;
        }
        self.check_for_failures(failed, total)
    }

    /// Get the effective lex configuration: flags override the file.
    pub fn get_lex_config(&self) -> LexConfig {
        let mut config = self.config.lex.clone();

        if let Some(format) = self.args.format {
            config.format = format;
        }

        if let Some(jobs) = self.args.jobs {
            config.jobs = jobs;
        }

        config.skip_trivia |= self.args.skip_trivia;
        config
    }

    fn validate_input_files(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(LucidtError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        Ok(())
    }

    /// Lex every input file on a pool of `jobs` threads.
    fn lex_all(&self, jobs: u32) -> Result<Vec<Result<LexedFile>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs as usize)
            .build()?;
        debug!(jobs, files = self.args.files.len(), "lexing files");

        Ok(pool.install(|| self.args.files.par_iter().map(|path| lex_file(path)).collect()))
    }

    fn check_for_failures(&self, failed: usize, total: usize) -> Result<()> {
        if failed > 0 {
            return Err(LucidtError::FilesFailed { failed, total });
        }
        Ok(())
    }
}

/// Execute the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    LexCommand::new(args, config).run()
}

/// Load and lex one file.
///
/// # Errors
///
/// [`LucidtError::Source`] if the file cannot be read or decoded, and
/// [`LucidtError::Lex`] with a rendered excerpt if it fails to lex.
pub fn lex_file(path: &Path) -> Result<LexedFile> {
    let source = SourceFile::load(path)?;
    let tokens = lucidc_lex::lex(source.name(), source.content()).map_err(|error| {
        let snippet = render_snippet(&source, &error);
        LucidtError::Lex { error, snippet }
    })?;
    debug!(file = source.name(), tokens = tokens.len(), "lexed file");
    Ok(LexedFile { source, tokens })
}

/// Render the line an error starts on, with a caret under its column.
///
/// # Example
///
/// ```text
///   3 | x = 12ab
///     |     ^
/// ```
pub fn render_snippet(source: &SourceFile, error: &LexError) -> String {
    let line = error.location.line_start;
    let text = source.line_text(line).unwrap_or_default();
    let gutter = line.to_string();
    let padding = " ".repeat(gutter.len());
    let caret_offset = " ".repeat(error.location.col_start as usize);
    format!("{gutter} | {text}\n{padding} | {caret_offset}^")
}

/// Write `tokens` in the selected format.
pub fn write_tokens(
    out: &mut impl Write,
    tokens: &[Token],
    format: OutputFormat,
    skip_trivia: bool,
) -> Result<()> {
    let shown = tokens.iter().filter(|t| !(skip_trivia && t.is_trivia()));

    match format {
        OutputFormat::Text => {
            for (index, token) in shown.enumerate() {
                writeln!(
                    out,
                    "{index}: {} {} {:?}",
                    token.kind, token.location, token.value
                )?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = shown.map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
