//! External Search Invocation
//!
//! Reference: ncbi-blast/c++/src/app/blast/blastp_app.cpp
//!
//! The alignment itself is delegated to NCBI blastp. A search is a blocking
//! call that must finish, and leave its table on disk, before resolution
//! starts.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::common::Direction;
use crate::config::SearchConfig;
use crate::error::{RbhError, Result};
use crate::format::TableSchema;

/// One directional search: `query` against `subject`, table written to `out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub direction: Direction,
    pub query: PathBuf,
    pub subject: PathBuf,
    pub out: PathBuf,
}

/// Diagnostic streams captured from a finished search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Anything that can produce a hit table for a [`SearchRequest`].
pub trait SearchRunner {
    fn search(&self, request: &SearchRequest) -> Result<SearchOutput>;
}

/// A blastp command line, built per request.
#[derive(Debug, Clone)]
pub struct BlastpCommandline {
    config: SearchConfig,
    outfmt: String,
}

impl BlastpCommandline {
    pub fn new(config: SearchConfig, schema: &TableSchema) -> Self {
        Self {
            config,
            outfmt: schema.to_outfmt(),
        }
    }

    /// Arguments passed to blastp, program name excluded.
    pub fn arguments(&self, request: &SearchRequest) -> Vec<String> {
        let mut args = vec![
            "-query".to_string(),
            request.query.display().to_string(),
            "-subject".to_string(),
            request.subject.display().to_string(),
            "-out".to_string(),
            request.out.display().to_string(),
            "-outfmt".to_string(),
            self.outfmt.clone(),
            "-max_target_seqs".to_string(),
            self.config.max_target_seqs.to_string(),
        ];
        if let Some(evalue) = self.config.evalue {
            args.push("-evalue".to_string());
            args.push(evalue.to_string());
        }
        if let Some(threads) = self.config.num_threads {
            args.push("-num_threads".to_string());
            args.push(threads.to_string());
        }
        args
    }

    /// Shell-style rendering of the full command, for logs.
    pub fn command_line(&self, request: &SearchRequest) -> String {
        CommandLine {
            program: &self.config.program,
            args: self.arguments(request),
        }
        .to_string()
    }

    fn spinner(&self, request: &SearchRequest) -> Option<ProgressBar> {
        if !self.config.progress {
            return None;
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
            bar.set_style(style);
        }
        bar.set_message(format!("{} blastp search", request.direction));
        bar.enable_steady_tick(Duration::from_millis(120));
        Some(bar)
    }
}

struct CommandLine<'a> {
    program: &'a std::path::Path,
    args: Vec<String>,
}

impl fmt::Display for CommandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

impl SearchRunner for BlastpCommandline {
    fn search(&self, request: &SearchRequest) -> Result<SearchOutput> {
        log::info!(
            "{}: {}",
            request.direction.as_str().to_uppercase(),
            self.command_line(request)
        );

        let spinner = self.spinner(request);
        let result = Command::new(&self.config.program)
            .args(self.arguments(request))
            .output();
        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }

        let Output {
            status,
            stdout,
            stderr,
        } = result?;
        let output = SearchOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        };
        log::debug!("{} stdout: {}", request.direction, output.stdout.trim_end());
        log::debug!("{} stderr: {}", request.direction, output.stderr.trim_end());

        if !status.success() {
            return Err(RbhError::Search {
                direction: request.direction,
                status,
                stderr: output.stderr.trim_end().to_string(),
            });
        }
        Ok(output)
    }
}
