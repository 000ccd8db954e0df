use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::{RuntimeError, RuntimeErrorType},
    parser::prelude::{ParseError, ParseErrorType},
    utils::prelude::SrcSpan
};
use super::diagnostic::{Diagnostic, Label, Location};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source code")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("program stopped with an error")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StdIo { err: err.kind() }
    }
}

impl Error {
    /// `true` when the program ran out of input, which ends a run cleanly.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Error::Runtime { error, .. } if error.is_end_of_input())
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8_lossy(nocolor.as_slice()).into_owned()
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            // writes into an in-memory buffer only fail on invalid spans
            if diagnostic.write(buf).is_err() {
                let _ = writeln!(buf, "error: {self}");
            }
            let _ = writeln!(buf);
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();

                // point past the last character when the file ended early
                let span = match error.error {
                    ParseErrorType::UnexpectedEof { .. } => SrcSpan::from(src.len() as u32, src.len() as u32),
                    _ => error.span,
                };

                vec![Diagnostic::new("Syntax error")
                    .with_text(extra.join("\n"))
                    .at(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(format!("{label} (line {})", error.line)),
                            span,
                        },
                    })]
            },
            Error::Runtime { path, src, error } => {
                let (title, extra) = error.details();

                let diagnostic = Diagnostic::new(format!("{}: {title}", error.class()))
                    .with_text(extra.join("\n"));

                let diagnostic = match &error.error {
                    RuntimeErrorType::Redeclaration { .. } => diagnostic
                        .with_hint("Run with `--no-strict` to allow redeclaring names."),
                    RuntimeErrorType::ArityMismatch { .. } => diagnostic
                        .with_hint("Arguments are separated by spaces, not commas."),
                    RuntimeErrorType::RecursionLimit { .. } => diagnostic
                        .with_hint("Run with `--max-call-depth` to allow deeper recursion."),
                    _ => diagnostic,
                };

                // a run without source text has nothing to annotate
                match src.is_empty() {
                    true => vec![diagnostic],
                    false => vec![diagnostic.at(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: None,
                            span: error.location,
                        },
                    })],
                }
            },
            Error::StdIo { err } => {
                vec![Diagnostic::new("Standard IO error").with_text(format!("{err}"))]
            }
        }
    }
}
