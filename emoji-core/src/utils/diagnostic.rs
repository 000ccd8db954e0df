use std::{io::Write, path::PathBuf};

use codespan_reporting::{
    diagnostic::{Diagnostic as CodespanDiagnostic, Label as CodespanLabel, LabelStyle, Severity},
    files::SimpleFile,
    term::{self, Config}
};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use super::src_span::SrcSpan;

pub struct Label {
    pub text: Option<String>,
    pub span: SrcSpan
}

impl Label {
    fn to_codespan_label(&self) -> CodespanLabel<()> {
        let label = CodespanLabel::new(LabelStyle::Primary, (), self.span.start as usize..self.span.end as usize);

        match &self.text {
            Some(text) => label.with_message(text),
            None => label,
        }
    }
}

/// The piece of source a diagnostic points into.
pub struct Location<'a> {
    pub src: &'a str,
    pub path: PathBuf,
    pub label: Label,
}

pub struct Diagnostic<'a> {
    pub title: String,
    pub text: String,
    pub hint: Option<String>,
    pub location: Option<Location<'a>>
}

impl<'a> Diagnostic<'a> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            hint: None,
            location: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn at(mut self, location: Location<'a>) -> Self {
        self.location = Some(location);
        self
    }

    fn notes(&self) -> Vec<String> {
        let text = (!self.text.is_empty()).then(|| self.text.clone());
        let hint = self.hint.as_ref().map(|hint| format!("hint: {hint}"));

        text.into_iter().chain(hint).collect()
    }

    pub fn write(&self, buf: &mut Buffer) -> std::io::Result<()> {
        match &self.location {
            Some(location) => self.write_span(location, buf),
            None => self.write_plain(buf),
        }
    }

    fn write_span(&self, location: &Location, buf: &mut Buffer) -> std::io::Result<()> {
        let file = SimpleFile::new(location.path.to_string_lossy(), location.src);

        let diagnostic = CodespanDiagnostic::new(Severity::Error)
            .with_message(&self.title)
            .with_labels(vec![location.label.to_codespan_label()])
            .with_notes(self.notes());

        term::emit(buf, &Config::default(), &file, &diagnostic)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
    }

    fn write_plain(&self, buf: &mut Buffer) -> std::io::Result<()> {
        buf.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Red)))?;
        write!(buf, "error")?;

        buf.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(buf, ": {}", self.title)?;
        buf.reset()?;

        for note in self.notes() {
            writeln!(buf, "  = {note}")?;
        }

        Ok(())
    }
}
