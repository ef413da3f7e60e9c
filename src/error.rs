use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;

/// Character offsets into the source, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    ScanError,
    ParseError,
    TypeError,
    /// Input left over after everything that could be parsed.
    TrailingInput,
}

impl ErrorKind {
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::ScanError => "Scan Error",
            ErrorKind::ParseError => "Parse Error",
            ErrorKind::TypeError => "Type Error",
            ErrorKind::TrailingInput => "Unrecognized Input",
        }
    }
}

/// A fatal failure. Anything that can be retried as another grammar
/// alternative is reported as `Ok(None)` instead and never becomes one of these.
#[derive(Debug, Clone)]
pub struct TinyError {
    pub kind: ErrorKind,
    pub span: Span,
    pub message: String,
    pub help: Option<String>,
}

impl TinyError {
    pub fn new(kind: ErrorKind, span: Span, message: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: None,
        }
    }

    pub fn new_with_help(kind: ErrorKind, span: Span, message: String, help: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: Some(help),
        }
    }

    pub fn scan_error(span: Span, message: String) -> Self {
        Self::new(ErrorKind::ScanError, span, message)
    }

    pub fn scan_error_with_help(span: Span, message: String, help: String) -> Self {
        Self::new_with_help(ErrorKind::ScanError, span, message, help)
    }

    pub fn parse_error_with_help(span: Span, message: String, help: String) -> Self {
        Self::new_with_help(ErrorKind::ParseError, span, message, help)
    }

    pub fn type_error_with_help(span: Span, message: String, help: String) -> Self {
        Self::new_with_help(ErrorKind::TypeError, span, message, help)
    }

    pub fn trailing_input_with_help(span: Span, message: String, help: String) -> Self {
        Self::new_with_help(ErrorKind::TrailingInput, span, message, help)
    }

    /// Text for the label under the offending source; `source_len` is in
    /// characters.
    pub fn label(&self, source_len: usize) -> String {
        if self.span.start >= source_len {
            return "input ends here".to_string();
        }
        match self.kind {
            ErrorKind::TypeError => "this operand has a different type".to_string(),
            ErrorKind::TrailingInput => "parsing stopped here".to_string(),
            ErrorKind::ScanError | ErrorKind::ParseError => self.message.clone(),
        }
    }

    pub fn report(&self, source: &str, filename: Option<&str>) {
        let filename = filename.unwrap_or("<repl>");

        let color = match self.kind {
            ErrorKind::ScanError => Color::Red,
            ErrorKind::ParseError => Color::Yellow,
            ErrorKind::TypeError => Color::Magenta,
            ErrorKind::TrailingInput => Color::Blue,
        };
        let kind_str = self.kind.title();

        // Errors at end of input point one past the last character.
        let len = source.chars().count();
        let start = self.span.start.min(len);
        let end = self.span.end.clamp(start, len);

        let mut report_builder = Report::build(ReportKind::Error, filename, start)
            .with_message(format!("{}: {}", kind_str.fg(color), self.message))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(self.label(len))
                    .with_color(color),
            );

        if let Some(ref help_text) = self.help {
            report_builder =
                report_builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
        }

        if let Err(e) = report_builder
            .finish()
            .eprint((filename, Source::from(source)))
        {
            log::warn!("failed to render diagnostic: {}", e);
            eprintln!("{}: {}", kind_str, self.message);
        }
    }
}

impl fmt::Display for TinyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TinyError {}
