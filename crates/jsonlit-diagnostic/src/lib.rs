//! Diagnostic and error reporting for jsonlit.
//! jsonlit 的诊断和错误报告。
//!
//! Diagnostics are plain values attached to a parse tree. This crate also
//! renders them for terminals using ariadne.
//! 诊断是附加在语法树上的普通值；本 crate 使用 ariadne 将其渲染到终端。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    // Nothing useful can be done if stderr is gone.
    let _ = build_report(source, filename, diagnostic, true)
        .eprint((filename, Source::from(source)));
}

/// Render a diagnostic to a plain string without colors.
/// 将诊断信息渲染为不带颜色的字符串。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> String {
    let mut out = Vec::new();
    let _ = build_report(source, filename, diagnostic, false)
        .write((filename, Source::from(source)), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

fn build_report<'a>(
    source: &str,
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    // Spans are byte offsets; ariadne counts characters.
    let range = char_range(source, diagnostic.span.range());

    let mut label = Label::new((filename, range.clone())).with_message(&diagnostic.message);
    if color {
        label = label.with_color(Color::Red);
    }

    let mut report = Report::build(ReportKind::Error, filename, range.start)
        .with_config(Config::default().with_color(color))
        .with_code(diagnostic.code.as_str())
        .with_message(&diagnostic.message)
        .with_label(label);

    if let Some(help) = diagnostic.code.suggestion() {
        report = report.with_help(help);
    }

    report.finish()
}

fn char_range(source: &str, bytes: std::ops::Range<usize>) -> std::ops::Range<usize> {
    let to_char = |byte: usize| {
        let byte = byte.min(source.len());
        source
            .char_indices()
            .take_while(|(i, _)| *i < byte)
            .count()
    };
    to_char(bytes.start)..to_char(bytes.end)
}
