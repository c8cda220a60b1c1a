//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出到标准错误流。
//! 标准输出只留给校验结论（`0` / `1` / `2`）。

use crate::diagnostic::Diagnostic;
use crate::span::line_span;
use ariadne::{Config, Label, Report, Source};
use colored::*;
use std::io;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// 输出诊断，并附带出错行的源码片段
    ///
    /// 诊断没有行号（或行号超出源码范围）时退化为 [`Emitter::emit`]
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        let Some(span) = diagnostic.line.and_then(|line| line_span(source, line)) else {
            self.emit(diagnostic);
            return Ok(());
        };

        let label = match diagnostic.line {
            Some(line) => format!("line {}", line),
            None => String::new(),
        };

        let mut report = Report::build(diagnostic.level.report_kind(), (), span.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(Label::new(span).with_message(label));

        if let Some(note) = diagnostic.notes.first() {
            report = report.with_note(note);
        }
        if let Some(suggestion) = diagnostic.suggestions.first() {
            let help = match &suggestion.replacement {
                Some(replacement) => format!("{} (try: {})", suggestion.message, replacement),
                None => suggestion.message.clone(),
            };
            report = report.with_help(help);
        }

        report.finish().eprint(Source::from(source))
    }

    /// 将诊断格式化为文本
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            self.render_colored(diagnostic)
        } else {
            self.render_plain(diagnostic)
        }
    }

    /// 带颜色的诊断文本
    fn render_colored(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!(
            "{}: {}\n",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        );

        if let Some(line) = diagnostic.line {
            out.push_str(&format!("  {} line {}\n", "-->".blue().bold(), line));
        }

        for note in &diagnostic.notes {
            out.push_str(&format!(
                "  {} {}\n",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            ));
        }

        for suggestion in &diagnostic.suggestions {
            out.push_str(&format!(
                "  {} {}\n",
                "=".green().bold(),
                format!("help: {}", suggestion.message).green()
            ));
            if let Some(replacement) = &suggestion.replacement {
                out.push_str(&format!("        try: {}\n", replacement.green().italic()));
            }
        }

        out
    }

    /// 纯文本诊断
    fn render_plain(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!("{}: {}\n", diagnostic.level, diagnostic.message);

        if let Some(line) = diagnostic.line {
            out.push_str(&format!("  --> line {}\n", line));
        }

        for note in &diagnostic.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }

        for suggestion in &diagnostic.suggestions {
            out.push_str(&format!("  = help: {}\n", suggestion.message));
            if let Some(replacement) = &suggestion.replacement {
                out.push_str(&format!("        try: {}\n", replacement));
            }
        }

        out
    }
}
