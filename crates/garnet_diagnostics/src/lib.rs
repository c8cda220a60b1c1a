//! Garnet Diagnostics
//!
//! 统一的诊断系统，为 Garnet 校验器提供清晰的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别
//! - [`Emitter`] - 诊断输出器（标准错误流）
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use garnet_diagnostics::{Diagnostic, Emitter};
//!
//! let diag = Diagnostic::error("final variable 'x' is never initialized")
//!     .line(3)
//!     .with_note("a final variable must be given a value where it is declared");
//!
//! let emitter = Emitter::without_colors();
//! emitter.emit(&diag);
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod span;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use span::{line_span, Span};
