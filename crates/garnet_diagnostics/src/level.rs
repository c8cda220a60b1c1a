//! DiagnosticLevel - 诊断级别
//!
//! 定义诊断级别及其显示方式

use ariadne::ReportKind;
use colored::*;
use std::fmt;

/// 诊断级别
///
/// 校验遇到第一个违规即停止，只会产生错误级别的诊断
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// 错误 - 校验失败
    Error,
}

impl DiagnosticLevel {
    /// 获取级别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
        }
    }

    /// 渲染源码片段时使用的报告类型
    pub fn report_kind(&self) -> ReportKind<'static> {
        match self {
            Self::Error => ReportKind::Error,
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
