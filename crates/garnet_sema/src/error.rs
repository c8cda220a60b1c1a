//! Verification Error Types
//!
//! 校验错误定义。校验遇到第一个违规即停止，
//! 因此每个变体都是终止性的，并携带出错的行号（从 1 开始）。

use garnet_diagnostics::{Diagnostic, Suggestion};
use garnet_syntax::ast::Type;
use std::fmt;
use thiserror::Error;

/// 错误大类，调用方据此区分失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 文件无法读取（只由驱动层产生）
    Io,
    /// 行形状、括号平衡、return 位置等结构问题
    Structural,
    /// 声明问题：重名、final 未初始化、形参带初始值
    Declaration,
    /// 值与类型不兼容、给 final 重新赋值、使用未定义/未赋值的变量
    Type,
    /// 条件表达式问题
    Condition,
    /// 方法声明与调用问题
    Method,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Io => "io",
            Self::Structural => "structural",
            Self::Declaration => "declaration",
            Self::Type => "type",
            Self::Condition => "condition",
            Self::Method => "method",
        };
        write!(f, "{}", name)
    }
}

/// 校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    // ============ 结构错误 ============
    /// 不属于任何已知形状的行
    #[error("illegal line")]
    IllegalLine { line: usize },

    /// 花括号不平衡
    #[error("unbalanced braces")]
    UnbalancedBraces { line: usize },

    /// 全局作用域中的 return
    #[error("'return' outside of a method")]
    ReturnOutsideMethod { line: usize },

    /// 方法体最后一条语句不是 return
    #[error("method '{method}' does not end with 'return;'")]
    MissingReturn { method: String, line: usize },

    /// 全局作用域只允许变量声明
    #[error("only variable declarations are allowed in the global scope")]
    IllegalGlobalStatement { line: usize },

    /// 方法体内无法识别的语句
    #[error("illegal statement")]
    IllegalStatement { line: usize },

    /// 方法体内以 `{` 结尾但不是 if/while 块
    #[error("illegal block: expected 'if (...) {{' or 'while (...) {{'")]
    IllegalBlock { line: usize },

    /// 给不存在的变量赋值
    #[error("cannot assign to undeclared variable '{name}'")]
    UndeclaredAssignment { name: String, line: usize },

    // ============ 声明错误 ============
    /// 同一作用域内重名
    #[error("variable '{name}' is already declared in this scope")]
    DuplicateVariable { name: String, line: usize },

    /// final 变量声明时没有值
    #[error("final variable '{name}' is never initialized")]
    UninitializedFinal { name: String, line: usize },

    /// 形参带初始值
    #[error("parameter '{name}' cannot have an initial value")]
    ParameterWithInitializer { name: String, line: usize },

    // ============ 类型错误 ============
    /// 字面量与类型不匹配
    #[error("type mismatch: '{found}' is not a valid {expected} value")]
    TypeMismatch {
        expected: Type,
        found: String,
        line: usize,
    },

    /// 变量的类型不能赋给目标类型
    #[error("type mismatch: cannot use {found} variable '{name}' as {expected}")]
    IncompatibleVariable {
        name: String,
        expected: Type,
        found: Type,
        line: usize,
    },

    /// 给 final 变量重新赋值
    #[error("cannot assign a new value to final variable '{name}'")]
    FinalReassignment { name: String, line: usize },

    /// 作为值使用的变量不存在
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String, line: usize },

    /// 作为值使用的变量尚未赋值
    #[error("variable '{name}' is used before it is assigned")]
    UnassignedVariable { name: String, line: usize },

    // ============ 条件错误 ============
    /// 条件以 `||` / `&&` 开头或结尾
    #[error("condition '{condition}' starts or ends with an operator")]
    DanglingOperator { condition: String, line: usize },

    /// 条件中出现连续的运算符
    #[error("condition '{condition}' has two consecutive operators")]
    ConsecutiveOperators { condition: String, line: usize },

    /// 条件项不是布尔表达式
    #[error("'{term}' is not a boolean condition")]
    NotBooleanCondition { term: String, line: usize },

    // ============ 方法错误 ============
    /// 方法重名
    #[error("method '{name}' is already declared")]
    DuplicateMethod { name: String, line: usize },

    /// 方法声明格式错误
    #[error("malformed method declaration")]
    MalformedMethodDecl { line: usize },

    /// 调用不存在的方法
    #[error("undefined method '{name}'")]
    UndefinedMethod { name: String, line: usize },

    /// 实参数量不匹配
    #[error("method '{name}' expects {expected} arguments, but got {found}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    /// 实参与形参类型不兼容
    #[error("argument {position} of '{name}' is not a valid {expected} value: '{found}'")]
    ArgumentTypeMismatch {
        name: String,
        position: usize,
        expected: Type,
        found: String,
        line: usize,
    },
}

impl VerifyError {
    /// 出错的行号
    pub fn line(&self) -> usize {
        match self {
            Self::IllegalLine { line }
            | Self::UnbalancedBraces { line }
            | Self::ReturnOutsideMethod { line }
            | Self::MissingReturn { line, .. }
            | Self::IllegalGlobalStatement { line }
            | Self::IllegalStatement { line }
            | Self::IllegalBlock { line }
            | Self::UndeclaredAssignment { line, .. }
            | Self::DuplicateVariable { line, .. }
            | Self::UninitializedFinal { line, .. }
            | Self::ParameterWithInitializer { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::IncompatibleVariable { line, .. }
            | Self::FinalReassignment { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::UnassignedVariable { line, .. }
            | Self::DanglingOperator { line, .. }
            | Self::ConsecutiveOperators { line, .. }
            | Self::NotBooleanCondition { line, .. }
            | Self::DuplicateMethod { line, .. }
            | Self::MalformedMethodDecl { line }
            | Self::UndefinedMethod { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::ArgumentTypeMismatch { line, .. } => *line,
        }
    }

    /// 错误大类
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalLine { .. }
            | Self::UnbalancedBraces { .. }
            | Self::ReturnOutsideMethod { .. }
            | Self::MissingReturn { .. }
            | Self::IllegalGlobalStatement { .. }
            | Self::IllegalStatement { .. }
            | Self::IllegalBlock { .. }
            | Self::UndeclaredAssignment { .. } => ErrorKind::Structural,

            Self::DuplicateVariable { .. }
            | Self::UninitializedFinal { .. }
            | Self::ParameterWithInitializer { .. } => ErrorKind::Declaration,

            Self::TypeMismatch { .. }
            | Self::IncompatibleVariable { .. }
            | Self::FinalReassignment { .. }
            | Self::UndefinedVariable { .. }
            | Self::UnassignedVariable { .. } => ErrorKind::Type,

            Self::DanglingOperator { .. }
            | Self::ConsecutiveOperators { .. }
            | Self::NotBooleanCondition { .. } => ErrorKind::Condition,

            Self::DuplicateMethod { .. }
            | Self::MalformedMethodDecl { .. }
            | Self::UndefinedMethod { .. }
            | Self::ArgumentCountMismatch { .. }
            | Self::ArgumentTypeMismatch { .. } => ErrorKind::Method,
        }
    }

    /// 转换为统一诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).line(self.line());

        match self {
            Self::MissingReturn { .. } => diag.with_suggestion(
                Suggestion::new("end the method body with a bare return")
                    .with_replacement("return;"),
            ),
            Self::UninitializedFinal { .. } => {
                diag.with_note("a final variable must be given a value where it is declared")
            }
            Self::IncompatibleVariable { .. } | Self::ArgumentTypeMismatch { .. } => diag
                .with_note("int widens into double and boolean, double widens into boolean"),
            Self::NotBooleanCondition { .. } => diag.with_note(
                "a condition term must be true, false, a number, or an assigned int/double/boolean variable",
            ),
            Self::IllegalGlobalStatement { .. } => {
                diag.suggest("move the statement into a method body")
            }
            _ => diag,
        }
    }
}

/// 校验结果类型
pub type VerifyResult<T> = Result<T, VerifyError>;
