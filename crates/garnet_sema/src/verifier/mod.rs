//! Verification Driver
//!
//! 两遍扫描：
//! 1. [`global`]：逐行分类，记录每行的嵌套深度，处理全局声明与方法登记，检查括号平衡
//! 2. [`body`]：逐个方法遍历方法体，在作用域栈上校验每条语句和每个条件块
//!
//! 遇到第一个错误立即返回。

use crate::error::VerifyResult;
use crate::method::MethodRegistry;
use crate::scope::ScopeStack;
use garnet_syntax::LineRecord;

pub mod body;
pub mod global;

/// 校验通过时的统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    /// 总行数
    pub line_count: usize,
    /// 登记的方法数
    pub method_count: usize,
    /// 全局变量数
    pub global_count: usize,
}

/// 单个文件的校验器，独占作用域栈和方法注册表
pub struct Verifier {
    pub(crate) scopes: ScopeStack,
    pub(crate) methods: MethodRegistry,
    /// 按行号（从 1 开始）顺序排列，`records[n - 1]` 即第 n 行
    pub(crate) records: Vec<LineRecord>,
}

impl Verifier {
    pub fn new() -> Self {
        Self {
            scopes: ScopeStack::new(),
            methods: MethodRegistry::new(),
            records: Vec::new(),
        }
    }

    /// 校验整个文件
    pub fn verify<S: AsRef<str>>(mut self, lines: &[S]) -> VerifyResult<Verification> {
        log::debug!("pass 1: scanning {} lines", lines.len());
        self.scan_globals(lines)?;

        log::debug!(
            "pass 2: walking {} methods with {} globals",
            self.methods.len(),
            self.scopes.global().len()
        );
        self.check_bodies()?;

        Ok(Verification {
            line_count: self.records.len(),
            method_count: self.methods.len(),
            global_count: self.scopes.global().len(),
        })
    }

    // --- Delegation ---

    pub(crate) fn scan_globals<S: AsRef<str>>(&mut self, lines: &[S]) -> VerifyResult<()> {
        global::scan_globals(self, lines)
    }

    pub(crate) fn check_bodies(&mut self) -> VerifyResult<()> {
        body::check_bodies(self)
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}
