//! Scope Management
//!
//! 作用域管理，处理嵌套作用域和变量查找。
//! 采用栈式作用域设计：全局作用域常驻栈底，方法作用域与 if/while 块作用域严格按栈序进出。

use crate::variable::Variable;

pub mod stack;
pub use stack::ScopeStack;

/// 作用域 ID（即在作用域栈中的下标，0 为全局作用域）
pub type ScopeId = usize;

/// 作用域类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// 全局作用域
    Global,
    /// 方法作用域，进入时以形参初始化
    Method,
    /// 块作用域 (if, while)
    Block,
}

/// 单个作用域
///
/// 变量按声明顺序保存，同一作用域内名称唯一
#[derive(Debug, Clone)]
pub struct Scope {
    pub kind: ScopeKind,
    variables: Vec<Variable>,
}

impl Scope {
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            variables: Vec::new(),
        }
    }

    /// 在当前作用域查找变量（不向上查找）
    pub fn lookup_local(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|var| var.name == name)
    }

    pub(crate) fn lookup_local_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|var| var.name == name)
    }

    /// 追加变量，调用方负责重名检查
    pub(crate) fn push(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
