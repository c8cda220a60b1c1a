use super::{Scope, ScopeId, ScopeKind};
use crate::error::{VerifyError, VerifyResult};
use crate::variable::Variable;

/// 作用域栈 - 管理嵌套作用域
///
/// 下标 0 是全局作用域，生命周期覆盖整个文件；栈顶是当前作用域。
/// 名称解析从栈顶向栈底查找，声明只检查栈顶。
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    /// 创建新的作用域栈，初始化全局作用域
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new(ScopeKind::Global)],
        }
    }

    /// 进入新作用域
    pub fn enter_scope(&mut self, kind: ScopeKind) -> ScopeId {
        self.scopes.push(Scope::new(kind));
        let id = self.current_scope();
        log::trace!("enter {:?} scope #{}", kind, id);
        id
    }

    /// 退出当前作用域，全局作用域永远不会被弹出
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            if let Some(scope) = self.scopes.pop() {
                log::trace!(
                    "exit {:?} scope #{} ({} variables)",
                    scope.kind,
                    self.scopes.len(),
                    scope.len()
                );
            }
        }
    }

    /// 获取当前作用域 ID
    pub fn current_scope(&self) -> ScopeId {
        self.scopes.len() - 1
    }

    /// 全局作用域
    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    /// 在当前作用域定义变量
    ///
    /// 如果当前作用域已有同名变量，返回 DuplicateVariable 错误；外层作用域的同名变量不影响
    pub fn define(&mut self, variable: Variable, line: usize) -> VerifyResult<()> {
        let current = self.current_scope();
        if self.scopes[current].lookup_local(&variable.name).is_some() {
            return Err(VerifyError::DuplicateVariable {
                name: variable.name,
                line,
            });
        }

        self.scopes[current].push(variable);
        Ok(())
    }

    /// 查找变量（从当前作用域向外查找，返回第一个匹配）
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.lookup_with_scope(name).map(|(_, var)| var)
    }

    /// 查找变量及其所在的作用域
    pub fn lookup_with_scope(&self, name: &str) -> Option<(ScopeId, &Variable)> {
        self.scopes
            .iter()
            .enumerate()
            .rev()
            .find_map(|(id, scope)| scope.lookup_local(name).map(|var| (id, var)))
    }

    /// 仅在当前作用域查找（不向上查找）
    pub fn lookup_local(&self, name: &str) -> Option<&Variable> {
        self.scopes[self.current_scope()].lookup_local(name)
    }

    /// 所有作用域中同名的变量（由内向外）
    pub fn lookup_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Variable> + 'a {
        self.scopes
            .iter()
            .rev()
            .filter_map(move |scope| scope.lookup_local(name))
    }

    /// 在指定作用域中为变量赋新值
    ///
    /// 变量不存在时返回 `false`
    pub fn assign_in(&mut self, scope: ScopeId, name: &str, value: String) -> bool {
        match self
            .scopes
            .get_mut(scope)
            .and_then(|scope| scope.lookup_local_mut(name))
        {
            Some(var) => {
                var.assign(value);
                true
            }
            None => false,
        }
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garnet_syntax::ast::Type;

    fn int(name: &str, value: Option<&str>) -> Variable {
        Variable::new(name, Type::Int, value.map(str::to_string), false)
    }

    #[test]
    fn test_scope_nesting() {
        let mut scopes = ScopeStack::new();

        // 全局作用域
        scopes.define(int("x", Some("1")), 1).unwrap();

        // 进入方法作用域
        scopes.enter_scope(ScopeKind::Method);
        scopes.define(int("y", None), 2).unwrap();

        // 可以查到外层的 x
        assert!(scopes.lookup("x").is_some());
        // 可以查到当前的 y
        assert!(scopes.lookup("y").is_some());
        // x 不在当前作用域
        assert!(scopes.lookup_local("x").is_none());

        // 退出方法作用域
        scopes.exit_scope();

        // 回到全局，y 不可见
        assert!(scopes.lookup("y").is_none());
        assert!(scopes.lookup("x").is_some());
        assert_eq!(scopes.current_scope(), 0);
    }

    #[test]
    fn test_duplicate_definition() {
        let mut scopes = ScopeStack::new();
        scopes.define(int("x", None), 1).unwrap();

        let result = scopes.define(Variable::unassigned("x", Type::String, false), 2);
        assert_eq!(
            result,
            Err(VerifyError::DuplicateVariable {
                name: "x".to_string(),
                line: 2,
            })
        );
    }

    #[test]
    fn test_shadowing_in_nested_scope() {
        let mut scopes = ScopeStack::new();
        scopes.define(int("x", Some("1")), 1).unwrap();
        scopes.enter_scope(ScopeKind::Method);
        scopes.enter_scope(ScopeKind::Block);

        // 嵌套作用域可以重新声明外层的名字
        scopes
            .define(Variable::unassigned("x", Type::String, false), 3)
            .unwrap();

        let (id, var) = scopes.lookup_with_scope("x").unwrap();
        assert_eq!(id, 2);
        assert_eq!(var.ty, Type::String);
        assert_eq!(scopes.lookup_all("x").count(), 2);
    }

    #[test]
    fn test_global_scope_is_never_popped() {
        let mut scopes = ScopeStack::new();
        scopes.define(int("g", None), 1).unwrap();
        scopes.exit_scope();
        scopes.exit_scope();

        assert_eq!(scopes.current_scope(), 0);
        assert!(scopes.lookup("g").is_some());
    }

    #[test]
    fn test_assign_in_owning_scope() {
        let mut scopes = ScopeStack::new();
        scopes.define(int("g", None), 1).unwrap();
        scopes.enter_scope(ScopeKind::Method);

        assert!(scopes.assign_in(0, "g", "7".to_string()));
        assert_eq!(scopes.global().lookup_local("g").unwrap().value.as_deref(), Some("7"));
        assert!(!scopes.assign_in(1, "g", "8".to_string()));
    }
}
