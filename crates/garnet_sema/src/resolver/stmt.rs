use super::decl::declare;
use super::value::accept_value;
use crate::error::{VerifyError, VerifyResult};
use crate::method::MethodRegistry;
use crate::scope::ScopeStack;
use garnet_syntax::ast::{Assignment, Statement};

/// 方法体或块内的一条语句
///
/// 声明只准入当前作用域；赋值落到最近的同名绑定；
/// 调用用整个可见作用域栈解析实参。
pub fn resolve_statement(
    scopes: &mut ScopeStack,
    methods: &MethodRegistry,
    stmt: &Statement,
    line: usize,
) -> VerifyResult<()> {
    match stmt {
        Statement::Declaration(decl) => declare(scopes, decl, line).map(|_| ()),
        Statement::Assignment(assignment) => assign(scopes, assignment, line),
        Statement::Call(call) => methods.check_call(scopes, call, line),
    }
}

/// 赋值：找到由内向外第一个同名变量，校验新值后在其所属作用域内原地替换
pub fn assign(scopes: &mut ScopeStack, assignment: &Assignment, line: usize) -> VerifyResult<()> {
    let (owner, ty, is_final) = match scopes.lookup_with_scope(&assignment.name) {
        Some((owner, var)) => (owner, var.ty, var.is_final),
        None => {
            return Err(VerifyError::UndeclaredAssignment {
                name: assignment.name.clone(),
                line,
            })
        }
    };

    if is_final {
        return Err(VerifyError::FinalReassignment {
            name: assignment.name.clone(),
            line,
        });
    }

    let value = accept_value(scopes, ty, &assignment.value, line)?;
    log::trace!(
        "line {}: assign {} = {} (scope #{})",
        line,
        assignment.name,
        value,
        owner
    );
    scopes.assign_in(owner, &assignment.name, value);
    Ok(())
}
