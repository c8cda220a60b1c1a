//! Condition Validator
//!
//! `if` / `while` 条件按原文校验：先按 `||` 切分，再按 `&&` 切分，
//! 得到的每个原子项都必须是布尔值。

use crate::error::{VerifyError, VerifyResult};
use crate::scope::ScopeStack;
use crate::types::TypeInfo;
use garnet_syntax::lexer::{tokenize, Token};

const OR: &str = "||";
const AND: &str = "&&";

/// 校验条件块括号内的原文
pub fn validate_condition(scopes: &ScopeStack, condition: &str, line: usize) -> VerifyResult<()> {
    if is_dangling(condition) {
        return Err(VerifyError::DanglingOperator {
            condition: condition.trim().to_string(),
            line,
        });
    }

    for segment in condition.split(OR) {
        // `a || && b` 这类写法切分后的片段以运算符开头
        if is_dangling(segment) {
            return Err(VerifyError::ConsecutiveOperators {
                condition: condition.trim().to_string(),
                line,
            });
        }

        for term in segment.split(AND).map(str::trim) {
            if !is_boolean_term(scopes, term) {
                return Err(VerifyError::NotBooleanCondition {
                    term: term.to_string(),
                    line,
                });
            }
        }
    }

    Ok(())
}

/// 以运算符开头或结尾（忽略两端空白）
fn is_dangling(text: &str) -> bool {
    let trimmed = text.trim();
    [OR, AND]
        .iter()
        .any(|op| trimmed.starts_with(op) || trimmed.ends_with(op))
}

/// 原子项：`true` / `false`、数值字面量，或任一可见作用域中已赋值的 int/double/boolean 变量
fn is_boolean_term(scopes: &ScopeStack, term: &str) -> bool {
    match tokenize(term).as_deref() {
        Some([Token::True | Token::False]) => true,
        Some([Token::Int(_) | Token::Double(_)]) => true,
        Some([Token::Ident(name)]) => scopes
            .lookup_all(name)
            .any(|var| var.is_assigned() && var.ty.is_condition_type()),
        _ => false,
    }
}
