use crate::error::{VerifyError, VerifyResult};
use crate::scope::ScopeStack;
use crate::types::TypeInfo;
use garnet_syntax::ast::{Operand, Type};

/// 校验 `operand` 能否作为 `target` 类型的值，返回要保存的原始文本
///
/// 字面量按类型的字面量文法检查；变量名在整个可见作用域栈中由内向外解析，
/// 必须已赋值且类型兼容。
pub fn accept_value(
    scopes: &ScopeStack,
    target: Type,
    operand: &Operand,
    line: usize,
) -> VerifyResult<String> {
    match operand {
        Operand::Literal(literal) => {
            if target.accepts_literal(literal) {
                Ok(literal.text())
            } else {
                Err(VerifyError::TypeMismatch {
                    expected: target,
                    found: literal.text(),
                    line,
                })
            }
        }
        Operand::Ident(name) => {
            let var = scopes
                .lookup(name)
                .ok_or_else(|| VerifyError::UndefinedVariable {
                    name: name.clone(),
                    line,
                })?;

            let Some(value) = &var.value else {
                return Err(VerifyError::UnassignedVariable {
                    name: name.clone(),
                    line,
                });
            };

            if !target.accepts(var.ty) {
                return Err(VerifyError::IncompatibleVariable {
                    name: name.clone(),
                    expected: target,
                    found: var.ty,
                    line,
                });
            }

            Ok(value.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeKind;
    use crate::variable::Variable;
    use garnet_syntax::ast::Literal;

    fn lit_int(text: &str) -> Operand {
        Operand::Literal(Literal::Int(text.to_string()))
    }

    fn ident(name: &str) -> Operand {
        Operand::Ident(name.to_string())
    }

    #[test]
    fn test_literal_values() {
        let scopes = ScopeStack::new();
        assert_eq!(accept_value(&scopes, Type::Double, &lit_int("5"), 1), Ok("5".to_string()));
        assert_eq!(
            accept_value(&scopes, Type::String, &lit_int("5"), 4),
            Err(VerifyError::TypeMismatch {
                expected: Type::String,
                found: "5".to_string(),
                line: 4,
            })
        );
    }

    #[test]
    fn test_identifier_values() {
        let mut scopes = ScopeStack::new();
        scopes
            .define(Variable::new("i", Type::Int, Some("3".to_string()), false), 1)
            .unwrap();
        scopes
            .define(Variable::unassigned("u", Type::Int, false), 2)
            .unwrap();
        scopes.enter_scope(ScopeKind::Method);

        // 外层作用域的变量同样可见，int 可拓宽为 double
        assert_eq!(accept_value(&scopes, Type::Double, &ident("i"), 3), Ok("3".to_string()));
        assert!(matches!(
            accept_value(&scopes, Type::Char, &ident("i"), 3),
            Err(VerifyError::IncompatibleVariable { found: Type::Int, .. })
        ));
        assert!(matches!(
            accept_value(&scopes, Type::Int, &ident("u"), 3),
            Err(VerifyError::UnassignedVariable { .. })
        ));
        assert!(matches!(
            accept_value(&scopes, Type::Int, &ident("nope"), 3),
            Err(VerifyError::UndefinedVariable { .. })
        ));
    }

    #[test]
    fn test_no_narrowing_from_double() {
        let mut scopes = ScopeStack::new();
        scopes
            .define(Variable::new("d", Type::Double, Some("1.5".to_string()), false), 1)
            .unwrap();

        assert!(accept_value(&scopes, Type::Boolean, &ident("d"), 2).is_ok());
        assert!(accept_value(&scopes, Type::Int, &ident("d"), 2).is_err());
    }
}
