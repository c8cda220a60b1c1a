use super::value::accept_value;
use crate::error::{VerifyError, VerifyResult};
use crate::scope::ScopeStack;
use crate::variable::Variable;
use garnet_syntax::ast::{Declaration, Param};

/// 把一条声明的各个声明项依次准入当前作用域
///
/// 每一项按顺序检查：当前作用域重名、final 无值、值与类型兼容。
/// 前面的项准入后立即可见，`int a = 1, b = a;` 合法。
/// 返回准入的变量个数。
pub fn declare(scopes: &mut ScopeStack, decl: &Declaration, line: usize) -> VerifyResult<usize> {
    for declarator in &decl.declarators {
        if scopes.lookup_local(&declarator.name).is_some() {
            return Err(VerifyError::DuplicateVariable {
                name: declarator.name.clone(),
                line,
            });
        }

        let value = match &declarator.value {
            Some(operand) => Some(accept_value(scopes, decl.ty, operand, line)?),
            None if decl.is_final => {
                return Err(VerifyError::UninitializedFinal {
                    name: declarator.name.clone(),
                    line,
                });
            }
            None => None,
        };

        log::trace!(
            "line {}: declare {} {} = {:?}",
            line,
            decl.ty,
            declarator.name,
            value
        );
        scopes.define(
            Variable::new(declarator.name.clone(), decl.ty, value, decl.is_final),
            line,
        )?;
    }

    Ok(decl.declarators.len())
}

/// 方法声明的形参准入
///
/// 形参之间不能重名，也不能带初始值；准入后都是未赋值的变量，
/// final 形参不受“final 必须初始化”的限制。
pub fn admit_params(params: &[Param], line: usize) -> VerifyResult<Vec<Variable>> {
    let mut admitted: Vec<Variable> = Vec::with_capacity(params.len());

    for param in params {
        if admitted.iter().any(|var| var.name == param.name) {
            return Err(VerifyError::DuplicateVariable {
                name: param.name.clone(),
                line,
            });
        }
        if param.default.is_some() {
            return Err(VerifyError::ParameterWithInitializer {
                name: param.name.clone(),
                line,
            });
        }
        admitted.push(Variable::unassigned(
            param.name.clone(),
            param.ty,
            param.is_final,
        ));
    }

    Ok(admitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeKind;
    use garnet_syntax::ast::{Declarator, Literal, Operand, Type};

    fn decl(is_final: bool, ty: Type, items: &[(&str, Option<Operand>)]) -> Declaration {
        Declaration {
            is_final,
            ty,
            declarators: items
                .iter()
                .map(|(name, value)| Declarator {
                    name: name.to_string(),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    fn int(text: &str) -> Option<Operand> {
        Some(Operand::Literal(Literal::Int(text.to_string())))
    }

    #[test]
    fn test_declarators_see_earlier_entries() {
        let mut scopes = ScopeStack::new();
        let d = decl(
            false,
            Type::Int,
            &[("a", int("1")), ("b", Some(Operand::Ident("a".to_string()))), ("c", None)],
        );

        assert_eq!(declare(&mut scopes, &d, 1), Ok(3));
        assert_eq!(scopes.lookup("b").unwrap().value.as_deref(), Some("1"));
        assert!(!scopes.lookup("c").unwrap().is_assigned());
    }

    #[test]
    fn test_duplicate_in_same_declaration() {
        let mut scopes = ScopeStack::new();
        let d = decl(false, Type::Int, &[("a", None), ("a", int("2"))]);
        assert!(matches!(
            declare(&mut scopes, &d, 5),
            Err(VerifyError::DuplicateVariable { line: 5, .. })
        ));
    }

    #[test]
    fn test_uninitialized_final() {
        let mut scopes = ScopeStack::new();
        let d = decl(true, Type::Int, &[("x", None)]);
        assert_eq!(
            declare(&mut scopes, &d, 2),
            Err(VerifyError::UninitializedFinal {
                name: "x".to_string(),
                line: 2,
            })
        );
    }

    #[test]
    fn test_redeclare_in_nested_scope() {
        let mut scopes = ScopeStack::new();
        declare(&mut scopes, &decl(false, Type::Int, &[("x", int("1"))]), 1).unwrap();
        scopes.enter_scope(ScopeKind::Method);
        assert_eq!(
            declare(&mut scopes, &decl(false, Type::String, &[("x", None)]), 3),
            Ok(1)
        );
    }

    #[test]
    fn test_admit_params() {
        let param = |name: &str, default: Option<Operand>| Param {
            is_final: true,
            ty: Type::Double,
            name: name.to_string(),
            default,
        };

        let admitted = admit_params(&[param("a", None), param("b", None)], 1).unwrap();
        assert_eq!(admitted.len(), 2);
        assert!(admitted.iter().all(|var| !var.is_assigned() && var.is_final));

        assert!(matches!(
            admit_params(&[param("a", None), param("a", None)], 1),
            Err(VerifyError::DuplicateVariable { .. })
        ));
        assert!(matches!(
            admit_params(&[param("a", int("1"))], 1),
            Err(VerifyError::ParameterWithInitializer { .. })
        ));
    }
}
