//! 类型兼容性规则
//!
//! 五种值类型之间没有子类型关系，兼容性是一张规则表：
//!
//! | 目标类型 | 接受的字面量 | 接受的变量类型 |
//! |---|---|---|
//! | int | int | int |
//! | double | int, double | int, double |
//! | boolean | true/false, int, double | boolean, int, double |
//! | char | 单引号内一个字符 | char |
//! | String | 双引号内任意文本 | String |

use garnet_syntax::ast::{Literal, Type};

/// 类型信息查询 Trait
///
/// 集中所有与类型相关的判断，避免在各处散落 match
pub trait TypeInfo {
    /// 是否是数值类型 (int, double)
    fn is_numeric(&self) -> bool;

    /// 字面量能否作为该类型的值
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_sema::types::TypeInfo;
    /// use garnet_syntax::ast::{Literal, Type};
    ///
    /// assert!(Type::Double.accepts_literal(&Literal::Int("5".to_string())));
    /// assert!(Type::Boolean.accepts_literal(&Literal::Double("3.5".to_string())));
    /// assert!(!Type::String.accepts_literal(&Literal::Int("5".to_string())));
    /// ```
    fn accepts_literal(&self, literal: &Literal) -> bool;

    /// `source` 类型变量的值能否赋给该类型
    ///
    /// 同类型总是可以；int、double 可以拓宽为 double 或 boolean，不允许收窄
    fn accepts(&self, source: Type) -> bool;

    /// 该类型的已赋值变量能否出现在 if/while 条件中
    fn is_condition_type(&self) -> bool;
}

impl TypeInfo for Type {
    fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Double)
    }

    fn accepts_literal(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (Type::Int, Literal::Int(_)) => true,
            (Type::Double, lit) => lit.is_numeric(),
            (Type::Boolean, Literal::Bool(_)) => true,
            (Type::Boolean, lit) => lit.is_numeric(),
            (Type::Char, Literal::Char(_)) => true,
            (Type::String, Literal::Str(_)) => true,
            _ => false,
        }
    }

    fn accepts(&self, source: Type) -> bool {
        *self == source || (matches!(self, Type::Double | Type::Boolean) && source.is_numeric())
    }

    fn is_condition_type(&self) -> bool {
        matches!(self, Type::Int | Type::Double | Type::Boolean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> Literal {
        Literal::Int(text.to_string())
    }

    fn double(text: &str) -> Literal {
        Literal::Double(text.to_string())
    }

    #[test]
    fn test_numeric_literals_widen() {
        assert!(Type::Int.accepts_literal(&int("-4")));
        assert!(!Type::Int.accepts_literal(&double("4.0")));
        assert!(Type::Double.accepts_literal(&int("5")));
        assert!(Type::Double.accepts_literal(&double("5.25")));
        assert!(Type::Boolean.accepts_literal(&int("0")));
        assert!(Type::Boolean.accepts_literal(&double("3.5")));
        assert!(Type::Boolean.accepts_literal(&Literal::Bool(false)));
    }

    #[test]
    fn test_text_literals_do_not_cross() {
        let ch = Literal::Char("'a'".to_string());
        let s = Literal::Str("\"a\"".to_string());

        assert!(Type::Char.accepts_literal(&ch));
        assert!(!Type::Char.accepts_literal(&s));
        assert!(Type::String.accepts_literal(&s));
        assert!(!Type::String.accepts_literal(&ch));
        assert!(!Type::String.accepts_literal(&int("5")));
        assert!(!Type::Int.accepts_literal(&Literal::Bool(true)));
    }

    #[test]
    fn test_variable_compatibility_table() {
        let all = [Type::Int, Type::Double, Type::String, Type::Char, Type::Boolean];
        for target in all {
            for source in all {
                let expected = target == source
                    || (matches!(target, Type::Double | Type::Boolean)
                        && matches!(source, Type::Int | Type::Double));
                assert_eq!(target.accepts(source), expected, "{} <- {}", target, source);
            }
        }
        // 不允许收窄
        assert!(!Type::Int.accepts(Type::Double));
        assert!(!Type::Int.accepts(Type::Boolean));
        assert!(!Type::Double.accepts(Type::Boolean));
    }

    #[test]
    fn test_condition_types() {
        assert!(Type::Int.is_condition_type());
        assert!(Type::Double.is_condition_type());
        assert!(Type::Boolean.is_condition_type());
        assert!(!Type::String.is_condition_type());
        assert!(!Type::Char.is_condition_type());
    }
}
