use std::fmt;

/// 变量可声明的值类型
///
/// 类型之间没有继承关系，兼容性由语义层的规则表决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Double,
    String,
    Char,
    Boolean,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Double => "double",
            Type::String => "String",
            Type::Char => "char",
            Type::Boolean => "boolean",
        };
        write!(f, "{}", name)
    }
}
