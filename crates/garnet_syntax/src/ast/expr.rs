use std::fmt;

/// 字面量，保留源码中的原始文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `-?\d+`
    Int(String),
    /// `-?\d+.\d+`
    Double(String),
    /// `true` / `false`
    Bool(bool),
    /// 单引号内恰好一个字符，含引号
    Char(String),
    /// 双引号内任意文本，含引号
    Str(String),
}

impl Literal {
    /// 原始文本
    pub fn text(&self) -> String {
        match self {
            Literal::Int(text)
            | Literal::Double(text)
            | Literal::Char(text)
            | Literal::Str(text) => text.clone(),
            Literal::Bool(value) => value.to_string(),
        }
    }

    /// 是否是数值字面量 (int / double)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Literal::Int(_) | Literal::Double(_))
    }
}

/// 赋值、初始化或实参位置上的值：一个字面量或一个变量名
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(Literal),
    Ident(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(lit) => write!(f, "{}", lit.text()),
            Operand::Ident(name) => write!(f, "{}", name),
        }
    }
}
