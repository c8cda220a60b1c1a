//! Variable Definitions

use garnet_syntax::ast::Type;

/// 变量
///
/// `value` 保存最近一次赋值的原始字面量文本，`None` 表示已声明未赋值。
/// 形参在方法体内视为已赋值，但其值在校验期未知，记为空文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
    pub value: Option<String>,
    pub is_final: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: Type, value: Option<String>, is_final: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
            is_final,
        }
    }

    /// 声明但未赋值的变量（也是方法登记时形参的形态）
    pub fn unassigned(name: impl Into<String>, ty: Type, is_final: bool) -> Self {
        Self::new(name, ty, None, is_final)
    }

    /// 形参进入方法体作用域时的副本：已赋值、值未知
    pub fn as_argument(&self) -> Self {
        Self {
            value: Some(String::new()),
            ..self.clone()
        }
    }

    /// 是否持有值
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// 以新值替换当前绑定
    pub fn assign(&mut self, value: String) {
        self.value = Some(value);
    }
}
