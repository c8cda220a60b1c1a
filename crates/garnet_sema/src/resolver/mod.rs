//! Statement Resolver
//!
//! 把一条已解析的语句落到作用域栈上：
//! - 声明：准入当前作用域 ([`decl`])
//! - 赋值：找到最近的绑定并原地替换 ([`stmt`])
//! - 值：字面量或变量名能否作为某类型的值 ([`value`])

pub mod decl;
pub mod stmt;
pub mod value;

pub use decl::{admit_params, declare};
pub use stmt::{assign, resolve_statement};
pub use value::accept_value;
