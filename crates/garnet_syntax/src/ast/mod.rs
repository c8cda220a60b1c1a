pub mod expr;
pub mod stmt;
pub mod types;

pub use expr::{Literal, Operand};
pub use stmt::{
    Assignment, BlockHeader, BlockKind, Call, Declaration, Declarator, MethodDecl, Param,
    Statement,
};
pub use types::Type;
