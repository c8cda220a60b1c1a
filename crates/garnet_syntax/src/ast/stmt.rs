use super::expr::Operand;
use super::types::Type;

/// 变量声明: `[final] TYPE a [= v], b [= v] ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub is_final: bool,
    pub ty: Type,
    /// 逗号分隔的各个声明项，至少一个
    pub declarators: Vec<Declarator>,
}

/// 单个声明项: `name` 或 `name = value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator {
    pub name: String,
    pub value: Option<Operand>,
}

/// 赋值: `name = value ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: Operand,
}

/// 方法调用: `name ( args ) ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Operand>,
}

/// 以 `;` 结尾的普通语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration(Declaration),
    Assignment(Assignment),
    Call(Call),
}

/// 方法声明: `void name ( [final] TYPE p, ... ) {`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<Param>,
}

/// 形参
///
/// `default` 只为报告“形参带初始值”而保留，合法的形参永远没有它
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub is_final: bool,
    pub ty: Type,
    pub name: String,
    pub default: Option<Operand>,
}

/// 条件块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    If,
    While,
}

/// 条件块头: `if ( condition ) {` / `while ( condition ) {`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub kind: BlockKind,
    /// 括号内的原始文本
    pub condition: String,
}
