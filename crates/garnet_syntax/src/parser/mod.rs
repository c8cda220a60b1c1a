//! Parser Module
//!
//! 逐行文法。每种行形状一套文法，输入是单行的词法单元序列

pub mod decl;
pub mod helpers;
pub mod stmt;

pub use helpers::ParserError;
pub use stmt::parse_block_header;

use crate::ast::{MethodDecl, Statement};
use crate::lexer::{tokenize, Token};
use chumsky::prelude::*;

/// 将一行 `;` 结尾的文本解析为声明、赋值或方法调用
///
/// 不匹配任何文法时返回 `None`
pub fn parse_statement(text: &str) -> Option<Statement> {
    let tokens = tokenize(text)?;
    parse_statement_tokens(tokens)
}

/// 解析已分词的语句
pub fn parse_statement_tokens(tokens: Vec<Token>) -> Option<Statement> {
    stmt::statement_parser().parse(tokens).ok()
}

/// 解析方法声明行
///
/// 方法名必须以字母开头
pub fn parse_method_decl(text: &str) -> Option<MethodDecl> {
    let tokens = tokenize(text)?;
    let decl = decl::method_decl_parser().parse(tokens).ok()?;

    if decl.name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        Some(decl)
    } else {
        None
    }
}
