//! Statement Parser
//!
//! 语句解析：声明、赋值、方法调用，以及条件块头

use super::decl::declaration_parser;
use super::helpers::{ident_parser, operand_parser, ParserError};
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

/// 赋值: `name = value ;`
pub fn assignment_parser() -> impl Parser<Token, Assignment, Error = ParserError> + Clone {
    ident_parser()
        .then_ignore(just(Token::Assign))
        .then(operand_parser())
        .then_ignore(just(Token::Semicolon))
        .map(|(name, value)| Assignment { name, value })
}

/// 方法调用: `name ( [v (, v)*] ) ;`
pub fn call_parser() -> impl Parser<Token, Call, Error = ParserError> + Clone {
    ident_parser()
        .then(
            operand_parser()
                .separated_by(just(Token::Comma))
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .then_ignore(just(Token::Semicolon))
        .map(|(name, args)| Call { name, args })
}

/// 以 `;` 结尾的语句，三种文法互不重叠
pub fn statement_parser() -> impl Parser<Token, Statement, Error = ParserError> {
    choice((
        declaration_parser().map(Statement::Declaration),
        assignment_parser().map(Statement::Assignment),
        call_parser().map(Statement::Call),
    ))
    .then_ignore(end())
}

/// 条件块头: `if ( ... ) {` / `while ( ... ) {`
///
/// 条件取关键字后的第一个 `(` 与 `{` 前最后一个 `)` 之间的原文，
/// 条件本身由语义层按原文校验
pub fn parse_block_header(text: &str) -> Option<BlockHeader> {
    let trimmed = text.trim();
    let (kind, rest) = if let Some(rest) = trimmed.strip_prefix("if") {
        (BlockKind::If, rest)
    } else if let Some(rest) = trimmed.strip_prefix("while") {
        (BlockKind::While, rest)
    } else {
        return None;
    };

    let inner = rest
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix('{')?
        .trim_end()
        .strip_suffix(')')?;

    Some(BlockHeader {
        kind,
        condition: inner.to_string(),
    })
}
