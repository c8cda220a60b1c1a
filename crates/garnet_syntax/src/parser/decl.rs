//! Declaration Parser
//!
//! 声明解析：变量声明、方法声明

use super::helpers::{
    final_parser, ident_parser, initializer_parser, type_parser, ParserError,
};
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

/// 变量声明: `[final] TYPE a [= v] (, b [= v])* ;`
///
/// 逗号两侧都必须有声明项，前导或结尾的逗号都不合法
pub fn declaration_parser() -> impl Parser<Token, Declaration, Error = ParserError> + Clone {
    let declarator = ident_parser()
        .then(initializer_parser())
        .map(|(name, value)| Declarator { name, value });

    final_parser()
        .then(type_parser())
        .then(declarator.separated_by(just(Token::Comma)).at_least(1))
        .then_ignore(just(Token::Semicolon))
        .map(|((is_final, ty), declarators)| Declaration {
            is_final,
            ty,
            declarators,
        })
}

/// 方法声明: `void name ( [final] TYPE p (, [final] TYPE p)* ) {`
pub fn method_decl_parser() -> impl Parser<Token, MethodDecl, Error = ParserError> {
    let param = final_parser()
        .then(type_parser())
        .then(ident_parser())
        .then(initializer_parser())
        .map(|(((is_final, ty), name), default)| Param {
            is_final,
            ty,
            name,
            default,
        });

    just(Token::Void)
        .ignore_then(ident_parser())
        .then(
            param
                .separated_by(just(Token::Comma))
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .then_ignore(just(Token::LBrace))
        .then_ignore(end())
        .map(|(name, params)| MethodDecl { name, params })
}
