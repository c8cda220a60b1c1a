//! Parser Helper Functions
//!
//! 辅助解析函数：标识符、类型、值

use crate::ast::{Literal, Operand, Type};
use crate::lexer::Token;
use chumsky::prelude::*;

pub type ParserError = Simple<Token>;

/// 解析标识符
pub fn ident_parser() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::Ident(ident) => ident }
}

/// 解析类型关键字
pub fn type_parser() -> impl Parser<Token, Type, Error = ParserError> + Clone {
    select! {
        Token::TypeInt => Type::Int,
        Token::TypeDouble => Type::Double,
        Token::TypeString => Type::String,
        Token::TypeBoolean => Type::Boolean,
        Token::TypeChar => Type::Char,
    }
}

/// 解析可选的 `final` 修饰符
pub fn final_parser() -> impl Parser<Token, bool, Error = ParserError> + Clone {
    just(Token::Final).or_not().map(|modifier| modifier.is_some())
}

/// 解析值：单个字面量或变量名
pub fn operand_parser() -> impl Parser<Token, Operand, Error = ParserError> + Clone {
    select! {
        Token::Ident(name) => Operand::Ident(name),
        Token::Int(text) => Operand::Literal(Literal::Int(text)),
        Token::Double(text) => Operand::Literal(Literal::Double(text)),
        Token::Str(text) => Operand::Literal(Literal::Str(text)),
        Token::Char(text) => Operand::Literal(Literal::Char(text)),
        Token::True => Operand::Literal(Literal::Bool(true)),
        Token::False => Operand::Literal(Literal::Bool(false)),
    }
}

/// 解析初始化部分 `= value`
pub fn initializer_parser() -> impl Parser<Token, Option<Operand>, Error = ParserError> + Clone {
    just(Token::Assign).ignore_then(operand_parser()).or_not()
}
