use logos::{Lexer, Logos};

/// 单行源码的词法单元
///
/// 字面量保留原始文本（含引号），语义层按原文做类型匹配
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    // --- 关键字 (Keywords) ---
    #[token("final")]
    Final,
    #[token("void")]
    Void,
    #[token("if")]
    If,
    #[token("while")]
    While,
    #[token("return")]
    Return,

    // 字面量关键字
    #[token("true")]
    True,
    #[token("false")]
    False,

    // --- 基础类型关键字 ---
    #[token("int")]
    TypeInt,
    #[token("double")]
    TypeDouble,
    #[token("String")]
    TypeString,
    #[token("boolean")]
    TypeBoolean,
    #[token("char")]
    TypeChar,

    // --- 符号 (Symbols) ---
    #[token("=")]
    Assign,
    #[token("||")]
    Or,
    #[token("&&")]
    And,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // --- 复杂数据 (Data) ---
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*|_[a-zA-Z0-9_]+", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Int(String),

    #[regex(r"-?[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Double(String),

    #[token("\"", lex_string)]
    Str(String),

    #[regex(r"'[^\n]'", |lex| lex.slice().to_string())]
    Char(String),
}

/// 字符串字面量：从开引号延伸到结束引号，中间可以出现 `"`
fn lex_string(lex: &mut Lexer<Token>) -> Option<String> {
    let close = closing_quote(lex.remainder())?;
    lex.bump(close + 1);
    Some(lex.slice().to_string())
}

/// 结束引号是第一个后面（可隔空白）紧跟 `,` `;` `)` 或行尾的 `"`；
/// 没有这样的引号时取下一个 `"`
fn closing_quote(rest: &str) -> Option<usize> {
    let mut fallback = None;
    for (index, _) in rest.match_indices('"') {
        let after = rest[index + 1..].trim_start();
        if after.is_empty() || after.starts_with([',', ';', ')']) {
            return Some(index);
        }
        fallback.get_or_insert(index);
    }
    fallback
}

/// 对一行文本做词法分析
///
/// 出现无法识别的字符时返回 `None`，这样的行不可能匹配任何语句语法
pub fn tokenize(text: &str) -> Option<Vec<Token>> {
    Token::lexer(text).collect::<Result<Vec<_>, _>>().ok()
}
