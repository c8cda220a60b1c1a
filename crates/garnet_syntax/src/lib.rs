//! Garnet Syntax
//!
//! 逐行的语法层：
//! - 行形状分类 ([`line`])
//! - 单行词法分析 ([`lexer`], logos)
//! - 各形状的文法 ([`parser`], chumsky)

pub mod ast;
pub mod lexer;
pub mod line;
pub mod parser;

pub use line::{LineRecord, LineShape};

#[cfg(test)]
mod tests {
    use crate::lexer::{tokenize, Token};
    use logos::Logos;

    #[test]
    fn test_lexer_basic() {
        let code = "final int a = -10;";
        let mut lexer = Token::lexer(code);

        assert_eq!(lexer.next(), Some(Ok(Token::Final)));
        assert_eq!(lexer.next(), Some(Ok(Token::TypeInt)));
        assert_eq!(lexer.next(), Some(Ok(Token::Ident("a".to_string()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Assign)));
        assert_eq!(lexer.next(), Some(Ok(Token::Int("-10".to_string()))));
        assert_eq!(lexer.next(), Some(Ok(Token::Semicolon)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_lexer_literals() {
        assert_eq!(
            tokenize("2.50 'c' \"hi there\" true"),
            Some(vec![
                Token::Double("2.50".to_string()),
                Token::Char("'c'".to_string()),
                Token::Str("\"hi there\"".to_string()),
                Token::True,
            ])
        );
    }

    #[test]
    fn test_lexer_string_with_inner_quotes() {
        assert_eq!(
            tokenize("s = \"say \"hi\"\";"),
            Some(vec![
                Token::Ident("s".to_string()),
                Token::Assign,
                Token::Str("\"say \"hi\"\"".to_string()),
                Token::Semicolon,
            ])
        );
        // 逗号后的下一个字符串是独立的字面量
        assert_eq!(
            tokenize("f(\"a\", \"b, c\")"),
            Some(vec![
                Token::Ident("f".to_string()),
                Token::LParen,
                Token::Str("\"a\"".to_string()),
                Token::Comma,
                Token::Str("\"b, c\"".to_string()),
                Token::RParen,
            ])
        );
        assert_eq!(tokenize("\"open"), None);
    }

    #[test]
    fn test_lexer_identifiers() {
        assert_eq!(tokenize("_x1"), Some(vec![Token::Ident("_x1".to_string())]));
        assert_eq!(
            tokenize("integer"),
            Some(vec![Token::Ident("integer".to_string())])
        );
        assert_eq!(tokenize("String"), Some(vec![Token::TypeString]));
        // 单独的下划线不是合法标识符
        assert_eq!(tokenize("_"), None);
    }

    #[test]
    fn test_lexer_rejects_unknown_characters() {
        assert_eq!(tokenize("a + b"), None);
        assert_eq!(tokenize("5."), None);
        assert_eq!(tokenize("'ab'"), None);
    }

    #[test]
    fn test_lexer_condition_operators() {
        assert_eq!(
            tokenize("a||b && c"),
            Some(vec![
                Token::Ident("a".to_string()),
                Token::Or,
                Token::Ident("b".to_string()),
                Token::And,
                Token::Ident("c".to_string()),
            ])
        );
    }
}
