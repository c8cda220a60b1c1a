use super::Verifier;
use crate::error::{VerifyError, VerifyResult};
use crate::resolver::declare;
use garnet_syntax::ast::Statement;
use garnet_syntax::parser::{parse_method_decl, parse_statement};
use garnet_syntax::{LineRecord, LineShape};

/// 第一遍：全局结构扫描
///
/// 每一行都会生成一条 [`LineRecord`]，块头与块尾记录的是变化前的深度。
pub fn scan_globals<S: AsRef<str>>(verifier: &mut Verifier, lines: &[S]) -> VerifyResult<()> {
    let mut depth = 0usize;

    for (index, text) in lines.iter().enumerate() {
        let text = text.as_ref();
        let number = index + 1;
        let shape = LineShape::classify(text).ok_or(VerifyError::IllegalLine { line: number })?;
        verifier
            .records
            .push(LineRecord::new(number, text, depth, shape));

        match shape {
            LineShape::Comment | LineShape::Blank => {}
            LineShape::Return => {
                if depth == 0 {
                    return Err(VerifyError::ReturnOutsideMethod { line: number });
                }
            }
            LineShape::Statement => {
                if depth == 0 {
                    global_statement(verifier, text, number)?;
                }
            }
            LineShape::BlockOpen => {
                if depth == 0 {
                    let decl = parse_method_decl(text)
                        .ok_or(VerifyError::MalformedMethodDecl { line: number })?;
                    verifier.methods.register(&decl, number)?;
                }
                depth += 1;
            }
            LineShape::BlockClose => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(VerifyError::UnbalancedBraces { line: number })?;
            }
        }
    }

    if depth != 0 {
        log::debug!("{} blocks left open at end of file", depth);
        return Err(VerifyError::UnbalancedBraces { line: lines.len() });
    }

    Ok(())
}

/// 全局作用域只接受变量声明
fn global_statement(verifier: &mut Verifier, text: &str, line: usize) -> VerifyResult<()> {
    match parse_statement(text) {
        Some(Statement::Declaration(decl)) => {
            let count = declare(&mut verifier.scopes, &decl, line)?;
            log::trace!("line {}: {} global(s) declared", line, count);
            Ok(())
        }
        _ => Err(VerifyError::IllegalGlobalStatement { line }),
    }
}
