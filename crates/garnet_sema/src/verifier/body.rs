use super::Verifier;
use crate::condition::validate_condition;
use crate::error::{VerifyError, VerifyResult};
use crate::method::{Method, MethodRegistry};
use crate::resolver::resolve_statement;
use crate::scope::{ScopeKind, ScopeStack};
use garnet_syntax::parser::{parse_block_header, parse_statement};
use garnet_syntax::{LineRecord, LineShape};

/// 第二遍：按登记顺序逐个遍历方法体
pub fn check_bodies(verifier: &mut Verifier) -> VerifyResult<()> {
    let Verifier {
        scopes,
        methods,
        records,
    } = verifier;
    let methods: &MethodRegistry = methods;

    for method in methods.iter() {
        walk_method(scopes, methods, records, method)?;
    }

    Ok(())
}

/// 从方法声明的下一行开始遍历，直到方法体的 `}`
///
/// `returned` 记录最近一条有意义的行是否是方法自身深度上的 `return;`
fn walk_method(
    scopes: &mut ScopeStack,
    methods: &MethodRegistry,
    records: &[LineRecord],
    method: &Method,
) -> VerifyResult<()> {
    log::debug!("checking method '{}' from line {}", method.name, method.start_line);

    scopes.enter_scope(ScopeKind::Method);
    for param in &method.params {
        scopes.define(param.as_argument(), method.start_line)?;
    }

    let mut nesting = 1usize;
    let mut returned = false;

    // start_line 从 1 开始，正好是下一行的下标
    for record in records.iter().skip(method.start_line) {
        let line = record.number;

        match record.shape {
            LineShape::Comment | LineShape::Blank => {}
            LineShape::Return => {
                if record.depth == 1 {
                    returned = true;
                }
            }
            LineShape::Statement => {
                returned = false;
                let stmt =
                    parse_statement(&record.text).ok_or(VerifyError::IllegalStatement { line })?;
                resolve_statement(scopes, methods, &stmt, line)?;
            }
            LineShape::BlockOpen => {
                returned = false;
                let header =
                    parse_block_header(&record.text).ok_or(VerifyError::IllegalBlock { line })?;
                validate_condition(scopes, &header.condition, line)?;
                log::trace!("line {}: enter {:?} block", line, header.kind);
                scopes.enter_scope(ScopeKind::Block);
                nesting += 1;
            }
            LineShape::BlockClose => {
                if nesting == 1 && !returned {
                    return Err(VerifyError::MissingReturn {
                        method: method.name.clone(),
                        line,
                    });
                }

                scopes.exit_scope();
                nesting -= 1;
                if nesting == 0 {
                    break;
                }
            }
        }
    }

    Ok(())
}
