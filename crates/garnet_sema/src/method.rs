//! Method Registry
//!
//! 方法只能在全局声明，按名字唯一（不支持重载），登记后整个文件可见。

use crate::error::{VerifyError, VerifyResult};
use crate::resolver::{accept_value, admit_params};
use crate::scope::ScopeStack;
use crate::variable::Variable;
use garnet_syntax::ast::{Call, MethodDecl};

/// 已登记的方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// 形参，登记时都是未赋值的
    pub params: Vec<Variable>,
    /// 方法声明所在行（从 1 开始）
    pub start_line: usize,
}

/// 方法注册表，按声明顺序保存
#[derive(Debug, Default)]
pub struct MethodRegistry {
    methods: Vec<Method>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个方法声明
    pub fn register(&mut self, decl: &MethodDecl, start_line: usize) -> VerifyResult<&Method> {
        if self.get(&decl.name).is_some() {
            return Err(VerifyError::DuplicateMethod {
                name: decl.name.clone(),
                line: start_line,
            });
        }

        let params = admit_params(&decl.params, start_line)?;
        log::debug!(
            "register method '{}' ({} params) at line {}",
            decl.name,
            params.len(),
            start_line
        );

        self.methods.push(Method {
            name: decl.name.clone(),
            params,
            start_line,
        });
        Ok(&self.methods[self.methods.len() - 1])
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// 校验一次方法调用
    ///
    /// 实参个数必须与形参一致；每个实参按位置当作赋给对应形参的值来检查，
    /// 变量名在调用处的可见作用域中解析。只检查，不产生任何绑定。
    pub fn check_call(&self, scopes: &ScopeStack, call: &Call, line: usize) -> VerifyResult<()> {
        let method = self
            .get(&call.name)
            .ok_or_else(|| VerifyError::UndefinedMethod {
                name: call.name.clone(),
                line,
            })?;

        if method.params.len() != call.args.len() {
            return Err(VerifyError::ArgumentCountMismatch {
                name: call.name.clone(),
                expected: method.params.len(),
                found: call.args.len(),
                line,
            });
        }

        for (index, (param, arg)) in method.params.iter().zip(&call.args).enumerate() {
            accept_value(scopes, param.ty, arg, line).map_err(|err| match err {
                VerifyError::TypeMismatch { found, .. } => VerifyError::ArgumentTypeMismatch {
                    name: call.name.clone(),
                    position: index + 1,
                    expected: param.ty,
                    found,
                    line,
                },
                VerifyError::IncompatibleVariable { name, .. } => {
                    VerifyError::ArgumentTypeMismatch {
                        name: call.name.clone(),
                        position: index + 1,
                        expected: param.ty,
                        found: name,
                        line,
                    }
                }
                other => other,
            })?;
        }

        Ok(())
    }
}
