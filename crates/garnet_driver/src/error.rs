//! Driver Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use garnet_diagnostics::{Diagnostic, Emitter};
use garnet_sema::{ErrorKind, VerifyError};
use std::io;
use thiserror::Error;

/// 驱动错误
#[derive(Debug, Error)]
pub enum DriverError {
    /// 源文件无法读取，校验尚未开始
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// 校验发现的第一个违规
    #[error("line {}: {}", .0.line(), .0)]
    Verification(#[from] VerifyError),
}

impl DriverError {
    /// 错误大类
    pub fn kind(&self) -> ErrorKind {
        match self {
            DriverError::Io(_) => ErrorKind::Io,
            DriverError::Verification(err) => err.kind(),
        }
    }

    /// 命令行约定的结论码：校验失败为 1，无法读取文件为 2
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Io(_) => 2,
            DriverError::Verification(_) => 1,
        }
    }

    /// 转换为诊断
    pub fn to_diagnostic(&self, file_path: Option<&str>) -> Diagnostic {
        match self {
            DriverError::Io(err) => {
                let diag = match file_path {
                    Some(path) => Diagnostic::error(format!("cannot read '{}': {}", path, err)),
                    None => Diagnostic::error(format!("IO error: {}", err)),
                };
                diag.suggest("check that the file exists and is readable")
            }
            DriverError::Verification(err) => {
                let diag = err.to_diagnostic();
                match file_path {
                    Some(path) => diag.with_note(format!("in {}", path)),
                    None => diag,
                }
            }
        }
    }

    /// 使用统一诊断系统输出错误
    ///
    /// 有源码且错误带行号时附带源码片段
    pub fn emit(
        &self,
        file_path: Option<&str>,
        source: Option<&str>,
        use_colors: bool,
    ) -> io::Result<()> {
        let emitter = if use_colors {
            Emitter::new()
        } else {
            Emitter::without_colors()
        };
        let diag = self.to_diagnostic(file_path);

        match source {
            Some(src) => emitter.emit_with_source(&diag, src),
            None => {
                emitter.emit(&diag);
                Ok(())
            }
        }
    }
}

/// 驱动结果类型
pub type DriverResult<T> = Result<T, DriverError>;
