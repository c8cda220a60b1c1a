//! Garnet Verifier Driver
//!
//! 驱动模块：读取源文件、切分为行、调用语义校验

pub mod error;

pub use error::{DriverError, DriverResult};
pub use garnet_sema::{ErrorKind, Verification, VerifyError};

use std::fs;
use std::path::Path;

/// 读取源文件
pub fn read_source(path: impl AsRef<Path>) -> DriverResult<String> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// 校验源码文本
///
/// 按 `\n` / `\r\n` 切分为行，行号从 1 开始
///
/// # Example
/// ```
/// use garnet_driver::verify;
///
/// let source = "int x = 5;\nvoid main() {\n  x = 6;\n  return;\n}\n";
/// let summary = verify(source).unwrap();
/// assert_eq!(summary.method_count, 1);
/// ```
pub fn verify(source: &str) -> DriverResult<Verification> {
    let lines: Vec<&str> = source.lines().collect();
    let result = garnet_sema::verify(&lines);

    match &result {
        Ok(summary) => log::debug!(
            "verified {} lines: {} methods, {} globals",
            summary.line_count,
            summary.method_count,
            summary.global_count
        ),
        Err(err) => log::debug!("verification failed ({}) at line {}", err.kind(), err.line()),
    }

    Ok(result?)
}

/// 从文件校验
pub fn verify_file(path: impl AsRef<Path>) -> DriverResult<Verification> {
    let source = read_source(path)?;
    verify(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_line_endings() {
        let source = "int a = 1;\r\nvoid f() {\r\n  a = 2;\r\n  return;\r\n}\r\n";
        let summary = verify(source).unwrap();
        assert_eq!(summary.line_count, 5);
        assert_eq!(summary.global_count, 1);
    }

    #[test]
    fn test_error_carries_line() {
        let source = "int a = 1;\nint a = 2;\n";
        match verify(source) {
            Err(DriverError::Verification(err)) => {
                assert_eq!(err.line(), 2);
                assert_eq!(err.kind(), ErrorKind::Declaration);
            }
            other => panic!("Expected verification error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = verify_file("/definitely/not/here.gt");
        assert!(matches!(result, Err(DriverError::Io(_))));
    }
}
