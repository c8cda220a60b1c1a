//! Garnet Semantic Verification
//!
//! 语义校验模块，负责：
//! - 值/类型模型与兼容性规则 ([`types`])
//! - 变量与作用域栈 ([`variable`], [`scope`])
//! - 语句落地：声明、赋值、取值 ([`resolver`])
//! - 方法注册与调用检查 ([`method`])
//! - 条件块的布尔条件检查 ([`condition`])
//! - 两遍扫描的校验驱动 ([`verifier`])
//!
//! 校验是 fail-fast 的：第一个违规就是整个文件的结论。

pub mod condition;
pub mod error;
pub mod method;
pub mod resolver;
pub mod scope;
pub mod types;
pub mod variable;
pub mod verifier;

// 重新导出核心类型
pub use error::{ErrorKind, VerifyError, VerifyResult};
pub use method::{Method, MethodRegistry};
pub use scope::{Scope, ScopeId, ScopeKind, ScopeStack};
pub use types::TypeInfo;
pub use variable::Variable;
pub use verifier::{Verification, Verifier};

/// 校验一个文件的全部行
///
/// # Errors
///
/// 返回遇到的第一个违规
pub fn verify<S: AsRef<str>>(lines: &[S]) -> VerifyResult<Verification> {
    Verifier::new().verify(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r#"// globals
int count = 0;
final double rate = 1.5;
String name;
boolean flag = true, other = 3;

void update(int n, final String label) {
  double total = n;
  count = n;
  name = label;
  if (flag && total || 0) {
    char c = 'x';
    while (count) {
      count = 5;
    }
  }
  report(count, label);
  return;
}

void report(double value, String text) {
  boolean ok = value;
  return;
}
"#;

    fn lines(source: &str) -> Vec<&str> {
        source.lines().collect()
    }

    #[test]
    fn test_full_program_passes() {
        let result = verify(&lines(PROGRAM)).unwrap();
        assert_eq!(result.method_count, 2);
        assert_eq!(result.global_count, 5);
        assert_eq!(result.line_count, PROGRAM.lines().count());
    }

    #[test]
    fn test_empty_file_passes() {
        let empty: [&str; 0] = [];
        assert_eq!(
            verify(&empty),
            Ok(Verification {
                line_count: 0,
                method_count: 0,
                global_count: 0,
            })
        );
    }

    #[test]
    fn test_forward_call() {
        // 方法在第一遍全部登记，可以调用后面声明的方法
        let source = ["void a() {", "b(1);", "return;", "}", "void b(int x) {", "return;", "}"];
        assert!(verify(&source).is_ok());
    }

    #[test]
    fn test_unassigned_global_in_condition() {
        let source = ["int g;", "void a() {", "if (g) {", "}", "return;", "}"];
        assert_eq!(
            verify(&source),
            Err(VerifyError::NotBooleanCondition {
                term: "g".to_string(),
                line: 3,
            })
        );
    }

    #[test]
    fn test_final_parameter_cannot_be_reassigned() {
        let source = ["void a(final int x) {", "x = 2;", "return;", "}"];
        assert_eq!(
            verify(&source),
            Err(VerifyError::FinalReassignment {
                name: "x".to_string(),
                line: 2,
            })
        );
    }

    #[test]
    fn test_parameter_may_be_reassigned() {
        let source = ["void a(int x) {", "x = 2;", "return;", "}"];
        assert!(verify(&source).is_ok());
    }

    #[test]
    fn test_global_assigned_in_method_stays_assigned() {
        let source = [
            "int g;",
            "void a() {",
            "g = 1;",
            "return;",
            "}",
            "void b() {",
            "int copy = g;",
            "return;",
            "}",
        ];
        assert!(verify(&source).is_ok());
    }
}
