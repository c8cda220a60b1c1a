//! Line Classifier
//!
//! 每一行物理源码恰好属于一种形状，与所在作用域无关。
//! 声明、赋值、调用是 [`LineShape::Statement`] 的子文法，只在需要时再细分。

/// 行形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// `//` 开头（必须从第一列开始）
    Comment,
    /// 空行或只含空白
    Blank,
    /// `return ;`
    Return,
    /// 单独的 `}`
    BlockClose,
    /// 以 `{` 结尾
    BlockOpen,
    /// 以 `;` 结尾
    Statement,
}

impl LineShape {
    /// 对一行文本分类，按注释、空行、return、块尾、块头、语句的顺序匹配
    ///
    /// 不属于任何形状时返回 `None`
    pub fn classify(text: &str) -> Option<Self> {
        let trimmed = text.trim();

        if text.starts_with("//") {
            Some(Self::Comment)
        } else if trimmed.is_empty() {
            Some(Self::Blank)
        } else if is_bare_return(trimmed) {
            Some(Self::Return)
        } else if trimmed == "}" {
            Some(Self::BlockClose)
        } else if trimmed.ends_with('{') {
            Some(Self::BlockOpen)
        } else if text.trim_end().len() > 1 && trimmed.ends_with(';') {
            Some(Self::Statement)
        } else {
            None
        }
    }
}

fn is_bare_return(trimmed: &str) -> bool {
    trimmed
        .strip_prefix("return")
        .is_some_and(|rest| rest.trim_start() == ";")
}

/// 第一遍扫描为每一行生成的记录，第二遍按行号直接取用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// 行号（从 1 开始）
    pub number: usize,
    pub text: String,
    /// 该行所处的嵌套深度：0 为全局，1 为方法体内，≥2 为嵌套块内。
    /// 块头和块尾记录的是进入/离开之前的深度
    pub depth: usize,
    pub shape: LineShape,
}

impl LineRecord {
    pub fn new(number: usize, text: impl Into<String>, depth: usize, shape: LineShape) -> Self {
        Self {
            number,
            text: text.into(),
            depth,
            shape,
        }
    }
}
