//! Span - 源码位置信息
//!
//! 校验以行为单位报告错误，渲染源码片段时再把行号换算成字节范围

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// 计算第 `line` 行（从 1 开始）在源码中的字节范围，不含换行符
///
/// 行号越界时返回 `None`
pub fn line_span(source: &str, line: usize) -> Option<Span> {
    if line == 0 {
        return None;
    }

    let mut start = 0;
    for (index, text) in source.split('\n').enumerate() {
        if index + 1 == line {
            let content = text.strip_suffix('\r').unwrap_or(text);
            return Some(start..start + content.len());
        }
        start += text.len() + 1;
    }

    None
}
