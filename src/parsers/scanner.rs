//! # 行扫描器
//!
//! 对整段文本逐行扫描，提供 "窥视下一行" 和 "消费并前进" 两种操作，
//! 让各解析阶段可以向前读取固定行数（只向前，从不回看）。
//!
//! ## 依赖关系
//! - 被 `parsers/outcar.rs` 使用
//! - 无外部模块依赖

/// 行扫描器
#[derive(Debug)]
pub struct LineScanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(content: &'a str) -> Self {
        LineScanner {
            lines: content.lines().collect(),
            pos: 0,
        }
    }

    /// 查看下一行但不消费
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// 消费下一行并前进
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// 丢弃至多 n 行，返回实际丢弃的行数
    pub fn skip(&mut self, n: usize) -> usize {
        let skipped = n.min(self.lines.len() - self.pos);
        self.pos += skipped;
        skipped
    }

    /// 已消费的行数（即最近一行的 1 起行号）
    pub fn line_number(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_consume() {
        let mut scanner = LineScanner::new("a\nb\r\nc");
        assert_eq!(scanner.peek(), Some("a"));
        assert_eq!(scanner.next_line(), Some("a"));
        assert_eq!(scanner.line_number(), 1);
        assert_eq!(scanner.next_line(), Some("b"));
        assert_eq!(scanner.peek(), Some("c"));
        assert_eq!(scanner.next_line(), Some("c"));
        assert_eq!(scanner.next_line(), None);
        assert_eq!(scanner.line_number(), 3);
    }

    #[test]
    fn test_skip_stops_at_end() {
        let mut scanner = LineScanner::new("1\n2\n3\n");
        assert_eq!(scanner.skip(2), 2);
        assert_eq!(scanner.skip(5), 1);
        assert_eq!(scanner.peek(), None);
    }
}
