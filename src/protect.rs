//! 保护区间计算与分段
//!
//! 标记保留词命中与花括号字面量的区间，再按区间把原文切分为
//! 保护段 / 可改写段交替序列。替换规则只作用于可改写段，
//! 分段完成后不再有下标重映射。

use aho_corasick::{AhoCorasick, MatchKind};

use crate::types::{ProtectedSpan, Segment, SpanOrigin};

/// 保留词保护器（预编译自动机，可复用）
pub struct ReservedSpanProtector {
    automaton: AhoCorasick,
}

impl ReservedSpanProtector {
    /// 基于保留词表构建
    ///
    /// 跨词条重叠按最左最长优先消解；同一词条的多次命中
    /// 自左向右逐个消费，互不重叠
    pub fn new(keywords: &[String]) -> Self {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(keywords)
            .expect("保留词自动机构建失败");
        Self { automaton }
    }

    /// 标记保留词命中区间
    pub fn detect(&self, text: &str) -> Vec<ProtectedSpan> {
        self.automaton
            .find_iter(text)
            .map(|m| ProtectedSpan {
                start: m.start(),
                end: m.end(),
                origin: SpanOrigin::ReservedKeyword,
            })
            .collect()
    }
}

/// 花括号字面量保护器
///
/// `{` 与最近的 `}` 之间（含定界符）整体保护，内容不作解释。
/// 无闭合的 `{` 不保护任何内容，按普通字符交给替换规则。
pub struct LiteralTokenProtector;

impl LiteralTokenProtector {
    /// 标记字面量区间
    pub fn detect(text: &str) -> Vec<ProtectedSpan> {
        let mut spans = Vec::new();
        let mut pos = 0;
        while let Some(open_rel) = text[pos..].find('{') {
            let open = pos + open_rel;
            let Some(close_rel) = text[open + 1..].find('}') else {
                break;
            };
            let end = open + 1 + close_rel + 1;
            spans.push(ProtectedSpan {
                start: open,
                end,
                origin: SpanOrigin::LiteralToken,
            });
            pos = end;
        }
        spans
    }
}

/// 合并两类区间并切分原文
///
/// 字面量区间先行；与之重叠的保留词命中被丢弃
/// （不同来源的区间不得重叠，定界符的逐字节保证更强）
pub fn segment(
    text: &str,
    reserved: Vec<ProtectedSpan>,
    literal: Vec<ProtectedSpan>,
) -> Vec<Segment> {
    let mut spans = literal;
    for span in reserved {
        let overlaps = spans.iter().any(|s| span.start < s.end && s.start < span.end);
        if !overlaps {
            spans.push(span);
        }
    }
    spans.sort_by_key(|s| s.start);

    let mut segments = Vec::new();
    let mut last_end = 0;
    for span in &spans {
        if span.start > last_end {
            segments.push(Segment {
                text: text[last_end..span.start].to_string(),
                origin: None,
            });
        }
        segments.push(Segment {
            text: text[span.start..span.end].to_string(),
            origin: Some(span.origin),
        });
        last_end = span.end;
    }
    if last_end < text.len() {
        segments.push(Segment {
            text: text[last_end..].to_string(),
            origin: None,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protector(keywords: &[&str]) -> ReservedSpanProtector {
        let keywords: Vec<String> = keywords.iter().map(|s| s.to_string()).collect();
        ReservedSpanProtector::new(&keywords)
    }

    #[test]
    fn test_detect_reserved_keyword() {
        let p = protector(&["耗子尾汁"]);
        let spans = p.detect("我劝你耗子尾汁");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].origin, SpanOrigin::ReservedKeyword);
        assert_eq!(&"我劝你耗子尾汁"[spans[0].start..spans[0].end], "耗子尾汁");
    }

    #[test]
    fn test_detect_leftmost_longest() {
        // "年轻人不讲武德" 包含 "不讲武德"，整句命中时取长词条
        let p = protector(&["不讲武德", "年轻人不讲武德"]);
        let text = "年轻人不讲武德";
        let spans = p.detect(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, text.len());
    }

    #[test]
    fn test_detect_repeated_occurrences() {
        let p = protector(&["武德"]);
        let spans = p.detect("武德武德");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].end <= spans[1].start);
    }

    #[test]
    fn test_detect_empty_keyword_set() {
        let p = protector(&[]);
        assert!(p.detect("发生甚么事了").is_empty());
    }

    #[test]
    fn test_literal_token_basic() {
        let spans = LiteralTokenProtector::detect("{k@#219}发生甚么事了");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, "{k@#219}".len());
        assert_eq!(spans[0].origin, SpanOrigin::LiteralToken);
    }

    #[test]
    fn test_literal_token_unclosed_protects_nothing() {
        assert!(LiteralTokenProtector::detect("前缀{没有闭合").is_empty());
    }

    #[test]
    fn test_literal_token_nearest_closing() {
        // 最左 "{" 配最近的 "}"，嵌套不展开
        let text = "{a{b}c}";
        let spans = LiteralTokenProtector::detect(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "{a{b}");
    }

    #[test]
    fn test_literal_token_multiple() {
        let spans = LiteralTokenProtector::detect("{a}和{b}");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_segment_alternation() {
        let text = "{k@#219}发生甚么事了是啥意思";
        let literal = LiteralTokenProtector::detect(text);
        let reserved = protector(&["发生甚么事了"]).detect(text);
        let segments = segment(text, reserved, literal);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "{k@#219}");
        assert_eq!(segments[0].origin, Some(SpanOrigin::LiteralToken));
        assert_eq!(segments[1].text, "发生甚么事了");
        assert_eq!(segments[1].origin, Some(SpanOrigin::ReservedKeyword));
        assert_eq!(segments[2].text, "是啥意思");
        assert!(segments[2].is_rewritable());

        // 重组恒等于原文
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_segment_reserved_inside_token_dropped() {
        // 字面量区间优先，与之重叠的保留词命中被丢弃
        let text = "{耗子尾汁}";
        let literal = LiteralTokenProtector::detect(text);
        let reserved = protector(&["耗子尾汁"]).detect(text);
        let segments = segment(text, reserved, literal);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].origin, Some(SpanOrigin::LiteralToken));
    }

    #[test]
    fn test_segment_fully_reserved_input() {
        let text = "发生甚么事了";
        let reserved = protector(&["发生甚么事了"]).detect(text);
        let segments = segment(text, reserved, Vec::new());

        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_rewritable());
    }

    #[test]
    fn test_segment_no_protection() {
        let segments = segment("咋给轮胎冲气", Vec::new(), Vec::new());
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_rewritable());
    }
}
