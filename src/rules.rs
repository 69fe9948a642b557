//! 规则表定义与应用
//!
//! 词表替换、上下文消歧、问句后缀族，全部表驱动：
//! 新增规则只加表项，不加控制流。

use crate::types::{Replacement, ReplacementReason, Segment};

/// 方言/错别字 → 标准词
///
/// 按声明顺序应用，后序规则见到前序输出；纯子串替换，非正则
pub const LEXICAL_RULES: &[(&str, &str)] = &[
    ("咋", "怎么"),
    ("冲气", "充气"),
    ("甚么", "什么"),
    ("啥", "什么"),
];

/// 上下文消歧规则
pub struct DisambiguationRule {
    /// 歧义形
    pub ambiguous: &'static str,
    /// 更正形
    pub corrected: &'static str,
    /// 例外前瞻：紧随命中出现时不改写
    pub exception: &'static str,
}

/// 同音/形近歧义消解表
pub const DISAMBIGUATION_RULES: &[DisambiguationRule] = &[
    // "吵饭"通常是"炒饭"的误写，但"吵饭做的…"里"吵"作动词成立
    DisambiguationRule {
        ambiguous: "吵饭",
        corrected: "炒饭",
        exception: "做的",
    },
];

/// 问句后缀族 → 规范后缀
///
/// 仅匹配串尾。覆盖面按已观察到的宾语名词收录，扩充只需追加表项；
/// 各表项尾字互异，声明顺序不影响匹配结果
pub const QUESTION_SUFFIXES: &[(&str, &str)] = &[
    ("是什么玩意儿", "是什么"),
    ("是啥玩意儿", "是什么"),
    ("是什么玩意", "是什么"),
    ("是啥玩意", "是什么"),
    ("是什么东西", "是什么"),
    ("是啥东西", "是什么"),
];

/// 对可改写段应用词表替换
pub fn apply_lexical(segments: &mut [Segment], applied: &mut Vec<Replacement>) {
    for &(pattern, replacement) in LEXICAL_RULES {
        let mut count = 0;
        for seg in segments.iter_mut().filter(|s| s.is_rewritable()) {
            let hits = seg.text.matches(pattern).count();
            if hits > 0 {
                seg.text = seg.text.replace(pattern, replacement);
                count += hits;
            }
        }
        if count > 0 {
            applied.push(Replacement {
                original: pattern.to_string(),
                replaced: replacement.to_string(),
                count,
                reason: ReplacementReason::Lexical,
            });
        }
    }
}

/// 对可改写段应用消歧规则
///
/// 命中后检查同段内紧随文本：等于例外前瞻则保留原形
pub fn apply_disambiguation(segments: &mut [Segment], applied: &mut Vec<Replacement>) {
    for rule in DISAMBIGUATION_RULES {
        let mut count = 0;
        for seg in segments.iter_mut().filter(|s| s.is_rewritable()) {
            let (text, hits) = rewrite_with_lookahead(&seg.text, rule);
            if hits > 0 {
                seg.text = text;
                count += hits;
            }
        }
        if count > 0 {
            applied.push(Replacement {
                original: rule.ambiguous.to_string(),
                replaced: rule.corrected.to_string(),
                count,
                reason: ReplacementReason::Disambiguation,
            });
        }
    }
}

/// 自左向右扫描替换，带例外前瞻
fn rewrite_with_lookahead(text: &str, rule: &DisambiguationRule) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut hits = 0;
    let mut pos = 0;
    while let Some(rel) = text[pos..].find(rule.ambiguous) {
        let at = pos + rel;
        let after = at + rule.ambiguous.len();
        out.push_str(&text[pos..at]);
        if text[after..].starts_with(rule.exception) {
            out.push_str(rule.ambiguous);
        } else {
            out.push_str(rule.corrected);
            hits += 1;
        }
        pos = after;
    }
    out.push_str(&text[pos..]);
    (out, hits)
}
