//! 翻译引擎
//!
//! 组合输入校验、保护分段、词表替换、上下文消歧与问句归一。
//! 引擎可复用：保留词自动机在构造时预编译，之后的调用共享只读状态，
//! 可跨线程并发使用。

use crate::keywords::RESERVED_KEYWORDS;
use crate::protect::{self, LiteralTokenProtector, ReservedSpanProtector};
use crate::rules;
use crate::types::{Replacement, ReplacementReason, Segment, TranslateError, TranslationResult};

/// 翻译引擎（可复用，预编译保留词自动机）
pub struct TranslationEngine {
    /// 绑定的保留词表
    reserved_keywords: Vec<String>,
    /// 保留词保护器
    reserved_protector: ReservedSpanProtector,
}

impl TranslationEngine {
    /// 基于给定保留词表创建引擎
    ///
    /// 词表可为空：此时仅花括号字面量受保护
    pub fn new(reserved_keywords: Vec<String>) -> Self {
        let reserved_protector = ReservedSpanProtector::new(&reserved_keywords);
        Self {
            reserved_keywords,
            reserved_protector,
        }
    }

    /// 绑定的保留词表
    pub fn reserved_keywords(&self) -> &[String] {
        &self.reserved_keywords
    }

    /// 规范化一段输入
    ///
    /// 纯函数：相同输入与相同词表恒得相同输出。
    /// 空串与纯问号输入返回结构性错误，其余输入尽力规范化
    pub fn translate(&self, input: &str) -> Result<TranslationResult, TranslateError> {
        if input.is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        if Self::is_question_mark_only(input) {
            return Err(TranslateError::QuestionMarkOnly);
        }

        // 1. 计算保护区间并分段
        let literal = LiteralTokenProtector::detect(input);
        let reserved = self.reserved_protector.detect(input);
        let mut segments = protect::segment(input, reserved, literal);
        tracing::debug!(
            protected = segments.iter().filter(|s| !s.is_rewritable()).count(),
            segments = segments.len(),
            "protection pass done"
        );

        let mut applied = Vec::new();

        // 2. 词表替换（仅可改写段）
        rules::apply_lexical(&mut segments, &mut applied);

        // 3. 上下文消歧（仅可改写段）
        rules::apply_disambiguation(&mut segments, &mut applied);

        // 4. 重组全文，并换算保护区间在结果串中的落点
        let (mut text, protected) = Self::reassemble(&segments);

        // 5. 问句归一：串尾后缀族折叠 + 串尾问号剥除
        Self::canonicalize_question(&mut text, &protected, &mut applied);

        let changed = text != input;
        tracing::debug!(applied = applied.len(), changed, "translate done");

        Ok(TranslationResult {
            text,
            changed,
            applied,
        })
    }

    /// 判断输入（按空白修剪后）是否仅由问号组成
    fn is_question_mark_only(input: &str) -> bool {
        let trimmed = input.trim();
        !trimmed.is_empty() && trimmed.chars().all(|c| c == '?' || c == '？')
    }

    /// 拼接分段，返回结果串及其中的保护字节区间
    fn reassemble(segments: &[Segment]) -> (String, Vec<(usize, usize)>) {
        let mut text = String::new();
        let mut protected = Vec::new();
        for seg in segments {
            let start = text.len();
            text.push_str(&seg.text);
            if !seg.is_rewritable() {
                protected.push((start, text.len()));
            }
        }
        (text, protected)
    }

    /// 串尾问句归一
    ///
    /// 先折叠后缀族，再剥除串尾问号；两步都不得触碰保护区间
    fn canonicalize_question(
        text: &mut String,
        protected: &[(usize, usize)],
        applied: &mut Vec<Replacement>,
    ) {
        for &(suffix, canonical) in rules::QUESTION_SUFFIXES {
            if !text.ends_with(suffix) {
                continue;
            }
            let start = text.len() - suffix.len();
            if !overlaps_protected(protected, start, text.len()) {
                text.truncate(start);
                text.push_str(canonical);
                applied.push(Replacement {
                    original: suffix.to_string(),
                    replaced: canonical.to_string(),
                    count: 1,
                    reason: ReplacementReason::QuestionSuffix,
                });
            }
            break;
        }

        // 后缀折叠只动串尾的可改写区域，保护区间落点不受影响
        let mut tail_start = text.len();
        for (idx, ch) in text.char_indices().rev() {
            let is_question_mark = ch == '?' || ch == '？';
            if is_question_mark && !overlaps_protected(protected, idx, idx + ch.len_utf8()) {
                tail_start = idx;
            } else {
                break;
            }
        }
        if tail_start < text.len() {
            let stripped = text[tail_start..].to_string();
            let count = stripped.chars().count();
            text.truncate(tail_start);
            applied.push(Replacement {
                original: stripped,
                replaced: String::new(),
                count,
                reason: ReplacementReason::TrailingPunctuation,
            });
        }
    }
}

impl Default for TranslationEngine {
    fn default() -> Self {
        Self::new(RESERVED_KEYWORDS.clone())
    }
}

fn overlaps_protected(protected: &[(usize, usize)], start: usize, end: usize) -> bool {
    protected.iter().any(|&(s, e)| start < e && s < end)
}
