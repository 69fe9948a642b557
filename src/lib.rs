//! 规则式中文口语/方言规范化引擎
//!
//! 把口语、方言或误写的中文单次改写为规范普通话表述：
//! 给定一段输入，返回规范化文本，或说明无法规范化的结构性错误。
//!
//! ## 处理流程
//! 1. 输入校验（空串 / 纯问号）
//! 2. 保护区间标记（保留词 + 花括号字面量）并按区间分段
//! 3. 词表替换（仅可改写段）
//! 4. 上下文消歧（例外前瞻）
//! 5. 问句后缀归一 + 串尾问号剥除
//!
//! 未识别的方言形式原样放行；引擎无共享可变状态，可并发调用。

mod engine;
mod keywords;
mod protect;
mod rules;
mod translation;
mod types;

pub use engine::TranslationEngine;
pub use keywords::RESERVED_KEYWORDS;
pub use translation::Translation;
pub use types::{
    ProtectedSpan, Replacement, ReplacementReason, SpanOrigin, TranslateError, TranslationResult,
};
