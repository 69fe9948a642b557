//! 核心类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 保护区间来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanOrigin {
    /// 保留词命中
    ReservedKeyword,
    /// 花括号字面量占位符
    LiteralToken,
}

/// 保护区间（原文字节下标，左闭右开）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedSpan {
    /// 起始位置
    pub start: usize,
    /// 结束位置（不含）
    pub end: usize,
    /// 区间来源
    pub origin: SpanOrigin,
}

/// 分段：保护段与可改写段交替排列，按原文顺序
#[derive(Debug, Clone)]
pub struct Segment {
    /// 段内文本
    pub text: String,
    /// 保护来源；`None` 表示可改写
    pub origin: Option<SpanOrigin>,
}

impl Segment {
    /// 该段是否允许规则改写
    pub fn is_rewritable(&self) -> bool {
        self.origin.is_none()
    }
}

/// 替换记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    /// 原始文本
    pub original: String,
    /// 替换后文本
    pub replaced: String,
    /// 命中次数
    pub count: usize,
    /// 替换原因
    pub reason: ReplacementReason,
}

/// 替换原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementReason {
    /// 方言/错别字词表替换
    Lexical,
    /// 上下文消歧替换
    Disambiguation,
    /// 问句后缀归一
    QuestionSuffix,
    /// 串尾问号剥除
    TrailingPunctuation,
}

/// 翻译结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// 规范化后的文本
    pub text: String,
    /// 是否有改动
    pub changed: bool,
    /// 实际生效的替换记录
    pub applied: Vec<Replacement>,
}

impl TranslationResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String) -> Self {
        Self {
            text,
            changed: false,
            applied: Vec::new(),
        }
    }
}

/// 翻译失败原因
///
/// 仅两类结构性错误；其余输入一律尽力规范化，未识别的方言形式原样放行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslateError {
    /// 输入为空串
    EmptyInput,
    /// 输入（按空白修剪后）仅由问号组成
    QuestionMarkOnly,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::EmptyInput => write!(f, "empty string to translate"),
            TranslateError::QuestionMarkOnly => {
                write!(f, "translating a string only contains a question mark")
            }
        }
    }
}

impl std::error::Error for TranslateError {}
