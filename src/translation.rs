//! 翻译请求
//!
//! 持有待译文本与绑定的保留词表。默认绑定进程级词表
//! （共享预编译引擎）；测试可显式覆盖词表。

use lazy_static::lazy_static;

use crate::engine::TranslationEngine;
use crate::types::{TranslateError, TranslationResult};

lazy_static! {
    /// 进程级默认引擎，跨请求共享保留词自动机
    static ref DEFAULT_ENGINE: TranslationEngine = TranslationEngine::default();
}

/// 一次翻译请求
///
/// 构造后不可变；`translate` 可重复调用，结果恒定
pub struct Translation {
    /// 待译原文
    to_translate: String,
    /// 显式覆盖的引擎；`None` 表示使用进程级默认引擎
    engine: Option<TranslationEngine>,
}

impl Translation {
    /// 绑定默认保留词表的请求
    pub fn new(to_translate: impl Into<String>) -> Self {
        Self {
            to_translate: to_translate.into(),
            engine: None,
        }
    }

    /// 以显式保留词表构造（测试用覆盖）
    pub fn with_reserved_keywords(to_translate: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            to_translate: to_translate.into(),
            engine: Some(TranslationEngine::new(keywords)),
        }
    }

    /// 待译原文
    pub fn to_translate(&self) -> &str {
        &self.to_translate
    }

    /// 绑定的保留词表
    pub fn reserved_keywords(&self) -> &[String] {
        self.engine().reserved_keywords()
    }

    /// 按下标读取保留词
    pub fn reserved_keyword(&self, index: usize) -> Option<&str> {
        self.engine().reserved_keywords().get(index).map(String::as_str)
    }

    /// 执行翻译，返回规范化文本
    pub fn translate(&self) -> Result<String, TranslateError> {
        self.translate_result().map(|result| result.text)
    }

    /// 执行翻译，返回带替换记录的完整结果
    pub fn translate_result(&self) -> Result<TranslationResult, TranslateError> {
        self.engine().translate(&self.to_translate)
    }

    fn engine(&self) -> &TranslationEngine {
        self.engine.as_ref().unwrap_or(&DEFAULT_ENGINE)
    }
}
