//! 默认保留词表
//!
//! 进程级只读词表：词条一旦在输入中命中即整体受保护，
//! 任何替换规则不得改写。顺序即下标，只在表尾追加。

use lazy_static::lazy_static;

/// 默认保留词条（按声明顺序）
const DEFAULT_RESERVED_KEYWORDS: &[&str] = &[
    "年轻人不讲武德",
    "不讲武德",
    "发生甚么事了",
    "耗子尾汁",
    "我大意了啊没有闪",
    "大意了啊",
    "闪电五连鞭",
    "接化发",
    "浑元形意太极门",
    "四两拨千斤",
    "传统功夫点到为止",
    "点到为止",
    "武林要以和为贵",
    "以和为贵",
    "要讲武德",
    "偷袭我这个六十九岁的老同志",
    "这好吗这不好",
    "我劝这位年轻人耗子尾汁",
    "好好反思",
    "骗好人",
    "九十多公斤的英国大力士",
    "有备而来",
    "训练有素",
];

lazy_static! {
    /// 默认保留词表（惰性一次性初始化，此后只读）
    pub static ref RESERVED_KEYWORDS: Vec<String> = DEFAULT_RESERVED_KEYWORDS
        .iter()
        .map(|s| s.to_string())
        .collect();
}
