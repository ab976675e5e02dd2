//! 关键词匹配 - 不区分大小写的纯子串包含

use tracing::info;

/// 匹配结果，`keywords` 保持配置顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: bool,
    pub keywords: Vec<String>,
}

/// 在语料中查找关键词
///
/// 语料与关键词都会转为小写后再比较，返回的关键词保留原始写法。
pub fn find_keywords<S: AsRef<str>>(corpus: &str, keywords: &[S]) -> MatchOutcome {
    let corpus = corpus.to_lowercase();

    let found: Vec<String> = keywords
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|keyword| corpus.contains(&keyword.to_lowercase()))
        .inspect(|keyword| info!(keyword = %keyword, "Keyword found"))
        .map(str::to_string)
        .collect();

    MatchOutcome {
        matched: !found.is_empty(),
        keywords: found,
    }
}
