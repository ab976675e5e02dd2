//! 正文提取 - 按优先级尝试一组选择器，使用第一个命中的
//!
//! 越具体的容器越优先，避免导航栏等模板文字造成误报；`body` 兜底保证总有结果。

use scraper::{ElementRef, Html, Node, Selector};
use tracing::{info, warn};

/// 一条提取策略：名称 + CSS 选择器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStrategy {
    pub name: &'static str,
    pub selector: &'static str,
}

/// 固定的优先级列表
pub const STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        name: "article_body",
        selector: r#"[itemprop="articleBody"]"#,
    },
    ExtractionStrategy {
        name: "article",
        selector: "article",
    },
    ExtractionStrategy {
        name: "content_class",
        selector: ".content",
    },
    ExtractionStrategy {
        name: "main",
        selector: "main",
    },
    ExtractionStrategy {
        name: "body",
        selector: "body",
    },
];

/// 不可见内容的标签
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// 提取来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Strategy(ExtractionStrategy),
    /// 没有策略命中，或第一个命中的策略没有文字，使用整个文档
    WholeDocument,
}

/// 小写后的搜索语料
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub source: ExtractionSource,
}

impl ExtractedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// 从 HTML 中提取搜索语料，永不失败
///
/// 在第一个匹配到元素的策略处停止；它的文字为空时直接改用整个文档。
/// 解析不了的选择器会被跳过并记录 warning；全文也为空时返回空语料。
pub fn extract(html: &str) -> ExtractedText {
    let document = Html::parse_document(html);

    if let Some(found) = first_matching_strategy(&document) {
        return found;
    }

    warn!("Using full page text");
    let text = normalize(&visible_text(document.root_element()));
    if text.is_empty() {
        warn!("Page has no visible text, keyword search will find nothing");
    }

    ExtractedText {
        text,
        source: ExtractionSource::WholeDocument,
    }
}

/// 第一个匹配到元素的策略；其文字为空时返回 None
fn first_matching_strategy(document: &Html) -> Option<ExtractedText> {
    for strategy in STRATEGIES {
        let selector = match Selector::parse(strategy.selector) {
            Ok(s) => s,
            Err(e) => {
                warn!(strategy = strategy.name, error = %e, "Skipping invalid selector");
                continue;
            }
        };

        let texts: Vec<String> = document.select(&selector).map(visible_text).collect();
        if texts.is_empty() {
            continue;
        }

        let text = normalize(&texts.join(" "));
        if text.is_empty() {
            warn!(strategy = strategy.name, "Matched elements have no text");
            return None;
        }

        info!(
            strategy = strategy.name,
            selector = strategy.selector,
            "Content found with selector"
        );
        return Some(ExtractedText {
            text,
            source: ExtractionSource::Strategy(*strategy),
        });
    }

    None
}

/// 元素下的可见文本（跳过 script/style 等）
fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if HIDDEN_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

/// 去掉首尾空白并转小写，内部空白保持原样
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
