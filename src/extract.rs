//! 词典页面字段提取
//!
//! 纯函数：输入渲染后的 HTML，输出五个字段。
//! 任何元素缺失都落到对应的占位值，本模块永不失败。

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::record::{
    HANJA_NOT_FOUND, MEANING_NOT_FOUND, RADICAL_MEANING_NOT_FOUND, RADICAL_NOT_FOUND,
    STROKE_COUNT_NOT_FOUND,
};
use crate::models::HanjaFields;

/// 部首分类标签文本
const RADICAL_LABEL: &str = "부수";
/// 总笔画分类标签文本
const STROKE_COUNT_LABEL: &str = "총 획수";
/// 笔画数的单位字
const STROKE_UNIT: char = '획';

/// 字段提取器，预编译选择器与正则
pub struct Extractor {
    headword_sel: Selector,
    meaning_sel: Selector,
    category_sel: Selector,
    span_sel: Selector,
    paren_re: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            headword_sel: Selector::parse("strong.highlight").unwrap(),
            meaning_sel: Selector::parse(".mean").unwrap(),
            category_sel: Selector::parse("div.cate").unwrap(),
            span_sel: Selector::parse("span").unwrap(),
            // 部首描述中第一个括号内的内容
            paren_re: Regex::new(r"\(([^)]*)\)").unwrap(),
        }
    }

    /// 从渲染后的 HTML 中提取全部字段
    pub fn extract(&self, html: &str) -> HanjaFields {
        let doc = Html::parse_document(html);

        let hanja = self
            .first_text(&doc, &self.headword_sel)
            .unwrap_or_else(|| HANJA_NOT_FOUND.to_string());

        let meaning = self
            .first_text(&doc, &self.meaning_sel)
            .unwrap_or_else(|| MEANING_NOT_FOUND.to_string());

        let (radical, radical_meaning) = self.extract_radical(&doc);
        let stroke_count = self.extract_stroke_count(&doc);

        HanjaFields {
            hanja,
            meaning,
            radical,
            radical_meaning,
            stroke_count,
        }
    }

    /// 第一个匹配元素的文本，去掉首尾空白；空文本视为缺失
    fn first_text(&self, doc: &Html, sel: &Selector) -> Option<String> {
        doc.select(sel)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    }

    /// 部首与部首训音
    ///
    /// 页面结构为 `<div class="cate">부수</div><div class="desc"><span>水</span>(물 수)</div>`，
    /// 部首取 desc 内第一个 span 的文本，部首训音取 desc 文本中第一个括号内的内容
    fn extract_radical(&self, doc: &Html) -> (String, String) {
        let desc = match self.category_desc(doc, RADICAL_LABEL) {
            Some(desc) => desc,
            None => {
                return (
                    RADICAL_NOT_FOUND.to_string(),
                    RADICAL_MEANING_NOT_FOUND.to_string(),
                )
            }
        };

        let radical = desc
            .select(&self.span_sel)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| RADICAL_NOT_FOUND.to_string());

        let radical_meaning = self
            .paren_re
            .captures(&element_text(desc))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| RADICAL_MEANING_NOT_FOUND.to_string());

        (radical, radical_meaning)
    }

    /// 总笔画：desc 文本中 '획' 之前的部分，保留单位字
    fn extract_stroke_count(&self, doc: &Html) -> String {
        let text = match self.category_desc(doc, STROKE_COUNT_LABEL) {
            Some(desc) => element_text(desc),
            None => return STROKE_COUNT_NOT_FOUND.to_string(),
        };

        match text.find(STROKE_UNIT) {
            Some(idx) => {
                let prefix = text[..idx].trim();
                if prefix.is_empty() {
                    STROKE_COUNT_NOT_FOUND.to_string()
                } else {
                    format!("{}{}", prefix, STROKE_UNIT)
                }
            }
            None => STROKE_COUNT_NOT_FOUND.to_string(),
        }
    }

    /// 找到标签文本恰好为 `label` 的 cate 元素，返回紧随其后的 desc 元素
    ///
    /// 标签存在但后继不是 desc 时按缺失处理
    fn category_desc<'a>(&self, doc: &'a Html, label: &str) -> Option<ElementRef<'a>> {
        doc.select(&self.category_sel)
            .find(|cate| element_text(*cate) == label)
            .and_then(|cate| cate.next_siblings().filter_map(ElementRef::wrap).next())
            .filter(|el| el.value().name() == "div" && has_class(el, "desc"))
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .map_or(false, |attr| attr.split_whitespace().any(|c| c == class))
}
