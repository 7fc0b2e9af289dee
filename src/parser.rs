//! 从模型的自由文本回复中提取三个带标签的字段
//!
//! 提示词要求 `ชนิดของคำ`、`หลักการจำแนก`、`ความหมายเบื้องต้น` 三项，
//! 但实际回复的标签、编号和分隔符并不固定。
//! 解析不会失败：无法识别的内容一律视为无法分类，并保留原始文本。

use regex::Regex;
use std::sync::OnceLock;

use crate::models::AnalysisResult;

/// 模型拒绝分类时使用的短语
pub const UNKNOWN_PHRASES: [&str; 3] = [
    "ไม่สามารถจำแนกชนิดของคำนี้ได้อย่างชัดเจน",
    "ไม่สามารถจำแนกชนิดของคำ",
    "ไม่สามารถจำแนกได้",
];

const UNKNOWN_MARKER: &str = "ไม่สามารถจำแนก";

const TYPE_KEYWORDS: [&str; 3] = ["ชนิดของคำ", "ระบุชนิดของคำ", "ประเภท"];
const PRINCIPLE_KEYWORDS: [&str; 3] = ["หลักการจำแนก", "หลักเกณฑ์", "เหตุผล"];
const MEANING_KEYWORDS: [&str; 2] = ["ความหมายเบื้องต้น", "ความหมาย"];

struct LabelPatterns {
    word_type: Regex,
    principle: Regex,
    meaning: Regex,
    list_marker: Regex,
}

static LABEL_PATTERNS: OnceLock<LabelPatterns> = OnceLock::new();

#[expect(clippy::expect_used, reason = "静态正则在编写时已确认有效")]
fn label_patterns() -> &'static LabelPatterns {
    LABEL_PATTERNS.get_or_init(|| LabelPatterns {
        word_type: Regex::new(r"(?i)(?:ชนิดของคำ|ระบุชนิดของคำ|ประเภทของคำ)[:\s]+([^\r\n\x{2028}\x{2029}]+)")
            .expect("type pattern is valid"),
        principle: Regex::new(r"(?i)(?:หลักการจำแนก|เหตุผล|หลักเกณฑ์)[:\s]+([^\r\n\x{2028}\x{2029}]+)")
            .expect("principle pattern is valid"),
        meaning: Regex::new(r"(?i)(?:ความหมายเบื้องต้น|ความหมาย)[:\s]+([^\r\n\x{2028}\x{2029}]+)")
            .expect("meaning pattern is valid"),
        list_marker: Regex::new(r"^\d+\)\s*").expect("list marker pattern is valid"),
    })
}

/// 将模型回复转换为 [`AnalysisResult`]
///
/// `raw_output` 始终为原始回复
pub fn parse_completion(content: &str) -> AnalysisResult {
    if UNKNOWN_PHRASES.iter().any(|phrase| content.contains(phrase)) {
        return AnalysisResult::unknown(content);
    }

    parse_labelled(content).unwrap_or_else(|| parse_lines(content))
}

// 三个标签都匹配时才采用正则结果。`.` 会匹配 `\r`，所以值用 `[^\r\n]` 限定在一行内
fn parse_labelled(content: &str) -> Option<AnalysisResult> {
    let patterns = label_patterns();
    let capture = |re: &Regex| {
        re.captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| patterns.list_marker.replace(m.as_str().trim(), "").into_owned())
    };

    Some(AnalysisResult {
        word_type: capture(&patterns.word_type)?,
        principle: capture(&patterns.principle)?,
        meaning: capture(&patterns.meaning)?,
        is_unknown: false,
        raw_output: Some(content.to_string()),
    })
}

// 逐行查找关键字，取冒号后的第一段
fn parse_lines(content: &str) -> AnalysisResult {
    let lines: Vec<&str> = content.lines().filter(|line| !line.trim().is_empty()).collect();

    let find_line = |keywords: &[&str]| -> String {
        lines
            .iter()
            .find(|line| keywords.iter().any(|keyword| line.contains(keyword)))
            .and_then(|line| line.split([':', '：']).nth(1))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    let word_type = find_line(&TYPE_KEYWORDS);
    let principle = find_line(&PRINCIPLE_KEYWORDS);
    let meaning = find_line(&MEANING_KEYWORDS);
    let is_unknown = word_type.is_empty() || word_type.contains(UNKNOWN_MARKER);

    AnalysisResult {
        word_type,
        principle,
        meaning,
        is_unknown,
        raw_output: Some(content.to_string()),
    }
}
