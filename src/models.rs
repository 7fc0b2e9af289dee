use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 单词为空时的校验提示
pub const EMPTY_WORD_MESSAGE: &str = "กรุณากรอกคำที่ต้องการตรวจสอบ";

// POST /api/analyze 请求体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub word: String,
}

impl AnalyzeRequest {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    // 去掉首尾空白后不能为空
    pub fn validated_word(&self) -> Result<&str, AppError> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(AppError::validation(EMPTY_WORD_MESSAGE, "word"));
        }
        Ok(word)
    }
}

// 分析结果，字段名与前端约定一致
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "type")]
    pub word_type: String,
    pub principle: String,
    pub meaning: String,
    pub is_unknown: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl AnalysisResult {
    pub fn unknown(raw_output: impl Into<String>) -> Self {
        Self {
            is_unknown: true,
            raw_output: Some(raw_output.into()),
            ..Default::default()
        }
    }
}

// 数据库中的分析记录
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct WordAnalysisLog {
    pub id: i64,
    pub word: String,
    pub result: String,
    pub created_at: Option<NaiveDateTime>,
}

impl WordAnalysisLog {
    pub fn analysis(&self) -> serde_json::Result<AnalysisResult> {
        serde_json::from_str(&self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_word_trims() {
        let request = AnalyzeRequest::new("  แม่น้ำ \n");
        assert_eq!(request.validated_word().unwrap(), "แม่น้ำ");
    }

    #[test]
    fn test_empty_and_blank_words_rejected() {
        for word in ["", "   ", "\t\n"] {
            match AnalyzeRequest::new(word).validated_word() {
                Err(AppError::Validation { message, field }) => {
                    assert_eq!(message, EMPTY_WORD_MESSAGE);
                    assert_eq!(field.as_deref(), Some("word"));
                }
                other => panic!("expected validation error for {:?}, got {:?}", word, other),
            }
        }
    }

    #[test]
    fn test_missing_word_defaults_to_empty() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validated_word().is_err());
    }

    #[test]
    fn test_result_json_field_names() {
        let result = AnalysisResult {
            word_type: "คำประสม".to_string(),
            principle: "นำคำมูลสองคำมารวมกัน".to_string(),
            meaning: "ลำน้ำใหญ่".to_string(),
            is_unknown: false,
            raw_output: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "คำประสม",
                "principle": "นำคำมูลสองคำมารวมกัน",
                "meaning": "ลำน้ำใหญ่",
                "isUnknown": false,
            })
        );
    }

    #[test]
    fn test_unknown_result_keeps_raw_output() {
        let result = AnalysisResult::unknown("ไม่สามารถจำแนกได้");
        assert!(result.is_unknown);
        assert!(result.word_type.is_empty());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rawOutput"], "ไม่สามารถจำแนกได้");
    }
}
