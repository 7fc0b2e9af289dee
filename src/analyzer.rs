use crate::api::ApiClient;
use crate::config::Config;
use crate::database::DatabaseManager;
use crate::error::{AppError, Result};
use crate::models::*;
use crate::parser::parse_completion;
use crate::prompt::build_classification_prompt;

pub struct WordClassifier {
    api_client: ApiClient,
    db_manager: DatabaseManager,
    pub config: Config,
}

impl WordClassifier {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let api_client = ApiClient::new(&config.api)?;
        let db_manager = DatabaseManager::new(&config.database).await?;

        Ok(Self::with_parts(config, api_client, db_manager))
    }

    pub fn with_parts(config: Config, api_client: ApiClient, db_manager: DatabaseManager) -> Self {
        WordClassifier {
            api_client,
            db_manager,
            config,
        }
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db_manager
    }

    // 校验 -> 构造提示词 -> 调用模型 -> 解析 -> 记录
    pub async fn analyze_word(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        let word = request.validated_word()?;

        tracing::info!("🔍 分析单词: {}", word);

        let prompt = build_classification_prompt(word);
        let content = self
            .api_client
            .complete(&prompt)
            .await
            .map_err(AppError::Api)?;

        let result = parse_completion(&content);
        if result.is_unknown {
            tracing::warn!("⚠️  无法确定词类: {}", word);
        }

        let log = self
            .db_manager
            .log_analysis(word, &result)
            .await
            .map_err(AppError::Database)?;

        tracing::info!(
            id = log.id,
            is_unknown = result.is_unknown,
            "💾 分析结果已保存: {} -> {}",
            word,
            result.word_type
        );

        Ok(result)
    }
}
