use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::DatabaseConfig;
use crate::models::*;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        // 创建数据库文件路径
        let db_path = std::env::current_dir()?.join(&config.db_file);
        let db_url = format!("sqlite:{}", db_path.display());

        tracing::info!("💾 连接数据库: {}", db_path.display());

        // 如果数据库文件不存在，先创建一个空文件
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::File::create(&db_path)
                .with_context(|| format!("无法创建数据库文件 {}", db_path.display()))?;
            tracing::info!("✨ 创建新数据库文件: {}", db_path.display());
        }

        let pool = SqlitePool::connect(&db_url).await?;

        let manager = DatabaseManager { pool };
        manager.initialize_tables().await?;

        Ok(manager)
    }

    // 内存数据库只能使用单个连接，否则每个连接各自一份数据
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let manager = DatabaseManager { pool };
        manager.initialize_tables().await?;

        Ok(manager)
    }

    async fn initialize_tables(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS word_analyses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL,
                result TEXT NOT NULL,
                created_at DATETIME DEFAULT (datetime('now'))
            )
            "#
        ).execute(&self.pool).await?;

        Ok(())
    }

    // 记录一次分析，每次调用恰好插入一行
    pub async fn log_analysis(&self, word: &str, result: &AnalysisResult) -> Result<WordAnalysisLog> {
        let payload = serde_json::to_string(result)?;

        let log = sqlx::query_as::<_, WordAnalysisLog>(
            "INSERT INTO word_analyses (word, result) VALUES (?, ?) RETURNING id, word, result, created_at"
        )
        .bind(word)
        .bind(&payload)
        .fetch_one(&self.pool)
        .await
        .context("写入分析记录失败")?;

        Ok(log)
    }

    pub async fn count_analyses(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM word_analyses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    // 最新的记录在前
    pub async fn get_recent_analyses(&self, limit: i64) -> Result<Vec<WordAnalysisLog>> {
        let logs = sqlx::query_as::<_, WordAnalysisLog>(
            "SELECT id, word, result, created_at FROM word_analyses ORDER BY id DESC LIMIT ?"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
