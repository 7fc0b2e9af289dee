use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

// 配置文件结构
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_completion_tokens: u32,
    pub temperature: f32,
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-5.1".to_string(),
            max_completion_tokens: 500,
            temperature: 0.3,
            request_timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub db_file: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_file: "thai_words.db".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `text` 或 `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Config {
    // 读取当前目录的 config.toml（可选），再用环境变量覆盖
    pub fn load() -> Result<Config> {
        let mut config = Self::load_file(Path::new("config.toml"))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    // 文件不存在时使用默认配置
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("配置文件 {} 无法读取: {}", path.display(), e))?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("配置文件解析失败: {}", e))?;
        Ok(config)
    }

    // 环境变量优先于配置文件
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(*key))
                .find(|value| !value.trim().is_empty())
        };

        if let Some(key) = first_set(&["AI_INTEGRATIONS_OPENAI_API_KEY", "OPENAI_API_KEY"]) {
            self.api.api_key = key;
        }
        if let Some(url) = first_set(&["AI_INTEGRATIONS_OPENAI_BASE_URL", "OPENAI_BASE_URL"]) {
            self.api.base_url = url;
        }
        if let Some(model) = first_set(&["OPENAI_MODEL"]) {
            self.api.model = model;
        }
        if let Some(host) = first_set(&["HOST"]) {
            self.server.host = host;
        }
        if let Some(port) = first_set(&["PORT"]) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT 环境变量无效 ({}): {}", port, e))?;
        }
        if let Some(db_file) = first_set(&["DATABASE_FILE"]) {
            self.database.db_file = db_file;
        }
        if let Some(format) = first_set(&["LOG_FORMAT"]) {
            self.logging.format = format;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.trim().is_empty() {
            anyhow::bail!(
                "缺少 API 密钥：请设置 AI_INTEGRATIONS_OPENAI_API_KEY 或在 config.toml 的 [api] 中配置 api_key"
            );
        }
        if !(0.0..=2.0).contains(&self.api.temperature) {
            anyhow::bail!("temperature 必须在 0 到 2 之间，当前为 {}", self.api.temperature);
        }
        Ok(())
    }
}
