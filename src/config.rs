use crate::llm_client::GEMINI_API_BASE;
use crate::model_family::is_gemini_model;
use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm_params: LLMParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMParams {
    #[serde(default)]
    pub provider: Provider,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    #[default]
    Gemini,
    Anthropic,
    OpenRouter,
    Ollama,
    Custom,
}

impl Provider {
    pub fn default_api_base(&self) -> &'static str {
        match self {
            Provider::OpenAI => "https://api.openai.com/v1",
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai/",
            Provider::Anthropic => "https://api.anthropic.com/v1",
            Provider::OpenRouter => "https://openrouter.ai/api/v1",
            Provider::Ollama => "http://localhost:11434/v1",
            Provider::Custom => "",
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The model name, if this config should go through the native Gemini adapter.
    pub fn native_gemini_model(&self) -> anyhow::Result<&str> {
        let params = &self.llm_params;
        if params.provider != Provider::Gemini {
            bail!("provider {:?} is not served by the native Gemini adapter", params.provider);
        }
        if !is_gemini_model(&params.model) {
            bail!("model {} is not a Gemini model", params.model);
        }
        Ok(&params.model)
    }

    /// Base URL for native `streamGenerateContent` calls.
    ///
    /// The OpenAI-compatible Gemini endpoint (`.../v1beta/openai/`) maps back to
    /// the native base it sits under.
    pub fn native_api_base(&self) -> String {
        let configured = self
            .llm_params
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(GEMINI_API_BASE);
        let trimmed = configured.trim_end_matches('/');
        trimmed.strip_suffix("/openai").unwrap_or(trimmed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", yaml).unwrap();
        file
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            "llm_params:\n  provider: gemini\n  model: gemini-3-flash-preview\n  api_key: abc\n  temperature: 0.4\n  max_output_tokens: 2048\n",
        );
        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.llm_params.provider, Provider::Gemini);
        assert_eq!(config.llm_params.temperature, Some(0.4));
        assert_eq!(config.llm_params.max_output_tokens, Some(2048));
        assert_eq!(config.native_gemini_model().unwrap(), "gemini-3-flash-preview");
        assert_eq!(config.native_api_base(), GEMINI_API_BASE);
    }

    #[test]
    fn test_native_api_base_normalization() {
        let file = write_config(&format!(
            "llm_params:\n  provider: gemini\n  model: gemini-2.5-flash\n  api_key: abc\n  api_base: {}\n",
            Provider::Gemini.default_api_base()
        ));
        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.native_api_base(), "https://generativelanguage.googleapis.com/v1beta");

        let file = write_config(
            "llm_params:\n  model: gemini-2.5-flash\n  api_base: http://127.0.0.1:8080/\n",
        );
        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.native_api_base(), "http://127.0.0.1:8080");
        assert!(config.llm_params.api_key.is_empty());
    }

    #[test]
    fn test_non_gemini_configs_are_rejected() {
        let file = write_config("llm_params:\n  provider: openai\n  model: gpt-4o\n  api_key: abc\n");
        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert!(config.native_gemini_model().is_err());
        assert_eq!(config.llm_params.provider.default_api_base(), "https://api.openai.com/v1");

        let file = write_config("llm_params:\n  provider: gemini\n  model: gpt-4o\n");
        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert!(config.native_gemini_model().is_err());
    }
}
