use std::sync::Arc;

use pirabel_core::{CompletionModel, Error, Result};

use crate::Config;

pub mod dummy;
pub mod gemini;
pub mod scripted;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;
pub use scripted::ScriptedModel;

pub fn available_models() -> &'static [&'static str] {
    &["gemini", "dummy"]
}

pub fn create_model(config: &Config) -> Result<Arc<dyn CompletionModel>> {
    match config.backend.trim().to_ascii_lowercase().as_str() {
        "gemini" => Ok(Arc::new(GeminiModel::new(config.api_key.clone(), &config.base_url)?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Completion(format!(
            "Unknown model backend '{}'. Available models: {}",
            other,
            available_models().join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_by_name() {
        let model = create_model(&Config::dummy()).unwrap();
        assert_eq!(model.name(), "Dummy");

        let config = Config {
            api_key: Some("key".to_string()),
            ..Config::default()
        };
        assert_eq!(create_model(&config).unwrap().name(), "Gemini");
    }

    #[test]
    fn test_gemini_requires_key() {
        let err = create_model(&Config::default()).unwrap_err();
        assert!(err.to_string().contains("API key is required"));
    }

    #[test]
    fn test_unknown_backend() {
        let config = Config {
            backend: "ollama".to_string(),
            ..Config::default()
        };
        let err = create_model(&config).unwrap_err();
        assert!(err.to_string().contains("gemini, dummy"));
    }
}
