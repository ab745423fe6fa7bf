use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt;
use tokio::sync::Mutex;

use pirabel_core::{CompletionModel, CompletionRequest, Error, Result};

/// Backend that replays queued responses and records every request it saw.
/// An empty queue answers with a transport error.
#[derive(Default)]
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl fmt::Debug for ScriptedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedModel").finish()
    }
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(texts: impl IntoIterator<Item = String>) -> Self {
        Self {
            responses: Mutex::new(texts.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn push_failure(&self, message: impl Into<String>) {
        self.responses.lock().await.push_back(Err(Error::Completion(message.into())));
    }

    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.requests.lock().await.push(request.clone());
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(Error::Completion("no scripted response left".to_string())))
    }
}
