//! Mock Completion Service for Testing
//!
//! Replays canned answers and records every request it receives.

use async_trait::async_trait;
use signbridge::core::llm::{CompletionRequest, CompletionService, LlmError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock language model that records prompts
#[derive(Debug)]
pub struct MockLlm {
    /// Every request that reached the service
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    /// Answers handed out in order before `default_reply`
    pub queued: Arc<Mutex<VecDeque<String>>>,
    pub default_reply: String,
    /// Simulate an outage
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            queued: Arc::new(Mutex::new(VecDeque::new())),
            default_reply: reply.to_string(),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn failing() -> Self {
        let mock = Self::replying("");
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    /// Answer with `first` once, then with the default reply
    pub fn then(self, first: &str) -> Self {
        self.queued.lock().unwrap().push_back(first.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }
}

#[async_trait]
impl CompletionService for MockLlm {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if *self.should_fail.lock().unwrap() {
            return Err(LlmError::Status {
                status: 503,
                body: "mock outage".to_string(),
            });
        }
        let reply = self
            .queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_reply.clone());
        Ok(reply)
    }
}
