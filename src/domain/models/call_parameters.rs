use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_STOP_SEQUENCES: [&str; 2] = [" Human:", " AI:"];

/// How every upstream call is shaped. The same value is used for every call
/// and is never derived from caller input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpstreamCallParameters {
    model: String,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
    stop: Vec<String>,
}

impl Default for UpstreamCallParameters {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 1.0,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.6,
            stop: DEFAULT_STOP_SEQUENCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UpstreamCallParameters {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn frequency_penalty(&self) -> f64 {
        self.frequency_penalty
    }

    pub fn presence_penalty(&self) -> f64 {
        self.presence_penalty
    }

    pub fn stop(&self) -> &[String] {
        &self.stop
    }
}
