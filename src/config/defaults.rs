pub const PLACEHOLDER_API_KEY: &str = "sk-################################################";

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

pub fn default_log_path() -> String {
    "GPT_logs".to_string()
}

pub fn default_model() -> String {
    "gpt-4".to_string()
}

pub fn default_role() -> String {
    "You are a knowledge engine".to_string()
}

/// Role written into a freshly created config file.
pub fn starter_role() -> String {
    "You are a Google Search replacement".to_string()
}
