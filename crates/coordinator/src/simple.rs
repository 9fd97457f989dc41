//! Single-agent "simple" mode.
//!
//! A lightweight alternative to the full pipeline: route between a math
//! path and a canned chat path based on the query, with no planning or
//! aggregation involved.

use once_cell::sync::Lazy;
use regex::Regex;
use tandem_agents::tools::calculator;
use tracing::debug;

static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit regex is valid"));
static MATH_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9+\-*/().\s]+").expect("math span regex is valid"));

const MATH_KEYWORDS: &[&str] = &[
    "calculate", "what is", "+", "-", "*", "/", "plus", "minus", "times",
];

const CHAT_RESPONSES: &[(&str, &str)] = &[
    (
        "how are you",
        "I'm doing great! I'm a helpful agent that can chat and do math calculations.",
    ),
    (
        "who are you",
        "I'm a simple Tandem agent. I can help with conversations and mathematical calculations!",
    ),
    (
        "hello",
        "Hello! How can I help you today? I can chat or help with math calculations.",
    ),
    (
        "hi",
        "Hi there! How can I help you today? I can chat or help with math calculations.",
    ),
];

const DEFAULT_CHAT: &str =
    "I'm a helpful assistant. I can help with math calculations and simple conversations!";

/// The simple-mode responder: math when the query looks numeric,
/// canned chat otherwise.
pub struct SimpleResponder;

impl SimpleResponder {
    pub fn new() -> Self {
        Self
    }

    /// Answer a query with a single response string.
    pub fn respond(&self, query: &str) -> String {
        if self.needs_math(query) {
            debug!("Simple mode: math path");
            self.do_math(query)
        } else {
            debug!("Simple mode: chat path");
            self.chat_response(query)
        }
    }

    /// Math requires both a digit and a math cue word or operator.
    fn needs_math(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        DIGIT_RE.is_match(&lower) && MATH_KEYWORDS.iter().any(|kw| lower.contains(kw))
    }

    fn do_math(&self, query: &str) -> String {
        let expression = MATH_SPAN_RE
            .find_iter(query)
            .map(|m| m.as_str().trim())
            .find(|span| span.chars().any(|c| c.is_ascii_digit()));

        match expression {
            Some(expr) => format!("The answer is: {}", calculator::calculate(expr)),
            None => "I couldn't find a math expression to calculate.".to_string(),
        }
    }

    fn chat_response(&self, query: &str) -> String {
        let lower = query.to_lowercase();

        for (pattern, response) in CHAT_RESPONSES {
            if lower.contains(pattern) {
                return (*response).to_string();
            }
        }

        DEFAULT_CHAT.to_string()
    }
}

impl Default for SimpleResponder {
    fn default() -> Self {
        Self::new()
    }
}
