//! Scripted support assistant: keyword classification plus canned replies.

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Greeting,
    Sadness,
    Anxiety,
    Happiness,
    Journaling,
    Neutral,
    Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: ResponseCategory,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// `lowered` must already be lowercase.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluated top to bottom; first match wins. Plain substring containment, so
/// "this" counts as a greeting.
pub const RULES: [KeywordRule; 6] = [
    KeywordRule {
        category: ResponseCategory::Greeting,
        keywords: &["hi", "hello", "hey"],
    },
    KeywordRule {
        category: ResponseCategory::Sadness,
        keywords: &["sad", "down", "depressed", "unhappy"],
    },
    KeywordRule {
        category: ResponseCategory::Anxiety,
        keywords: &["anxious", "worry", "stress", "nervous"],
    },
    KeywordRule {
        category: ResponseCategory::Happiness,
        keywords: &["happy", "joy", "great", "good"],
    },
    KeywordRule {
        category: ResponseCategory::Journaling,
        keywords: &["journal", "write", "entry"],
    },
    KeywordRule {
        category: ResponseCategory::Neutral,
        keywords: &["neutral", "okay", "fine"],
    },
];

pub const WELCOME_MESSAGE: &str = "Hello! I'm your mood companion. How are you feeling today?";

const GREETING: [&str; 4] = [
    "Hello! How are you feeling today?",
    "Hi there! I'm your mood companion. How can I help you today?",
    "Welcome back! How's your emotional journey going?",
    "Good to see you! How's your mood right now?",
];

const SADNESS: [&str; 4] = [
    "I'm sorry to hear you're feeling down. Would you like to talk about what's happening?",
    "It's okay to feel sad sometimes. Would writing in your journal help process these feelings?",
    "I notice you've been feeling sad. Have you tried any activities that brought you joy in the past?",
    "Sadness is a natural emotion. Would you like some recommendations that might help?",
];

const ANXIETY: [&str; 4] = [
    "I see you're feeling anxious. Let's take a deep breath together. In for 4, hold for 7, out for 8.",
    "Anxiety can be overwhelming. Would writing about your specific worries help identify them?",
    "When anxiety rises, grounding exercises can help. Would you like me to suggest one?",
    "I'm here with you through this anxious moment. Would talking about what triggered it help?",
];

const HAPPINESS: [&str; 4] = [
    "It's wonderful that you're feeling happy! What contributed to this positive feeling?",
    "I'm glad you're in a good mood! This is a great time to reflect on what's going well.",
    "Your happiness is worth celebrating! Would you like to journal about this positive experience?",
    "It's great to see you happy! Remember this feeling and what led to it.",
];

const NEUTRAL: [&str; 4] = [
    "How would you describe your mood in more detail?",
    "Neutral moods are common. Is there anything specific on your mind?",
    "Sometimes a neutral mood can be a good reset. What are you thinking about today?",
    "Would you like to explore what might boost your mood a bit today?",
];

const JOURNALING: [&str; 4] = [
    "Journaling is a powerful tool for emotional well-being. What would you like to write about today?",
    "Your journal is a safe space for your thoughts. Is there something specific you want to explore?",
    "Regular journaling can help identify emotional patterns. What's on your mind right now?",
    "Sometimes just writing freely without judgment can be revealing. Would you like to try that?",
];

const FALLBACK: [&str; 4] = [
    "I'm here to support your emotional journey. Would you like to talk about how you're feeling?",
    "I'm still learning how to be a better companion. Can you tell me more about what's on your mind?",
    "Thank you for sharing. Would you like to explore this further in your journal?",
    "I appreciate you opening up. Would some mood-boosting recommendations help right now?",
];

pub fn responses(category: ResponseCategory) -> &'static [&'static str; 4] {
    match category {
        ResponseCategory::Greeting => &GREETING,
        ResponseCategory::Sadness => &SADNESS,
        ResponseCategory::Anxiety => &ANXIETY,
        ResponseCategory::Happiness => &HAPPINESS,
        ResponseCategory::Journaling => &JOURNALING,
        ResponseCategory::Neutral => &NEUTRAL,
        ResponseCategory::Fallback => &FALLBACK,
    }
}

pub fn classify(text: &str) -> ResponseCategory {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(ResponseCategory::Fallback)
}

/// Uniform pick from the category's pool.
pub fn respond<R: Rng + ?Sized>(category: ResponseCategory, rng: &mut R) -> &'static str {
    let pool = responses(category);
    pool[rng.gen_range(0..pool.len())]
}

pub fn reply<R: Rng + ?Sized>(text: &str, rng: &mut R) -> &'static str {
    respond(classify(text), rng)
}
