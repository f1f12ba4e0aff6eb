//! Intent Classifier
//!
//! Routes a message to the emotional or practical persona with an ordered
//! chain of regex patterns. No model call is needed to decide, so every
//! decision is cheap and can be traced back to the rule that made it.
//!
//! Order matters:
//! 1. Emotional patterns (first match wins)
//! 2. Practical patterns (first match wins)
//! 3. First-person pronoun together with a feeling/cognition verb: emotional
//! 4. Anything else: practical
//!
//! Matching runs on the lower-cased message and is not tokenized, so phrases
//! embedded in longer sentences still match.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::domain::value_objects::Intent;

/// A labelled pattern in one of the rule tables
struct Rule {
    label: &'static str,
    regex: Regex,
}

impl Rule {
    // Patterns are static literals covered by tests.
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).expect("Invalid regex in classifier rule table"),
        }
    }
}

static EMOTIONAL_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "negative_feeling",
            r"\b(feel|feeling|felt)\b.*\b(sad|lonely|depressed|anxious|scared|worried|angry|upset|hurt|devastated|hopeless|overwhelmed)\b",
        ),
        Rule::new(
            "first_person_distress",
            r"\b(i am|i'm|im)\b.*\b(sad|lonely|depressed|anxious|scared|worried|angry|upset|hurt|devastated|hopeless|overwhelmed)\b",
        ),
        Rule::new(
            "distress_state",
            r"\b(struggling|suffering|hurting|crying|breaking down|falling apart)\b",
        ),
        Rule::new(
            "crisis_phrase",
            r"\b(no one cares|nobody understands|want to give up|can't take it|end it all)\b",
        ),
        Rule::new(
            "attachment",
            r"\b(miss|love|hate|fear)\b.*\b(someone|something|myself)\b",
        ),
        Rule::new(
            "emotional_vocabulary",
            r"\b(emotional|emotions|mood|mental health)\b",
        ),
    ]
});

static PRACTICAL_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "how_to_question",
            r"\b(what do i do|what should i do|how do i|how can i|what steps)\b",
        ),
        Rule::new(
            "crisis_resources",
            r"\b(after an incident|emergency|crisis|help|support|resources)\b",
        ),
        Rule::new(
            "contact_lookup",
            r"\b(where can i find|who can i call|what number)\b",
        ),
        Rule::new(
            "procedure",
            r"\b(procedure|process|instructions|guide|tutorial)\b",
        ),
        Rule::new(
            "professional_help",
            r"\b(legal|medical|professional|official)\b.*\b(help|advice|assistance)\b",
        ),
    ]
});

static FIRST_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(i|my|me)\b").expect("Invalid regex: first person"));

static FEELING_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(feel|think|believe|want|need|wish)\b").expect("Invalid regex: feeling verb")
});

/// Which step of the chain decided the intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum ClassificationRule {
    /// An emotional pattern matched
    Emotional(&'static str),
    /// A practical pattern matched
    Practical(&'static str),
    /// No pattern matched; first-person pronoun plus feeling verb
    PersonalFeeling,
    /// Nothing matched
    Default,
}

impl std::fmt::Display for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassificationRule::Emotional(label) => write!(f, "emotional pattern ({})", label),
            ClassificationRule::Practical(label) => write!(f, "practical pattern ({})", label),
            ClassificationRule::PersonalFeeling => write!(f, "personal feeling heuristic"),
            ClassificationRule::Default => write!(f, "default"),
        }
    }
}

/// Intent together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub intent: Intent,
    pub rule: ClassificationRule,
}

/// Classify a message and report the deciding rule
pub fn explain(message: &str) -> Classification {
    let lowered = message.to_lowercase();

    if let Some(rule) = first_match(&EMOTIONAL_RULES, &lowered) {
        return Classification {
            intent: Intent::Emotional,
            rule: ClassificationRule::Emotional(rule.label),
        };
    }

    if let Some(rule) = first_match(&PRACTICAL_RULES, &lowered) {
        return Classification {
            intent: Intent::Practical,
            rule: ClassificationRule::Practical(rule.label),
        };
    }

    if FIRST_PERSON.is_match(&lowered) && FEELING_VERB.is_match(&lowered) {
        return Classification {
            intent: Intent::Emotional,
            rule: ClassificationRule::PersonalFeeling,
        };
    }

    Classification {
        intent: Intent::Practical,
        rule: ClassificationRule::Default,
    }
}

/// Classify a message as emotional or practical
pub fn classify(message: &str) -> Intent {
    explain(message).intent
}

fn first_match<'a>(rules: &'a [Rule], text: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.regex.is_match(text))
}
