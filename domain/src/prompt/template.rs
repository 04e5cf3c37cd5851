//! Reading prompt template
//!
//! Substitution is a literal find-and-replace of two fixed placeholders.
//! Placeholder text inside the substituted values is not escaped: a question
//! containing `{cardInfo}` keeps it verbatim, and nothing re-scans the
//! inserted text.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the user's question
pub const QUESTION_PLACEHOLDER: &str = "{question}";

/// Placeholder replaced by the comma-joined card names
pub const CARD_INFO_PLACEHOLDER: &str = "{cardInfo}";

const READING_PROMPT: &str = r###"
# Role: Your Blunt, Insightful Friend & Deep-Dive Guide (The "Bali Local" Persona)

## The Persona
You are not an AI that just recites card definitions. You are an "old friend" who has lived in Bali for a long time, seen it all, speaks candidly but with compassion.
Speak as if you are sitting in a cafe, looking the user in the eye. Keep the tone concise, grounded, and slightly spiritual but not "woo-woo."

## 🚫 Anti-Robot Rules - Absolutely Forbidden:
1. NO formal titles (e.g., "## Analysis").
2. NO mechanical transitions (e.g., "Based on the first card...").
3. NO ambiguity (Don't say "it might mean," say "it clearly indicates").

## 🗣️ Conversation Flow:
Strictly follow this structure and MUST use the specified Emoji at the beginning of paragraphs:

🛑 [A short ice-breaker here. Acknowledge the user's vibe or the question. Don't interpret cards yet.]
(Empty line)
🃏 [The Storytelling. Weave the three cards into a ONE coherent story. Analyze the situation, the blockage, and the subconscious flow.]
(Empty line)
🔮 [Key Insights. What is the core truth? Mark the most important point with 👉 or ⚠️.]
(Empty line)
🧠 [The Reality Check. Ask a soul-searching question based on psychology, not tarot. Something to make them think.]

## Output Requirements
Language: English (Natural, conversational, slightly poetic but direct).
Tone: Warm, sharp, "human-like."

---
User's Question: "{question}"
Cards Drawn: {cardInfo}
"###;

/// A prompt template with `{question}` and `{cardInfo}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The built-in reading template (persona + four-paragraph structure)
    pub fn reading() -> Self {
        Self::new(READING_PROMPT)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholders this template does not contain
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        [QUESTION_PLACEHOLDER, CARD_INFO_PLACEHOLDER]
            .into_iter()
            .filter(|p| !self.text.contains(p))
            .collect()
    }

    /// Substitute the card info, then the question, into the template.
    pub fn compile(&self, question: &str, card_info: &str) -> String {
        self.text
            .replace(CARD_INFO_PLACEHOLDER, card_info)
            .replace(QUESTION_PLACEHOLDER, question)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::reading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_replaces_both_placeholders() {
        let prompt = PromptTemplate::reading().compile("Will I find love?", "CardA, CardB, CardC");

        assert!(!prompt.contains(QUESTION_PLACEHOLDER));
        assert!(!prompt.contains(CARD_INFO_PLACEHOLDER));
        assert_eq!(prompt.matches("Will I find love?").count(), 1);
        assert_eq!(prompt.matches("CardA, CardB, CardC").count(), 1);
        assert!(prompt.contains(r#"User's Question: "Will I find love?""#));
        assert!(prompt.contains("Cards Drawn: CardA, CardB, CardC"));
    }

    #[test]
    fn test_reading_template_keeps_structure_markers() {
        let template = PromptTemplate::reading();
        for marker in ["🛑", "🃏", "🔮", "🧠"] {
            assert!(template.text().contains(marker), "missing {}", marker);
        }
        assert!(template.missing_placeholders().is_empty());
    }

    #[test]
    fn test_reading_template_is_complete() {
        let text = PromptTemplate::reading().text().to_string();
        assert!(text.contains(r###"1. NO formal titles (e.g., "## Analysis")."###));
        assert!(text.contains("Tone: Warm, sharp, \"human-like.\""));
        assert!(text.ends_with("User's Question: \"{question}\"\nCards Drawn: {cardInfo}\n"));
    }

    #[test]
    fn test_compile_replaces_every_occurrence() {
        let template = PromptTemplate::new("{question} / {question} / {cardInfo}");
        assert_eq!(template.compile("Q", "A, B, C"), "Q / Q / A, B, C");
    }

    #[test]
    fn test_placeholder_in_question_is_not_neutralized() {
        // The card info is substituted first, so a {cardInfo} token smuggled
        // in through the question survives verbatim.
        let template = PromptTemplate::new("Q: {question} | C: {cardInfo}");
        let prompt = template.compile("what about {cardInfo}?", "A, B, C");
        assert_eq!(prompt, "Q: what about {cardInfo}? | C: A, B, C");
    }

    #[test]
    fn test_question_placeholder_in_question_is_not_rescanned() {
        let template = PromptTemplate::new("Q: {question}");
        assert_eq!(template.compile("{question}", "A"), "Q: {question}");
    }

    #[test]
    fn test_missing_placeholders() {
        let template = PromptTemplate::new("Only {question}");
        assert_eq!(template.missing_placeholders(), vec![CARD_INFO_PLACEHOLDER]);
    }
}
