//! # Saathi Chat Assistant
//!
//! Rule-based response selection: an ordered decision table of
//! `(keyword set, response variant)` pairs, evaluated top-down against the
//! lower-cased input; the first matching group wins and a fixed fallback
//! sits at the end. Selection is a total, stateless function of the
//! current message — nothing depends on conversation history.
//!
//! The [`Assistant`] wraps selection with the transcript: the user message
//! is appended immediately, the bot reply after a simulated "thinking"
//! delay. The transcript lives only for the session.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Which canned response a message selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    CropStatus,
    Irrigation,
    Pest,
    Market,
    Weather,
    Fallback,
}

/// One row of the decision table.
#[derive(Debug)]
pub struct Rule {
    /// Any of these substrings selects the rule.
    pub keywords: &'static [&'static str],
    pub kind: ResponseKind,
    pub reply: &'static str,
    pub suggestions: &'static [&'static str],
}

/// Decision table, in priority order. Evaluated top-down, first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["फसल", "सोयाबीन"],
        kind: ResponseKind::CropStatus,
        reply: "आपकी सोयाबीन की फसल अच्छी स्थिति में है! वर्तमान में यह फूल आने के चरण में है। मिट्टी में नमी 45% है जो अच्छी है। अगले 2-3 दिनों में हल्की बारिश का अनुमान है।",
        suggestions: &["कब सिंचाई करूं?", "उर्वरक डालना है?", "कीट से बचाव कैसे करूं?"],
    },
    Rule {
        keywords: &["पानी", "सिंचाई"],
        kind: ResponseKind::Irrigation,
        reply: "मिट्टी में नमी 45% है। शाम को सिंचाई करना बेहतर होगा क्योंकि कल तेज धूप का अनुमान है। 2-3 घंटे ड्रिप सिंचाई करें।",
        suggestions: &["कितना पानी दूं?", "सिंचाई का सही समय?", "पानी की गुणवत्ता कैसे चेक करूं?"],
    },
    Rule {
        keywords: &["कीट", "रोग"],
        kind: ResponseKind::Pest,
        reply: "इस समय सफेद मक्खी का खतरा मध्यम स्तर पर है। पीले चिपचिपे ट्रैप लगाएं और नीम ऑयल का छिड़काव करें। साप्ताहिक निरीक्षण जरूरी है।",
        suggestions: &["कौन सा कीटनाशक इस्तेमाल करूं?", "कीट की पहचान कैसे करूं?", "घरेलू उपाय बताएं"],
    },
    Rule {
        keywords: &["मार्केट", "भाव", "कीमत"],
        kind: ResponseKind::Market,
        reply: "आज सोयाबीन का भाव इटारसी मंडी में ₹5,250 प्रति क्विंटल है। कल से ₹50 की बढ़त है। अगले हफ्ते और तेजी की संभावना है।",
        suggestions: &["कब बेचना चाहिए?", "दूसरी मंडी के रेट?", "फसल स्टोरेज की जानकारी"],
    },
    Rule {
        keywords: &["मौसम", "बारिश"],
        kind: ResponseKind::Weather,
        reply: "अगले 3 दिनों का मौसम: आज - 28°C, साफ। कल - 30°C, हल्की बारिश की संभावना। परसों - 26°C, बादल। हवा की गति सामान्य रहेगी।",
        suggestions: &["क्या छिड़काव कर सकते हैं?", "बारिश के बाद क्या करें?", "तापमान का फसल पर प्रभाव"],
    },
];

/// Fallback sentinel when no keyword group matches.
pub static FALLBACK: Rule = Rule {
    keywords: &[],
    kind: ResponseKind::Fallback,
    reply: "मैं आपकी मदद करने की कोशिश कर रहा हूं। कृपया अपना सवाल और स्पष्ट करें। आप खेती, फसल, कीट, मौसम या मार्केट के बारे में पूछ सकते हैं।",
    suggestions: &["मेरी फसल की जांच करें", "आज के कार्य बताएं", "मौसम की जानकारी", "बाजार की कीमतें"],
};

/// Greeting seeded into every fresh transcript.
const GREETING: &str = "नमस्ते! मैं आपका AI कृषि सलाहकार हूं। मैं खेती, फसल, मौसम और बाजार के बारे में आपकी मदद कर सकता हूं। आप मुझसे क्या पूछना चाहते हैं?";

const GREETING_SUGGESTIONS: &[&str] = &[
    "मेरी सोयाबीन की फसल कैसी है?",
    "आज पानी देना चाहिए?",
    "कीट नियंत्रण के उपाय?",
    "मार्केट रेट क्या है?",
];

/// Default simulated thinking delay before the bot reply appears.
const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(1500);

/// Select the response for an input. Total: every string maps to exactly
/// one rule (the fallback at worst).
pub fn select(input: &str) -> &'static Rule {
    let message = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| message.contains(kw)))
        .unwrap_or(&FALLBACK)
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub from_bot: bool,
    pub timestamp: DateTime<Utc>,
    pub suggestions: Vec<String>,
    /// Which rule produced a bot message; `None` on user messages.
    pub kind: Option<ResponseKind>,
}

/// Session-scoped chat transcript around the rule table.
pub struct Assistant {
    transcript: Vec<ChatMessage>,
    thinking_delay: Duration,
    next_id: u64,
}

impl Assistant {
    /// Fresh assistant with the greeting already in the transcript.
    pub fn new() -> Self {
        let mut assistant = Self {
            transcript: Vec::new(),
            thinking_delay: DEFAULT_THINKING_DELAY,
            next_id: 1,
        };
        assistant.push(
            GREETING.to_string(),
            true,
            GREETING_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            None,
        );
        assistant
    }

    /// Override the simulated thinking delay (tests use zero).
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Append the user message, think, append and return the bot reply.
    /// Blank input is ignored and returns `None`.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.push(text.to_string(), false, Vec::new(), None);

        tokio::time::sleep(self.thinking_delay).await;

        let rule = select(text);
        self.push(
            rule.reply.to_string(),
            true,
            rule.suggestions.iter().map(|s| s.to_string()).collect(),
            Some(rule.kind),
        );
        self.transcript.last()
    }

    fn push(&mut self, text: String, from_bot: bool, suggestions: Vec<String>, kind: Option<ResponseKind>) {
        let id = self.next_id;
        self.next_id += 1;
        self.transcript.push(ChatMessage {
            id,
            text,
            from_bot,
            timestamp: Utc::now(),
            suggestions,
            kind,
        });
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_keyword_selects_crop_status() {
        assert_eq!(select("सोयाबीन की जांच").kind, ResponseKind::CropStatus);
        assert_eq!(select("मेरी फसल कैसी है").kind, ResponseKind::CropStatus);
    }

    #[test]
    fn test_each_keyword_group() {
        assert_eq!(select("आज पानी देना चाहिए?").kind, ResponseKind::Irrigation);
        assert_eq!(select("कीट नियंत्रण के उपाय").kind, ResponseKind::Pest);
        assert_eq!(select("मार्केट रेट क्या है?").kind, ResponseKind::Market);
        assert_eq!(select("कल बारिश होगी क्या").kind, ResponseKind::Weather);
    }

    #[test]
    fn test_no_match_is_fallback() {
        assert_eq!(select("गाय कैसे हैं").kind, ResponseKind::Fallback);
        assert_eq!(select("").kind, ResponseKind::Fallback);
        assert_eq!(select("hello there").kind, ResponseKind::Fallback);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // Mentions both the crop and the weather; the crop rule sits higher.
        assert_eq!(select("बारिश में फसल का क्या होगा").kind, ResponseKind::CropStatus);
    }

    #[test]
    fn test_selection_is_total_over_rules() {
        for rule in RULES {
            for kw in rule.keywords {
                // Each keyword on its own selects a rule at or above its own.
                let selected = select(kw);
                assert_ne!(selected.kind, ResponseKind::Fallback, "keyword {kw} fell through");
            }
        }
    }

    #[tokio::test]
    async fn test_transcript_appends_user_then_bot() {
        let mut assistant = Assistant::new().with_thinking_delay(Duration::ZERO);
        assert_eq!(assistant.transcript().len(), 1); // greeting

        let reply = assistant.send("सोयाबीन की जांच").await.unwrap();
        assert!(reply.from_bot);
        assert_eq!(reply.kind, Some(ResponseKind::CropStatus));
        assert!(!reply.suggestions.is_empty());

        let transcript = assistant.transcript();
        assert_eq!(transcript.len(), 3);
        assert!(!transcript[1].from_bot);
        assert_eq!(transcript[1].text, "सोयाबीन की जांच");
        // Ids are unique and increasing.
        assert!(transcript.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let mut assistant = Assistant::new().with_thinking_delay(Duration::ZERO);
        assert!(assistant.send("   ").await.is_none());
        assert_eq!(assistant.transcript().len(), 1);
    }
}
