use serde::{Deserialize, Serialize};

/// Closed set of gallery topics. Classification always lands on one of
/// these; there is no uncategorized bucket, so an entry matching nothing
/// falls through to the first topic in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Games,
    Travel,
    Finance,
    Healthcare,
    Ecommerce,
    Education,
    AiMl,
    Social,
    Business,
    Analytics,
}

impl Topic {
    pub const ALL: [Topic; 10] = [
        Topic::Games,
        Topic::Travel,
        Topic::Finance,
        Topic::Healthcare,
        Topic::Ecommerce,
        Topic::Education,
        Topic::AiMl,
        Topic::Social,
        Topic::Business,
        Topic::Analytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Games => "Games",
            Topic::Travel => "Travel",
            Topic::Finance => "Finance",
            Topic::Healthcare => "Healthcare",
            Topic::Ecommerce => "E-commerce",
            Topic::Education => "Education",
            Topic::AiMl => "AI/ML",
            Topic::Social => "Social",
            Topic::Business => "Business",
            Topic::Analytics => "Analytics",
        }
    }

    /// Parse a CLI-friendly topic name, tolerating the punctuation variants
    /// people actually type.
    pub fn parse(s: &str) -> Option<Topic> {
        match s.to_lowercase().as_str() {
            "games" => Some(Topic::Games),
            "travel" => Some(Topic::Travel),
            "finance" => Some(Topic::Finance),
            "healthcare" => Some(Topic::Healthcare),
            "e-commerce" | "ecommerce" => Some(Topic::Ecommerce),
            "education" => Some(Topic::Education),
            "ai/ml" | "ai-ml" | "aiml" => Some(Topic::AiMl),
            "social" => Some(Topic::Social),
            "business" => Some(Topic::Business),
            "analytics" => Some(Topic::Analytics),
            _ => None,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub struct TopicClassifier {
    keywords: Vec<(Topic, Vec<&'static str>)>,
}

impl TopicClassifier {
    pub fn new() -> Self {
        let keywords = vec![
            (
                Topic::Games,
                vec![
                    "game",
                    "gaming",
                    "play",
                    "player",
                    "arcade",
                    "puzzle",
                    "quiz",
                    "trivia",
                    "entertainment",
                ],
            ),
            (
                Topic::Travel,
                vec![
                    "travel",
                    "trip",
                    "journey",
                    "destination",
                    "booking",
                    "hotel",
                    "flight",
                    "vacation",
                ],
            ),
            (
                Topic::Finance,
                vec![
                    "finance",
                    "money",
                    "payment",
                    "wallet",
                    "budget",
                    "investment",
                    "crypto",
                ],
            ),
            (
                Topic::Healthcare,
                vec!["health", "medical", "doctor", "patient", "fitness", "hospital"],
            ),
            (
                Topic::Ecommerce,
                vec!["shop", "shopping", "ecommerce", "retail", "buy", "sell"],
            ),
            (
                Topic::Education,
                vec![
                    "education",
                    "learning",
                    "student",
                    "teacher",
                    "course",
                    "tutorial",
                ],
            ),
            (
                Topic::AiMl,
                vec!["ai", "machine learning", "ml", "neural", "chatbot", "automation"],
            ),
            (
                Topic::Social,
                vec!["social", "chat", "community", "network", "connect"],
            ),
            (
                Topic::Business,
                vec!["business", "enterprise", "management", "crm", "hr", "workflow"],
            ),
            (
                Topic::Analytics,
                vec!["data", "analytics", "dashboard", "visualization", "metrics"],
            ),
        ];

        Self { keywords }
    }

    /// Score each topic by how many of its keywords occur in the text
    /// (case-insensitive substring, each keyword counted once) and return
    /// the highest scorer. Ties keep the earlier topic.
    pub fn classify(&self, description: &str, app_name: &str) -> Topic {
        let text = format!("{} {}", description, app_name).to_lowercase();

        let mut best = self.keywords[0].0;
        let mut best_score = 0;
        for (topic, words) in &self.keywords {
            let score = words.iter().filter(|w| text.contains(*w)).count();
            if score > best_score {
                best = *topic;
                best_score = score;
            }
        }

        best
    }
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_games() {
        let classifier = TopicClassifier::new();
        let topic = classifier.classify("A multiplayer puzzle game with arcade levels", "");
        assert_eq!(topic, Topic::Games);
    }

    #[test]
    fn test_classify_travel() {
        let classifier = TopicClassifier::new();
        let topic = classifier.classify("Plan your trip and compare hotel and flight prices", "");
        assert_eq!(topic, Topic::Travel);
    }

    #[test]
    fn test_app_name_contributes() {
        let classifier = TopicClassifier::new();
        let topic = classifier.classify("Helps you save every month", "Budget Wallet");
        assert_eq!(topic, Topic::Finance);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = TopicClassifier::new();
        let topic = classifier.classify("CHATBOT powered by MACHINE LEARNING", "");
        assert_eq!(topic, Topic::AiMl);
    }

    #[test]
    fn test_empty_text_falls_through_to_first_topic() {
        let classifier = TopicClassifier::new();
        assert_eq!(classifier.classify("", ""), Topic::Games);
    }

    #[test]
    fn test_always_in_closed_set() {
        let classifier = TopicClassifier::new();
        let topic = classifier.classify("zzz qqq xxx", "unrelated");
        assert!(Topic::ALL.contains(&topic));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Topic::parse("e-commerce"), Some(Topic::Ecommerce));
        assert_eq!(Topic::parse("AI/ML"), Some(Topic::AiMl));
        assert_eq!(Topic::parse("ai-ml"), Some(Topic::AiMl));
        assert_eq!(Topic::parse("robotics"), None);
    }
}
