//! Built-in writing prompts.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Theme of a writing prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Reflection,
    Gratitude,
    Goals,
    Creative,
    Mindfulness,
}

impl PromptCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reflection => "reflection",
            Self::Gratitude => "gratitude",
            Self::Goals => "goals",
            Self::Creative => "creative",
            Self::Mindfulness => "mindfulness",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Reflection => "🪞",
            Self::Gratitude => "🙏",
            Self::Goals => "🎯",
            Self::Creative => "🎨",
            Self::Mindfulness => "🧘",
        }
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question to write about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WritingPrompt {
    pub id: &'static str,
    pub prompt: &'static str,
    pub category: PromptCategory,
}

const fn prompt(id: &'static str, prompt: &'static str, category: PromptCategory) -> WritingPrompt {
    WritingPrompt {
        id,
        prompt,
        category,
    }
}

static CATALOG: [WritingPrompt; 10] = [
    prompt(
        "1",
        "What moment today made you smile, and why did it feel special?",
        PromptCategory::Gratitude,
    ),
    prompt(
        "2",
        "If you could give your past self one piece of advice, what would it be?",
        PromptCategory::Reflection,
    ),
    prompt(
        "3",
        "Describe a small act of kindness you witnessed or experienced today.",
        PromptCategory::Gratitude,
    ),
    prompt(
        "4",
        "What's one thing you're excited to learn or improve in the coming week?",
        PromptCategory::Goals,
    ),
    prompt(
        "5",
        "Write about a place that makes you feel completely at peace.",
        PromptCategory::Mindfulness,
    ),
    prompt(
        "6",
        "If your day was a color, what would it be and why?",
        PromptCategory::Creative,
    ),
    prompt(
        "7",
        "What's something challenging that helped you grow recently?",
        PromptCategory::Reflection,
    ),
    prompt(
        "8",
        "Describe three things you're grateful for right now, big or small.",
        PromptCategory::Gratitude,
    ),
    prompt(
        "9",
        "What would you do if you knew you couldn't fail?",
        PromptCategory::Goals,
    ),
    prompt(
        "10",
        "Write a letter to someone who has positively impacted your life.",
        PromptCategory::Gratitude,
    ),
];

/// Every built-in prompt.
#[must_use]
pub fn catalog() -> &'static [WritingPrompt] {
    &CATALOG
}

/// Look up a prompt by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static WritingPrompt> {
    CATALOG.iter().find(|p| p.id == id.trim())
}

/// Pick a prompt uniformly at random.
#[must_use]
pub fn random_prompt() -> &'static WritingPrompt {
    random_prompt_with(&mut rand::thread_rng())
}

/// Pick a prompt using `rng`.
pub fn random_prompt_with<R: Rng + ?Sized>(rng: &mut R) -> &'static WritingPrompt {
    CATALOG.choose(rng).unwrap_or(&CATALOG[0])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_catalog_ids_are_sequential() {
        let ids: Vec<&str> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("6").unwrap().category, PromptCategory::Creative);
        assert_eq!(find(" 10 ").unwrap().category, PromptCategory::Gratitude);
        assert!(find("11").is_none());
    }

    #[test]
    fn test_random_prompt_is_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = random_prompt_with(&mut rng);
            assert!(catalog().contains(picked));
        }
    }

    #[test]
    fn test_gratitude_is_most_common() {
        let gratitude = catalog()
            .iter()
            .filter(|p| p.category == PromptCategory::Gratitude)
            .count();
        assert_eq!(gratitude, 4);
    }
}
