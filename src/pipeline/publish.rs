use std::path::PathBuf;

use crate::{
    pipeline::script::Script,
    theme::palette::{FactCategory, Theme},
};

/// Upload request handed to a [`Publisher`](crate::pipeline::Publisher).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PublishRequest {
    /// Final media file.
    pub media_path: PathBuf,
    /// Video title.
    pub title: String,
    /// Video description.
    pub description: String,
    /// Search tags.
    pub tags: Vec<String>,
}

/// Result of a successful upload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Published {
    /// Remote content id.
    pub content_id: String,
    /// Public URL.
    pub url: String,
}

const FACT_BASE_TAGS: [&str; 8] = [
    "shorts",
    "viral",
    "trending",
    "facts",
    "educational",
    "learning",
    "amazing",
    "didyouknow",
];

const NEWS_EXTRA_TAGS: [&str; 5] = ["Stock Market", "India", "Market Update", "Nifty", "Sensex"];

/// Upload description for `script`, signed with `channel`.
pub fn describe(script: &Script, channel: &str) -> String {
    match script.theme {
        Theme::News(_) => {
            let points = script
                .content
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{}. {p}", i + 1))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "{label}\n\n{subtitle}\n\nKey Points:\n{points}\n\n---\nFollow {channel} for daily market updates!\n\n#StockMarket #India #Nifty #Sensex #MarketUpdate #{tag} #Shorts",
                label = script.theme.label(),
                subtitle = script.subtitle,
                tag = hashtag(channel),
            )
        }
        Theme::Fact(_) => format!(
            "{subtitle}\n\n{summary}\n\n---\nAmazing facts delivered daily from {channel}!\nSubscribe for more fascinating content\nComment what you want to learn next!\n\n#Shorts #DidYouKnow #AmazingFacts #Educational #Learning",
            subtitle = script.subtitle,
            summary = script.summary.as_deref().unwrap_or_default(),
        ),
    }
}

/// Search tags for a theme.
pub fn tags(theme: Theme, channel: &str) -> Vec<String> {
    match theme {
        Theme::News(_) => [theme.name(), "shorts", channel]
            .into_iter()
            .chain(NEWS_EXTRA_TAGS)
            .map(str::to_owned)
            .collect(),
        Theme::Fact(category) => FACT_BASE_TAGS
            .into_iter()
            .chain(category_tags(category).iter().copied())
            .map(str::to_owned)
            .collect(),
    }
}

fn category_tags(category: FactCategory) -> &'static [&'static str] {
    match category {
        FactCategory::Animals => &["animals", "wildlife", "nature", "animalfacts"],
        FactCategory::Space => &["space", "astronomy", "cosmos", "universe", "planets"],
        FactCategory::Ocean => &["ocean", "marine", "sea", "underwater", "marinelife"],
        FactCategory::Science => &["science", "physics", "chemistry", "biology", "experiment"],
        FactCategory::History => &["history", "historical", "past", "ancient"],
        FactCategory::Nature => &["nature", "earth", "natural", "phenomena"],
        FactCategory::HumanBody => &["human", "body", "health", "anatomy", "biology"],
        FactCategory::Technology => &["technology", "tech", "innovation", "future", "ai"],
        FactCategory::General => &[],
    }
}

fn hashtag(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/publish.rs"]
mod tests;
