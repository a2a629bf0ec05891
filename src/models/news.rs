//! News items and sentiment results.

use serde::{Deserialize, Deserializer, Serialize};

/// Trust placed in a news source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    High,
    Medium,
    #[default]
    Low,
}

impl Reliability {
    pub fn weight(self) -> f64 {
        match self {
            Reliability::High => 1.0,
            Reliability::Medium => 0.8,
            Reliability::Low => 0.6,
        }
    }

    /// Anything other than `high`/`medium` counts as low.
    pub fn parse(value: &str) -> Self {
        match value {
            "high" => Reliability::High,
            "medium" => Reliability::Medium,
            _ => Reliability::Low,
        }
    }
}

impl<'de> Deserialize<'de> for Reliability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-string values (numbers, null, objects) count as unspecified.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Reliability::parse).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    VeryBearish,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            SentimentLabel::VeryBullish
        } else if score > 0.2 {
            SentimentLabel::Bullish
        } else if score >= -0.2 {
            SentimentLabel::Neutral
        } else if score >= -0.6 {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::VeryBearish
        }
    }
}

/// Output of the external sentiment scorer for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    #[serde(rename = "sentiment_score")]
    pub score: f64,
    #[serde(rename = "sentiment_label")]
    pub label: SentimentLabel,
}

impl SentimentScore {
    pub fn new(score: f64) -> Self {
        let score = score.clamp(-1.0, 1.0);
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// News article as supplied by the caller, before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub reliability: Reliability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewsItem {
    /// Text sent to the scorer: content, then description, then title.
    pub fn scoring_text(&self) -> Option<&str> {
        [self.content.as_deref(), self.description.as_deref(), Some(self.title.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
    }

    pub fn with_score(&self, score: SentimentScore) -> ScoredNewsItem {
        ScoredNewsItem {
            title: self.title.clone(),
            source: self.source.clone(),
            url: self.url.clone(),
            reliability: self.reliability,
            sentiment_score: score.score,
            sentiment_label: score.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNewsItem {
    pub title: String,
    pub source: String,
    pub url: String,
    pub reliability: Reliability,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentJudgment {
    pub overall_score: f64,
    #[serde(rename = "news_sentiments")]
    pub per_item: Vec<ScoredNewsItem>,
}
