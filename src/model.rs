//! Wire Types
//!
//! JSON shapes returned by the review API. Review fields are all optional
//! and tolerate the loose typing the backend produces (ratings as strings,
//! empty strings for missing values).

use serde::{Deserialize, Deserializer, Serialize};

/// Categorical label on a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map a raw label; anything unrecognised is neutral
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("positive") => Sentiment::Positive,
            Some("negative") => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of reviews carrying one sentiment label
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SentimentCount {
    pub sentiment: String,
    pub count: u64,
}

/// Aggregate statistics and recent reviews for one product
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardData {
    pub sentiment_counts: Vec<SentimentCount>,
    pub avg_rating: f64,
    pub total_reviews: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recent_reviews: Vec<Review>,
}

/// A single review row as delivered by the API
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Review {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub reviewer: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<i64>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub sentiment: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub review_date: Option<String>,
}

/// Product selectable in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub pid: String,
    pub name: String,
}

/// Response of the product list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
}

/// Request body for registering a product to scrape
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub pid: String,
    pub name: String,
}

/// Response of the add-product endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AddProductResponse {
    pub message: String,
    pub product: Product,
    #[serde(default)]
    pub reviews_scraped: u64,
    #[serde(default)]
    pub sentiment_analyzed: u64,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(serde_json::Value::String(s)) => parse_leading_int(&s),
        _ => None,
    })
}

/// Parse the integer prefix of a string: optional sign, then digits.
///
/// `"4"`, `" 4 stars"` and `"4.5"` all give 4; `"abc"` gives `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_from_label() {
        assert_eq!(Sentiment::from_label(Some("positive")), Sentiment::Positive);
        assert_eq!(Sentiment::from_label(Some("negative")), Sentiment::Negative);
        assert_eq!(Sentiment::from_label(Some("unknown")), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(None), Sentiment::Neutral);
    }

    #[test]
    fn test_dashboard_data_parse() {
        let json = r#"{
            "total_reviews": 4,
            "avg_rating": 4.2,
            "sentiment_counts": [
                {"sentiment": "positive", "count": 3},
                {"sentiment": "negative", "count": 1}
            ],
            "recent_reviews": [
                {"reviewer": "Asha", "rating": 5, "text": "Great", "sentiment": "positive", "review_date": "Jan 02, 2024"}
            ]
        }"#;

        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total_reviews, 4);
        assert_eq!(data.sentiment_counts.len(), 2);
        assert_eq!(data.sentiment_counts[0].sentiment, "positive");
        assert_eq!(data.recent_reviews[0].rating, Some(5));
    }

    #[test]
    fn test_missing_recent_reviews_defaults_empty() {
        let json = r#"{"total_reviews": 0, "avg_rating": 2.4, "sentiment_counts": []}"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert!(data.recent_reviews.is_empty());
    }

    #[test]
    fn test_missing_sentiment_counts_rejected() {
        let json = r#"{"total_reviews": 0, "avg_rating": 2.4, "recent_reviews": []}"#;
        assert!(serde_json::from_str::<DashboardData>(json).is_err());
    }

    #[test]
    fn test_review_lenient_fields() {
        let json = r#"{"reviewer": "", "rating": "4", "text": null, "review_date": "None"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.reviewer, None);
        assert_eq!(review.rating, Some(4));
        assert_eq!(review.text, None);
        assert_eq!(review.sentiment, None);
        assert_eq!(review.review_date.as_deref(), Some("None"));
    }

    #[test]
    fn test_review_rating_variants() {
        let parse = |raw: &str| {
            serde_json::from_str::<Review>(&format!(r#"{{"rating": {raw}}}"#))
                .unwrap()
                .rating
        };
        assert_eq!(parse("3"), Some(3));
        assert_eq!(parse("4.7"), Some(4));
        assert_eq!(parse(r#""4.5""#), Some(4));
        assert_eq!(parse(r#""great""#), None);
        assert_eq!(parse("null"), None);
        assert_eq!(parse("true"), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("  12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_product_list_null() {
        let list: ProductList = serde_json::from_str(r#"{"products": null}"#).unwrap();
        assert!(list.products.is_empty());

        let list: ProductList = serde_json::from_str(r#"{}"#).unwrap();
        assert!(list.products.is_empty());
    }
}
