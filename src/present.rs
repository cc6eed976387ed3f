//! Presentation Shaping
//!
//! Pure functions turning [`DashboardData`] into display values: the three
//! summary labels, the star indicator, truncated review text and the rows of
//! the recent-reviews table. Nothing here touches the DOM or the network.

use serde::Serialize;

use crate::model::{DashboardData, Review, Sentiment, SentimentCount};

/// Highest rating a review can show
pub const MAX_RATING: i64 = 5;

/// Glyph for an earned star
pub const FILLED_STAR: &str = "⭐";

/// Glyph for a missing star
pub const EMPTY_STAR: &str = "☆";

/// Review text longer than this is cut
pub const TEXT_PREVIEW_CHARS: usize = 120;

/// Appended to cut review text
pub const ELLIPSIS: &str = "...";

/// Message of the single placeholder row
pub const NO_REVIEWS_MESSAGE: &str = "No reviews available";

/// Columns in the reviews table
pub const REVIEW_COLUMNS: usize = 5;

/// Share of positive reviews in percent, rounded to one decimal.
///
/// Uses the first entry labelled `positive`; a product with no reviews
/// reports 0.0 rather than dividing by zero.
pub fn positive_percentage(counts: &[SentimentCount], total_reviews: u64) -> f64 {
    if total_reviews == 0 {
        return 0.0;
    }

    let positive = counts
        .iter()
        .find(|c| c.sentiment == Sentiment::Positive.as_str())
        .map(|c| c.count)
        .unwrap_or(0);

    let percent = positive as f64 / total_reviews as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}

/// Values for the three stats cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub positive_percent: f64,
    pub average_rating: f64,
    pub total_reviews: u64,
}

impl SummaryStats {
    pub fn from_data(data: &DashboardData) -> Self {
        Self {
            positive_percent: positive_percentage(&data.sentiment_counts, data.total_reviews),
            average_rating: data.avg_rating,
            total_reviews: data.total_reviews,
        }
    }

    /// e.g. `+75.0%`
    pub fn positive_label(&self) -> String {
        format!("+{:.1}%", self.positive_percent)
    }

    /// e.g. `4.2 / 5`
    pub fn rating_label(&self) -> String {
        format!("{} / {}", self.average_rating, MAX_RATING)
    }

    pub fn total_label(&self) -> String {
        self.total_reviews.to_string()
    }
}

/// Five glyphs, `rating` of them filled. Ratings outside 0..=5 are clamped.
pub fn star_indicator(rating: i64) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", FILLED_STAR.repeat(filled), EMPTY_STAR.repeat(empty))
}

/// Cut text to [`TEXT_PREVIEW_CHARS`] characters, marking the cut with [`ELLIPSIS`].
pub fn truncate_text(text: &str) -> String {
    match text.char_indices().nth(TEXT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// One rendered line of the reviews table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    pub date: String,
    pub reviewer: String,
    pub stars: String,
    pub text: String,
    /// Normalized sentiment, used for styling
    pub sentiment: Sentiment,
    /// Label as delivered, `neutral` when missing
    pub sentiment_label: String,
}

impl ReviewRow {
    pub fn from_review(review: &Review) -> Self {
        Self {
            date: review.review_date.clone().unwrap_or_else(|| "-".to_string()),
            reviewer: review
                .reviewer
                .clone()
                .unwrap_or_else(|| "Anonymous".to_string()),
            stars: star_indicator(review.rating.unwrap_or(0)),
            text: truncate_text(review.text.as_deref().unwrap_or("")),
            sentiment: Sentiment::from_label(review.sentiment.as_deref()),
            sentiment_label: review
                .sentiment
                .clone()
                .unwrap_or_else(|| Sentiment::Neutral.to_string()),
        }
    }
}

/// Contents of the recent-reviews table body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReviewTable {
    /// Single row spanning every column
    Placeholder(String),
    Rows(Vec<ReviewRow>),
}

impl ReviewTable {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return ReviewTable::Placeholder(NO_REVIEWS_MESSAGE.to_string());
        }
        ReviewTable::Rows(reviews.iter().map(ReviewRow::from_review).collect())
    }

    /// Number of `<tr>` elements this table renders
    pub fn row_count(&self) -> usize {
        match self {
            ReviewTable::Placeholder(_) => 1,
            ReviewTable::Rows(rows) => rows.len(),
        }
    }
}

impl Default for ReviewTable {
    fn default() -> Self {
        ReviewTable::Placeholder(NO_REVIEWS_MESSAGE.to_string())
    }
}

/// Render the table body as `<tr>` markup for a static page or export
pub fn render_review_table_html(table: &ReviewTable) -> String {
    match table {
        ReviewTable::Placeholder(message) => format!(
            "<tr><td colspan=\"{}\" style=\"text-align:center;\">{}</td></tr>",
            REVIEW_COLUMNS,
            escape_html(message)
        ),
        ReviewTable::Rows(rows) => rows
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>",
                    escape_html(&row.date),
                    escape_html(&row.reviewer),
                    row.stars,
                    escape_html(&row.text),
                    row.sentiment,
                    escape_html(&row.sentiment_label)
                )
            })
            .collect(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<SentimentCount> {
        pairs
            .iter()
            .map(|(s, c)| SentimentCount {
                sentiment: s.to_string(),
                count: *c,
            })
            .collect()
    }

    #[test]
    fn test_positive_percentage() {
        let c = counts(&[("positive", 3), ("negative", 1)]);
        assert_eq!(positive_percentage(&c, 4), 75.0);

        let c = counts(&[("negative", 2), ("positive", 1)]);
        assert_eq!(positive_percentage(&c, 3), 33.3);

        let c = counts(&[("positive", 2)]);
        assert_eq!(positive_percentage(&c, 3), 66.7);
    }

    #[test]
    fn test_positive_percentage_without_positive_entry() {
        let c = counts(&[("negative", 5)]);
        assert_eq!(positive_percentage(&c, 5), 0.0);
    }

    #[test]
    fn test_positive_percentage_zero_total() {
        let c = counts(&[("positive", 0)]);
        assert_eq!(positive_percentage(&c, 0), 0.0);

        let stats = SummaryStats {
            positive_percent: positive_percentage(&[], 0),
            average_rating: 2.4,
            total_reviews: 0,
        };
        assert_eq!(stats.positive_label(), "+0.0%");
    }

    #[test]
    fn test_summary_labels() {
        let data = DashboardData {
            sentiment_counts: counts(&[("positive", 3), ("negative", 1)]),
            avg_rating: 4.2,
            total_reviews: 4,
            recent_reviews: vec![],
        };
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.positive_label(), "+75.0%");
        assert_eq!(stats.rating_label(), "4.2 / 5");
        assert_eq!(stats.total_label(), "4");
    }

    #[test]
    fn test_rating_label_whole_number() {
        let stats = SummaryStats {
            positive_percent: 0.0,
            average_rating: 4.0,
            total_reviews: 1,
        };
        assert_eq!(stats.rating_label(), "4 / 5");
    }

    #[test]
    fn test_star_indicator() {
        assert_eq!(star_indicator(3), "⭐⭐⭐☆☆");
        assert_eq!(star_indicator(0), "☆☆☆☆☆");
        assert_eq!(star_indicator(7), "⭐⭐⭐⭐⭐");
        assert_eq!(star_indicator(-2), "☆☆☆☆☆");
    }

    #[test]
    fn test_star_indicator_clamped_counts() {
        let stars = star_indicator(7);
        assert_eq!(stars.matches(FILLED_STAR).count(), 5);
        assert_eq!(stars.matches(EMPTY_STAR).count(), 0);
    }

    #[test]
    fn test_truncate_text() {
        let short = "a".repeat(120);
        assert_eq!(truncate_text(&short), short);

        let long = "b".repeat(121);
        let cut = truncate_text(&long);
        assert_eq!(cut, format!("{}...", "b".repeat(120)));
    }

    #[test]
    fn test_truncate_text_multibyte() {
        let long = "é".repeat(130);
        let cut = truncate_text(&long);
        assert_eq!(cut.chars().count(), 123);
        assert!(cut.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_review_row_defaults() {
        let row = ReviewRow::from_review(&Review::default());
        assert_eq!(row.date, "-");
        assert_eq!(row.reviewer, "Anonymous");
        assert_eq!(row.stars, "☆☆☆☆☆");
        assert_eq!(row.text, "");
        assert_eq!(row.sentiment, Sentiment::Neutral);
        assert_eq!(row.sentiment_label, "neutral");
    }

    #[test]
    fn test_review_row_keeps_unknown_label() {
        let review = Review {
            sentiment: Some("unknown".to_string()),
            ..Default::default()
        };
        let row = ReviewRow::from_review(&review);
        assert_eq!(row.sentiment, Sentiment::Neutral);
        assert_eq!(row.sentiment_label, "unknown");
    }

    #[test]
    fn test_empty_table_is_single_placeholder() {
        let table = ReviewTable::from_reviews(&[]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table, ReviewTable::Placeholder(NO_REVIEWS_MESSAGE.to_string()));

        let html = render_review_table_html(&table);
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("colspan=\"5\""));
        assert!(html.contains(NO_REVIEWS_MESSAGE));
    }

    #[test]
    fn test_table_rows_in_order() {
        let reviews = vec![
            Review {
                reviewer: Some("First".to_string()),
                ..Default::default()
            },
            Review {
                reviewer: Some("Second".to_string()),
                ..Default::default()
            },
        ];
        match ReviewTable::from_reviews(&reviews) {
            ReviewTable::Rows(rows) => {
                assert_eq!(rows[0].reviewer, "First");
                assert_eq!(rows[1].reviewer, "Second");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_html_escapes_cells() {
        let reviews = vec![Review {
            reviewer: Some("<b>x</b>".to_string()),
            rating: Some(4),
            text: Some("Tom & Jerry".to_string()),
            sentiment: Some("positive".to_string()),
            review_date: Some("Jan 02, 2024".to_string()),
        }];
        let html = render_review_table_html(&ReviewTable::from_reviews(&reviews));

        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("<td class=\"positive\">positive</td>"));
        assert!(html.contains("⭐⭐⭐⭐☆"));
    }
}
