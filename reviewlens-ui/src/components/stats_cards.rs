//! Stats Cards Component
//!
//! Positive share, average rating and review count for the active product.

use leptos::*;

use reviewlens::SummaryStats;

/// The three summary cards
#[component]
pub fn StatsCards(summary: ReadSignal<Option<SummaryStats>>) -> impl IntoView {
    let label = move |f: fn(&SummaryStats) -> String| {
        move || {
            summary
                .get()
                .map(|s| f(&s))
                .unwrap_or_else(|| "—".to_string())
        }
    };

    view! {
        <div class="stats-cards">
            <StatCard title="Positive Sentiment" value=label(SummaryStats::positive_label) />
            <StatCard title="Average Rating" value=label(SummaryStats::rating_label) />
            <StatCard title="Total Reviews" value=label(SummaryStats::total_label) />
        </div>
    }
}

#[component]
fn StatCard<F>(title: &'static str, value: F) -> impl IntoView
where
    F: Fn() -> String + 'static,
{
    view! {
        <div class="card">
            <span class="card-title">{title}</span>
            <div class="big-text">{value}</div>
        </div>
    }
}
