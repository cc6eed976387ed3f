//! Reviews Table Component

use leptos::*;

use reviewlens::present::REVIEW_COLUMNS;
use reviewlens::ReviewTable;

/// Recent reviews of the active product
#[component]
pub fn ReviewsTable(table: ReadSignal<ReviewTable>) -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Recent Reviews"</h2>
            <table class="reviews-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Reviewer"</th>
                        <th>"Rating"</th>
                        <th>"Review"</th>
                        <th>"Sentiment"</th>
                    </tr>
                </thead>
                <tbody id="recent-reviews-body">
                    {move || match table.get() {
                        ReviewTable::Placeholder(message) => view! {
                            <tr>
                                <td colspan=REVIEW_COLUMNS.to_string() class="placeholder">{message}</td>
                            </tr>
                        }
                        .into_view(),
                        ReviewTable::Rows(rows) => rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.date}</td>
                                        <td>{row.reviewer}</td>
                                        <td class="stars">{row.stars}</td>
                                        <td>{row.text}</td>
                                        <td class=row.sentiment.as_str()>{row.sentiment_label}</td>
                                    </tr>
                                }
                            })
                            .collect_view(),
                    }}
                </tbody>
            </table>
        </section>
    }
}
