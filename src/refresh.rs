//! Dashboard Refresh Flow
//!
//! Selecting a product fetches its [`DashboardData`] and pushes it into a
//! [`DashboardView`] in three steps: summary counters, the two charts, the
//! reviews table.
//!
//! Every refresh takes a token from a [`RequestSequencer`]. When a user
//! clicks a second product before the first response arrives, the first
//! response is stale by the time it lands and is dropped.
//!
//! Failures are logged and stop the refresh at the failing step. Steps that
//! already ran stay applied; nothing is retried.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::chart::{ChartSeries, ChartSlots, ChartSurface, AREA_CHART, DONUT_CHART};
use crate::error::{DashboardError, DashboardResult};
use crate::model::DashboardData;
use crate::present::{ReviewTable, SummaryStats};
use crate::source::DashboardSource;

/// Identifies one refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic source of request tokens. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token newer than every token issued before
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no newer token has been issued since `token`
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// Rendering surface the refresh flow writes into
pub trait DashboardView: ChartSurface {
    /// Positive share, average rating and review count
    fn show_summary(&mut self, summary: &SummaryStats);

    /// Replace the body of the recent-reviews table
    fn show_reviews(&mut self, table: &ReviewTable);
}

/// A refresh in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub pid: String,
    pub token: RequestToken,
}

/// What happened to a refresh
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// All three steps reached the view
    Applied,
    /// A newer refresh was started; the response was dropped
    Stale,
    /// Fetch or render failed; see the error
    Failed(DashboardError),
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RefreshOutcome::Applied)
    }
}

/// Component-local state of the dashboard: request tokens and chart handles
#[derive(Debug)]
pub struct DashboardFlow<H> {
    sequencer: RequestSequencer,
    charts: ChartSlots<H>,
}

impl<H> Default for DashboardFlow<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> DashboardFlow<H> {
    pub fn new() -> Self {
        Self {
            sequencer: RequestSequencer::new(),
            charts: ChartSlots::new(),
        }
    }

    pub fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }

    pub fn charts(&self) -> &ChartSlots<H> {
        &self.charts
    }

    /// Forget chart handles so the next refresh recreates the widgets
    pub fn reset_charts(&mut self) {
        self.charts.clear();
    }

    /// Start a refresh for `pid`, superseding any refresh in flight
    pub fn begin(&self, pid: &str) -> RefreshTicket {
        let token = self.sequencer.issue();
        tracing::debug!(pid, token = token.value(), "dashboard refresh started");
        RefreshTicket {
            pid: pid.to_string(),
            token,
        }
    }

    /// Apply a fetch result to the view, unless the ticket has gone stale
    pub fn apply<V>(
        &mut self,
        ticket: &RefreshTicket,
        result: DashboardResult<DashboardData>,
        view: &mut V,
    ) -> RefreshOutcome
    where
        V: DashboardView<Handle = H> + ?Sized,
    {
        if !self.sequencer.is_current(ticket.token) {
            tracing::debug!(
                pid = %ticket.pid,
                token = ticket.token.value(),
                "discarding stale dashboard response"
            );
            return RefreshOutcome::Stale;
        }

        let outcome = result.and_then(|data| self.render(&data, view));
        match outcome {
            Ok(()) => {
                tracing::info!(pid = %ticket.pid, "dashboard refreshed");
                RefreshOutcome::Applied
            }
            Err(e) => {
                tracing::error!(pid = %ticket.pid, error = %e, "Error loading dashboard data");
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Fetch and apply in one go
    pub async fn refresh<S, V>(&mut self, source: &S, pid: &str, view: &mut V) -> RefreshOutcome
    where
        S: DashboardSource + ?Sized,
        V: DashboardView<Handle = H> + ?Sized,
    {
        let ticket = self.begin(pid);
        let result = source.fetch_dashboard(pid).await;
        self.apply(&ticket, result, view)
    }

    fn render<V>(&mut self, data: &DashboardData, view: &mut V) -> DashboardResult<()>
    where
        V: DashboardView<Handle = H> + ?Sized,
    {
        view.show_summary(&SummaryStats::from_data(data));

        let series = ChartSeries::from_counts(&data.sentiment_counts);
        self.charts.ensure_chart(&mut *view, &AREA_CHART, &series)?;
        self.charts.ensure_chart(&mut *view, &DONUT_CHART, &series)?;

        view.show_reviews(&ReviewTable::from_reviews(&data.recent_reviews));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartSpec;
    use crate::model::{AddProductResponse, NewProduct, Product, Review, SentimentCount};
    use async_trait::async_trait;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingView {
        summary: Option<SummaryStats>,
        table: Option<ReviewTable>,
        created: Vec<&'static str>,
        updated: Vec<(&'static str, ChartSeries)>,
        fail_charts: bool,
    }

    impl ChartSurface for RecordingView {
        type Handle = &'static str;

        fn create_chart(&mut self, spec: &ChartSpec, _series: &ChartSeries) -> DashboardResult<&'static str> {
            if self.fail_charts {
                return Err(DashboardError::Render("no chart element".to_string()));
            }
            self.created.push(spec.element_id);
            Ok(spec.element_id)
        }

        fn update_chart(
            &mut self,
            handle: &mut &'static str,
            _spec: &ChartSpec,
            series: &ChartSeries,
        ) -> DashboardResult<()> {
            self.updated.push((*handle, series.clone()));
            Ok(())
        }
    }

    impl DashboardView for RecordingView {
        fn show_summary(&mut self, summary: &SummaryStats) {
            self.summary = Some(summary.clone());
        }

        fn show_reviews(&mut self, table: &ReviewTable) {
            self.table = Some(table.clone());
        }
    }

    struct FixedSource {
        responses: HashMap<String, DashboardResult<DashboardData>>,
    }

    #[async_trait(?Send)]
    impl DashboardSource for FixedSource {
        async fn fetch_products(&self) -> DashboardResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn fetch_dashboard(&self, pid: &str) -> DashboardResult<DashboardData> {
            self.responses
                .get(pid)
                .cloned()
                .unwrap_or_else(|| Err(DashboardError::Fetch {
                    status: Some(404),
                    detail: "Product not found".to_string(),
                }))
        }

        async fn add_product(&self, _product: &NewProduct) -> DashboardResult<AddProductResponse> {
            Err(DashboardError::network("read-only source"))
        }
    }

    fn example_data() -> DashboardData {
        DashboardData {
            sentiment_counts: vec![
                SentimentCount { sentiment: "positive".to_string(), count: 3 },
                SentimentCount { sentiment: "negative".to_string(), count: 1 },
            ],
            avg_rating: 4.2,
            total_reviews: 4,
            recent_reviews: vec![],
        }
    }

    #[test]
    fn test_sequencer_tokens_increase() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn test_sequencer_clones_share_counter() {
        let seq = RequestSequencer::new();
        let other = seq.clone();
        let a = seq.issue();
        let _b = other.issue();
        assert!(!seq.is_current(a));
    }

    #[tokio::test]
    async fn test_refresh_example_end_to_end() {
        let source = FixedSource {
            responses: HashMap::from([("P1".to_string(), Ok(example_data()))]),
        };
        let mut flow = DashboardFlow::new();
        let mut view = RecordingView::default();

        let outcome = flow.refresh(&source, "P1", &mut view).await;
        assert_eq!(outcome, RefreshOutcome::Applied);

        let summary = view.summary.unwrap();
        assert_eq!(summary.positive_label(), "+75.0%");
        assert_eq!(summary.rating_label(), "4.2 / 5");
        assert_eq!(summary.total_label(), "4");
        assert_eq!(view.table.unwrap().row_count(), 1);
        assert_eq!(view.created, vec!["chart0", "chart1"]);
    }

    #[tokio::test]
    async fn test_second_refresh_updates_charts() {
        let mut second = example_data();
        second.sentiment_counts.push(SentimentCount { sentiment: "neutral".to_string(), count: 2 });
        second.recent_reviews.push(Review::default());

        let source = FixedSource {
            responses: HashMap::from([
                ("P1".to_string(), Ok(example_data())),
                ("P2".to_string(), Ok(second)),
            ]),
        };
        let mut flow = DashboardFlow::new();
        let mut view = RecordingView::default();

        flow.refresh(&source, "P1", &mut view).await;
        flow.refresh(&source, "P2", &mut view).await;

        assert_eq!(view.created.len(), 2);
        assert_eq!(view.updated.len(), 2);
        assert_eq!(view.updated[0].0, "chart0");
        assert_eq!(view.updated[1].1.labels, vec!["positive", "negative", "neutral"]);
        assert!(matches!(view.table, Some(ReviewTable::Rows(ref rows)) if rows.len() == 1));
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_view_untouched() {
        let source = FixedSource { responses: HashMap::new() };
        let mut flow = DashboardFlow::new();
        let mut view = RecordingView::default();

        let outcome = flow.refresh(&source, "missing", &mut view).await;
        match outcome {
            RefreshOutcome::Failed(e) => assert!(e.is_fetch()),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(view.summary.is_none());
        assert!(view.table.is_none());
        assert!(view.created.is_empty());
    }

    #[test]
    fn test_chart_failure_keeps_summary() {
        let mut flow = DashboardFlow::new();
        let mut view = RecordingView { fail_charts: true, ..Default::default() };

        let ticket = flow.begin("P1");
        let outcome = flow.apply(&ticket, Ok(example_data()), &mut view);

        assert!(matches!(outcome, RefreshOutcome::Failed(DashboardError::Render(_))));
        assert!(view.summary.is_some());
        assert!(view.table.is_none());
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut flow = DashboardFlow::new();
        let mut view = RecordingView::default();

        let first = flow.begin("P1");
        let second = flow.begin("P2");

        let mut newer = example_data();
        newer.total_reviews = 10;

        assert_eq!(flow.apply(&second, Ok(newer), &mut view), RefreshOutcome::Applied);
        assert_eq!(flow.apply(&first, Ok(example_data()), &mut view), RefreshOutcome::Stale);
        assert_eq!(view.summary.unwrap().total_reviews, 10);
    }

    #[test]
    fn test_stale_failure_is_not_reported() {
        let mut flow: DashboardFlow<&'static str> = DashboardFlow::new();
        let mut view = RecordingView::default();

        let first = flow.begin("P1");
        let _second = flow.begin("P2");

        let outcome = flow.apply(&first, Err(DashboardError::network("timeout")), &mut view);
        assert_eq!(outcome, RefreshOutcome::Stale);
    }
}
