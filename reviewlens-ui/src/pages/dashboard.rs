//! Dashboard Page
//!
//! Product sidebar, stats cards, sentiment charts and recent reviews.
//! Selecting a product runs the core refresh flow; a response that arrives
//! after a newer selection is dropped.

use leptos::*;

use reviewlens::{
    load_products, ChartSeries, ChartSpec, ChartSurface, DashboardError, DashboardFlow,
    DashboardResult, DashboardSource, DashboardView, Product, ProductSelection, RefreshOutcome,
    ReviewTable, SummaryStats, AREA_CHART, DONUT_CHART,
};

use crate::api::GlooSource;
use crate::components::chart::{self as apex, ApexCharts};
use crate::components::{AddProduct, ChartPanel, ProductList, ReviewsTable, StatsCards};
use crate::state::GlobalState;

/// Rendering surface handed to the refresh flow
#[derive(Clone, Copy)]
struct PageView {
    summary: WriteSignal<Option<SummaryStats>>,
    reviews: WriteSignal<ReviewTable>,
    area: NodeRef<html::Div>,
    donut: NodeRef<html::Div>,
}

impl PageView {
    fn element(&self, spec: &ChartSpec) -> DashboardResult<HtmlElement<html::Div>> {
        let node = if spec.element_id == AREA_CHART.element_id {
            self.area
        } else {
            self.donut
        };
        node.get_untracked()
            .ok_or_else(|| DashboardError::Render(format!("#{} is not mounted", spec.element_id)))
    }
}

impl ChartSurface for PageView {
    type Handle = ApexCharts;

    fn create_chart(&mut self, spec: &ChartSpec, series: &ChartSeries) -> DashboardResult<ApexCharts> {
        let element = self.element(spec)?;
        apex::create(&element, spec, series)
    }

    fn update_chart(
        &mut self,
        handle: &mut ApexCharts,
        spec: &ChartSpec,
        series: &ChartSeries,
    ) -> DashboardResult<()> {
        apex::update(handle, spec, series)
    }
}

impl DashboardView for PageView {
    fn show_summary(&mut self, summary: &SummaryStats) {
        self.summary.set(Some(summary.clone()));
    }

    fn show_reviews(&mut self, table: &ReviewTable) {
        self.reviews.set(table.clone());
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (summary, set_summary) = create_signal(None::<SummaryStats>);
    let (reviews, set_reviews) = create_signal(ReviewTable::default());
    let area_ref = create_node_ref::<html::Div>();
    let donut_ref = create_node_ref::<html::Div>();

    let view_handle = PageView {
        summary: set_summary,
        reviews: set_reviews,
        area: area_ref,
        donut: donut_ref,
    };

    // Request tokens and chart handles live with this page
    let flow = store_value(DashboardFlow::<ApexCharts>::new());

    let load_dashboard = move |pid: String| {
        let Some(ticket) = flow.try_with_value(|f| f.begin(&pid)) else {
            return;
        };

        spawn_local(async move {
            let result = GlooSource::default().fetch_dashboard(&ticket.pid).await;

            let mut page = view_handle;
            match flow.try_update_value(|f| f.apply(&ticket, result, &mut page)) {
                Some(RefreshOutcome::Applied) | None => {}
                Some(RefreshOutcome::Stale) => {
                    web_sys::console::debug_1(
                        &format!("Dropped stale dashboard response for {}", ticket.pid).into(),
                    );
                }
                Some(RefreshOutcome::Failed(e)) => {
                    web_sys::console::error_1(&format!("Error loading dashboard data: {}", e).into());
                }
            }
        });
    };

    let select = Callback::new(move |pid: String| {
        let known = state.products.try_update(|s| s.select(&pid)).unwrap_or(false);
        if known {
            load_dashboard(pid);
        }
    });

    let added = Callback::new(move |product: Product| {
        let pid = product.pid.clone();
        state.products.update(|s| s.push_and_select(product));
        load_dashboard(pid);
    });

    // Bootstrap the product list once per page load
    spawn_local(async move {
        let selection = match load_products(&GlooSource::default()).await {
            Ok(selection) => {
                if selection.is_empty() {
                    web_sys::console::warn_1(&"No products found.".into());
                }
                selection
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch products: {}", e).into());
                ProductSelection::default()
            }
        };
        let first = selection.active().map(|p| p.pid.clone());

        state.products.set(selection);
        state.products_loaded.set(true);

        if let Some(pid) = first {
            load_dashboard(pid);
        }
    });

    view! {
        <div class="dashboard">
            <ProductList on_select=select>
                <AddProduct on_added=added />
            </ProductList>

            <div class="dashboard-main">
                <StatsCards summary=summary />

                <div class="charts">
                    <ChartPanel title="Sentiment by Category" spec=AREA_CHART node_ref=area_ref />
                    <ChartPanel title="Sentiment Share" spec=DONUT_CHART node_ref=donut_ref />
                </div>

                <ReviewsTable table=reviews />
            </div>
        </div>
    }
}
