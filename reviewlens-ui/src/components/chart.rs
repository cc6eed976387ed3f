//! Chart Component
//!
//! Sentiment charts rendered by ApexCharts, which the page loads as a
//! global script. Option documents come from the core crate; this module
//! only hands them to the library.

use leptos::*;
use wasm_bindgen::prelude::*;

use reviewlens::{ChartSeries, ChartSpec, DashboardError, DashboardResult};

#[wasm_bindgen]
extern "C" {
    /// A rendered ApexCharts widget
    pub type ApexCharts;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &web_sys::Element, options: &JsValue) -> Result<ApexCharts, JsValue>;

    #[wasm_bindgen(method)]
    fn render(this: &ApexCharts) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = updateSeries)]
    fn update_series(this: &ApexCharts, series: &JsValue);

    #[wasm_bindgen(method, js_name = updateOptions)]
    fn update_options(this: &ApexCharts, options: &JsValue);
}

fn to_js(value: &serde_json::Value) -> DashboardResult<JsValue> {
    js_sys::JSON::parse(&value.to_string())
        .map_err(|e| DashboardError::Render(format!("invalid chart options: {:?}", e)))
}

/// Create and render a widget inside `element`
pub fn create(element: &web_sys::Element, spec: &ChartSpec, series: &ChartSeries) -> DashboardResult<ApexCharts> {
    let options = to_js(&spec.initial_options(series))?;
    let chart = ApexCharts::new(element, &options).map_err(|e| {
        DashboardError::Render(format!("ApexCharts unavailable for #{}: {:?}", spec.element_id, e))
    })?;
    let element_id = spec.element_id;
    let on_reject = Closure::<dyn FnMut(JsValue)>::new(move |e: JsValue| {
        web_sys::console::error_2(&format!("Chart render failed for #{}", element_id).into(), &e);
    });
    let _ = chart.render().catch(&on_reject);
    on_reject.forget();
    Ok(chart)
}

/// Push new data into an existing widget
pub fn update(chart: &ApexCharts, spec: &ChartSpec, series: &ChartSeries) -> DashboardResult<()> {
    chart.update_series(&to_js(&spec.series_payload(series))?);
    chart.update_options(&to_js(&spec.options_patch(series))?);
    Ok(())
}

/// Card holding one chart element
#[component]
pub fn ChartPanel(
    /// Card heading
    title: &'static str,
    /// Chart the element belongs to
    spec: ChartSpec,
    /// Handle the refresh flow renders into
    node_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <section class="card chart-card">
            <h2>{title}</h2>
            <div id=spec.element_id node_ref=node_ref class="chart" />
        </section>
    }
}
