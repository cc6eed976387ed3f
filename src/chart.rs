//! Chart Widgets
//!
//! The dashboard shows the same sentiment counts twice: as an area series
//! and as a donut. This module builds the option documents the charting
//! library consumes and keeps the per-chart handles so the first refresh
//! creates a widget and later ones update it in place.

use serde_json::{json, Value};

use crate::error::DashboardResult;
use crate::model::SentimentCount;

/// Series name shown in the area chart tooltip
pub const SERIES_NAME: &str = "Reviews";

/// Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Category series
    Area,
    /// Proportion series
    Donut,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Area => "area",
            ChartKind::Donut => "donut",
        }
    }
}

/// Static description of one chart widget
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Id of the element the widget renders into
    pub element_id: &'static str,
    pub kind: ChartKind,
    pub height: u32,
    pub colors: &'static [&'static str],
}

/// Sentiment counts over time/category
pub const AREA_CHART: ChartSpec = ChartSpec {
    element_id: "chart0",
    kind: ChartKind::Area,
    height: 250,
    colors: &["#10B981", "#EF4444", "#6B7280"],
};

/// Sentiment proportions
pub const DONUT_CHART: ChartSpec = ChartSpec {
    element_id: "chart1",
    kind: ChartKind::Donut,
    height: 250,
    colors: &["#10B981", "#6B7280", "#EF4444"],
};

/// Labels and values shared by both charts, in arrival order
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

impl ChartSeries {
    pub fn from_counts(counts: &[SentimentCount]) -> Self {
        Self {
            labels: counts.iter().map(|c| c.sentiment.clone()).collect(),
            counts: counts.iter().map(|c| c.count).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl ChartSpec {
    /// Full option document for creating the widget
    pub fn initial_options(&self, series: &ChartSeries) -> Value {
        let chart = json!({ "type": self.kind.as_str(), "height": self.height });

        match self.kind {
            ChartKind::Area => json!({
                "chart": chart,
                "dataLabels": { "enabled": false },
                "stroke": { "curve": "smooth", "width": 2 },
                "series": self.series_payload(series),
                "xaxis": { "categories": series.labels },
                "colors": self.colors,
            }),
            ChartKind::Donut => json!({
                "chart": chart,
                "series": self.series_payload(series),
                "labels": series.labels,
                "colors": self.colors,
            }),
        }
    }

    /// Argument for the library's series update call
    pub fn series_payload(&self, series: &ChartSeries) -> Value {
        match self.kind {
            ChartKind::Area => json!([{ "name": SERIES_NAME, "data": series.counts }]),
            ChartKind::Donut => json!(series.counts),
        }
    }

    /// Argument for the library's options update call (labels only)
    pub fn options_patch(&self, series: &ChartSeries) -> Value {
        match self.kind {
            ChartKind::Area => json!({ "xaxis": { "categories": series.labels } }),
            ChartKind::Donut => json!({ "labels": series.labels }),
        }
    }
}

/// Anything that can draw a chart widget
pub trait ChartSurface {
    type Handle;

    /// Create and render a widget into `spec.element_id`
    fn create_chart(&mut self, spec: &ChartSpec, series: &ChartSeries)
        -> DashboardResult<Self::Handle>;

    /// Replace the data of an existing widget
    fn update_chart(
        &mut self,
        handle: &mut Self::Handle,
        spec: &ChartSpec,
        series: &ChartSeries,
    ) -> DashboardResult<()>;
}

/// Handles of the two dashboard charts, owned by the refresh flow
#[derive(Debug)]
pub struct ChartSlots<H> {
    area: Option<H>,
    donut: Option<H>,
}

impl<H> Default for ChartSlots<H> {
    fn default() -> Self {
        Self {
            area: None,
            donut: None,
        }
    }
}

impl<H> ChartSlots<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the widget on first use, update it afterwards
    pub fn ensure_chart<S>(
        &mut self,
        surface: &mut S,
        spec: &ChartSpec,
        series: &ChartSeries,
    ) -> DashboardResult<()>
    where
        S: ChartSurface<Handle = H> + ?Sized,
    {
        let slot = match spec.kind {
            ChartKind::Area => &mut self.area,
            ChartKind::Donut => &mut self.donut,
        };

        if let Some(handle) = slot.as_mut() {
            return surface.update_chart(handle, spec, series);
        }

        *slot = Some(surface.create_chart(spec, series)?);
        tracing::debug!(element = spec.element_id, "chart created");
        Ok(())
    }

    pub fn get(&self, kind: ChartKind) -> Option<&H> {
        match kind {
            ChartKind::Area => self.area.as_ref(),
            ChartKind::Donut => self.donut.as_ref(),
        }
    }

    /// Drop both handles, e.g. when the chart elements are unmounted
    pub fn clear(&mut self) {
        self.area = None;
        self.donut = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        created: Vec<&'static str>,
        updates: usize,
    }

    impl ChartSurface for CountingSurface {
        type Handle = usize;

        fn create_chart(&mut self, spec: &ChartSpec, _series: &ChartSeries) -> DashboardResult<usize> {
            self.created.push(spec.element_id);
            Ok(self.created.len())
        }

        fn update_chart(
            &mut self,
            _handle: &mut usize,
            _spec: &ChartSpec,
            _series: &ChartSeries,
        ) -> DashboardResult<()> {
            self.updates += 1;
            Ok(())
        }
    }

    fn sample_series() -> ChartSeries {
        ChartSeries::from_counts(&[
            SentimentCount { sentiment: "negative".to_string(), count: 2 },
            SentimentCount { sentiment: "positive".to_string(), count: 5 },
        ])
    }

    #[test]
    fn test_series_keeps_arrival_order() {
        let series = sample_series();
        assert_eq!(series.labels, vec!["negative", "positive"]);
        assert_eq!(series.counts, vec![2, 5]);
    }

    #[test]
    fn test_area_options() {
        let options = AREA_CHART.initial_options(&sample_series());
        assert_eq!(options["chart"]["type"], "area");
        assert_eq!(options["chart"]["height"], 250);
        assert_eq!(options["series"][0]["name"], SERIES_NAME);
        assert_eq!(options["series"][0]["data"], json!([2, 5]));
        assert_eq!(options["xaxis"]["categories"], json!(["negative", "positive"]));
        assert_eq!(options["colors"][1], "#EF4444");
    }

    #[test]
    fn test_donut_options() {
        let options = DONUT_CHART.initial_options(&sample_series());
        assert_eq!(options["chart"]["type"], "donut");
        assert_eq!(options["series"], json!([2, 5]));
        assert_eq!(options["labels"], json!(["negative", "positive"]));
        assert_eq!(options["colors"][1], "#6B7280");
    }

    #[test]
    fn test_update_payloads() {
        let series = sample_series();
        assert_eq!(
            AREA_CHART.options_patch(&series),
            json!({ "xaxis": { "categories": ["negative", "positive"] } })
        );
        assert_eq!(DONUT_CHART.series_payload(&series), json!([2, 5]));
    }

    #[test]
    fn test_ensure_creates_once_then_updates() {
        let mut surface = CountingSurface::default();
        let mut slots = ChartSlots::new();
        let series = sample_series();

        slots.ensure_chart(&mut surface, &AREA_CHART, &series).unwrap();
        slots.ensure_chart(&mut surface, &DONUT_CHART, &series).unwrap();
        slots.ensure_chart(&mut surface, &AREA_CHART, &series).unwrap();
        slots.ensure_chart(&mut surface, &DONUT_CHART, &series).unwrap();

        assert_eq!(surface.created, vec!["chart0", "chart1"]);
        assert_eq!(surface.updates, 2);
        assert_eq!(slots.get(ChartKind::Area), Some(&1));
        assert_eq!(slots.get(ChartKind::Donut), Some(&2));
    }

    #[test]
    fn test_clear_forces_recreate() {
        let mut surface = CountingSurface::default();
        let mut slots = ChartSlots::new();
        let series = sample_series();

        slots.ensure_chart(&mut surface, &AREA_CHART, &series).unwrap();
        slots.clear();
        slots.ensure_chart(&mut surface, &AREA_CHART, &series).unwrap();

        assert_eq!(surface.created.len(), 2);
        assert_eq!(surface.updates, 0);
    }
}
