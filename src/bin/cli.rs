//! ReviewLens CLI
//!
//! Command-line interface for the review dashboard:
//! - List products
//! - Show a product's dashboard (summary, charts, recent reviews)
//! - Register a product for scraping
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reviewlens::chart::{ChartKind, ChartSeries, ChartSpec, ChartSurface};
use reviewlens::config::{generate_default_config, Config, LoggingConfig};
use reviewlens::present::{render_review_table_html, ReviewTable, SummaryStats};
use reviewlens::{
    bootstrap, DashboardFlow, DashboardResult, DashboardSource, DashboardView, HttpSource,
    NewProduct, RefreshOutcome,
};

#[derive(Parser)]
#[command(name = "reviewlens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Product review sentiment dashboard")]
#[command(long_about = "ReviewLens shows what customers think of a product.\nSentiment share, average rating and the latest reviews, straight from the review API.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Review API URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json, html)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List products
    Products,

    /// Show the dashboard of a product
    Dashboard {
        /// Product id (default: first product)
        pid: Option<String>,
    },

    /// Register a product and scrape its reviews
    Add {
        /// Product id on the marketplace
        pid: String,
        /// Display name
        name: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }

    init_logging(&config.logging);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let source = HttpSource::new(config.api.source_config())?;
    let format = config.output.format.as_str();

    match cli.command {
        Commands::Products => {
            let products = source.fetch_products().await.with_context(|| {
                format!("Cannot load products from {}", config.api.base_url)
            })?;

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else if products.is_empty() {
                println!("No products found.");
                println!();
                println!("Add your first product with:");
                println!("  reviewlens add <PID> <NAME>");
            } else {
                println!("  {:<24} {}", "PID", "Name");
                println!("{}", "-".repeat(60));
                for (idx, product) in products.iter().enumerate() {
                    let marker = if idx == 0 { "*" } else { " " };
                    println!("{} {:<24} {}", marker, product.pid, product.name);
                }
            }
        }

        Commands::Dashboard { pid } => {
            let pid = match pid {
                Some(pid) => pid,
                None => {
                    let selection = bootstrap(&source).await;
                    match selection.active() {
                        Some(product) => product.pid.clone(),
                        None => {
                            eprintln!("No products available at {}", config.api.base_url);
                            std::process::exit(1);
                        }
                    }
                }
            };

            let mut flow = DashboardFlow::new();
            let mut view = SnapshotView::default();

            match flow.refresh(&source, &pid, &mut view).await {
                RefreshOutcome::Applied => view.print(&pid, format)?,
                RefreshOutcome::Stale => {
                    eprintln!("Dashboard response for {} was superseded", pid);
                    std::process::exit(1);
                }
                RefreshOutcome::Failed(e) => {
                    eprintln!("Error loading dashboard data: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Add { pid, name } => {
            let response = source.add_product(&NewProduct { pid, name }).await?;

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.message);
                println!("  Product:   {} ({})", response.product.name, response.product.pid);
                println!("  Scraped:   {} reviews", response.reviews_scraped);
                println!("  Analyzed:  {} reviews", response.sentiment_analyzed);
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("reviewlens={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Collects one refresh for printing
#[derive(Default)]
struct SnapshotView {
    summary: Option<SummaryStats>,
    charts: Vec<(ChartKind, ChartSeries)>,
    table: ReviewTable,
}

impl ChartSurface for SnapshotView {
    type Handle = usize;

    fn create_chart(&mut self, spec: &ChartSpec, series: &ChartSeries) -> DashboardResult<usize> {
        self.charts.push((spec.kind, series.clone()));
        Ok(self.charts.len() - 1)
    }

    fn update_chart(
        &mut self,
        handle: &mut usize,
        _spec: &ChartSpec,
        series: &ChartSeries,
    ) -> DashboardResult<()> {
        if let Some(chart) = self.charts.get_mut(*handle) {
            chart.1 = series.clone();
        }
        Ok(())
    }
}

impl DashboardView for SnapshotView {
    fn show_summary(&mut self, summary: &SummaryStats) {
        self.summary = Some(summary.clone());
    }

    fn show_reviews(&mut self, table: &ReviewTable) {
        self.table = table.clone();
    }
}

impl SnapshotView {
    fn print(&self, pid: &str, format: &str) -> anyhow::Result<()> {
        match format {
            "json" => {
                let doc = serde_json::json!({
                    "pid": pid,
                    "generated_at": chrono::Utc::now().to_rfc3339(),
                    "summary": self.summary.as_ref().map(|s| serde_json::json!({
                        "positive": s.positive_label(),
                        "rating": s.rating_label(),
                        "total_reviews": s.total_reviews,
                    })),
                    "sentiment": self.charts.first().map(|(_, series)| series),
                    "recent_reviews": self.table,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
            "html" => {
                println!("{}", render_review_table_html(&self.table));
            }
            _ => self.print_table(pid),
        }
        Ok(())
    }

    fn print_table(&self, pid: &str) {
        println!("Dashboard: {}", pid);
        println!();

        if let Some(summary) = &self.summary {
            println!("  Positive:  {}", summary.positive_label());
            println!("  Rating:    {}", summary.rating_label());
            println!("  Reviews:   {}", summary.total_label());
        }

        if let Some((_, series)) = self.charts.iter().find(|(kind, _)| *kind == ChartKind::Donut) {
            println!();
            println!("Sentiment:");
            let total: u128 = series.counts.iter().map(|&c| u128::from(c)).sum();
            for (label, count) in series.labels.iter().zip(&series.counts) {
                let width = bar_width(*count, total);
                println!("  {:<10} {:>5} {}", label, count, "#".repeat(width));
            }
        }

        println!();
        println!("Recent reviews:");
        match &self.table {
            ReviewTable::Placeholder(message) => println!("  {}", message),
            ReviewTable::Rows(rows) => {
                println!("  {:<14} {:<18} {:<6} {:<9} {}", "Date", "Reviewer", "Rating", "Sentiment", "Text");
                println!("{}", "-".repeat(100));
                for row in rows {
                    println!(
                        "  {:<14} {:<18} {} {:<9} {}",
                        row.date, row.reviewer, row.stars, row.sentiment_label, row.text
                    );
                }
            }
        }
    }
}

/// Width of a sentiment bar, at most 30 columns
fn bar_width(count: u64, total: u128) -> usize {
    if total == 0 {
        return 0;
    }
    (u128::from(count) * 30 / total) as usize
}
