//! Conjoncture CLI: the dashboard's panels and summaries, without a terminal UI.
//!
//! Commands:
//! - `panels`: composed panels of a tab as pretty JSON
//! - `export`: one panel's rows as CSV
//! - `indicators`: key indicators as a table
//! - `report`: markdown negotiation brief

mod export;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use conjoncture_core::indicators::KeyIndicators;
use conjoncture_core::report::MarkdownBrief;
use conjoncture_core::{
    ComposedPanel, ConfigError, DashboardConfig, DashboardError, Dataset, NavigationState,
    PrimaryTab, SecondaryTab,
};

#[derive(Parser)]
#[command(
    name = "conjoncture-cli",
    version,
    about = "Indicateurs économiques pour les NAO, en ligne de commande"
)]
struct Cli {
    /// Configuration file (default: platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the composed panels of a tab as JSON.
    Panels {
        /// Tab id or number: purchasing_power, wages, employment, inflation.
        #[arg(long)]
        tab: Option<String>,

        /// Employment sub-tab id or number.
        #[arg(long)]
        sub: Option<String>,
    },
    /// Export one panel's rows as CSV.
    Export {
        #[arg(long)]
        tab: Option<String>,

        #[arg(long)]
        sub: Option<String>,

        /// Panel position within the tab, starting at 1.
        #[arg(long, default_value_t = 1)]
        panel: usize,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the key indicators.
    Indicators,
    /// Write the markdown negotiation brief.
    Report {
        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = DashboardConfig::discover(cli.config.as_deref())
        .context("failed to load configuration")?;
    init_logging(if cli.verbose { "debug" } else { config.log.level.as_str() });

    let dataset = Dataset::bundled();
    match cli.command {
        Commands::Panels { tab, sub } => run_panels(&dataset, &config, tab, sub),
        Commands::Export {
            tab,
            sub,
            panel,
            output,
        } => run_export(&dataset, &config, tab, sub, panel, output.as_deref()),
        Commands::Indicators => {
            print_indicators(&KeyIndicators::from_dataset(&dataset));
            Ok(())
        }
        Commands::Report { output } => run_report(&dataset, output.as_deref()),
    }
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Resolve the selection: flags first, then the configured start tabs.
fn selection(
    config: &DashboardConfig,
    tab: Option<String>,
    sub: Option<String>,
) -> Result<NavigationState> {
    let mut config = config.clone();
    if tab.is_some() {
        config.initial_tab = tab;
    }
    if sub.is_some() {
        config.initial_sub_tab = sub;
    }
    config.strict_navigation().map_err(with_choices)
}

fn primary_ids() -> Vec<&'static str> {
    PrimaryTab::ALL.iter().map(|t| t.id()).collect()
}

fn secondary_ids() -> Vec<&'static str> {
    SecondaryTab::ALL.iter().map(|t| t.id()).collect()
}

fn with_choices(err: ConfigError) -> anyhow::Error {
    let ids = match &err {
        ConfigError::InvalidSelection(DashboardError::InvalidSelection { kind, .. })
            if *kind == "sub-tab" =>
        {
            secondary_ids()
        }
        _ => primary_ids(),
    };
    anyhow!("{err} (valid: {})", ids.join(", "))
}

fn run_panels(
    dataset: &Dataset,
    config: &DashboardConfig,
    tab: Option<String>,
    sub: Option<String>,
) -> Result<()> {
    let nav = selection(config, tab, sub)?;
    let panels = nav.compose(dataset);
    warn_unavailable(&panels);
    println!("{}", serde_json::to_string_pretty(&panels)?);
    Ok(())
}

fn run_export(
    dataset: &Dataset,
    config: &DashboardConfig,
    tab: Option<String>,
    sub: Option<String>,
    panel: usize,
    output: Option<&Path>,
) -> Result<()> {
    let nav = selection(config, tab, sub)?;
    let panels = nav.compose(dataset);
    let chosen = panel
        .checked_sub(1)
        .and_then(|i| panels.get(i))
        .ok_or_else(|| {
            anyhow!(
                "panel {panel} out of range: tab '{}' has {} panel(s)",
                nav.primary().id(),
                panels.len()
            )
        })?;
    let csv = export::panel_csv(chosen)?;
    write_output(&csv, output)
}

fn run_report(dataset: &Dataset, output: Option<&Path>) -> Result<()> {
    let mut report = MarkdownBrief.generate(dataset);
    report.push_str(&format!(
        "\n---\n_Généré le {}_\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));
    write_output(&report, output)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "written");
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn warn_unavailable(panels: &[ComposedPanel]) {
    for panel in panels {
        if let Err(err) = &panel.rows {
            tracing::warn!(panel = panel.title(), %err, "panel unavailable");
        }
    }
}

fn print_indicators(kpi: &KeyIndicators) {
    println!();
    println!("=== Indicateurs clés ({}) ===", kpi.last_updated);
    for (label, value) in kpi.rows() {
        println!("{:<20}{}", format!("{label}:"), value);
    }
    if let Some(gain) = kpi.smic_real_gain() {
        println!("{:<20}{:+.1} pts", "SMIC réel:", gain);
    }
    if let Some(gap) = &kpi.gender_pay_gap {
        println!("{:<20}{:.1}% ({})", "Écart F/H:", gap.value, gap.period);
    }
}
