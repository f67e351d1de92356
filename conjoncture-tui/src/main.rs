//! Conjoncture: terminal dashboard for annual wage negotiations.
//!
//! Tabs:
//! 1. Pouvoir d'achat: inflation against SMIC and base wages
//! 2. Salaires: median wage, gender gap, sectors, profit-sharing bonus
//! 3. Emploi: six sub-tabs from unemployment to job flows
//! 4. Inflation: yearly and per-component inflation

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use conjoncture_core::{DashboardConfig, Dataset};
use conjoncture_tui::{handle_key, ui, AppState};

#[derive(Parser, Debug)]
#[command(name = "conjoncture", version, about = "Indicateurs économiques pour les NAO")]
struct Args {
    /// Configuration file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial tab id or number, overrides the configuration
    #[arg(short, long)]
    tab: Option<String>,

    /// Initial employment sub-tab id or number
    #[arg(short, long)]
    sub: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = DashboardConfig::discover(args.config.as_deref())
        .context("failed to load configuration")?;
    if args.tab.is_some() {
        config.initial_tab = args.tab;
    }
    if args.sub.is_some() {
        config.initial_sub_tab = args.sub;
    }

    init_logging(&config);
    tracing::info!(tick_ms = config.tick_ms(), "starting dashboard");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::from_config(Dataset::bundled(), &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, Duration::from_millis(config.tick_ms()));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        if !app.running {
            return Ok(());
        }
    }
}

/// The terminal belongs to the UI, so logs go to a file or nowhere.
fn init_logging(config: &DashboardConfig) {
    let Some(path) = config.log.file.clone().or_else(default_log_path) else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.log.level.clone()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .init();
}

fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("conjoncture").join("conjoncture.log"))
}
