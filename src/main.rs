use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ml_tictactoe::ai::{Agent, OracleAgent, RandomAgent};
use ml_tictactoe::config::{AppConfig, OpponentKind};
use ml_tictactoe::model::MlpRegressor;
use ml_tictactoe::ui::App;

/// Play tic-tac-toe against a pre-trained MLP regressor.
#[derive(Parser)]
#[command(name = "ml_tictactoe", about = "Play tic-tac-toe against an MLP model")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the model weight file path
    #[arg(long)]
    model: Option<PathBuf>,

    /// Override the opponent: mlp or random
    #[arg(long)]
    opponent: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(model) = cli.model {
        config.model.path = model;
    }
    if let Some(opponent) = cli.opponent.as_deref() {
        config.opponent = match opponent {
            "mlp" => OpponentKind::Mlp,
            "random" => OpponentKind::Random,
            other => bail!("unknown opponent '{}' (expected 'mlp' or 'random')", other),
        };
    }
    config.validate()?;

    // The predictive model is loaded once, before the terminal takes over;
    // a load failure is fatal with no recovery path.
    let agent: Box<dyn Agent> = match config.opponent {
        OpponentKind::Mlp => {
            let model = MlpRegressor::load(&config.model.path)
                .with_context(|| format!("loading model from {}", config.model.path.display()))?;
            Box::new(OracleAgent::new(Box::new(model)))
        }
        OpponentKind::Random => Box::new(RandomAgent::new()),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(agent);
    let res = app.run(&mut terminal);

    // Restore the terminal before surfacing any error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}
