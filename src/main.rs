// cpp2py: translate a small C++ subset into Python

use std::fs;
use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};

use cpp2py::config::{Cli, Config};
use cpp2py::ui::App;
use cpp2py::{TranspileError, transpile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the -v level
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let source = fs::read_to_string(&config.input)?;
    info!("Translating {}", config.input.display());

    let result = transpile(&source, &config.generator);

    if let Ok(python) = &result {
        fs::write(&config.output, python)?;
        println!("Transpilation completed successfully!");
        println!("Generated file: {}", config.output.display());
    }

    if config.view {
        view(source, &result)?;
    }

    if let Err(e) = result {
        debug!("{} not written", config.output.display());
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn view(source: String, result: &Result<String, TranspileError>) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, result);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
