use anyhow::{Context, Result};
use chatmark_config::{Config, HtmlConfig, OutputFormat};
use chatmark_engine::{Document, HtmlOptions, parsing::snapshot, render_html, segment};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{IsTerminal, Read, Stdout, stdin, stdout},
    process,
};

mod args;
mod view;

use args::{Command, Input, USAGE};
use view::Viewer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (format, input) = match args::parse_args(env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(Command::Render { format, input }) => (format, input),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!(
                "No config file at {}, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (title, text) = read_input(&input)?;
    let doc = segment(&text);
    log::info!("Parsed {} into {} blocks", title, doc.blocks.len());

    let format = format.unwrap_or(config.default_format);
    if format == OutputFormat::Tui {
        if stdout().is_terminal() {
            return run_viewer(Viewer::new(title, &doc));
        }
        log::warn!("stdout is not a terminal, printing the outline instead");
    }

    print!("{}", render_to_string(&doc, format, &config)?);
    Ok(())
}

fn read_input(input: &Input) -> Result<(String, String)> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            stdin()
                .read_to_string(&mut text)
                .context("Failed to read message from stdin")?;
            Ok(("stdin".to_string(), text))
        }
        Input::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read message from {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
    }
}

fn html_options(html: &HtmlConfig) -> HtmlOptions {
    HtmlOptions {
        container_class: html.container_class.clone(),
        open_links_in_new_tab: html.open_links_in_new_tab,
    }
}

/// Renders the non-interactive formats. `Tui` falls back to the outline.
fn render_to_string(doc: &Document, format: OutputFormat, config: &Config) -> Result<String> {
    let out = match format {
        OutputFormat::Html => {
            let mut html = render_html(doc, &html_options(&config.html));
            html.push('\n');
            html
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(doc)?;
            json.push('\n');
            json
        }
        OutputFormat::Outline | OutputFormat::Tui => snapshot::normalize(doc),
    };
    Ok(out)
}

fn run_viewer(mut viewer: Viewer) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> Result<()> {
    loop {
        terminal.draw(|f| view::ui(f, viewer))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_up(),
                KeyCode::Home | KeyCode::Char('g') => viewer.top(),
                KeyCode::End | KeyCode::Char('G') => viewer.bottom(),
                _ => {}
            }
        }
    }
}
