// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

// Item Remote - CLI Client
// Command-line front-end for sending commands to the Item assistant

mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{open_store, FieldOverrides, FileSettingsStore};
use item_remote_common::{obfuscate_token, SettingsStore};
use item_remote_gui_core::{MainEvent, MainScreen, SettingsScreen, StatusColor, StatusLine};

#[derive(Parser)]
#[command(name = "item-remote")]
#[command(about = "Send commands to the Item assistant on your computer", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single command
    Send {
        /// Command text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },

    /// Check whether the companion is online
    Health,

    /// Interactive session: type commands until `:exit`
    Shell,

    /// Connection settings
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the stored settings
    Show,
    /// Update and save settings
    Set {
        #[command(flatten)]
        fields: FieldOverrides,
    },
    /// Test a connection without saving
    Test {
        #[command(flatten)]
        fields: FieldOverrides,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = open_store(cli.settings)?;
    debug!("Using settings file {}", store.path().display());

    match cli.command {
        Commands::Send { command } => {
            send_command(&store, command.join(" ")).await?;
        }
        Commands::Health => {
            check_health(&store).await?;
        }
        Commands::Shell => {
            run_shell(&store).await?;
        }
        Commands::Config { action } => match action {
            ConfigCommands::Show => show_config(&store)?,
            ConfigCommands::Set { fields } => save_config(store, &fields)?,
            ConfigCommands::Test { fields } => test_config(store, &fields).await?,
        },
    }

    Ok(())
}

fn paint(line: &StatusLine) -> ColoredString {
    match line.color {
        StatusColor::Green => line.text.green(),
        StatusColor::Red => line.text.red(),
        StatusColor::Gray => line.text.dimmed(),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Submit whatever is in the screen's command field and wait for the outcome
///
/// Returns whether the companion reported success.
async fn submit_and_wait(
    screen: &mut MainScreen,
    events: &mut item_remote_gui_core::EventReceiver<MainEvent>,
) -> Result<bool> {
    let Some(task) = screen.submit_command() else {
        println!("{}", screen.response_text.yellow());
        return Ok(false);
    };

    let bar = spinner("Sending...");
    task.await.context("Command task failed")?;
    bar.finish_and_clear();

    let event = events
        .recv()
        .await
        .context("Command finished without an outcome")?;
    let success = matches!(&event, MainEvent::CommandCompleted(result) if result.success);
    screen.apply(event);

    if success {
        println!("{}", screen.response_text.green());
    } else {
        println!("{}", screen.response_text.red());
    }
    Ok(success)
}

async fn send_command(store: &FileSettingsStore, command: String) -> Result<()> {
    let (mut screen, mut events) = MainScreen::open(store)?;
    screen.command_input = command;

    if !submit_and_wait(&mut screen, &mut events).await? {
        std::process::exit(1);
    }
    Ok(())
}

async fn refresh_status(
    screen: &mut MainScreen,
    events: &mut item_remote_gui_core::EventReceiver<MainEvent>,
) -> Result<()> {
    let bar = spinner("Checking connection...");
    screen
        .check_connection()
        .await
        .context("Health check task failed")?;
    bar.finish_and_clear();

    if let Some(event) = events.recv().await {
        screen.apply(event);
    }
    Ok(())
}

async fn check_health(store: &FileSettingsStore) -> Result<()> {
    let (mut screen, mut events) = MainScreen::open(store)?;
    refresh_status(&mut screen, &mut events).await?;

    println!(
        "{}  {}",
        paint(&screen.status),
        screen.client().base_url().dimmed()
    );
    if screen.status.color != StatusColor::Green {
        std::process::exit(1);
    }
    Ok(())
}

/// One line typed into the interactive shell
///
/// Built-ins carry a `:` prefix so that any plain text, including words like
/// `history`, is sent to the companion as a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellInput {
    Quit,
    Voice,
    History,
    Command,
}

impl ShellInput {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":exit" | ":quit" | ":q" => Self::Quit,
            ":voice" => Self::Voice,
            ":history" => Self::History,
            _ => Self::Command,
        }
    }
}

async fn run_shell(store: &FileSettingsStore) -> Result<()> {
    let (mut screen, mut events) = MainScreen::open(store)?;
    refresh_status(&mut screen, &mut events).await?;

    println!(
        "{} {}",
        "Item Remote".bold().green(),
        screen.client().base_url().dimmed()
    );
    println!("Status: {}", paint(&screen.status));
    println!(
        "{}",
        "Type a command. `:voice` and `:history` are built in, `:exit` quits.".dimmed()
    );
    println!();

    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read command")?;

        match ShellInput::parse(&line) {
            ShellInput::Quit => break,
            ShellInput::Voice => {
                screen.start_voice_input();
                println!("{}", screen.response_text.yellow());
            }
            ShellInput::History => {
                screen.show_history();
                println!("{}", screen.response_text.yellow());
            }
            ShellInput::Command => {
                screen.command_input = line;
                submit_and_wait(&mut screen, &mut events).await?;
            }
        }
        println!();
    }

    Ok(())
}

fn show_config(store: &FileSettingsStore) -> Result<()> {
    let config = store.load().context("Failed to load settings")?;

    println!("{}", "Connection settings".bold());
    println!("  Host:  {}", config.host.cyan());
    println!("  Port:  {}", config.port.to_string().cyan());
    if config.auth_token.is_empty() {
        println!("  Token: {}", "(not set)".yellow());
    } else {
        println!("  Token: {}", obfuscate_token(&config.auth_token));
    }
    println!("  File:  {}", store.path().display().to_string().dimmed());
    Ok(())
}

fn save_config(store: FileSettingsStore, fields: &FieldOverrides) -> Result<()> {
    let (mut screen, _events) = SettingsScreen::open(Arc::new(store))?;
    fields.apply_to(&mut screen);

    let saved = screen.save();
    if let Some(status) = &screen.status {
        println!("{}", paint(status));
    }
    if !saved {
        std::process::exit(1);
    }
    Ok(())
}

async fn test_config(store: FileSettingsStore, fields: &FieldOverrides) -> Result<()> {
    let (mut screen, mut events) = SettingsScreen::open(Arc::new(store))?;
    fields.apply_to(&mut screen);

    if let Some(task) = screen.test_connection() {
        let bar = spinner("Testing connection...");
        task.await.context("Connection test task failed")?;
        bar.finish_and_clear();

        if let Some(event) = events.recv().await {
            screen.apply(event);
        }
    }

    let ok = match &screen.status {
        Some(status) => {
            println!("{}", paint(status));
            status.color == StatusColor::Green
        }
        None => false,
    };
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_builtins_need_prefix() {
        assert_eq!(ShellInput::parse(":exit"), ShellInput::Quit);
        assert_eq!(ShellInput::parse(" :quit "), ShellInput::Quit);
        assert_eq!(ShellInput::parse(":voice"), ShellInput::Voice);
        assert_eq!(ShellInput::parse(":history"), ShellInput::History);

        for line in ["exit", "quit", "voice", "history", "show history", ""] {
            assert_eq!(ShellInput::parse(line), ShellInput::Command, "{line:?}");
        }
    }

    #[test]
    fn test_cli_parses_shell() {
        let cli = Cli::try_parse_from(["item-remote", "shell"]).unwrap();
        assert!(matches!(cli.command, Commands::Shell));
    }
}
