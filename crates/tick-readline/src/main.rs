use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Editor;
use rustyline::{Context, Helper};

use tick_application::TaskUsecase;
use tick_core::config::TickConfig;
use tick_core::notify::{Notifier, NullNotifier, Severity};
use tick_core::task::{Filter, TaskRepository};
use tick_infrastructure::{ConfigService, JsonTaskRepository};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/add".to_string(),
                "/done".to_string(),
                "/rm".to_string(),
                "/edit".to_string(),
                "/clear".to_string(),
                "/filter".to_string(),
                "/list".to_string(),
                "/stats".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Prints notifications as colored toast-like lines.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        let line = format!("[{}] {}", title, message);
        let line = match severity {
            Severity::Success => line.bright_green(),
            Severity::Info => line.bright_blue(),
            Severity::Warning => line.yellow(),
        };
        println!("{}", line);
    }
}

fn init_tracing() {
    // Logs go to stderr so the task list on stdout stays clean.
    let filter = tracing_subscriber::EnvFilter::try_from_env("TICK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the currently visible tasks with 1-based indexes, followed by the
/// counters line. The indexes are what `/done`, `/rm` and `/edit` address.
async fn print_list(usecase: &TaskUsecase) {
    let tasks = usecase.visible_tasks().await;
    let stats = usecase.stats().await;
    let filter = usecase.filter().await;

    if tasks.is_empty() {
        println!("{}", "(no tasks)".bright_black());
    }
    for (i, task) in tasks.iter().enumerate() {
        if task.completed {
            println!("{}", format!("{:>3}. [x] {}", i + 1, task.text).bright_black());
        } else {
            println!("{:>3}. [ ] {}", i + 1, task.text);
        }
    }
    println!(
        "{}",
        format!(
            "{} total · {} pending · filter: {}",
            stats.total, stats.pending, filter
        )
        .bright_black()
    );
}

/// Maps a 1-based position in the visible list to a task id.
async fn resolve_index(usecase: &TaskUsecase, arg: &str) -> Option<String> {
    let n: usize = arg.parse().ok()?;
    let visible = usecase.visible_tasks().await;
    visible.get(n.checked_sub(1)?).map(|t| t.id.clone())
}

async fn handle_command(usecase: &TaskUsecase, line: &str) -> Result<()> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "/add" => {
            if usecase.add(rest).await? {
                print_list(usecase).await;
            } else {
                println!("{}", "Nothing to add: text is empty".yellow());
            }
        }
        "/done" => match resolve_index(usecase, rest).await {
            Some(id) => {
                usecase.toggle(&id).await?;
                print_list(usecase).await;
            }
            None => println!("{}", "No such task".yellow()),
        },
        "/rm" => match resolve_index(usecase, rest).await {
            Some(id) => {
                usecase.remove(&id).await?;
                print_list(usecase).await;
            }
            None => println!("{}", "No such task".yellow()),
        },
        "/edit" => {
            let (index_arg, text) = match rest.split_once(' ') {
                Some((index_arg, text)) => (index_arg, text.trim()),
                None => (rest, ""),
            };
            match resolve_index(usecase, index_arg).await {
                Some(id) => {
                    usecase.start_edit(&id).await;
                    if usecase.save_edit(&id, text).await? {
                        print_list(usecase).await;
                    } else {
                        usecase.cancel_edit().await;
                        println!("{}", "Edit cancelled: new text is empty".yellow());
                    }
                }
                None => println!("{}", "No such task".yellow()),
            }
        }
        "/clear" => {
            usecase.clear_completed().await?;
            print_list(usecase).await;
        }
        "/filter" => match rest.parse::<Filter>() {
            Ok(filter) => {
                usecase.set_filter(filter).await;
                print_list(usecase).await;
            }
            Err(e) => println!("{}", e.yellow()),
        },
        "/list" => print_list(usecase).await,
        "/stats" => {
            let stats = usecase.stats().await;
            println!(
                "total: {}  completed: {}  pending: {}",
                stats.total, stats.completed, stats.pending
            );
        }
        _ => println!("{}", "Unknown command".bright_black()),
    }

    Ok(())
}

/// The main entry point for the tick readline REPL application.
///
/// This async function sets up a rustyline-based REPL that:
/// 1. Loads the configuration and opens the persisted task collection
/// 2. Restores the collection into the store and applies the default filter
/// 3. Provides command completion for the slash commands
/// 4. Reprints the visible list after every mutating command
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // ===== Backend Initialization =====
    let config = ConfigService::new().load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        TickConfig::default()
    });

    let repository: Arc<dyn TaskRepository> = match &config.data_dir {
        Some(dir) => Arc::new(JsonTaskRepository::new(dir.join("tasks.json"))),
        None => Arc::new(JsonTaskRepository::default_location()?),
    };
    let notifier: Arc<dyn Notifier> = if config.notifications {
        Arc::new(ConsoleNotifier)
    } else {
        Arc::new(NullNotifier)
    };

    let usecase = TaskUsecase::new(repository, notifier);
    usecase.restore().await;
    usecase.set_filter(config.default_filter).await;

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== tick ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/add <text>' to add a task, '/list' to view tasks, or 'quit' to exit."
            .bright_black()
    );
    println!();
    print_list(&usecase).await;

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if let Err(e) = handle_command(&usecase, trimmed).await {
                    eprintln!("{}", format!("Error: {}", e).red());
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
