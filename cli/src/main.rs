use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use deskchat::{
    ClientConfig, Conversation, FeedbackOutcome, FileStore, SessionStore, SupportApi,
    SupportBackend, Ticket, View, ViewState,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] deskchat::ClientError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "desk-cli", about = "Support desk chat and ticket CLI")]
struct Cli {
    #[arg(long, env = "SUPPORT_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "SUPPORT_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat session against the support assistant.
    Chat,
    /// Ask a single question and print the answer.
    Ask { question: String },
    /// Browse previously created tickets.
    Ticket(TicketCommand),
    /// Drop the persisted session and start fresh.
    Clear,
}

#[derive(Args, Debug)]
struct TicketCommand {
    #[command(subcommand)]
    command: TicketSubcommand,
}

#[derive(Subcommand, Debug)]
enum TicketSubcommand {
    /// List all tickets in server order.
    List,
    /// Replay one ticket's stored conversation.
    Show { ticket_id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);
    let backend = Arc::new(SupportApi::new(&config)?);

    match cli.command {
        Command::Chat => run_chat(backend, &config).await,
        Command::Ask { question } => run_ask(backend, &config, &question).await,
        Command::Ticket(ticket) => match ticket.command {
            TicketSubcommand::List => run_ticket_list(&backend).await,
            TicketSubcommand::Show { ticket_id } => run_ticket_show(&backend, ticket_id).await,
        },
        Command::Clear => run_clear(backend, &config).await,
    }
}

fn resolve_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_owned();
    }
    if let Some(path) = &cli.session_file {
        config.session_file = path.clone();
    }
    config
}

// =============================================================================
// CHAT
// =============================================================================

async fn run_chat(backend: Arc<SupportApi>, config: &ClientConfig) -> Result<(), CliError> {
    let store = FileStore::new(config.session_file.clone());
    let mut conversation = Conversation::open(backend.clone(), store).await;
    let mut view = ViewState::default();

    print_transcript(conversation.turns());
    println!("(type a question, or .good / .bad / .tickets / .clear / .quit)");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => {}
            ".quit" => break,
            ".clear" => {
                view.switch(View::Chat);
                conversation.clear().await;
                print_transcript(conversation.turns());
            }
            ".good" => rate_latest(&mut conversation, true).await,
            ".bad" => rate_latest(&mut conversation, false).await,
            ".tickets" => {
                if view.switch(View::Tickets) {
                    match backend.list_tickets().await {
                        Ok(tickets) => print_ticket_lines(&tickets),
                        Err(error) => eprintln!("could not fetch tickets: {error}"),
                    }
                }
            }
            question => {
                view.switch(View::Chat);
                match conversation.submit_question(question).await {
                    Ok(Some(id)) => {
                        if let Some(turn) = conversation.turn(id) {
                            println!("{}: {}", turn.speaker.label(), turn.display_text);
                            println!("(helpful? rate with .good / .bad)");
                        }
                    }
                    Ok(None) => {}
                    Err(error) => eprintln!("assistant unavailable: {error}"),
                }
            }
        }
    }
    Ok(())
}

async fn rate_latest(conversation: &mut Conversation<FileStore>, is_positive: bool) {
    let Some(id) = conversation.ratable_turn() else {
        println!("nothing to rate");
        return;
    };
    match conversation.record_feedback(id, is_positive).await {
        Ok(FeedbackOutcome::TicketFiled(ticket)) => {
            println!("Thank you! Ticket #{} has been created for our team to review.", ticket.id);
        }
        Ok(FeedbackOutcome::Recorded) => println!("Thank you for your feedback!"),
        Ok(FeedbackOutcome::Ignored) => println!("nothing to rate"),
        Err(error) => eprintln!("could not file a ticket: {error}"),
    }
}

// =============================================================================
// ASK / CLEAR
// =============================================================================

async fn run_ask(
    backend: Arc<SupportApi>,
    config: &ClientConfig,
    question: &str,
) -> Result<(), CliError> {
    let store = FileStore::new(config.session_file.clone());
    let mut conversation = Conversation::open(backend, store).await;
    if let Some(id) = conversation.submit_question(question).await? {
        if let Some(turn) = conversation.turn(id) {
            println!("{}", turn.display_text);
        }
    }
    Ok(())
}

async fn run_clear(backend: Arc<SupportApi>, config: &ClientConfig) -> Result<(), CliError> {
    let store = FileStore::new(config.session_file.clone());
    store.clear()?;
    let conversation = Conversation::open(backend, store).await;
    print_transcript(conversation.turns());
    Ok(())
}

// =============================================================================
// TICKETS
// =============================================================================

async fn run_ticket_list(backend: &SupportApi) -> Result<(), CliError> {
    let tickets = backend.list_tickets().await?;
    print_json(&serde_json::to_value(&tickets)?)
}

async fn run_ticket_show(backend: &SupportApi, ticket_id: i64) -> Result<(), CliError> {
    let ticket = backend.fetch_ticket(ticket_id).await?;
    println!("Ticket #{}: {}", ticket.id, ticket.title);
    println!("Created: {}", ticket.created_at);
    if let Some(summary) = &ticket.summary {
        println!("Summary: {summary}");
    }
    println!();
    print_transcript(&ticket.conversation_history);
    Ok(())
}

fn print_ticket_lines(tickets: &[Ticket]) {
    if tickets.is_empty() {
        println!("no tickets");
        return;
    }
    for ticket in tickets {
        println!("#{} [{}] {}", ticket.id, ticket.created_at, ticket.title);
    }
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn print_transcript(turns: &[deskchat::ChatTurn]) {
    for turn in turns {
        println!("{}: {}", turn.speaker.label(), turn.display_text);
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
