//! Command-line interface parsing and handling
//!
//! Each subcommand drives the same controllers the dashboard pages use and
//! prints the toasts they raise.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args as ClapArgs, Parser, Subcommand};
use lib_utils::{date_stamp, today_utc};
use serde_json::Value;
use shared::{DealUpdate, ExportFormat, NewDeal};

use crate::app::{display_created_at, AuthController, DealPerformance, Notifications, ReportsView};
use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::DealDeskService;
use crate::widgets::{ChatWidget, ContactForm, UploadCandidate, UploadDialog};

#[derive(Parser, Debug)]
#[command(name = "dealdesk")]
#[command(about = "ForexKing dashboard from the command line")]
#[command(
    long_about = "Sign in to ForexKing, track deals, download reports and reach support.\n\n\
Environment Variables:\n\
  FOREXKING_API_URL            API base URL (default https://api.forexking.info)\n\
  FOREXKING_CONTACT_URL        Contact form endpoint\n\
  FOREXKING_SESSION_FILE       Where the session token is kept (default data/session.json)\n\
  FOREXKING_DOWNLOAD_DIR       Where exports are saved (default .)\n\
  FOREXKING_HTTP_TIMEOUT_SECS  Per-request timeout (optional)\n\
  FOREXKING_LOG_DIR            Also write a daily log file here (optional)\n\
  RUST_LOG                     Log filter (default dealdesk=info,warn)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    Signup {
        name: String,
        email: String,
        password: String,
        /// Password confirmation (defaults to the password)
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Sign in
    Login { email: String, password: String },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user (from the stored token, no network call)
    Whoami,
    /// Deal tracking
    #[command(subcommand)]
    Deals(DealsCommand),
    /// Reports
    #[command(subcommand)]
    Reports(ReportsCommand),
    /// Send a message to the ForexKing team
    Contact {
        name: String,
        email: String,
        message: String,
    },
    /// Talk to the support assistant; reads stdin when no message is given
    Chat {
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DealsCommand {
    /// List deals with totals
    List {
        /// Case-insensitive filter on client name or deal type
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add a deal
    Add(AddDealArgs),
    /// Update fields of a deal
    Update(UpdateDealArgs),
    /// Delete a deal
    Delete { id: String },
    /// Download the deals report as CSV
    Export {
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct AddDealArgs {
    /// Client name
    pub client: String,
    /// Currency pair, e.g. EUR/USD
    pub pair: String,
    pub amount: f64,
    #[arg(allow_negative_numbers = true)]
    pub profit: f64,
    /// Deal date, YYYY-MM-DD (default today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct UpdateDealArgs {
    pub id: String,
    #[arg(long)]
    pub client: Option<String>,
    #[arg(long)]
    pub pair: Option<String>,
    #[arg(long)]
    pub amount: Option<f64>,
    #[arg(long)]
    pub profit: Option<f64>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// List reports
    List,
    /// Generate a report
    Generate {
        /// Report type
        kind: String,
        /// Filters as a JSON object
        #[arg(long)]
        filters: Option<String>,
    },
    /// Download a report
    Export {
        id: String,
        /// csv or excel
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
    },
    /// Upload a daily deals file (PDF, Excel or CSV)
    Upload { path: PathBuf },
}

/// Run a parsed command against `service`.
pub async fn run(args: Args, service: Arc<dyn DealDeskService>, config: &ClientConfig) -> Result<()> {
    match args.command {
        Commands::Signup {
            name,
            email,
            password,
            confirm,
        } => {
            let mut auth = AuthController::new(service);
            let confirm = confirm.unwrap_or_else(|| password.clone());
            let result = auth.sign_up(&name, &email, &password, &confirm).await;
            print_toasts(&mut auth.notifications);
            let user = result?;
            println!("Signed in as {} <{}>", user.name, user.email);
        }
        Commands::Login { email, password } => {
            let mut auth = AuthController::new(service);
            let result = auth.sign_in(&email, &password).await;
            print_toasts(&mut auth.notifications);
            let user = result?;
            println!("Signed in as {} <{}>", user.name, user.email);
        }
        Commands::Logout => {
            let mut auth = AuthController::new(service);
            if !auth.is_authenticated() {
                println!("Not signed in");
                return Ok(());
            }
            auth.sign_out().await?;
            println!("Signed out");
        }
        Commands::Whoami => match AuthController::new(service).user() {
            Some(user) => println!("{} <{}> (id {})", user.name, user.email, user.id),
            None => println!("Not signed in"),
        },
        Commands::Deals(command) => run_deals(command, service, config).await?,
        Commands::Reports(command) => run_reports(command, service, config).await?,
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let mut form = ContactForm::with_fields(name, email, message);
            let result = form.submit(service.as_ref()).await;
            print_toasts(&mut form.notifications);
            result?;
        }
        Commands::Chat { message } => run_chat(message)?,
    }

    Ok(())
}

async fn run_deals(
    command: DealsCommand,
    service: Arc<dyn DealDeskService>,
    config: &ClientConfig,
) -> Result<()> {
    match command {
        DealsCommand::List { search } => {
            let mut page = DealPerformance::new(service);
            let loaded = page.load_deals().await;
            print_toasts(&mut page.notifications);
            loaded?;
            page.set_search_term(search.unwrap_or_default());

            for deal in page.filtered_deals() {
                println!(
                    "{:<12} {:<24} {:<10} {:>12.2} {:>10.2} {} {}",
                    deal.id, deal.client_name, deal.deal_type, deal.amount, deal.profit, deal.date, deal.status
                );
            }
            println!(
                "Total amount: {:.2}  Total profit: {:.2}",
                page.total_amount(),
                page.total_profit()
            );
        }
        DealsCommand::Add(add) => {
            let mut page = DealPerformance::new(service);
            let deal = NewDeal {
                client_name: add.client,
                deal_type: add.pair,
                amount: add.amount,
                profit: add.profit,
                date: add.date.unwrap_or_else(|| date_stamp(today_utc())),
            };
            let created = page.add_deal(deal).await;
            print_toasts(&mut page.notifications);
            if let Some(deal) = created {
                println!("Created deal {} ({})", deal.id, deal.status);
            }
        }
        DealsCommand::Update(update) => {
            let patch = DealUpdate {
                client_name: update.client,
                deal_type: update.pair,
                amount: update.amount,
                profit: update.profit,
                date: update.date,
                status: update.status,
            };
            let deal = service.update_deal(&update.id, &patch).await?;
            println!("Updated deal {} ({})", deal.id, deal.status);
        }
        DealsCommand::Delete { id } => {
            service.delete_deal(&id).await?;
            println!("Deleted deal {}", id);
        }
        DealsCommand::Export { search } => {
            let mut page = DealPerformance::new(service);
            page.set_search_term(search.unwrap_or_default());
            let file = page.export_deals(today_utc()).await;
            print_toasts(&mut page.notifications);
            if let Some(file) = file {
                let path = file.save_to(&config.download_dir)?;
                println!("Saved {}", path.display());
            }
        }
    }

    Ok(())
}

async fn run_reports(
    command: ReportsCommand,
    service: Arc<dyn DealDeskService>,
    config: &ClientConfig,
) -> Result<()> {
    let mut view = ReportsView::new(service.clone());

    match command {
        ReportsCommand::List => {
            let loaded = view.load_reports().await;
            print_toasts(&mut view.notifications);
            loaded?;
            for report in view.reports() {
                println!(
                    "{:<12} {:<32} {:<12} {}",
                    report.id,
                    report.title,
                    report.kind,
                    display_created_at(report)
                );
            }
        }
        ReportsCommand::Generate { kind, filters } => {
            let filters = filters
                .map(|raw| serde_json::from_str::<Value>(&raw))
                .transpose()
                .map_err(|e| AppError::Validation(format!("Invalid filters JSON: {}", e)))?;
            let report = service.generate_report(&kind, filters).await?;
            println!("Generated report {} ({})", report.id, report.title);
        }
        ReportsCommand::Export { id, format } => {
            // Only needed for the title; export still proceeds without it.
            let _ = view.load_reports().await;
            view.notifications.drain();
            let title = view
                .find(&id)
                .map(|r| r.title.clone())
                .unwrap_or_else(|| id.clone());

            let file = view.export_report_as(&id, &title, today_utc(), format).await;
            print_toasts(&mut view.notifications);
            if let Some(file) = file {
                let path = file.save_to(&config.download_dir)?;
                println!("Saved {} ({} bytes)", path.display(), file.len());
            }
        }
        ReportsCommand::Upload { path } => {
            let mut dialog = UploadDialog::new();
            let candidate = UploadCandidate::from_path(&path)?;
            let size = candidate.size_label();
            if !dialog.select(candidate) {
                print_toasts(&mut dialog.notifications);
                return Ok(());
            }
            dialog.submit(&mut view).await;
            print_toasts(&mut view.notifications);
            println!("{} ({})", path.display(), size);
        }
    }

    Ok(())
}

fn run_chat(message: Vec<String>) -> Result<()> {
    let mut chat = ChatWidget::default();
    chat.open();

    if !message.is_empty() {
        if let Some(reply) = chat.send(&message.join(" ")) {
            println!("{}", reply);
        }
        return Ok(());
    }

    if let Some(greeting) = chat.messages().first() {
        println!("{}", greeting.text);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if let Some(reply) = chat.send(&line) {
            println!("{}", reply);
        }
    }

    Ok(())
}

fn print_toasts(notifications: &mut Notifications) {
    for toast in notifications.drain() {
        if toast.is_error() {
            eprintln!("❌ {}", toast);
        } else {
            println!("✅ {}", toast);
        }
    }
}
