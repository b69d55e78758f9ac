use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use practice_manager::billing;
use practice_manager::config::{self, Config};
use practice_manager::models::ProjectKind;
use practice_manager::reports;
use practice_manager::store::{self, Store};

#[derive(Parser)]
#[command(name = "practice-manager", version, about = "Professional services management console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Key figures: invoiced, outstanding, pipeline, portfolio mix
    Summary {
        /// Emit the figures as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Expected volume per pipeline stage
    Pipeline,
    /// Allocation load per user
    Resources,
    /// Unbilled time for one project
    Unbilled {
        /// Project code, e.g. P-2024-001
        code: String,
    },
    /// Generate a draft invoice from a project's unbilled services
    Draft {
        /// Project code, e.g. P-2024-001
        code: String,
    },
    /// Render one invoice
    Show {
        /// Invoice number, e.g. INV-2024-001
        number: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Route diagnostics to stderr so report output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = config::init()?;

    // Seed the in-memory store with the demo fixtures
    let mut store = store::init();

    match cli.command {
        Command::Summary { json } => print_summary(&store, &config, json)?,
        Command::Pipeline => print_pipeline(&store, &config),
        Command::Resources => print_resources(&store),
        Command::Unbilled { code } => print_unbilled(&store, &config, &code)?,
        Command::Draft { code } => create_draft(&mut store, &config, &code)?,
        Command::Show { number } => show_invoice(&store, &config, &number)?,
    }

    Ok(())
}

#[derive(Serialize)]
struct Summary {
    total_invoiced: f64,
    outstanding: f64,
    open_invoices: usize,
    pipeline_total: f64,
    weighted_pipeline: f64,
    portfolio_mix: Vec<(ProjectKind, usize)>,
}

fn print_summary(store: &Store, config: &Config, json: bool) -> Result<()> {
    let summary = Summary {
        total_invoiced: reports::total_invoiced(store.invoices()),
        outstanding: reports::outstanding(store.invoices()),
        open_invoices: reports::open_invoice_count(store.invoices()),
        pipeline_total: reports::pipeline_total(store.opportunities()),
        weighted_pipeline: reports::weighted_pipeline(store.opportunities()),
        portfolio_mix: reports::portfolio_mix(store.projects()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let currency = &config.currency;
    println!("Total invoiced:     {currency} {:.2}", summary.total_invoiced);
    println!(
        "Outstanding (open): {currency} {:.2} ({} invoices pending)",
        summary.outstanding, summary.open_invoices
    );
    println!("Sales pipeline:     {currency} {:.2}", summary.pipeline_total);
    println!(
        "Weighted (est.):    {currency} {:.2}",
        summary.weighted_pipeline
    );
    println!("Portfolio mix:");
    for (kind, count) in &summary.portfolio_mix {
        println!("  {:<16} {count}", kind.label());
    }

    Ok(())
}

fn print_pipeline(store: &Store, config: &Config) {
    for (stage, volume) in reports::pipeline_volume_by_stage(store.opportunities()) {
        let count = reports::stage_count(store.opportunities(), stage);
        println!(
            "{:<8} {count} deal(s)  Vol: {} {volume:.2}",
            stage.label(),
            config.currency
        );
    }
}

fn print_resources(store: &Store) {
    for user in store.users() {
        let load = reports::user_load(store.allocations(), user.id.as_str());
        let marker = if load > 100 { "  [overbooked]" } else { "" };
        println!("{} ({})  load {load}%{marker}", user.name, user.role.label());

        for allocation in reports::user_allocations(store.allocations(), user.id.as_str()) {
            // Unresolved projects degrade to a placeholder, not an error
            let code = store
                .project(&allocation.project_id)
                .map(|p| p.code.as_str())
                .unwrap_or("unknown project");
            println!("    {code} ({}%)", allocation.percentage);
        }
    }
}

fn print_unbilled(store: &Store, config: &Config, code: &str) -> Result<()> {
    let project = store
        .project_by_code(code)
        .with_context(|| format!("no project with code {code}"))?;

    let minutes = reports::unbilled_minutes(store.service_entries(), &project.id);
    let expenses = reports::unbilled_expenses(store.expense_entries(), &project.id);

    println!("Unbilled summary for {} - {}", project.code, project.title);
    println!("  Unbilled hours:    {:.2} hrs", f64::from(minutes) / 60.0);
    println!(
        "  Est. amount:       {} {:.2}",
        config.currency,
        billing::draft_amount(minutes)
    );
    println!("  Unbilled expenses: {} {expenses:.2}", config.currency);

    Ok(())
}

fn create_draft(store: &mut Store, config: &Config, code: &str) -> Result<()> {
    let project_id = store
        .project_by_code(code)
        .map(|p| p.id.clone())
        .with_context(|| format!("no project with code {code}"))?;

    let today = chrono::Local::now().date_naive();
    let invoice = billing::generate_draft(store, &project_id, today, config.payment_terms_days)?;
    let rendered = billing::render_markdown(&invoice, store.project(&project_id), &config.currency);

    store.add_invoice(invoice);
    println!("{rendered}");

    Ok(())
}

fn show_invoice(store: &Store, config: &Config, number: &str) -> Result<()> {
    let invoice = store
        .invoice_by_number(number)
        .with_context(|| format!("no invoice with number {number}"))?;

    let project = store.project(&invoice.project_id);
    println!("{}", billing::render_markdown(invoice, project, &config.currency));

    Ok(())
}
