use chrono::Utc;
use clap::Parser;
use pirabel_core::i18n::{self, Language};
use pirabel_core::{DemoAuthenticator, Result, Session, UserPlan};
use pirabel_inference::prelude::*;
use pirabel_views::keywords::DifficultyBand;
use pirabel_views::{billing, dashboard, tracker, AuditState, AuditView, KeywordTable, WriterView, GENERIC_ERROR};
use pirabel_web::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, help = "Completion backend. Available models: gemini (default), dummy")]
    model: Option<String>,
    #[arg(long, help = "Gemini API key; defaults to GEMINI_API_KEY or API_KEY")]
    api_key: Option<String>,
    #[arg(long, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run an SEO audit of a page
    Audit {
        url: String,
        /// Fetch the live page instead of the simulated snapshot
        #[arg(long)]
        fetch: bool,
        /// Directory to write the text report into
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Explore keywords around a seed term
    Keywords {
        seed: String,
        /// How many times to toggle the difficulty sort (1 = ascending, 2 = descending)
        #[arg(long, default_value_t = 0)]
        sort_kd: u8,
    },
    /// Generate a long-form article
    Write {
        topic: String,
        #[arg(long, default_value = "pro")]
        plan: UserPlan,
        /// Comma-separated keywords to check density for
        #[arg(long, default_value = "")]
        keywords: String,
    },
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// List subscription plans
    Plans,
    /// Show the overview cards, weekly visibility and alerts
    Dashboard,
    /// Show tracked keyword positions
    Ranks,
    /// Look up a UI string
    Translate { lang: Language, key: String },
}

fn build_client(cli: &Cli) -> Result<CompletionClient> {
    let mut config = Config::from_env();
    if let Some(model) = &cli.model {
        config.backend = model.clone();
    }
    if let Some(key) = &cli.api_key {
        config.api_key = Some(key.clone());
    }
    let client = CompletionClient::new(create_model(&config)?, config);
    info!("🧠 Completion model initialized (using {})", client.model_name());
    Ok(client)
}

/// Local runs act as a signed-in user on the requested plan.
fn local_session(plan: UserPlan) -> Session {
    let mut profile = DemoAuthenticator::profile_for("local@pirabel.cli");
    profile.plan = plan;
    Session::new(profile)
}

async fn run_audit(client: &CompletionClient, url: &str, fetch: bool, export: Option<PathBuf>) -> Result<()> {
    let source = pirabel_snapshot::create_source(fetch)?;
    info!("📸 Taking snapshot with {}", source.name());
    let mut view = AuditView::new();
    if let AuditState::Failed(message) = view.run(client, source.as_ref(), url).await? {
        println!("{}", message);
        return Ok(());
    }
    let Some(report) = view.report() else {
        return Ok(());
    };

    println!("{}  score {}/100", report.url, report.score_display());
    println!(
        "LCP {:.1}s  FID {}ms  CLS {:.2}  images missing alt: {}/{}",
        report.core_web_vitals.lcp,
        report.core_web_vitals.fid,
        report.core_web_vitals.cls,
        report.images.missing_alt,
        report.images.total
    );
    for rec in view.recommendations() {
        println!(
            "[{:?}] {} ({}): {}\n    → {}",
            rec.kind,
            rec.category.as_str(),
            rec.impact,
            rec.message,
            rec.suggestion
        );
    }
    if report.critical_count() > 0 {
        warn!("🚨 {} critical issue(s) found", report.critical_count());
    }

    if let Some(dir) = export {
        if let Some(layout) = view.export(Utc::now().date_naive()) {
            layout.write_to(&dir)?;
        }
    }
    Ok(())
}

async fn run_keywords(client: &CompletionClient, seed: &str, sort_kd: u8) -> Result<()> {
    let mut table = KeywordTable::new();
    let count = match table.search(client, seed).await {
        Ok(count) => count,
        Err(_) => {
            println!("{}", GENERIC_ERROR);
            return Ok(());
        }
    };
    info!("🔑 {} keywords for \"{}\"", count, seed);
    for _ in 0..sort_kd {
        table.toggle_kd_sort();
    }
    println!("{:<40} {:>8} {:>5} {:>7}  {:<14} {:?}", "KEYWORD", "VOLUME", "KD", "CPC", "INTENT", table.sort());
    for row in table.rows() {
        println!(
            "{:<40} {:>8} {:>5} {:>7.2}  {:<14} {:?}",
            row.keyword,
            row.volume,
            row.kd,
            row.cpc,
            row.intent.as_str(),
            DifficultyBand::of(row.kd)
        );
    }
    Ok(())
}

async fn run_write(client: &CompletionClient, topic: &str, plan: UserPlan, keywords: &str) -> Result<()> {
    let session = local_session(plan);
    let mut view = WriterView::new(topic);
    view.keywords_input = keywords.to_string();
    let draft = match view.generate(client, &session).await {
        Ok(draft) => draft,
        Err(_) => {
            println!("{}", GENERIC_ERROR);
            return Ok(());
        }
    };

    println!("# {}", draft.title);
    for heading in &draft.outline {
        println!("  - {}", heading);
    }
    if let Some(score) = draft.seo_score {
        println!("SEO score: {}", score.round());
    }
    println!("\n{}\n", view.content);
    println!("{} words", view.word_count());
    for density in view.density() {
        println!("{:<30} {:>3}  {:?}", density.keyword, density.count, density.status);
    }
    Ok(())
}

fn print_plans() {
    for offer in billing::plan_catalogue() {
        let marker = if offer.popular { " (most popular)" } else { "" };
        println!("{} ${}/mo{}: {}", offer.plan, offer.monthly_price_usd, marker, offer.description);
        for feature in &offer.features {
            println!("    ✓ {}", feature);
        }
    }
    println!();
    for meter in billing::credit_meters(&DemoAuthenticator::STARTING_CREDITS) {
        println!("{:<16} {}/{} used ({:.0}% left)", meter.label, meter.used, meter.total, meter.remaining_percent());
    }
}

fn print_dashboard() {
    let overview = dashboard::overview();
    for card in &overview.stats {
        println!("{:<16} {:>8}  {}", card.label, card.value, card.change);
    }
    println!("\nWeekly traffic: {}", overview.weekly_traffic());
    for day in &overview.visibility {
        println!("  {}  {:>5} visits  avg rank #{}", day.day, day.traffic, day.rank);
    }
    println!();
    for alert in overview.high_priority_alerts() {
        println!("🚨 {}: {}", alert.site, alert.message);
    }
    for keyword in &overview.top_keywords {
        println!("{:<30} #{:<3} {:>6}  {:?}", keyword.keyword, keyword.position, keyword.volume, keyword.trend);
    }
}

fn print_ranks() {
    let overview = tracker::rank_overview();
    for keyword in &overview.top_movers {
        println!("⬆ {} ({:+})", keyword.keyword, keyword.movement());
    }
    let history: Vec<String> = overview.history.iter().map(|p| format!("#{}", p.position)).collect();
    println!("Average position, last {} days: {}\n", history.len(), history.join(" → "));
    for keyword in &overview.keywords {
        println!(
            "{:<30} #{:<3} {:+}  {:>6}  {}",
            keyword.keyword,
            keyword.position,
            keyword.movement(),
            keyword.volume,
            keyword.url
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    pirabel_snapshot::init_logging(&cli.log_level);

    match &cli.command {
        Commands::Audit { url, fetch, export } => {
            let client = build_client(&cli)?;
            run_audit(&client, url, *fetch, export.clone()).await?;
        }
        Commands::Keywords { seed, sort_kd } => {
            let client = build_client(&cli)?;
            run_keywords(&client, seed, *sort_kd).await?;
        }
        Commands::Write { topic, plan, keywords } => {
            let client = build_client(&cli)?;
            run_write(&client, topic, *plan, keywords).await?;
        }
        Commands::Serve { addr } => {
            let client = build_client(&cli)?;
            let state = AppState::new(
                client,
                Arc::from(pirabel_snapshot::create_source(false)?),
                Arc::new(DemoAuthenticator),
            );
            pirabel_web::serve(state, *addr).await?;
        }
        Commands::Plans => print_plans(),
        Commands::Dashboard => print_dashboard(),
        Commands::Ranks => print_ranks(),
        Commands::Translate { lang, key } => println!("{}", i18n::translate(*lang, key)),
    }

    Ok(())
}
