//! Joina CLI
//!
//! Command-line access to the Joina dashboard API:
//! - Fetch chart data for one or all views
//! - Log in and register accounts
//! - List navigation views
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use joina::config::{generate_default_config, Config};
use joina::forms::{FormController, FormKind, FormStatus, Submission, SubmitOutcome};
use joina::shell::{CurrentView, Session, NAV_ITEMS};
use joina::stats::{
    format_count, format_usd, ChartView, ExitPoints, GenderStats, GenderSummary, Spending,
    StatsPayload, VisitDuration,
};
use joina::stats::transform::GENDER_SALARY_DATASET;
use joina::{chart, logging, ApiClient, ViewController};

#[derive(Parser)]
#[command(name = "joina")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Joina analytics dashboard from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and JOINA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/joina/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch chart data
    Stats {
        /// exit-points, visit-duration, gender, spending or all
        #[arg(default_value = "all")]
        view: String,
    },

    /// Log in with email and password
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Register a new account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// List dashboard views, or show which view a navigation tag selects
    Views {
        tag: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    logging::init(&config.logging);
    chart::registry::init();

    match cli.command {
        Commands::Stats { view } => {
            let client = ApiClient::new(&config.api)?;

            let views: Vec<ChartView> = if view == "all" {
                ChartView::ALL.to_vec()
            } else {
                let selected = ChartView::from_slug(&view).with_context(|| {
                    format!(
                        "Unknown view: {}. Use: exit-points, visit-duration, gender, spending, all",
                        view
                    )
                })?;
                vec![selected]
            };

            let mut failures = 0;
            for view in views {
                let ok = match view {
                    ChartView::ExitPoints => show::<ExitPoints>(&client, cli.format, no_footer).await,
                    ChartView::VisitDuration => {
                        show::<VisitDuration>(&client, cli.format, no_footer).await
                    }
                    ChartView::GenderStats => {
                        show::<GenderStats>(&client, cli.format, gender_footer).await
                    }
                    ChartView::Spending => show::<Spending>(&client, cli.format, no_footer).await,
                };
                if !ok {
                    failures += 1;
                }
            }

            if failures > 0 {
                anyhow::bail!("{} view(s) failed to load from {}", failures, client.base_url());
            }
        }

        Commands::Login { email, password } => {
            let client = ApiClient::new(&config.api)?;
            let mut form = FormController::new(FormKind::Login);
            form.set("email", email)?;
            form.set("password", password)?;

            let submission = begin(&mut form)?;
            let outcome = client.submit(&submission).await;

            let session = match &outcome {
                SubmitOutcome::Accepted(body) => Session::from_login(body),
                _ => None,
            };
            report(form.finish(outcome))?;

            if let Some(session) = session {
                match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session)?),
                    OutputFormat::Table => println!("Signed in as {} <{}>", session.username, session.email),
                }
            }
        }

        Commands::Register {
            username,
            email,
            password,
        } => {
            let client = ApiClient::new(&config.api)?;
            let mut form = FormController::new(FormKind::Register);
            form.set("username", username)?;
            form.set("email", email)?;
            form.set("password", password)?;

            let submission = begin(&mut form)?;
            let outcome = client.submit(&submission).await;
            report(form.finish(outcome))?;
        }

        Commands::Views { tag: Some(tag) } => {
            let view = CurrentView::from_tag(&tag);
            println!("{} -> {} ({})", tag, view.label(), view.tag());
        }

        Commands::Views { tag: None } => {
            println!("{:<15} {:<15}", "View", "Tag");
            println!("{}", "-".repeat(30));
            for view in NAV_ITEMS {
                let marker = if view == CurrentView::default() { " (default)" } else { "" };
                println!("{:<15} {:<15}{}", view.label(), view.tag(), marker);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Load one view and print it. Returns false if the view ended in error.
async fn show<P: StatsPayload>(
    client: &ApiClient,
    format: OutputFormat,
    footer: fn(&P) -> Option<String>,
) -> bool {
    let mut controller = ViewController::<P>::new();
    controller.load(client).await;

    let view = P::VIEW;
    let Some(data) = controller.state().data() else {
        let message = controller.state().error().unwrap_or(view.loading_message());
        eprintln!("{}: {}", view.title(), message);
        return false;
    };

    if format == OutputFormat::Json {
        println!("{}", data.chart().to_json());
        return true;
    }

    println!("{} [{}]", view.title(), view.section());
    println!("{}", "-".repeat(50));

    for (index, dataset) in data.series.datasets.iter().enumerate() {
        if data.series.datasets.len() > 1 {
            println!("{}", dataset.label);
        }
        let percentages = data.series.percentages(index);
        for (entry, pct) in data.series.entries(index).iter().zip(percentages) {
            let value = if dataset.label == GENDER_SALARY_DATASET {
                format_usd(entry.value)
            } else {
                format_count(entry.value)
            };
            println!("  {:<12} {:>12} {:>5}%", entry.label, value, pct);
        }
    }

    if let Some(line) = footer(&data.payload) {
        println!("  {}", line);
    }

    if let Some(updated) = controller.last_updated() {
        println!("Updated {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!();
    true
}

fn no_footer<P>(_: &P) -> Option<String> {
    None
}

fn gender_footer(stats: &GenderStats) -> Option<String> {
    let summary = GenderSummary::from_stats(stats);
    Some(format!(
        "Total: {}  Salary gap: {}",
        format_count(summary.total),
        format_usd(summary.salary_gap)
    ))
}

/// Start a submit, turning a blocked submit into the form's own message
fn begin(form: &mut FormController) -> anyhow::Result<Submission> {
    match form.begin_submit() {
        Ok(submission) => Ok(submission),
        Err(e) => {
            let message = form.status().message().map(str::to_string);
            anyhow::bail!("{}", message.unwrap_or_else(|| e.to_string()))
        }
    }
}

/// Print a form's final status, failing the command on a rejected submit
fn report(status: &FormStatus) -> anyhow::Result<()> {
    match status {
        FormStatus::Succeeded(message) => {
            println!("{}", message);
            Ok(())
        }
        FormStatus::Failed(message) => anyhow::bail!("{}", message),
        other => anyhow::bail!("Unexpected form state: {:?}", other),
    }
}
