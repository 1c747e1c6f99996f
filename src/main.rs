use std::io;

use anyhow::{Context, Result, bail};
use churnpredict::dashboard::{self, verdict_message};
use churnpredict::{ChurnModel, Config, CustomerForm, Dashboard, Page, SubmitError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "churnpredict", version, about = "Customer churn prediction dashboard")]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive menu (default)
    Menu,
    /// Predict one customer from `key=value` answers
    Predict {
        /// Answer for one field, e.g. `--set contract="One year"`
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        answers: Vec<String>,
    },
    /// Show the accuracy comparison table
    Accuracy,
    /// Preview the dataset file
    Dataset,
    /// About this system
    About,
    /// List form fields and their options
    Fields,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_model(config: &Config) -> Result<ChurnModel> {
    println!("📦 Loading model from {:?}", config.model_path);
    ChurnModel::load_from_file(&config.model_path)
        .with_context(|| format!("cannot start without a model ({:?})", config.model_path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let model = load_model(&config)?;
            let dashboard = Dashboard::new(model, config);
            dashboard.run_session(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Predict { answers } => {
            let model = load_model(&config)?;
            let dashboard = Dashboard::new(model, config);
            let form = CustomerForm::from_pairs(&answers)?;
            match dashboard.submit(&form) {
                Ok(prediction) => println!("{}", verdict_message(&prediction)),
                Err(SubmitError::Validation(e)) => bail!("{e}"),
                Err(e) => return Err(e).context("prediction failed"),
            }
        }
        Command::Accuracy => println!("{}", dashboard::render_page(Page::Accuracy, &config)),
        Command::Dataset => println!("{}", dashboard::render_page(Page::Dataset, &config)),
        Command::About => println!("{}", dashboard::render_page(Page::About, &config)),
        Command::Fields => println!("{}", dashboard::fields_view()),
    }
    Ok(())
}
