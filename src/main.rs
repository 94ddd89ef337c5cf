use clap::{Args, Parser, Subcommand, ValueEnum};
use loan_screening::config::{AppConfig, ScreeningConfig};
use loan_screening::error::AppError;
use loan_screening::screening::sample::reference_applicants;
use loan_screening::screening::{
    Applicant, ApplicantImporter, DecisionTree, ScreeningPipeline, ScreeningReport,
};
use loan_screening::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "loan-screening",
    about = "Screen loan applicants in ascending risk order with a decision tree and naive Bayes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Screen a batch of applicants (default command)
    Screen(ScreenArgs),
    /// Print the decision tree that screening would use
    Tree(TreeArgs),
}

#[derive(Args, Debug, Default)]
struct ScreenArgs {
    /// Applicant CSV export; the built-in five-applicant batch is used when omitted
    #[arg(long)]
    csv: Option<PathBuf>,
    /// JSON decision tree, overriding SCREENING_TREE_PATH
    #[arg(long)]
    tree: Option<PathBuf>,
    /// Output format for the verdicts
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// Print the applicant list before the verdicts (table output only)
    #[arg(long)]
    show_applicants: bool,
}

#[derive(Args, Debug)]
struct TreeArgs {
    /// JSON decision tree, overriding SCREENING_TREE_PATH
    #[arg(long)]
    tree: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Screen(ScreenArgs::default()));

    match command {
        Command::Screen(args) => run_screen(args, &config.screening),
        Command::Tree(args) => {
            let tree = load_tree(args.tree, &config.screening)?;
            print!("{tree}");
            Ok(())
        }
    }
}

fn load_tree(
    override_path: Option<PathBuf>,
    config: &ScreeningConfig,
) -> Result<DecisionTree, AppError> {
    match override_path.or_else(|| config.tree_path.clone()) {
        Some(path) => {
            info!(path = %path.display(), "loading decision tree");
            Ok(DecisionTree::from_path(path)?)
        }
        None => Ok(DecisionTree::reference()),
    }
}

fn run_screen(args: ScreenArgs, config: &ScreeningConfig) -> Result<(), AppError> {
    let ScreenArgs {
        csv,
        tree,
        format,
        show_applicants,
    } = args;

    let pipeline = ScreeningPipeline::new(load_tree(tree, config)?, config.scoring);

    let applicants = match csv {
        Some(path) => {
            info!(path = %path.display(), "importing applicants");
            ApplicantImporter::from_path(path, &pipeline.settings().risk)?
        }
        None => pipeline.admit(reference_applicants())?,
    };

    if show_applicants && format == OutputFormat::Table {
        render_applicants(&applicants);
    }

    let report = pipeline.screen(applicants);

    match format {
        OutputFormat::Table => render_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn render_applicants(applicants: &[Applicant]) {
    println!("Loan applicants");
    println!(
        "{:<12}{:>14}{:>10}{:>10}{:>10}{:>10}{:>12}",
        "Name", "Credit Score", "Income", "Loan Amt", "Debt", "DTI", "Risk Score"
    );
    for applicant in applicants {
        println!(
            "{:<12}{:>14}{:>10.0}{:>10.0}{:>10.0}{:>10.2}{:>12.2}",
            applicant.name(),
            applicant.credit_score(),
            applicant.income(),
            applicant.loan_amount(),
            applicant.existing_debt(),
            applicant.dti(),
            applicant.risk_score()
        );
    }
    println!();
}

fn render_report(report: &ScreeningReport) {
    println!("Screening results (lowest risk first)");
    for outcome in &report.outcomes {
        println!("\nApplicant: {}", outcome.name);
        println!("- Credit score: {}", outcome.credit_score);
        println!("- Debt-to-income ratio: {:.2}", outcome.dti);
        println!("- Risk score: {:.2}", outcome.risk_score);
        println!("- Decision tree: {}", outcome.tree_result);
        println!("- Naive Bayes: {}", outcome.bayes_result);
        println!("- Final decision: {}", outcome.final_decision);
    }

    let summary = report.summary();
    println!(
        "\n{} applicant(s): {} approved, {} rejected",
        summary.total, summary.approved, summary.rejected
    );
}
