use api_shared::AssessRes;
use axiom_core::{SeverityLevel, Symptom, TriageClassifier};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "axiom")]
#[command(about = "Axiom symptom triage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess symptoms and print a triage recommendation
    Assess {
        /// Symptom label (repeat for several, e.g. --symptom Fever --symptom "Chest Pain")
        #[arg(long = "symptom", short = 's', required = true)]
        symptoms: Vec<String>,
        /// Severity: Mild, Moderate, Severe or "Very Severe"
        #[arg(long)]
        severity: String,
        /// Days the symptoms have lasted (1-14)
        #[arg(long)]
        days: u32,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the symptom vocabulary
    Symptoms,
    /// List severity levels
    Severities,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess {
            symptoms,
            severity,
            days,
            json,
        }) => {
            let verdict = TriageClassifier::new().classify_tokens(&symptoms, &severity, days)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&AssessRes::from(&verdict))?);
            } else {
                println!("{}", verdict.recommendation());
                println!("Urgency: {} ({})", verdict.urgency(), verdict.color_hex());
                println!("{}", verdict.advice());
            }
        }
        Some(Commands::Symptoms) => {
            for symptom in Symptom::ALL {
                let marker = if symptom.is_red_flag() { " (red flag)" } else { "" };
                println!("{}{}", symptom, marker);
            }
        }
        Some(Commands::Severities) => {
            for level in SeverityLevel::ALL {
                println!("{}", level);
            }
        }
        None => {
            println!("Use 'axiom --help' for commands");
        }
    }

    Ok(())
}
