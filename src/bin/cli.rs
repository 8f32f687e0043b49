//! TFDN CLI
//!
//! Command-line interface for the TFDN site:
//! - Browse content from a running server
//! - Check server status
//! - Take the career quiz locally
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tfdn::career::{CareerRecommendation, QuizSession, QuizStep};
use tfdn::content::{Fixture, Opportunity, Partner, Pillar, TimelineEvent};

#[derive(Parser)]
#[command(name = "tfdn-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Taji Fanisi Development Network command-line client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the four pillars
    Pillars,

    /// Show one pillar and its programs
    Pillar {
        /// Pillar id (education, career, social, research)
        id: String,
    },

    /// Show the strategic timeline
    Timeline,

    /// List partner organizations
    Partners,

    /// List job opportunities
    Opportunities,

    /// Show server status
    Status,

    /// Take the career quiz in the terminal
    Quiz {
        /// Fixture to use instead of the bundled one
        #[arg(long)]
        fixture: Option<PathBuf>,
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
    let client = reqwest::Client::new();
    let json = cli.format == "json";

    match cli.command {
        Commands::Pillars => {
            let pillars: Vec<Pillar> = fetch(&client, &cli.api_url, "/api/v1/pillars").await?;

            if json {
                print_json(&pillars)?;
            } else {
                println!("{:<12} {:<32} {}", "ID", "Title", "Programs");
                println!("{}", "-".repeat(56));
                for pillar in pillars {
                    println!(
                        "{:<12} {:<32} {}",
                        pillar.id,
                        pillar.title,
                        pillar.programs.len()
                    );
                }
            }
        }

        Commands::Pillar { id } => {
            let pillar: Pillar =
                fetch(&client, &cli.api_url, &format!("/api/v1/pillars/{}", id)).await?;

            if json {
                print_json(&pillar)?;
            } else {
                println!("{}", pillar.title);
                println!("{}", "=".repeat(pillar.title.len()));
                println!("{}", pillar.description);
                println!();
                println!("Programs:");
                for program in &pillar.programs {
                    println!("  {} - {}", program.title, program.summary);
                    println!("    Impact: {}", program.impact);
                }
            }
        }

        Commands::Timeline => {
            let timeline: Vec<TimelineEvent> =
                fetch(&client, &cli.api_url, "/api/v1/timeline").await?;

            if json {
                print_json(&timeline)?;
            } else {
                for entry in timeline {
                    println!("{}", entry.year);
                    for event in entry.events {
                        println!("  * {}: {}", event.title, event.desc);
                    }
                }
            }
        }

        Commands::Partners => {
            let partners: Vec<Partner> = fetch(&client, &cli.api_url, "/api/v1/partners").await?;

            if json {
                print_json(&partners)?;
            } else {
                for partner in partners {
                    println!("{:<32} {}", partner.name, partner.description);
                }
            }
        }

        Commands::Opportunities => {
            let opportunities: Vec<Opportunity> =
                fetch(&client, &cli.api_url, "/api/v1/opportunities").await?;

            if json {
                print_json(&opportunities)?;
            } else {
                println!("{:<34} {:<12} {:<20} {}", "Title", "Type", "Location", "Salary");
                println!("{}", "-".repeat(90));
                for opp in opportunities {
                    println!(
                        "{:<34} {:<12} {:<20} {}",
                        opp.title, opp.kind, opp.location, opp.salary
                    );
                }
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if json {
                        print_json(&health)?;
                        return Ok(());
                    }

                    println!("TFDN v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "Server Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!("Content: {}", health["content"].as_str().unwrap_or("unknown"));
                    println!("Auth: {}", health["auth"].as_str().unwrap_or("unknown"));

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to TFDN server at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin tfdn");
                    std::process::exit(1);
                }
            }
        }

        Commands::Quiz { fixture } => {
            let fixture = Fixture::load_or_embedded(fixture.as_deref())
                .context("Failed to load the quiz fixture")?;
            run_quiz(Arc::new(fixture), json)?;
        }

        Commands::Config { output } => {
            let config = tfdn::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("Cannot create {:?}", parent))?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("Cannot write {:?}", path))?;
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

/// GET a JSON resource, exiting with the server's message on failure
async fn fetch<T: DeserializeOwned>(
    client: &reqwest::Client,
    api_url: &str,
    path: &str,
) -> anyhow::Result<T> {
    let url = format!("{}{}", api_url, path);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Cannot connect to TFDN server at {}", api_url))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        eprintln!("Request failed ({}): {}", status, text);
        std::process::exit(1);
    }

    response
        .json()
        .await
        .with_context(|| format!("Unexpected response from {}", url))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

const BACK: &str = "<- Previous question";

fn run_quiz(fixture: Arc<Fixture>, json: bool) -> anyhow::Result<()> {
    let mut quiz = QuizSession::new(fixture);

    println!("AI Career Assessment");
    println!("Answer {} questions to discover your best-fit digital careers.", quiz.question_count());
    println!();

    loop {
        quiz.start()?;

        loop {
            let Some(question) = quiz.current_question().cloned() else {
                break;
            };
            let index = quiz.current_index().unwrap_or(0);

            let mut choices: Vec<String> = question.options.iter().map(|o| o.text.clone()).collect();
            if index > 0 {
                choices.push(BACK.to_string());
            }

            let cursor = quiz
                .selected()
                .and_then(|id| question.options.iter().position(|o| o.id == id))
                .unwrap_or(0);

            let prompt = format!(
                "[{}/{} {:.0}%] {}",
                index + 1,
                quiz.question_count(),
                quiz.progress().unwrap_or(0.0),
                question.question
            );

            let choice = Select::new(&prompt, choices)
                .with_starting_cursor(cursor)
                .raw_prompt()?;

            if choice.index >= question.options.len() {
                quiz.previous()?;
                continue;
            }

            quiz.select(&question.options[choice.index].id)?;
            if quiz.next()? == QuizStep::Completed {
                break;
            }
        }

        if let Some(recommendations) = quiz.recommendations() {
            if json {
                print_json(&recommendations)?;
            } else {
                print_recommendations(recommendations);
            }
        }

        let again = Confirm::new("Take the quiz again?")
            .with_default(false)
            .prompt()?;
        if !again {
            break;
        }
        quiz.restart()?;
    }

    Ok(())
}

fn print_recommendations(recommendations: &[CareerRecommendation]) {
    println!();
    println!("Your Career Recommendations");
    println!("{}", "=".repeat(27));

    for (rank, rec) in recommendations.iter().enumerate() {
        println!();
        println!("{}. {} ({}% match)", rank + 1, rec.role, rec.score);
        println!("   Skills: {}", rec.skills.join(", "));
        if !rec.training_links.is_empty() {
            println!("   Training: {}", rec.training_links.join(", "));
        }
        println!(
            "   Opportunity: {} ({}, {}) {}",
            rec.opportunity.title, rec.opportunity.kind, rec.opportunity.salary, rec.opportunity.link
        );
    }
    println!();
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
