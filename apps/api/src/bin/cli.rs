//! Interactive terminal front-end: analyze a resume, chat about it, and
//! list improvement recommendations. Shares the same analyzer as the HTTP
//! server, just driven from a numbered menu.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use resumelens::analyzer::ResumeAnalyzer;
use resumelens::chat::{is_quit, ChatSession};
use resumelens::config::Config;
use resumelens::inference::InferenceClient;
use resumelens::recommend::improvement_recommendations;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Keep log output out of the menu flow unless explicitly requested.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("Initializing Resume Analyzer...");
    let generator = InferenceClient::new(config.inference_endpoint.clone());
    let analyzer = ResumeAnalyzer::new(Arc::new(generator));
    let mut session = ChatSession::new();

    loop {
        match read_line(&menu_prompt())?.as_str() {
            "1" => analyze_resume_file(&analyzer, &mut session).await?,
            "2" => chat_mode(&analyzer, &session).await?,
            "3" => show_recommendations(&session),
            "4" => {
                println!("\nGoodbye!");
                break;
            }
            _ => println!("\nInvalid option!"),
        }
    }

    Ok(())
}

fn menu_prompt() -> String {
    "\n=== Resume Analysis Menu ===\n\
     1. Analyze Resume\n\
     2. Chat About Resume\n\
     3. Get ATS Recommendations\n\
     4. Exit\n\
     \nSelect an option (1-4): "
        .to_string()
}

/// Prints a prompt and reads one trimmed line from stdin.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

async fn analyze_resume_file(
    analyzer: &ResumeAnalyzer,
    session: &mut ChatSession,
) -> Result<()> {
    let file_path = read_line("\nEnter resume file path (PDF/DOCX): ")?;

    println!("\nAnalyzing resume...");
    let record = match analyzer.analyze_file(Path::new(&file_path)).await {
        Ok(record) => record,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    println!("\n=== Analysis Results ===");
    println!("\nOverall Summary:");
    println!("{}", record.overall_summary);

    println!("\nATS Compatibility:");
    if record.ats_compatibility.is_ats_friendly {
        println!("Status: ✓ ATS Friendly");
    } else {
        println!("Status: ⚠ ATS Issues Found");
        println!("Issues found:");
        for issue in &record.ats_compatibility.issues {
            println!("- {issue}");
        }
    }

    println!("\nDetailed Analysis:");
    for (section, feedback) in record.sections.entries() {
        println!("\n{}:", section.label());
        println!("{feedback}");
    }

    // The new analysis replaces any previous conversation context.
    session.set_context(record);
    Ok(())
}

async fn chat_mode(analyzer: &ResumeAnalyzer, session: &ChatSession) -> Result<()> {
    println!("\n=== Chat Mode ===");
    println!("Ask questions about your resume or get specific advice");
    println!("Type 'quit' to return to menu");

    loop {
        let user_input = read_line("\nYou: ")?;
        if is_quit(&user_input) {
            break;
        }
        if user_input.is_empty() {
            continue;
        }

        match analyzer.chat(&user_input, session.context()).await {
            Ok(response) => println!("\nAssistant: {response}"),
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

fn show_recommendations(session: &ChatSession) {
    match session.context() {
        Some(record) => {
            println!("\n=== ATS Recommendations ===");
            for (i, rec) in improvement_recommendations(record).iter().enumerate() {
                println!("\n{}. {rec}", i + 1);
            }
        }
        None => println!("\nPlease analyze a resume first (Option 1)"),
    }
}
