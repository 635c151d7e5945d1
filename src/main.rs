//! polyquery binary - multilingual question pipeline over chat and
//! translation APIs

use clap::Parser;
use polyquery::chat::ChatClient;
use polyquery::config::{self, Config};
use polyquery::orchestrator::Orchestrator;
use polyquery::sink;
use polyquery::translate::Resolver;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Question to ask; prompted on stdin when omitted
    #[arg(short, long)]
    question: Option<String>,

    /// Target language codes, ISO 639-1 (default: fr hi zh ja ar)
    #[arg(short, long)]
    lang: Vec<String>,

    /// Result table path
    #[arg(short, long, default_value = sink::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Chat model (overrides default)
    #[arg(long)]
    model: Option<String>,

    /// Origin language of the question (overrides default "en")
    #[arg(long)]
    origin: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so the filter and credentials can come from it
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(model) = args.model {
        config.chat_model = model;
    }
    if let Some(origin) = args.origin {
        config.origin_lang = origin;
    }

    let languages = if args.lang.is_empty() {
        config::default_languages()
    } else {
        args.lang
    };

    let question = match args.question {
        Some(q) => q,
        None => prompt("Enter your question: ")?,
    };

    let resolver = Resolver::new(&config);
    let chat = ChatClient::new(&config);
    let orchestrator = Orchestrator::new(&resolver, &chat, &config.origin_lang);

    let records = orchestrator.run(&question, &languages).await;

    for record in &records {
        println!("\n--- {} ---", record.language);
        println!("Translated Question: {}", record.translated_question);
        println!("ChatGPT Response: {}", record.chat_response);
        println!("Translated Back: {}", record.back_translated);
    }

    // Persistence trouble is a soft failure: report it, keep exit code 0
    match sink::persist(&records, &args.output) {
        Ok(total) => println!(
            "\nResults saved and appended to {} ({} rows total)",
            args.output.display(),
            total
        ),
        Err(e) => eprintln!("Error saving results to {}: {e}", args.output.display()),
    }

    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
