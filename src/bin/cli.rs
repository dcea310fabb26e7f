//! Command-line front-end for the recommendation engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sentirec_api::services::{SentimentRecommender, DEFAULT_CANDIDATE_POOL, DEFAULT_TOP_K};

#[derive(Parser)]
#[command(name = "sentirec")]
#[command(about = "Sentiment-aware product recommender")]
#[command(version)]
struct Cli {
    /// Path to the models directory
    #[arg(short, long, default_value = "models")]
    models: PathBuf,

    /// User id to get recommendations for; prompted for when omitted
    #[arg(short, long)]
    user: Option<String>,

    /// Review text to predict sentiment for
    #[arg(short, long)]
    sentiment: Option<String>,

    /// Number of ranked entries to print
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Number of highest-rated products considered for sentiment scoring
    #[arg(long, default_value_t = DEFAULT_CANDIDATE_POOL)]
    candidate_pool: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let recommender = match SentimentRecommender::load(&cli.models) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!(
                "error: failed to load models from '{}': {}",
                cli.models.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    if let Some(text) = cli.sentiment {
        return predict_sentiment(&recommender, &text);
    }

    let user = match cli.user {
        Some(user) => user.trim().to_string(),
        None => match prompt_user_id() {
            Ok(user) => user,
            Err(e) => {
                eprintln!("error: failed to read user id: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    if user.is_empty() {
        eprintln!("error: user id must not be empty");
        return ExitCode::FAILURE;
    }

    recommend(&recommender, &user, cli.top_k, cli.candidate_pool)
}

/// Prints the ranked recommendation list for one user.
fn recommend(
    recommender: &SentimentRecommender,
    user: &str,
    top_k: usize,
    candidate_pool: usize,
) -> ExitCode {
    match recommender.recommend(user, top_k, candidate_pool) {
        Ok(Some(recs)) if recs.is_empty() => {
            println!("No recommendations available for user '{user}'.");
            ExitCode::SUCCESS
        }
        Ok(Some(recs)) => {
            println!("Top recommendations for {user}:");
            for (i, rec) in recs.iter().enumerate() {
                println!(
                    "{}. {} - {:.2}% positive",
                    i + 1,
                    rec.name,
                    rec.pos_sentiment_percent
                );
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("No such user '{user}' in the recommendation model.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the predicted sentiment label for one review text.
fn predict_sentiment(recommender: &SentimentRecommender, text: &str) -> ExitCode {
    match recommender.predict_sentiment(text) {
        Ok(Some(label)) => {
            println!("Review: {text}");
            println!("Predicted sentiment: {label}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("error: review text must not be empty");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads a user id from stdin.
fn prompt_user_id() -> io::Result<String> {
    print!("Enter user id: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
