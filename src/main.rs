mod error;
mod quiz;

use std::io::{self, Write};

use dotenv::dotenv;
use log::{error, info};
use quiz::{
    options::{CategoryTable, QuizOptions},
    session::QuizSession,
    trivia_api::TriviaClient,
};

use crate::error::QuizError;

#[tokio::main]
async fn main() {
    // The .env file is optional, every setting has a default
    dotenv().ok();

    pretty_env_logger::init();
    info!("Starting trivia quiz...");

    if let Err(err) = run().await {
        error!("{}", err);
        if let Err(flush_err) = io::stdout().flush() {
            error!("Failed to flush stdout: {}", flush_err);
        }
        match &err {
            QuizError::Http(_) | QuizError::HttpStatus(_) | QuizError::ResponseCode(_) => {
                eprintln!("Failed to fetch quiz questions: {}", err)
            }
            _ => eprintln!("{}", err),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), QuizError> {
    let client = TriviaClient::from_env()?;
    let categories = CategoryTable::default();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let options = QuizOptions::prompt(&categories, &mut input, &mut output)?;
    info!(
        "Quiz options: {} {} questions from {:?}",
        options.num_questions,
        options.difficulty,
        categories.label(options.category)
    );

    let questions = client.fetch(&options).await?;
    info!("Fetched {} questions from {}", questions.len(), client.api_url());

    let mut session = QuizSession::new();
    let report = session.run(&questions, &mut input, &mut output)?;
    info!(
        "Session finished: {} correct, {} incorrect out of {}",
        report.correct_answers, report.incorrect_answers, report.total
    );
    Ok(())
}
