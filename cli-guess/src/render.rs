//! Turns session results into terminal lines

use colored::*;
use numguess::{GuessError, GuessLog, GuessOutcome, GuessReport, HintOutcome, RoundPhase, SessionSnapshot};

pub fn instruction(range_max: u32) -> String {
    format!("Guess a number between 1 and {}:", range_max)
}

pub fn guess(report: &GuessReport, range_max: u32) -> Vec<String> {
    let feedback = match report.outcome {
        GuessOutcome::Invalid => "Please enter a valid number!".red(),
        GuessOutcome::OutOfRange => format!("Please enter a number between 1 and {}!", range_max).red(),
        GuessOutcome::TooLow => "Too low! Try a higher number.".yellow(),
        GuessOutcome::TooHigh => "Too high! Try a lower number.".yellow(),
        GuessOutcome::Correct => format!(
            "Congratulations! You guessed it in {} attempts!",
            report.attempts
        )
        .green()
        .bold(),
    };

    let mut lines = vec![feedback.to_string(), attempts(report.attempts)];
    if report.new_best {
        lines.push(format!("New best: {} attempts", report.attempts).bright_blue().to_string());
    }
    if report.outcome.is_correct() {
        lines.push("Type 'reset' to play again.".dimmed().to_string());
    }
    lines
}

pub fn hint(outcome: &HintOutcome) -> Vec<String> {
    match outcome {
        HintOutcome::Window(window) => vec![
            format!("Hint: The number is between {} and {}.", window.lower, window.upper)
                .cyan()
                .to_string(),
            hints_remaining(window.hints_remaining),
        ],
        HintOutcome::NoHintsLeft => vec!["No hints left!".red().to_string()],
    }
}

pub fn error(err: &GuessError) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", err).red().to_string()];
    if let GuessError::InvalidState { phase: RoundPhase::Won, .. } = err {
        lines.push("Type 'reset' to play again.".dimmed().to_string());
    }
    lines
}

pub fn attempts(attempts: u32) -> String {
    format!("Attempts: {}", attempts)
}

pub fn hints_remaining(hints: u32) -> String {
    format!("Hints remaining: {}", hints)
}

pub fn elapsed(seconds: Option<f64>) -> String {
    format!("Time: {:.1}s", seconds.unwrap_or(0.0))
}

pub fn best(best: Option<u32>) -> String {
    match best {
        Some(best) => format!("Best: {} attempts", best),
        None => "Best: N/A".to_string(),
    }
}

/// One-line summary shown above the prompt
pub fn status_line(snapshot: &SessionSnapshot) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        snapshot.difficulty,
        attempts(snapshot.attempts),
        hints_remaining(snapshot.hints_remaining),
        elapsed(snapshot.elapsed_seconds),
        best(snapshot.best_score),
    )
}

pub fn status(snapshot: &SessionSnapshot) -> Vec<String> {
    vec![
        format!("Difficulty: {}", snapshot.difficulty),
        format!("Round: {}", snapshot.phase),
        attempts(snapshot.attempts),
        hints_remaining(snapshot.hints_remaining),
        elapsed(snapshot.elapsed_seconds),
        best(snapshot.best_score),
    ]
}

/// One page of the guess log; pages are numbered from 1
pub fn history(log: &GuessLog, page: usize, page_size: usize) -> Vec<String> {
    if log.is_empty() {
        return vec!["No guesses yet.".dimmed().to_string()];
    }

    let pages = log.page_count(page_size);
    let page = page.clamp(1, pages);
    let mut lines: Vec<String> = log
        .page((page - 1) * page_size, page_size)
        .iter()
        .map(|entry| entry.to_string())
        .collect();
    lines.push(format!("-- page {} of {} --", page, pages).dimmed().to_string());
    lines
}

pub fn help() -> Vec<String> {
    [
        "Available commands:",
        "  <number>            - Submit a guess",
        "  guess <text>        - Submit any text as a guess",
        "  hint                - Narrow down the range (limited per round)",
        "  reset               - Start a new round",
        "  difficulty <level>  - Switch to easy, medium or hard and restart",
        "  status              - Show attempts, hints, time and best score",
        "  history [page]      - Show the guess log (latest page by default)",
        "  best                - Show the best score",
        "  help                - Show this help",
        "  quit                - Exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
