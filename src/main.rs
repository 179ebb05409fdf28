//! Wordle Solver CLI
//!
//! Interactive command-line interface for the entropy-driven solver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use wordle_solver::{Error, FeedbackPattern, Solver, SolverConfig, Vocabulary, Word};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Parser)]
#[command(name = "wordle-solver", version, about = "Picks near-optimal Wordle guesses")]
struct Cli {
    /// Word list, one word per line
    #[arg(long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    #[arg(long, default_value_t = wordle_solver::DEFAULT_WORD_LENGTH)]
    word_length: usize,

    #[arg(long, default_value_t = wordle_solver::config::DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Worker threads for scoring (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Score candidates on the current thread only
    #[arg(long)]
    sequential: bool,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively, entering the game's colors each round
    Play,
    /// Let the solver play against a known target
    Solve { target: String },
    /// Print the best opening guesses
    Suggest {
        #[arg(long, default_value_t = 1)]
        top: usize,
    },
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stdout = io::stdout();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stdout, "\r{} {}", frames[i % frames.len()], message);
                let _ = stdout.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stdout, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stdout.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

struct Prompt {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }

    fn ask(&mut self) -> Result<String> {
        print!("> ");
        io::stdout().flush()?;
        match self.lines.next() {
            Some(line) => Ok(line.context("reading from stdin")?.trim().to_string()),
            None => bail!("input closed"),
        }
    }
}

fn first_guess(solver: &Solver, prompt: &mut Prompt) -> Result<Word> {
    println!("Do you want me to choose an optimal first word? This may take several minutes. (Y/N)");
    println!("    (the optimal word is the same every time for a given dictionary, so skip this if you know it)");
    if prompt.ask()?.eq_ignore_ascii_case("y") {
        let spinner = Spinner::new("Calculating first word...");
        let guess = solver.first_guess();
        drop(spinner);
        return Ok(guess?);
    }

    loop {
        println!("Enter your starting word");
        let entry = prompt.ask()?;
        match Word::new(&entry) {
            Ok(word) if solver.vocabulary().contains(&word) => return Ok(word),
            _ => println!("Invalid word."),
        }
    }
}

fn ask_feedback(guess: &Word, word_length: usize, prompt: &mut Prompt) -> Result<FeedbackPattern> {
    println!("Enter the word '{guess}' into the game and tell me the color result");
    println!("Use 'G' for green, 'Y' for yellow, and '-' for gray, with no spaces in between");
    println!("Example: {}", "--Y-G".chars().cycle().take(word_length).collect::<String>());

    loop {
        match FeedbackPattern::parse(&prompt.ask()?, word_length) {
            Ok(pattern) => return Ok(pattern),
            Err(e) => println!("Sorry, {e}. Please enter the color output again."),
        }
    }
}

fn play(mut solver: Solver) -> Result<()> {
    for line in BANNER_TEXT.lines() {
        println!("{}", line);
    }
    println!(
        "Dictionary has {} {}-letter words",
        solver.remaining_count(),
        solver.config().word_length
    );

    let word_length = solver.config().word_length;
    let mut prompt = Prompt::new();
    let mut guess = first_guess(&solver, &mut prompt)?;

    loop {
        let pattern = ask_feedback(&guess, word_length, &mut prompt)?;
        if solver.is_solved(&pattern) {
            println!("{}", pattern.to_emoji_string());
            println!("Nicely done!");
            return Ok(());
        }

        match solver.next_guess(&guess, &pattern) {
            Ok(next) => {
                println!("There are {} word(s) remaining", solver.remaining_count());
                if solver.remaining_count() <= 10 {
                    println!("    {:?}", solver.vocabulary().words());
                }
                guess = next;
            }
            Err(Error::RoundsExhausted(_)) => {
                println!("Better luck next time :(");
                return Ok(());
            }
            Err(Error::VocabularyExhausted) => {
                println!("Something went wrong. I could not solve this puzzle.");
                println!("No word matches the colors entered so far; one of them may have been mistyped.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn solve(mut solver: Solver, target: &str) -> Result<()> {
    let target = Word::new(target)?;
    if target.len() != solver.config().word_length {
        bail!("Word must be {} letters.", solver.config().word_length);
    }

    println!("Solving for: {}", target.as_str().to_uppercase());
    println!();

    let spinner = Spinner::new("Solving...");
    let guesses = solver.solve_for_target(&target);
    drop(spinner);

    let guesses = match guesses {
        Ok(guesses) => guesses,
        Err(Error::VocabularyExhausted) => bail!("{target} is not in the dictionary"),
        Err(e) => return Err(e.into()),
    };

    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            guess.as_str().to_uppercase(),
            pattern.to_emoji_string()
        );
    }

    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_solved() => {
            println!("Solved in {} guesses.", guesses.len())
        }
        _ => println!("Failed to solve within {} guesses.", solver.config().max_rounds),
    }
    Ok(())
}

fn suggest(solver: Solver, top: usize) -> Result<()> {
    let spinner = Spinner::new("Computing...");
    let ranked = solver.rank(top.max(1));
    drop(spinner);

    let ranked = ranked?;
    println!("{:>4} {:>8} {:>10}", "#", "Word", "Goodness");
    println!("{}", "-".repeat(24));
    for (i, candidate) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>10.4}",
            i + 1,
            candidate.word.as_str().to_uppercase(),
            candidate.goodness
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the worker pool")?;
    }

    let config = SolverConfig::default()
        .with_word_length(cli.word_length)
        .with_max_rounds(cli.rounds)
        .with_parallel(!cli.sequential);
    config.validate()?;

    let vocabulary = Vocabulary::load(config.word_length, &cli.dictionary)
        .with_context(|| format!("loading dictionary {}", cli.dictionary.display()))?;
    if vocabulary.is_empty() {
        bail!(
            "{} has no {}-letter words",
            cli.dictionary.display(),
            config.word_length
        );
    }
    let solver = Solver::new(config, vocabulary)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(solver),
        Command::Solve { target } => solve(solver, &target),
        Command::Suggest { top } => suggest(solver, top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_spinner_waits_for_its_thread() {
        let spinner = Spinner::new("Working...");
        let running = spinner.running.clone();
        drop(spinner);
        assert!(!running.load(Ordering::Relaxed));
        // the thread's clone is released only once it has exited
        assert_eq!(Arc::strong_count(&running), 1);
    }
}
