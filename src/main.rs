use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use terraquiz::gamification::{achievements, leaderboard::Leaderboard, levels, progress::UserProgress};
use terraquiz::models::QuizMode;
use terraquiz::scoring::{self, StreakTier};
use terraquiz::session::QuizSession;
use terraquiz::storage::Storage;
use terraquiz::{api, names, quiz, utils};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Player name recorded in progress and on the leaderboard.
    #[arg(short, long, env = "TERRAQUIZ_PLAYER")]
    player: Option<String>,

    /// Override the data directory (default: platform-local app data).
    #[arg(long, env = "TERRAQUIZ_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a quiz (the default).
    Play {
        /// flags, capitals, currencies or mixed.
        #[arg(short, long, default_value = "flags", value_parser = parse_mode)]
        mode: QuizMode,

        /// Number of questions.
        #[arg(short = 'n', long, default_value_t = names::DEFAULT_QUESTION_COUNT)]
        questions: usize,

        /// Seed for a reproducible question order.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the local leaderboard.
    Leaderboard {
        /// Only entries for one mode.
        #[arg(short, long)]
        mode: Option<String>,

        /// Only entries from the last N days.
        #[arg(short, long)]
        days: Option<u64>,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Show achievements and their progress.
    Achievements,
    /// Show lifetime statistics.
    Stats,
    /// Delete all stored progress and leaderboard data.
    Reset,
}

fn parse_mode(s: &str) -> Result<QuizMode, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "terraquiz=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let storage = match &args.data_dir {
        Some(dir) => Storage::with_dir(dir.clone()),
        None => Storage::new(),
    };

    match args.command.unwrap_or(Command::Play {
        mode: QuizMode::Flags,
        questions: names::DEFAULT_QUESTION_COUNT,
        seed: None,
    }) {
        Command::Play {
            mode,
            questions,
            seed,
        } => play(&storage, args.player.as_deref(), mode, questions, seed).await,
        Command::Leaderboard { mode, days, limit } => show_leaderboard(&storage, mode, days, limit),
        Command::Achievements => show_achievements(&storage),
        Command::Stats => show_stats(&storage),
        Command::Reset => reset(&storage),
    }
}

async fn play(
    storage: &Storage,
    player: Option<&str>,
    mode: QuizMode,
    questions: usize,
    seed: Option<u64>,
) -> color_eyre::Result<()> {
    let mut progress: UserProgress = storage.load_or_default(names::PROGRESS_FILE);
    if let Some(name) = player {
        progress.player_name = name.to_string();
    }

    let countries = api::fetch_countries(storage).await?;

    let count = questions.clamp(names::MIN_QUESTION_COUNT, names::MAX_QUESTION_COUNT);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = quiz::generate_quiz(&countries, mode, count, &mut rng)?;
    if generated.len() < count {
        println!(
            "Heads up: only {} of {count} questions could be generated.",
            generated.len()
        );
    }

    let mut session = QuizSession::new(mode, generated);
    let now = utils::epoch_millis();
    progress.streaks.reset_correct(now);
    progress.streaks.record_daily_play(now);

    println!();
    println!(
        "=== {} quiz — {} questions — good luck, {}! ===",
        mode,
        session.questions.len(),
        progress.player_name
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let Some(question) = session.current_question().cloned() {
        println!();
        println!(
            "Question {}/{}: {}",
            session.current_index + 1,
            session.questions.len(),
            question.prompt
        );
        if let Some(url) = &question.image_url {
            println!("  Flag: {url}");
        }
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }

        let started = Instant::now();
        let choice = read_choice(&mut input, question.options.len())?;
        let time_spent = started.elapsed().as_secs_f64();

        let streak = progress.streaks.correct.current;
        let multiplier = scoring::streak_multiplier(streak);
        let selected = question.options[choice - 1].clone();
        let score = session.submit_answer(&selected, time_spent, multiplier)?;

        progress
            .streaks
            .record_answer(selected == question.correct_answer, utils::epoch_millis());

        if score.points > 0 {
            let streak_now = progress.streaks.correct.current;
            println!(
                "Correct! +{} points ({} base, +{} time bonus, x{} streak) {} streak: {}",
                score.points,
                score.breakdown.base,
                score.breakdown.time_bonus,
                score.breakdown.streak_multiplier,
                StreakTier::for_streak(streak_now).flame(),
                streak_now
            );
        } else {
            println!("Wrong — the answer was {}.", question.correct_answer);
        }
    }

    let stats = session.finish();

    println!();
    println!("=== Results ===");
    println!(
        "Score: {} points | Accuracy: {:.0}% ({}/{})",
        stats.total_points, stats.accuracy, stats.correct_answers, stats.total_questions
    );
    println!(
        "Average time: {:.1}s | Fastest answer: {:.1}s",
        stats.average_time_per_question, stats.fastest_answer
    );

    let leveled_up = progress.update_after_quiz(&stats);

    let mut unlocked_pool = std::mem::take(&mut progress.achievements);
    let newly_unlocked = achievements::check_achievements(
        &mut unlocked_pool,
        &stats,
        &progress,
        progress.streaks.correct.best,
        progress.streaks.daily.current,
    );
    progress.achievements = unlocked_pool;

    if leveled_up {
        let level = levels::level_by_number(progress.current_level);
        println!("Level up! You are now level {}: {}", level.level, level.name);
    }
    for achievement in &newly_unlocked {
        println!(
            "Achievement unlocked: {} {} — {}",
            achievement.icon, achievement.name, achievement.description
        );
    }

    let mut board: Leaderboard = storage.load_or_default(names::LEADERBOARD_FILE);
    board.add_entry(&stats, &progress.player_name, progress.current_level);

    storage.save(names::PROGRESS_FILE, &progress)?;
    storage.save(names::LEADERBOARD_FILE, &board)?;

    Ok(())
}

fn read_choice(input: &mut impl BufRead, options: usize) -> io::Result<usize> {
    loop {
        print!("Your answer (1-{options}): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF counts as a pass on the first option.
            return Ok(1);
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=options).contains(&n) => return Ok(n),
            _ => println!("Please enter a number between 1 and {options}."),
        }
    }
}

fn show_leaderboard(
    storage: &Storage,
    mode: Option<String>,
    days: Option<u64>,
    limit: usize,
) -> color_eyre::Result<()> {
    let board: Leaderboard = storage.load_or_default(names::LEADERBOARD_FILE);

    let mut entries: Vec<_> = board.entries().iter().collect();
    if let Some(mode) = &mode {
        entries.retain(|e| e.mode == *mode);
    }
    if let Some(days) = days {
        let cutoff = utils::epoch_millis().saturating_sub(days * names::DAY_MS);
        entries.retain(|e| e.date >= cutoff);
    }
    entries.truncate(limit);

    if entries.is_empty() {
        println!("No leaderboard entries yet. Play a quiz!");
        return Ok(());
    }

    println!("=== Leaderboard ===");
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<20} {:>6} pts  {:>5.1}%  {:<10} lvl {}",
            i + 1,
            entry.player_name,
            entry.score,
            entry.accuracy,
            entry.mode,
            entry.level
        );
    }
    Ok(())
}

fn show_achievements(storage: &Storage) -> color_eyre::Result<()> {
    let progress: UserProgress = storage.load_or_default(names::PROGRESS_FILE);

    println!(
        "=== Achievements ({:.0}% complete) ===",
        achievements::completion_percent(&progress.achievements)
    );
    for achievement in &progress.achievements {
        let marker = if achievement.unlocked { "✔" } else { " " };
        println!(
            "[{marker}] {} {:<24} {:>3.0}%  {}",
            achievement.icon, achievement.name, achievement.progress, achievement.description
        );
    }
    Ok(())
}

fn show_stats(storage: &Storage) -> color_eyre::Result<()> {
    let progress: UserProgress = storage.load_or_default(names::PROGRESS_FILE);
    let level = levels::level_by_number(progress.current_level);

    println!("=== {} ===", progress.player_name);
    println!(
        "Level {} ({}) — {} points, {:.0}% to next level",
        level.level,
        level.name,
        progress.total_points,
        levels::level_progress(progress.total_points)
    );
    println!(
        "Quizzes played: {} | Best correct streak: {} | Daily streak: {}",
        progress.total_quizzes, progress.streaks.correct.best, progress.streaks.daily.current
    );

    for mode in QuizMode::ALL {
        let stats = progress.mode_stats.get(mode);
        if stats.total_quizzes == 0 {
            continue;
        }
        println!(
            "  {:<10} {:>3} quizzes  {:>6} pts  best {:>4}  accuracy {:>5.1}%",
            mode.to_string(),
            stats.total_quizzes,
            stats.total_points,
            stats.best_score,
            stats.average_accuracy
        );
    }
    Ok(())
}

fn reset(storage: &Storage) -> color_eyre::Result<()> {
    storage.remove(names::PROGRESS_FILE)?;
    storage.remove(names::LEADERBOARD_FILE)?;
    println!("Progress and leaderboard cleared.");
    Ok(())
}
