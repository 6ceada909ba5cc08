//! Walk through the bundled story quizzes.
//!
//! Run with: `cargo run --example demo` (set `RUST_LOG=story_quiz=debug` to
//! see every state transition).
//!
//! 1. **Scripted attempts**: the ocean robot quiz is played three times with
//!    fixed picks, one per outcome tier, and each result goes to the history.
//! 2. **Shuffled options**: the penguin quiz with a fixed seed, showing that
//!    the correct answer follows its text.
//! 3. **Client view**: the JSON a quiz screen would receive mid-question.

use story_quiz::{
    quiz_engine::helpers::{option_letter, options_str, summary_str},
    start_quiz, to_client_view, MemoryStore, Progress, QuizRequest, QuizSession,
    QuizSettings, ResultHistory, ResultSink, StaticCatalog,
};
use tracing_subscriber::EnvFilter;

fn play(session: &mut QuizSession, picks: &[usize]) -> Option<story_quiz::QuizResult> {
    for &pick in picks {
        let question = session.current_question()?.clone();
        println!("  Q: {}", question.text);
        println!("     {}", options_str(&question));
        match session.submit_answer(pick) {
            Ok(fb) => {
                let mark = if fb.is_correct { "✓" } else { "✗" };
                println!(
                    "     picked {} {mark}  (answer: {})",
                    option_letter(fb.selected),
                    question.correct_option()
                );
            }
            Err(err) => println!("     rejected: {err}"),
        }
        match session.advance() {
            Ok(Progress::Finished(result)) => return Some(result),
            Ok(Progress::Next(_)) => {}
            Err(err) => println!("     rejected: {err}"),
        }
    }
    None
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let settings = QuizSettings::from_env()?;
    let catalog = StaticCatalog::builtin()?;
    let mut history = ResultHistory::new(MemoryStore::new(), settings.history_limit);

    // ── Scripted attempts ─────────────────────────────────────────────────
    println!();
    println!("══ Ocean robot quiz ══");
    let mut session = start_quiz(&catalog, &QuizRequest::new("ocean-robot"))?;
    for picks in [[0, 1, 2], [1, 1, 2], [1, 0, 0]] {
        println!();
        if let Some(result) = play(&mut session, &picks) {
            println!("  Result: {}", summary_str(&result));
            println!("  {}", result.tier.message());
            history.record(&result)?;
        }
        session.reset();
    }
    println!();
    println!(
        "  Attempts stored: {}  Best score: {:?}",
        history.results("ocean-robot")?.len(),
        history.best_score("ocean-robot")?
    );

    // ── Shuffled options ──────────────────────────────────────────────────
    println!();
    println!("══ Penguin quiz, shuffled (seed 42) ══");
    println!();
    let request = QuizRequest { quiz_id: "penguin-rescue".into(), rng_seed: Some(42), shuffle_options: true };
    let mut session = start_quiz(&catalog, &request)?;
    let picks: Vec<usize> = session.bank().questions().iter().map(|q| q.correct_index).collect();
    if let Some(result) = play(&mut session, &picks) {
        println!("  Result: {}", summary_str(&result));
    }

    // ── Client view ───────────────────────────────────────────────────────
    println!();
    println!("══ Client view after a wrong answer ══");
    println!();
    let mut session = start_quiz(&catalog, &settings.request("ocean-robot"))?;
    session.submit_answer(2)?;
    println!("{}", serde_json::to_string_pretty(&to_client_view(&session))?);

    Ok(())
}
