//! Display functions for game screens and command results

use super::formatters::{empty_row, guess_row, keyboard_lines, score_row};
use crate::challenge::{ChallengeData, Outcome, share::score_grid};
use crate::core::{GameSession, GuessRecord, MAX_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

/// Print the guess grid and keyboard
///
/// # Errors
/// Propagates write failures.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    for record in session.history() {
        writeln!(out, "  {}", guess_row(record))?;
    }
    for _ in session.tries()..MAX_GUESSES {
        writeln!(out, "  {}", empty_row())?;
    }

    writeln!(out)?;
    for line in keyboard_lines(&session.keyboard()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Print the challenger's hidden score rows before a challenge game
///
/// # Errors
/// Propagates write failures.
pub fn print_challenge_intro<W: Write>(out: &mut W, challenge: &ChallengeData) -> io::Result<()> {
    let name = challenge.display_name();
    let summary = if challenge.found_word() {
        format!("{name} found the word in {} tries. Can you beat that?", challenge.tries())
    } else {
        format!("{name} did not find the word. Can you?")
    };

    writeln!(out, "\n{}", summary.bright_cyan().bold())?;
    for record in &challenge.guesses {
        writeln!(out, "  {}", score_row(record.scores()))?;
    }
    Ok(())
}

/// Print the end-of-game banner
///
/// # Errors
/// Propagates write failures.
pub fn print_game_over<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let secret = session.secret().text().to_uppercase();
    if session.is_won() {
        let tries = session.tries();
        let noun = if tries == 1 { "guess" } else { "guesses" };
        writeln!(
            out,
            "{}",
            format!("Solved {secret} in {tries} {noun}!").green().bold()
        )
    } else {
        writeln!(
            out,
            "{}",
            format!("Out of guesses. The word was {secret}.").red().bold()
        )
    }
}

/// Print the comparison between my game and a challenger's
///
/// # Errors
/// Propagates write failures.
pub fn print_outcome<W: Write>(
    out: &mut W,
    outcome: Outcome,
    mine: &[GuessRecord],
    theirs: &ChallengeData,
) -> io::Result<()> {
    let headline = match outcome {
        Outcome::Win => outcome.headline().green().bold(),
        Outcome::Loss => outcome.headline().red().bold(),
        Outcome::Draw => outcome.headline().yellow().bold(),
    };
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {headline}")?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    let trophy = |won: bool| if won { " 🏆" } else { "" };
    writeln!(out, "\n{}{}", theirs.display_name().bold(), trophy(outcome == Outcome::Loss))?;
    writeln!(out, "{}", score_grid(&theirs.guesses))?;
    writeln!(out, "\n{}{}", "Me".bold(), trophy(outcome == Outcome::Win))?;
    writeln!(out, "{}", score_grid(mine))
}

/// Print a decoded challenge with its letters revealed
///
/// # Errors
/// Propagates write failures.
pub fn print_challenge<W: Write>(out: &mut W, challenge: &ChallengeData) -> io::Result<()> {
    writeln!(
        out,
        "Challenge from {} (version {})",
        challenge.display_name().bold(),
        challenge.version
    )?;
    writeln!(out, "Secret: {}", challenge.secret.text().to_uppercase().bright_yellow())?;
    for record in &challenge.guesses {
        writeln!(out, "  {}  {}", guess_row(record), record.scores().to_digits())?;
    }

    let verdict = if challenge.found_word() {
        format!("Found in {} tries", challenge.tries()).green()
    } else {
        "Not found".red()
    };
    writeln!(out, "{verdict}")
}

/// Print recently played secrets, newest first
///
/// # Errors
/// Propagates write failures.
pub fn print_recent_secrets<W: Write>(out: &mut W, recent: &[String]) -> io::Result<()> {
    if recent.is_empty() {
        return writeln!(out, "No games played yet.");
    }

    writeln!(out, "{}", "Recent words:".bright_cyan().bold())?;
    for (i, word) in recent.iter().enumerate() {
        writeln!(out, "  {}. {}", (i + 1).to_string().bright_black(), word.to_uppercase())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::{decode, encode};
    use crate::core::Word;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn session(secret: &str, guesses: &[&str]) -> GameSession {
        GameSession::replay(Word::new(secret).unwrap(), guesses).unwrap()
    }

    #[test]
    fn board_shows_guesses_and_blanks() {
        let game = session("atoll", &["allot"]);
        let text = render(|out| print_board(out, &game));

        assert!(text.contains(" A  L  L  O  T "));
        assert_eq!(text.matches(" _  _  _  _  _ ").count(), MAX_GUESSES - 1);
        assert!(text.contains("Q W E R T Y U I O P"));
    }

    #[test]
    fn game_over_messages() {
        let won = render(|out| print_game_over(out, &session("atoll", &["atoll"])));
        assert_eq!(won, "Solved ATOLL in 1 guess!\n");

        let lost = render(|out| print_game_over(out, &session("atoll", &["crane"; 6])));
        assert_eq!(lost, "Out of guesses. The word was ATOLL.\n");
    }

    #[test]
    fn challenge_intro_summarizes_challenger() {
        let token = encode(&session("atoll", &["allot", "atoll"]), Some("Ana"));
        let theirs = decode(token.as_str()).unwrap();
        let text = render(|out| print_challenge_intro(out, &theirs));
        assert!(text.contains("Ana found the word in 2 tries"));
        assert!(!text.contains("ATOLL"));
    }

    #[test]
    fn outcome_shows_both_grids() {
        let theirs = decode(encode(&session("atoll", &["allot", "atoll"]), None).as_str()).unwrap();
        let mine = session("atoll", &["atoll"]);
        let text = render(|out| print_outcome(out, Outcome::Win, mine.history(), &theirs));

        assert!(text.contains("I Win!"));
        assert!(text.contains("Me 🏆"));
        assert!(text.contains("Challenger\n🟩🟨🟨🟨🟨\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn challenge_reveals_letters() {
        let data = decode(encode(&session("mossy", &["sassy"]), None).as_str()).unwrap();
        let text = render(|out| print_challenge(out, &data));
        assert!(text.contains("Secret: MOSSY"));
        assert!(text.contains("00222"));
        assert!(text.contains("Not found"));
    }

    #[test]
    fn recent_secrets_listing() {
        let text = render(|out| print_recent_secrets(out, &[]));
        assert_eq!(text, "No games played yet.\n");

        let recent = vec!["atoll".to_string(), "crane".to_string()];
        let text = render(|out| print_recent_secrets(out, &recent));
        assert!(text.contains("1. ATOLL"));
        assert!(text.contains("2. CRANE"));
    }
}
