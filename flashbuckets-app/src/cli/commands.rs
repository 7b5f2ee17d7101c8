use crate::cli::opts::*;
use crate::deck::load_deck;

use anyhow::{anyhow, Result};
use flashbuckets_core::{
    get_bucket_range, summarize, to_bucket_sets, BucketCounts, BucketMap, Card, Difficulty,
    Session,
};
use std::io::{stdin, stdout, BufRead, Write};

pub fn run_cli(args: Cli) -> Result<()> {
    match args.cmd {
        Command::Practice(cmd) => practice_cmd(cmd),
        Command::Hints(cmd) => hints_cmd(cmd),
        Command::Inspect(cmd) => inspect_cmd(cmd),
    }
}

fn practice_cmd(cmd: PracticeCmd) -> Result<()> {
    let cards = load_deck(&cmd.deck.deck, cmd.deck.format)?;
    if cards.is_empty() {
        println!("deck is empty");
        return Ok(());
    }
    let map = BucketMap::from_assignments(cards.into_iter().map(|c| (c, cmd.start)));
    let session = Session::new(map, cmd.hint.policy());
    practice_loop(&session, cmd.max, &mut stdin().lock(), &mut stdout())?;
    Ok(())
}

/// Runs until `max` cards are answered, the map runs dry, or the learner
/// quits (`q` or end of input). Returns the number of answered cards.
fn practice_loop<R: BufRead, W: Write>(
    session: &Session,
    max: usize,
    input: &mut R,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0usize;
    while count < max {
        let Some(card) = session.practice() else {
            writeln!(out, "no cards left")?;
            break;
        };
        writeln!(out, "\n[{}/{}] {}", count + 1, max, card.id)?;
        writeln!(out, "Q: {}", card.question)?;
        loop {
            let Some(line) = read_line(input, out, "[enter=show, h=hint, q=quit]> ")? else {
                return finish(session, count, out);
            };
            match line.trim().to_lowercase().as_str() {
                "" => break,
                "h" | "hint" => writeln!(out, "hint: {}", session.hint(&card))?,
                "q" | "quit" => return finish(session, count, out),
                _ => writeln!(out, "press enter, h, or q")?,
            }
        }
        writeln!(out, "A: {}", card.answer)?;
        writeln!(out, "[{}]", level_legend())?;
        let level = loop {
            let Some(line) = read_line(input, out, "level> ")? else {
                return finish(session, count, out);
            };
            match line.trim().to_lowercase().as_str() {
                "q" | "quit" => return finish(session, count, out),
                s => match s.parse::<Difficulty>() {
                    Ok(d) => break d,
                    Err(e) => writeln!(out, "{e}")?,
                },
            }
        };
        session.update(&card, level);
        count += 1;
        writeln!(out, "→ {} (progress {}%)", level, session.progress())?;
    }

    finish(session, count, out)
}

fn finish<W: Write>(session: &Session, reviewed: usize, out: &mut W) -> Result<usize> {
    writeln!(out, "\nreviewed {}", reviewed)?;
    write_counts(out, &session.counts())?;
    Ok(reviewed)
}

fn hints_cmd(cmd: HintsCmd) -> Result<()> {
    let cards = load_deck(&cmd.deck.deck, cmd.deck.format)?;
    let policy = cmd.hint.policy();
    for c in &cards {
        println!("{}\t{}", c.id, policy.hint(c));
    }
    Ok(())
}

fn inspect_cmd(cmd: InspectCmd) -> Result<()> {
    let cards = load_deck(&cmd.deck.deck, cmd.deck.format)?;
    let mut map = BucketMap::from_assignments(cards.iter().cloned().map(|c| (c, cmd.start)));
    for a in &cmd.assign {
        let (card, level) = parse_assignment(&cards, a)?;
        flashbuckets_core::update(card, level, &mut map);
    }

    let sets = to_bucket_sets(&cards, &map);
    for c in &cards {
        let r = get_bucket_range(&sets, &c.id);
        println!("{}\t[{}, {}]\t{}", c.id, r.low, r.high, c.question);
    }
    write_counts(&mut stdout(), &summarize(&map))
}

// ===== Helpers =====
fn parse_assignment<'a>(cards: &'a [Card], s: &str) -> Result<(&'a Card, Difficulty)> {
    let (id, level) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected <card-id>=<level>, got {s}"))?;
    let card = cards
        .iter()
        .find(|c| c.id == id.trim())
        .ok_or_else(|| anyhow!("card not found: {}", id.trim()))?;
    Ok((card, level.parse::<Difficulty>()?))
}

fn write_counts<W: Write>(out: &mut W, counts: &BucketCounts) -> Result<()> {
    for d in Difficulty::by_priority() {
        writeln!(out, "{:>8}: {}", d, counts.count(d))?;
    }
    writeln!(out, "progress: {}% of {}", counts.progress(), counts.total)?;
    Ok(())
}

fn level_legend() -> String {
    Difficulty::ALL
        .iter()
        .map(|d| format!("{}={}", d.value(), d))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `None` once the input is exhausted.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush().ok();
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_parses() {
        let cards = vec![Card::new("1", "Q1", "A1")];
        let (c, d) = parse_assignment(&cards, "1=mastered").unwrap();
        assert_eq!(c.id, "1");
        assert_eq!(d, Difficulty::Mastered);
        assert_eq!(parse_assignment(&cards, " 1 = -1").unwrap().1, Difficulty::Easy);
    }

    #[test]
    fn assignment_rejects_bad_input() {
        let cards = vec![Card::new("1", "Q1", "A1")];
        assert!(parse_assignment(&cards, "1").is_err());
        assert!(parse_assignment(&cards, "2=hard").is_err());
        assert!(parse_assignment(&cards, "1=5").is_err());
    }

    fn two_card_session() -> Session {
        let map = BucketMap::from_assignments([
            (Card::new("1", "Q1", "A1"), Difficulty::Hard),
            (Card::new("2", "Q2", "A2 A3 A4 A5 A7"), Difficulty::Hardest),
        ]);
        Session::new(map, Default::default())
    }

    fn run(session: &Session, max: usize, script: &str) -> (usize, String) {
        let mut out = Vec::new();
        let n = practice_loop(session, max, &mut script.as_bytes(), &mut out).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn practice_stops_on_empty_input() {
        let session = two_card_session();
        let (n, out) = run(&session, 50, "");
        assert_eq!(n, 0);
        assert!(out.contains("reviewed 0"));
        assert_eq!(session.counts().count(Difficulty::Hardest), 1);
    }

    #[test]
    fn practice_stops_when_input_ends_at_level_prompt() {
        let session = two_card_session();
        let (n, out) = run(&session, 50, "h\n\n");
        assert_eq!(n, 0);
        assert!(out.contains("hint: A2 A3 A4 A..."));
        assert!(out.contains("A: A2 A3 A4 A5 A7"));
        assert_eq!(out.matches("level> ").count(), 1);
        assert!(out.contains("reviewed 0"));
    }

    #[test]
    fn practice_ignores_bad_level_then_continues() {
        let session = two_card_session();
        let (n, out) = run(&session, 50, "\nbogus\nmastered\n\n-2\n");
        assert_eq!(n, 2);
        assert!(out.contains("unknown level: bogus"));
        assert!(out.contains("reviewed 2"));
        assert_eq!(session.progress(), 100);
    }

    #[test]
    fn practice_quit_and_max() {
        let session = two_card_session();
        let (n, _) = run(&session, 50, "q\n");
        assert_eq!(n, 0);
        let (n, out) = run(&session, 1, "\nmastered\n");
        assert_eq!(n, 1);
        assert!(out.contains("reviewed 1"));
        assert_eq!(session.practice().map(|c| c.id), Some("1".to_string()));
    }

    #[test]
    fn legend_lists_all_levels() {
        assert_eq!(
            level_legend(),
            "-2=mastered, -1=easy, 0=medium, 1=hard, 2=hardest"
        );
    }
}
