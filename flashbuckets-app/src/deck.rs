use anyhow::{bail, Context, Result};
use flashbuckets_core::Card;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use uuid::Uuid;

use crate::cli::opts::DeckFormat;

#[derive(Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: String,
    question: String,
    answer: String,
}

pub fn load_deck(path: &Path, format: Option<DeckFormat>) -> Result<Vec<Card>> {
    let format = match format {
        Some(f) => f,
        None => guess_format(path)?,
    };
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    let cards = match format {
        DeckFormat::Json => parse_json(file),
        DeckFormat::Csv => parse_csv(file),
    }
    .with_context(|| format!("read deck {}", path.display()))?;
    tracing::info!(path = %path.display(), cards = cards.len(), "deck loaded");
    Ok(cards)
}

fn guess_format(path: &Path) -> Result<DeckFormat> {
    match path.extension().and_then(|s| s.to_str()).map(str::to_lowercase).as_deref() {
        Some("json") => Ok(DeckFormat::Json),
        Some("csv") => Ok(DeckFormat::Csv),
        _ => bail!("cannot tell deck format of {}; pass --format", path.display()),
    }
}

fn parse_json<R: Read>(rdr: R) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_reader(rdr)?;
    check_unique(&cards)?;
    Ok(cards)
}

fn parse_csv<R: Read>(rdr: R) -> Result<Vec<Card>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut cards = Vec::new();
    for rec in rdr.deserialize() {
        let row: CsvRow = rec?;
        let id = if row.id.is_empty() { Uuid::new_v4().to_string() } else { row.id };
        cards.push(Card::new(id, row.question, row.answer));
    }
    check_unique(&cards)?;
    Ok(cards)
}

fn check_unique(cards: &[Card]) -> Result<()> {
    let mut seen = HashSet::new();
    for c in cards {
        if c.id.is_empty() {
            bail!("card with empty id");
        }
        if !seen.insert(c.id.as_str()) {
            bail!("duplicate card id: {}", c.id);
        }
    }
    Ok(())
}
