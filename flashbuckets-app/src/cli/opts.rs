use clap::{Args, Parser, Subcommand, ValueEnum};
use flashbuckets_core::{Difficulty, HintPolicy, HINT_MAX_CHARS, HINT_MAX_WORDS};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeckFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HintKind {
    Chars,
    Words,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "flashbuckets", version, about = "FlashBuckets practice CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Practice loop over a deck (nothing is saved)
    Practice(PracticeCmd),
    /// Print the hint for every card in a deck
    Hints(HintsCmd),
    /// Show bucket sizes, ranges and progress for a deck
    Inspect(InspectCmd),
}

#[derive(Debug, Args, Clone)]
pub struct DeckArgs {
    /// Deck file: JSON array or CSV with id,question,answer
    #[arg(long)]
    pub deck: PathBuf,
    /// Deck format (guessed from the extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<DeckFormat>,
}

#[derive(Debug, Args, Clone)]
pub struct HintArgs {
    #[arg(long, value_enum, default_value_t = HintKind::Chars)]
    pub hint_policy: HintKind,
    /// Threshold for the chosen policy (characters or words)
    #[arg(long)]
    pub hint_max: Option<usize>,
}

impl HintArgs {
    pub fn policy(&self) -> HintPolicy {
        match self.hint_policy {
            HintKind::Chars => HintPolicy::Chars {
                max_chars: self.hint_max.unwrap_or(HINT_MAX_CHARS),
            },
            HintKind::Words => HintPolicy::Words {
                max_words: self.hint_max.unwrap_or(HINT_MAX_WORDS),
            },
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct PracticeCmd {
    #[command(flatten)]
    pub deck: DeckArgs,
    #[command(flatten)]
    pub hint: HintArgs,
    /// Level every card starts in (name or -2..2)
    #[arg(long, default_value_t = Difficulty::Hardest)]
    pub start: Difficulty,
    #[arg(long, default_value_t = 50)]
    pub max: usize,
}

#[derive(Debug, Args, Clone)]
pub struct HintsCmd {
    #[command(flatten)]
    pub deck: DeckArgs,
    #[command(flatten)]
    pub hint: HintArgs,
}

#[derive(Debug, Args, Clone)]
pub struct InspectCmd {
    #[command(flatten)]
    pub deck: DeckArgs,
    #[arg(long, default_value_t = Difficulty::Hardest)]
    pub start: Difficulty,
    /// Place a card before inspecting: <card-id>=<level>
    #[arg(long = "assign")]
    pub assign: Vec<String>,
}
