// src/types.rs

use clap::ValueEnum;
use serde::Deserialize;

/// How ties on due date and effort are broken by title.
///
/// - `Locale`: case- and accent-insensitive first, class-aware comparison in
///   the spirit of a locale collation (`apple` < `Banana` < `cherry`,
///   `a` < `A`, `é` < `f`).
/// - `Ordinal`: raw code-point order (`Banana` < `apple`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TitleOrder {
    #[default]
    Locale,
    Ordinal,
}

/// Rendering of the CLI result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered list, one title per line.
    #[default]
    Text,
    /// `{"recommendedOrder": [...]}` or `{"error": "..."}`.
    Json,
}
