//! Trend heuristics applied to every row of a snapshot.
//!
//! All three functions are pure and total. Cutoffs live in [`CLASSIFIER`] and are compared
//! with strict inequalities, so a value sitting exactly on a threshold never matches it.

use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

use crate::{config::CLASSIFIER, domain::MarketRow};

pub const UP_GLYPH: &str = "🔺";
pub const DOWN_GLYPH: &str = "🔻";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum Suggestion {
    #[strum(to_string = "Trending Up")]
    TrendingUp,
    #[strum(to_string = "Avoid: Falling")]
    AvoidFalling,
    #[strum(to_string = "Neutral")]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum Prediction {
    #[strum(to_string = "Likely Up")]
    LikelyUp,
    #[strum(to_string = "Likely Down")]
    LikelyDown,
    #[strum(to_string = "Uncertain")]
    Uncertain,
}

/// Direction glyph plus the change at two decimals. Zero counts as down.
pub fn format_change(pct: f64) -> String {
    let glyph = if pct > 0.0 { UP_GLYPH } else { DOWN_GLYPH };
    format!("{} {:.2}%", glyph, pct)
}

/// First matching branch wins.
pub fn suggest_investment(row: &MarketRow) -> Suggestion {
    if row.price_change_pct > CLASSIFIER.trending_up_change_pct
        && row.quote_volume > CLASSIFIER.trending_up_min_quote_volume
    {
        Suggestion::TrendingUp
    } else if row.price_change_pct < CLASSIFIER.falling_change_pct {
        Suggestion::AvoidFalling
    } else {
        Suggestion::Neutral
    }
}

pub fn predict_movement(row: &MarketRow) -> Prediction {
    if row.price_change_pct > CLASSIFIER.likely_up_change_pct {
        Prediction::LikelyUp
    } else if row.price_change_pct < CLASSIFIER.likely_down_change_pct {
        Prediction::LikelyDown
    } else {
        Prediction::Uncertain
    }
}
