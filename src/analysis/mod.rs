pub mod classifier;

pub use classifier::{
    DOWN_GLYPH, Prediction, Suggestion, UP_GLYPH, format_change, predict_movement,
    suggest_investment,
};
