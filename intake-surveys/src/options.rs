//! Option lists shared by several questions.

pub const YES_NO: &[&str] = &["Yes", "No"];

/// Five-point importance scale, most important first.
pub const IMPORTANCE_SCALE: &[&str] = &[
    "Extremely important",
    "Very important",
    "Moderately important",
    "Slightly important",
    "Not important",
];

/// The answer that reveals a follow-up question.
pub const YES: &str = "Yes";
