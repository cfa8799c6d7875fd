use serde::Serialize;

/// Pipeline stage of a manuscript, inferred from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Submission,
    UnderReview,
    Revision,
    Contract,
    Published,
}

/// Board column order.
pub const STAGES: [Stage; 5] = [
    Stage::Submission,
    Stage::UnderReview,
    Stage::Revision,
    Stage::Contract,
    Stage::Published,
];

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Submission => "submission",
            Stage::UnderReview => "under_review",
            Stage::Revision => "revision",
            Stage::Contract => "contract",
            Stage::Published => "published",
        }
    }
}

const PUBLISHED_KEYWORDS: &[&str] = &["published", "release", "on sale", "out now"];
const CONTRACT_KEYWORDS: &[&str] = &["contract", "offer", "negotiation", "signed"];
const REVISION_KEYWORDS: &[&str] = &["revision", "revise", "r&r", "rewrite", "edit letter"];
const REVIEW_KEYWORDS: &[&str] = &["full request", "under review", "reading", "review"];

/// Keyword scan over lowercased title + notes. Later pipeline stages are
/// probed first, so "revision after the full review" lands on `Revision`,
/// not `UnderReview`. No keyword hit means the manuscript is still in the
/// submission pile.
pub fn classify_stage(title: &str, notes: Option<&str>) -> Stage {
    let mut text = title.to_lowercase();
    if let Some(notes) = notes {
        text.push(' ');
        text.push_str(&notes.to_lowercase());
    }

    let probes = [
        (Stage::Published, PUBLISHED_KEYWORDS),
        (Stage::Contract, CONTRACT_KEYWORDS),
        (Stage::Revision, REVISION_KEYWORDS),
        (Stage::UnderReview, REVIEW_KEYWORDS),
    ];
    for (stage, keywords) in probes {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return stage;
        }
    }
    Stage::Submission
}
