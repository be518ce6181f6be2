// Static lookup tables: virality tiers, tier colors and the algorithm
// signal catalog.
//
// The tier ranges are author-maintained: they must cover 0..=100 with no
// gaps or overlaps. The tests at the bottom of this file hold that line.

use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Display color key for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TierColor {
    Gray,
    Dim,
    GreenDim,
    Green,
    GreenBright,
    Amber,
    AmberBright,
    Cyan,
    CyanBright,
}

impl TierColor {
    /// Parse a color key as sent by the backend. Unknown keys fall back to gray.
    pub fn from_key(key: &str) -> Self {
        match key {
            "dim" => TierColor::Dim,
            "green-dim" => TierColor::GreenDim,
            "green" => TierColor::Green,
            "green-bright" => TierColor::GreenBright,
            "amber" => TierColor::Amber,
            "amber-bright" => TierColor::AmberBright,
            "cyan" => TierColor::Cyan,
            "cyan-bright" => TierColor::CyanBright,
            _ => TierColor::Gray,
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            TierColor::Gray => "#555555",
            TierColor::Dim => "#777777",
            TierColor::GreenDim => "#00aa2a",
            TierColor::Green => "#00cc33",
            TierColor::GreenBright => "#00ff41",
            TierColor::Amber => "#ffb000",
            TierColor::AmberBright => "#ffcc00",
            TierColor::Cyan => "#00d4ff",
            TierColor::CyanBright => "#00ffff",
        }
    }

    /// Apply this color to a piece of terminal text.
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            TierColor::Gray => text.bright_black(),
            TierColor::Dim => text.white().dimmed(),
            TierColor::GreenDim => text.green().dimmed(),
            TierColor::Green => text.green(),
            TierColor::GreenBright => text.bright_green().bold(),
            TierColor::Amber => text.yellow(),
            TierColor::AmberBright => text.bright_yellow().bold(),
            TierColor::Cyan => text.cyan(),
            TierColor::CyanBright => text.bright_cyan().bold(),
        }
    }
}

/// A named score bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViralityTier {
    pub level: u8,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub min_score: u8,
    pub max_score: u8,
    pub color: TierColor,
}

impl ViralityTier {
    /// Whether an integer score falls inside this tier's inclusive range.
    pub fn contains(&self, score: u8) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }
}

pub static VIRALITY_TIERS: [ViralityTier; 10] = [
    ViralityTier {
        level: 1,
        name: "DEAD_SIGNAL",
        emoji: "×",
        description: "No engagement detected. Content buried.",
        min_score: 0,
        max_score: 10,
        color: TierColor::Gray,
    },
    ViralityTier {
        level: 2,
        name: "LOW_REACH",
        emoji: "○",
        description: "Minimal algorithmic distribution.",
        min_score: 11,
        max_score: 20,
        color: TierColor::Gray,
    },
    ViralityTier {
        level: 3,
        name: "WARMING_UP",
        emoji: "◐",
        description: "Beginning to gain traction.",
        min_score: 21,
        max_score: 30,
        color: TierColor::Dim,
    },
    ViralityTier {
        level: 4,
        name: "BASELINE",
        emoji: "◑",
        description: "Average engagement levels.",
        min_score: 31,
        max_score: 40,
        color: TierColor::GreenDim,
    },
    ViralityTier {
        level: 5,
        name: "GAINING",
        emoji: "●",
        description: "Above average distribution.",
        min_score: 41,
        max_score: 50,
        color: TierColor::Green,
    },
    ViralityTier {
        level: 6,
        name: "TRENDING",
        emoji: "◉",
        description: "Algorithm is boosting reach.",
        min_score: 51,
        max_score: 60,
        color: TierColor::GreenBright,
    },
    ViralityTier {
        level: 7,
        name: "HOT",
        emoji: "▲",
        description: "High engagement multiplier active.",
        min_score: 61,
        max_score: 70,
        color: TierColor::Amber,
    },
    ViralityTier {
        level: 8,
        name: "VIRAL",
        emoji: "△",
        description: "Exponential reach detected.",
        min_score: 71,
        max_score: 80,
        color: TierColor::AmberBright,
    },
    ViralityTier {
        level: 9,
        name: "PEAK",
        emoji: "★",
        description: "Maximum algorithmic boost.",
        min_score: 81,
        max_score: 90,
        color: TierColor::Cyan,
    },
    ViralityTier {
        level: 10,
        name: "LEGENDARY",
        emoji: "✦",
        description: "Top 0.1% viral potential.",
        min_score: 91,
        max_score: 100,
        color: TierColor::CyanBright,
    },
];

/// Look up the tier for a score.
///
/// The score is clamped to 0-100 and floored before matching, so fractional
/// scores between two integer ranges land in the lower tier. NaN maps to
/// the first tier.
pub fn tier_for_score(score: f64) -> &'static ViralityTier {
    if score.is_nan() {
        return &VIRALITY_TIERS[0];
    }
    let bucket = score.clamp(0.0, 100.0).floor() as u8;
    VIRALITY_TIERS
        .iter()
        .find(|tier| tier.contains(bucket))
        .unwrap_or(&VIRALITY_TIERS[0])
}

/// Look up a tier by level (1-10), falling back to the first tier.
pub fn tier_by_level(level: u8) -> &'static ViralityTier {
    VIRALITY_TIERS
        .iter()
        .find(|tier| tier.level == level)
        .unwrap_or(&VIRALITY_TIERS[0])
}

/// Relative weight class of an engagement signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalWeight {
    High,
    Medium,
    Low,
    Negative,
    VeryNegative,
}

impl SignalWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalWeight::High => "HIGH",
            SignalWeight::Medium => "MEDIUM",
            SignalWeight::Low => "LOW",
            SignalWeight::Negative => "NEGATIVE",
            SignalWeight::VeryNegative => "VERY_NEGATIVE",
        }
    }
}

/// One entry in the algorithm signal catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSignal {
    pub key: &'static str,
    pub label: &'static str,
    pub weight: SignalWeight,
    pub description: &'static str,
}

const fn signal(
    key: &'static str,
    label: &'static str,
    weight: SignalWeight,
    description: &'static str,
) -> AlgorithmSignal {
    AlgorithmSignal {
        key,
        label,
        weight,
        description,
    }
}

/// Engagement signals that boost ranking.
pub static POSITIVE_SIGNALS: [AlgorithmSignal; 11] = [
    signal("favorite", "Like", SignalWeight::High, "User likes the tweet"),
    signal("reply", "Reply", SignalWeight::High, "User replies to the tweet"),
    signal("retweet", "Repost", SignalWeight::High, "User reposts the tweet"),
    signal("quote", "Quote", SignalWeight::Medium, "User quotes the tweet"),
    signal(
        "follow_author",
        "Follow",
        SignalWeight::High,
        "User follows after seeing tweet",
    ),
    signal("click", "Click", SignalWeight::Medium, "User clicks on tweet"),
    signal(
        "profile_click",
        "Profile Visit",
        SignalWeight::Medium,
        "User visits author profile",
    ),
    signal(
        "video_view",
        "Video View",
        SignalWeight::Medium,
        "Quality video view (50%+ watched)",
    ),
    signal("photo_expand", "Image Expand", SignalWeight::Low, "User expands image"),
    signal("dwell_time", "Dwell Time", SignalWeight::Medium, "Time spent reading"),
    signal("share", "Share", SignalWeight::Medium, "User shares externally"),
];

/// Engagement signals that penalize ranking.
pub static NEGATIVE_SIGNALS: [AlgorithmSignal; 4] = [
    signal(
        "not_interested",
        "Not Interested",
        SignalWeight::Negative,
        "User marks as not interested",
    ),
    signal("block_author", "Block", SignalWeight::VeryNegative, "User blocks author"),
    signal("mute_author", "Mute", SignalWeight::Negative, "User mutes author"),
    signal("report", "Report", SignalWeight::VeryNegative, "User reports tweet"),
];

/// Short label and icon for a backend signal name, used by score bars.
pub fn signal_label(signal: &str) -> (&str, &'static str) {
    match signal {
        "favorite" => ("likes", "♥"),
        "reply" => ("replies", "→"),
        "retweet" => ("retweets", "⟳"),
        "quote" => ("quotes", "❝"),
        "follow_author" => ("follows", "+"),
        "click" => ("clicks", "◎"),
        "profile_click" => ("profile", "◉"),
        "photo_expand" => ("images", "▣"),
        "video_quality_view" => ("video", "▶"),
        "dwell_time" => ("dwell", "◷"),
        "share" => ("shares", "↗"),
        "share_dm" => ("dm_share", "✉"),
        "share_copy_link" => ("link", "⊡"),
        "not_interested" => ("hide_risk", "×"),
        "block_author" => ("block_risk", "⊘"),
        "mute_author" => ("mute_risk", "◌"),
        "report" => ("report_risk", "!"),
        other => (other, "◆"),
    }
}
