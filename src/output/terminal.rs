// Colored terminal panels for scores, tiers and recommendations.
//
// Every panel is a `render_*` function returning a String so the CLI can
// print it and tests can inspect it. Nothing here computes scores; it only
// lays out numbers the backend (or `projection`) already produced.

use std::fmt::Write;

use colored::{ColoredString, Colorize};

use super::{bar, percent, share_url, truncate_chars};
use crate::actionables::{Action, ActionPriority};
use crate::api::types::{
    AccountSimulationResponse, CombinedAnalysisResponse, ContentAnalysisResponse, ContentStats,
    DiversityScore, Impact, ImprovementTip, RemoteTier, SignalScore, TipPriority,
};
use crate::assessment::traits::GrokAssessment;
use crate::dashboard::{PostDraft, ResultTab, POST_CHAR_LIMIT, POST_CHAR_WARNING};
use crate::projection::{format_count, BoostLevel, CombinedProjection};
use crate::tiers::{
    signal_label, tier_by_level, SignalWeight, TierColor, NEGATIVE_SIGNALS, POSITIVE_SIGNALS,
    VIRALITY_TIERS,
};

const METER_WIDTH: usize = 40;
const SIGNAL_BAR_WIDTH: usize = 20;
/// Only the strongest few positive signals are listed.
const MAX_POSITIVE_SIGNALS: usize = 6;
/// Items shown per assessment bucket.
const MAX_ASSESSMENT_ITEMS: usize = 3;

// Writing to a String cannot fail, so the fmt::Result from writeln! is dropped.
macro_rules! put {
    ($out:expr) => {
        let _ = writeln!($out);
    };
    ($out:expr, $($arg:tt)*) => {
        let _ = writeln!($out, $($arg)*);
    };
}

fn header(out: &mut String, title: &str) {
    put!(out, "\n{}", format!("=== {title} ===").bold());
}

/// A backend or AI failure, as shown under the form that caused it.
pub fn render_error(message: &str) -> String {
    format!("{} {}", "[ERROR]".red().bold(), message.red())
}

/// The one-line tier strip shown above everything else.
pub fn render_tier_legend() -> String {
    let cells: Vec<String> = VIRALITY_TIERS
        .iter()
        .map(|t| format!("{}.{} {}", t.level, t.color.paint(t.emoji), t.name.dimmed()))
        .collect();
    cells.join("  ")
}

pub fn render_disclaimer(text: &str) -> String {
    format!(
        "{} {}\n{}",
        "DISCLAIMER:".yellow().bold(),
        text,
        "Run `virality dismiss-disclaimer` to hide this notice.".dimmed()
    )
}

/// Character counter under the post input: amber near the limit, red past it.
pub fn render_draft_counter(draft: &PostDraft) -> String {
    let count = draft.char_count();
    let counter = format!("{count}/{POST_CHAR_LIMIT}");
    if draft.is_over_limit() {
        counter.red().to_string()
    } else if count > POST_CHAR_WARNING {
        counter.yellow().to_string()
    } else {
        counter.dimmed().to_string()
    }
}

/// The post score meter: score, tier badge, progress bar, tier pips.
pub fn render_virality_meter(post: &ContentAnalysisResponse) -> String {
    let mut out = String::new();
    let color = TierColor::from_key(&post.tier_color);

    header(&mut out, "virality_score");
    put!(
        out,
        "  {}  {}{}   {}  {}",
        color.paint(&post.tier_emoji),
        color.paint(&post.score.to_string()),
        "/100".dimmed(),
        color.paint(&format!("TIER_{}", post.tier_level)),
        color.paint(&post.tier_name),
    );
    put!(
        out,
        "  [{}]",
        color.paint(&bar(f64::from(post.score) / 100.0, METER_WIDTH))
    );
    put!(out, "  {}", tier_pips(post.tier_level, color));
    put!(out, "  {} {}", ">".dimmed(), post.tier_description.dimmed());
    put!(
        out,
        "  {} {}",
        "share:".dimmed(),
        share_url(post.score, &post.tier_name).dimmed()
    );
    out
}

/// Ten dots, lit up to and including the current tier.
fn tier_pips(level: u8, color: TierColor) -> String {
    (1..=10u8)
        .map(|tier| {
            if tier <= level {
                color.paint("●").to_string()
            } else {
                "·".dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The account score meter, colored by the local tier table.
pub fn render_account_meter(account: &AccountSimulationResponse) -> String {
    let mut out = String::new();
    let color = tier_by_level(account.account_tier).color;

    header(&mut out, "account_score");
    put!(
        out,
        "  {}  {}{}   {}  {}",
        color.paint(&account.account_tier_emoji),
        color.paint(&account.overall_score.to_string()),
        "/100".dimmed(),
        color.paint(&format!("TIER_{}", account.account_tier)),
        color.paint(&account.account_tier_name),
    );
    put!(
        out,
        "  [{}]",
        color.paint(&bar(f64::from(account.overall_score) / 100.0, METER_WIDTH))
    );
    put!(
        out,
        "  Reach multiplier: {}",
        format!("{}x", account.projected_reach_multiplier).green().bold()
    );
    out
}

/// Account metric breakdown plus the backend's recommendations.
pub fn render_account_metrics(account: &AccountSimulationResponse) -> String {
    let mut out = String::new();

    header(&mut out, "account_metrics");
    put!(
        out,
        "  Engagement rate: {:.2}%   Follower quality: {}%   Consistency: {}%",
        account.engagement_rate,
        percent(account.follower_quality_score),
        percent(account.consistency_score),
    );
    put!(
        out,
        "  Growth potential: {}%   Viral post probability: {}%",
        percent(account.growth_potential),
        percent(account.viral_post_probability),
    );

    if !account.recommendations.is_empty() {
        put!(out, "\n  Recommendations:");
        for tip in &account.recommendations {
            write_tip(&mut out, tip);
        }
    }
    out
}

/// Character, word, hashtag and hook counts plus tone flags.
pub fn render_content_stats(stats: &ContentStats) -> String {
    let mut out = String::new();

    header(&mut out, "content_stats");
    put!(
        out,
        "  chars: {}  words: {}  tags: {}  mentions: {}  hooks: {}",
        stats.char_count,
        stats.word_count,
        stats.hashtag_count,
        stats.mention_count,
        stats.viral_hooks,
    );

    let mut flags = Vec::new();
    if stats.has_question {
        flags.push("?_QUESTION".cyan().to_string());
    }
    if stats.has_cta {
        flags.push("!_CTA".yellow().to_string());
    }
    if !stats.emotional_tone.is_empty() {
        flags.push(stats.emotional_tone.to_uppercase().green().to_string());
    }
    if !flags.is_empty() {
        put!(out, "  {}", flags.join("  "));
    }
    out
}

/// Aggregate category scores and per-signal bars.
pub fn render_score_breakdown(post: &ContentAnalysisResponse) -> String {
    let mut out = String::new();

    header(&mut out, "score_breakdown");
    // Negative risk is shown inverted so that higher is always better
    put!(
        out,
        "  {} engage   {} share   {} controv   {} risk",
        format!("{}%", percent(post.engagement_potential)).green().bold(),
        format!("{}%", percent(post.shareability)).cyan().bold(),
        format!("{}%", percent(post.controversy_risk)).yellow().bold(),
        format!("{}%", 100 - percent(post.negative_signal_risk)).red().bold(),
    );

    let positive: Vec<&SignalScore> = post
        .signal_scores
        .iter()
        .filter(|s| s.impact == Impact::Positive)
        .take(MAX_POSITIVE_SIGNALS)
        .collect();
    let negative: Vec<&SignalScore> = post
        .signal_scores
        .iter()
        .filter(|s| s.impact == Impact::Negative)
        .collect();

    put!(out, "\n  {} engagement_signals", "$".green());
    for signal in positive {
        write_signal_bar(&mut out, signal, false);
    }

    if !negative.is_empty() {
        put!(out, "\n  {} risk_signals", "!".red());
        for signal in negative {
            write_signal_bar(&mut out, signal, true);
        }
    }
    out
}

fn write_signal_bar(out: &mut String, signal: &SignalScore, negative: bool) {
    let (label, icon) = signal_label(&signal.signal);
    let filled = bar(signal.score, SIGNAL_BAR_WIDTH);
    let pct = format!("{:>3}%", percent(signal.score));
    if negative {
        put!(out, "    {} {:<12} {} {}", icon.red(), label, filled.red(), pct.red());
    } else {
        put!(
            out,
            "    {} {:<12} {} {}",
            icon.green(),
            label,
            filled.green(),
            pct.green()
        );
    }
}

/// The backend's improvement suggestions for a post.
pub fn render_improvement_tips(tips: &[ImprovementTip]) -> String {
    let mut out = String::new();

    header(&mut out, "improvements");
    if tips.is_empty() {
        put!(out, "  {} {}", "✓".green(), "OPTIMIZED - No improvements needed".green());
        return out;
    }

    put!(out, "  {} {} suggestions found", ">".yellow(), tips.len());
    for tip in tips {
        write_tip(&mut out, tip);
    }
    out
}

fn write_tip(out: &mut String, tip: &ImprovementTip) {
    let badge = format!("[{}]", tip.priority.badge());
    let badge = match tip.priority {
        TipPriority::High => badge.red(),
        TipPriority::Medium => badge.yellow(),
        TipPriority::Low => badge.cyan(),
    };
    put!(out, "  {} {} {}", badge, tip.emoji, tip.tip);
    if let Some(action) = &tip.action {
        put!(out, "        {} {}", "do:".dimmed(), action);
    }
    if let Some(example) = &tip.example {
        put!(out, "        {} {}", "e.g.".dimmed(), example.dimmed());
    }
    put!(out, "        {} {}", tip.impact.green(), "impact".dimmed());
}

fn diversity_tier_color(tier: &str, text: &str) -> ColoredString {
    match tier {
        "HIGHLY_DIVERSE" => text.green(),
        "WELL_BALANCED" => text.cyan(),
        "MODERATE" => text.yellow(),
        "LIMITED" | "MONOTONE" => text.red(),
        _ => text.dimmed(),
    }
}

/// Factors shown in the diversity panel, in display order.
const DIVERSITY_FACTORS: [&str; 4] = [
    "format_diversity",
    "engagement_diversity",
    "topic_richness",
    "uniqueness",
];

pub fn render_diversity(diversity: &DiversityScore) -> String {
    let mut out = String::new();

    header(&mut out, "diversity_scorer");
    put!(
        out,
        "  {}  {}",
        diversity_tier_color(
            &diversity.diversity_tier,
            &diversity.diversity_tier.replace('_', " ")
        )
        .bold(),
        diversity_tier_color(
            &diversity.diversity_tier,
            &format!("{}/100", diversity.diversity_score)
        ),
    );
    put!(out, "  {}", diversity.tier_description.dimmed());

    for key in DIVERSITY_FACTORS {
        let Some(score) = diversity.factor_score(key) else {
            continue;
        };
        let pct = percent(score);
        let cells = format!("{} {:>3}%", bar(score, SIGNAL_BAR_WIDTH), pct);
        let cells = match pct {
            p if p >= 60 => cells.green(),
            p if p >= 40 => cells.yellow(),
            _ => cells.red(),
        };
        put!(out, "    {:<22} {}", key.replace('_', " "), cells);
    }
    out
}

/// Account and post tiers side by side with the derived projection.
pub fn render_combined_results(
    post: &ContentAnalysisResponse,
    account: &AccountSimulationResponse,
) -> String {
    let mut out = String::new();
    let projection = CombinedProjection::compute(post, account);

    header(&mut out, "combined_projection");
    put!(
        out,
        "  Account: {} {}    Post: {} {}",
        account.account_tier_emoji,
        format!("TIER_{}", account.account_tier).cyan().bold(),
        post.tier_emoji,
        format!("TIER_{}", post.tier_level).green().bold(),
    );

    let boost = format!("{} {}", projection.boost.icon(), projection.boost.label());
    let boost = match projection.boost {
        BoostLevel::Massive => boost.green().bold(),
        BoostLevel::Strong => boost.cyan().bold(),
        BoostLevel::Moderate => boost.yellow().bold(),
        BoostLevel::Slight => boost.normal(),
        BoostLevel::Limited => boost.red().bold(),
    };
    put!(out, "\n  {boost}");
    put!(
        out,
        "  Your TIER_{} account gives this TIER_{} post up to {} reach multiplier",
        account.account_tier,
        post.tier_level,
        format!("{}x", projection.multiplier).green().bold(),
    );

    put!(
        out,
        "\n  Adjusted reach: {}   Viral probability: {}   Est. impressions: {}",
        format!("{}%", percent(projection.adjusted_reach)).green().bold(),
        format!("{}%", percent(projection.viral_probability)).cyan().bold(),
        format_count(projection.estimated_impressions).yellow().bold(),
    );
    put!(
        out,
        "  {}",
        format!(
            "engagement {}% × multiplier {}x",
            percent(post.engagement_potential),
            projection.multiplier
        )
        .dimmed()
    );
    put!(out, "\n  {} {}", "KEY INSIGHT:".cyan(), projection.insight);
    out
}

/// The server's aggregate score for a combined analysis.
pub fn render_aggregate(combined: &CombinedAnalysisResponse) -> String {
    let mut out = String::new();
    let color = TierColor::from_key(&combined.aggregate_tier_color);

    header(&mut out, "aggregate_score");
    put!(
        out,
        "  {}  {}{}   {}  {}",
        color.paint(&combined.aggregate_tier_emoji),
        color.paint(&combined.aggregate_score.to_string()),
        "/100".dimmed(),
        color.paint(&format!("TIER_{}", combined.aggregate_tier_level)),
        color.paint(&combined.aggregate_tier_name),
    );
    put!(
        out,
        "  [{}]",
        color.paint(&bar(f64::from(combined.aggregate_score) / 100.0, METER_WIDTH))
    );
    put!(
        out,
        "  {} {}",
        ">".dimmed(),
        combined.aggregate_tier_description.dimmed()
    );
    out
}

fn priority_badge(priority: ActionPriority) -> ColoredString {
    let label = priority.as_str().to_uppercase();
    match priority {
        ActionPriority::Critical => label.on_red().white().bold(),
        ActionPriority::High => label.yellow().bold(),
        ActionPriority::Medium => label.cyan(),
        ActionPriority::Low => label.dimmed(),
    }
}

/// The prioritized to-do list.
pub fn render_actionables(actions: &[Action]) -> String {
    let mut out = String::new();

    header(&mut out, &format!("Action Items ({})", actions.len()));
    if actions.is_empty() {
        put!(out, "  {} Excellent! No critical actions needed.", "✓".green());
        put!(out, "  {}", "Your content follows algorithm best practices.".dimmed());
        return out;
    }

    for action in actions {
        put!(
            out,
            "  {} {} {}",
            priority_badge(action.priority),
            action.category.as_str().to_uppercase().dimmed(),
            action.title.bold(),
        );
        put!(out, "      {}", action.description);
        put!(out, "      {}", action.impact.green());
    }
    put!(
        out,
        "\n  {} Tackle CRITICAL and HIGH priority items first for maximum impact on your next post.",
        "TIP:".cyan()
    );
    out
}

/// The AI's summary and its four display buckets.
pub fn render_assessment(assessment: &GrokAssessment) -> String {
    let mut out = String::new();

    header(&mut out, "grok_analysis");
    put!(out, "  {} {}", "// SUMMARY".green(), assessment.summary);

    let buckets = [
        ("VIRAL_HOOKS", &assessment.viral_hooks),
        ("DRIVERS", &assessment.engagement_drivers),
        ("RISKS", &assessment.risks),
        ("IMPROVE", &assessment.improvements),
    ];
    for (title, items) in buckets {
        if items.is_empty() {
            continue;
        }
        let heading = format!("// {title}");
        let heading = match title {
            "VIRAL_HOOKS" => heading.green(),
            "DRIVERS" => heading.yellow(),
            "RISKS" => heading.red(),
            _ => heading.cyan(),
        };
        put!(out, "  {heading}");
        for item in items.iter().take(MAX_ASSESSMENT_ITEMS) {
            put!(out, "    - {}", truncate_chars(item, 100));
        }
    }
    out
}

fn weight_badge(weight: SignalWeight) -> ColoredString {
    match weight {
        SignalWeight::High => weight.as_str().green(),
        SignalWeight::Medium => weight.as_str().yellow(),
        SignalWeight::Low => weight.as_str().dimmed(),
        SignalWeight::Negative | SignalWeight::VeryNegative => weight.as_str().red(),
    }
}

/// The algorithm signal catalog with weight classes.
pub fn render_algorithm_params() -> String {
    let mut out = String::new();

    header(&mut out, "x_algorithm_params");
    put!(out, "  {}", "POSITIVE SIGNALS (engagement boost)".green());
    for signal in &POSITIVE_SIGNALS {
        put!(
            out,
            "    {} {:<15} {:<14} {}",
            "+".green(),
            signal.label,
            weight_badge(signal.weight),
            signal.description.dimmed()
        );
    }
    put!(out, "  {}", "NEGATIVE SIGNALS (ranking penalty)".red());
    for signal in &NEGATIVE_SIGNALS {
        put!(
            out,
            "    {} {:<15} {:<14} {}",
            "-".red(),
            signal.label,
            weight_badge(signal.weight),
            signal.description.dimmed()
        );
    }
    put!(out, "\n  {}", "// KEY ALGORITHM INSIGHTS".cyan());
    put!(out, "    • Replies have highest weight - conversation drives reach");
    put!(out, "    • Media content gets 2x engagement multiplier");
    put!(out, "    • Blocks/reports heavily penalize future distribution");
    put!(out, "    • Video watch time (50%+) counts as quality view");
    put!(out, "  {}", "source: https://github.com/AbdelStark/x-algorithm".dimmed());
    out
}

/// Tab strip; the active tab is highlighted.
pub fn render_tabs(active: ResultTab) -> String {
    ResultTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label()).black().on_green().to_string()
            } else {
                format!(" {} ", tab.label()).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The backend's own tier table, as returned by `/api/tiers`.
pub fn render_remote_tiers(tiers: &[RemoteTier]) -> String {
    let mut out = String::new();

    header(&mut out, &format!("Backend tiers ({})", tiers.len()));
    for tier in tiers {
        let color = TierColor::from_key(&tier.color);
        put!(
            out,
            "  {:>2}. {} {:<28} {:>3}-{:<3} {}",
            tier.level,
            tier.emoji,
            color.paint(&tier.name),
            tier.min_score,
            tier.max_score,
            tier.description.dimmed()
        );
    }
    out
}

/// The local tier table with ranges and descriptions.
pub fn render_tier_table() -> String {
    let mut out = String::new();

    header(&mut out, "Virality tiers");
    for tier in VIRALITY_TIERS.iter() {
        put!(
            out,
            "  {:>2}. {} {:<12} {:>3}-{:<3} {}",
            tier.level,
            tier.color.paint(tier.emoji),
            tier.color.paint(tier.name),
            tier.min_score,
            tier.max_score,
            tier.description.dimmed()
        );
    }
    out
}
