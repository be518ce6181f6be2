// Unit tests for assessment prompt building and reply parsing.

use virality::assessment::prompt::{build_prompt, extract_json_block, parse_assessment};

#[test]
fn prompt_quotes_the_post() {
    let prompt = build_prompt("hot take: tabs > spaces");
    assert!(prompt.contains("\"hot take: tabs > spaces\""));
    assert!(prompt.contains("pure JSON"));
}

#[test]
fn bare_json_parses() {
    let reply = r#"{
        "summary": "Spicy but safe.",
        "viral_hooks": ["hot take"],
        "engagement_drivers": ["disagreement"],
        "risks": ["flame war"],
        "improvements": ["add a question"],
        "similar_viral_posts": ["the great tabs debate"]
    }"#;
    let assessment = parse_assessment(reply);
    assert_eq!(assessment.summary, "Spicy but safe.");
    assert_eq!(assessment.viral_hooks, vec!["hot take"]);
    assert_eq!(assessment.similar_viral_posts.len(), 1);
}

#[test]
fn json_wrapped_in_prose_and_fences_parses() {
    let reply = "Here you go:\n```json\n{\"summary\": \"Solid.\", \"risks\": [\"none\"]}\n```\nEnjoy!";
    let assessment = parse_assessment(reply);
    assert_eq!(assessment.summary, "Solid.");
    assert_eq!(assessment.risks, vec!["none"]);
}

#[test]
fn missing_lists_default_to_empty() {
    let assessment = parse_assessment(r#"{"summary": "Short."}"#);
    assert_eq!(assessment.summary, "Short.");
    assert!(assessment.viral_hooks.is_empty());
    assert!(assessment.engagement_drivers.is_empty());
    assert!(assessment.improvements.is_empty());
}

#[test]
fn prose_reply_becomes_summary() {
    let reply = "This post will probably do fine, honestly.";
    let assessment = parse_assessment(reply);
    assert_eq!(assessment.summary, reply);
    assert!(assessment.risks.is_empty());
}

#[test]
fn malformed_json_falls_back_to_truncated_text() {
    let reply = format!("{{not json at all {}}}", "x".repeat(400));
    let assessment = parse_assessment(&reply);
    assert_eq!(assessment.summary.chars().count(), 200);
    assert!(assessment.summary.starts_with("{not json"));
}

#[test]
fn no_braces_means_no_block() {
    assert_eq!(extract_json_block("nothing here"), None);
}
