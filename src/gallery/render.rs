use crate::models::{AppCard, DocKind, DocStatus, GalleryReport};

const CARD_RULE: &str = "--------------------------------------------------";

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

pub fn format_text(report: &GalleryReport) -> String {
    let mut output = String::new();

    output.push_str("\n=== Hackathon Project Gallery ===\n\n");
    output.push_str(&format!("Total apps: {}\n", report.total));

    if !report.topic_counts.is_empty() {
        output.push_str("Topics:\n");
        for (topic, count) in &report.topic_counts {
            output.push_str(&format!("  - {}: {}\n", topic, count));
        }
    }

    for card in &report.cards {
        output.push('\n');
        output.push_str(CARD_RULE);
        output.push('\n');
        output.push_str(&format_text_card(card));
    }

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_text_card(card: &AppCard) -> String {
    let mut output = String::new();
    let sub = &card.submission;

    let flag = if card.needs_attention() { " ⚠" } else { "" };
    output.push_str(&format!("{} [{}]{}\n", sub.app_name, card.topic, flag));

    output.push_str(&format!("  Team Number: {}\n", field(&sub.team_number)));
    output.push_str(&format!("  Description: {}\n", field(&sub.short_description)));
    output.push_str(&format!("  Target Users: {}\n", field(&sub.target_users)));
    output.push_str(&format!("  Current Users: {}\n", field(&sub.current_users)));
    output.push_str(&format!(
        "  AI/ML Innovation: {}\n",
        field(&sub.ai_ml_innovation)
    ));

    match sub.live_link() {
        Some(url) => output.push_str(&format!("  Open App: {}\n", url)),
        None => output.push_str("  Open App: no link to app\n"),
    }
    match sub.repo_link() {
        Some(url) => output.push_str(&format!("  Source Code: {}\n", url)),
        None => output.push_str("  Source Code: no link to source\n"),
    }

    if let Some(docs) = &card.docs {
        for kind in DocKind::ALL {
            output.push_str(&format!(
                "  {}: {}\n",
                kind,
                text_doc_status(docs.status(kind))
            ));
        }
    }

    output.push_str(&format!(
        "  Cross-Platform: {}\n",
        field(&sub.cross_platform)
    ));
    output.push_str(&format!(
        "  Indic Languages: {}\n",
        field(&sub.indic_languages)
    ));
    for (name, value) in &sub.extras {
        output.push_str(&format!("  {}: {}\n", name, value));
    }

    output
}

fn text_doc_status(status: &DocStatus) -> String {
    match &status.url {
        Some(url) if status.present => url.clone(),
        _ => "missing".to_string(),
    }
}

pub fn format_markdown(report: &GalleryReport) -> String {
    let mut output = String::new();

    output.push_str("# Hackathon Project Gallery\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Total Apps | {} |\n", report.total));
    for (topic, count) in &report.topic_counts {
        output.push_str(&format!("| {} | {} |\n", topic, count));
    }

    for card in &report.cards {
        output.push_str(&format_markdown_card(card));
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown_card(card: &AppCard) -> String {
    let mut output = String::new();
    let sub = &card.submission;

    let flag = if card.needs_attention() { " ⚠" } else { "" };
    output.push_str(&format!("\n## {} ({}){}\n\n", sub.app_name, card.topic, flag));

    if let Some(description) = &sub.short_description {
        output.push_str(&format!("> {}\n\n", description));
    }

    output.push_str(&format!("**Team Number:** {}\n", field(&sub.team_number)));
    output.push_str(&format!("**Target Users:** {}\n", field(&sub.target_users)));
    output.push_str(&format!("**Current Users:** {}\n", field(&sub.current_users)));
    output.push_str(&format!(
        "**AI/ML Innovation:** {}\n",
        field(&sub.ai_ml_innovation)
    ));

    match sub.live_link() {
        Some(url) => output.push_str(&format!("**App:** [open]({})\n", url)),
        None => output.push_str("**App:** no link\n"),
    }
    match sub.repo_link() {
        Some(url) => output.push_str(&format!("**Source:** [repository]({})\n", url)),
        None => output.push_str("**Source:** no link\n"),
    }

    if let Some(docs) = &card.docs {
        for kind in DocKind::ALL {
            let status = docs.status(kind);
            match &status.url {
                Some(url) if status.present => {
                    output.push_str(&format!("**{}:** [view]({})\n", kind, url))
                }
                _ => output.push_str(&format!("**{}:** missing\n", kind)),
            }
        }
    }

    output.push_str(&format!(
        "**Cross-Platform:** {}\n",
        field(&sub.cross_platform)
    ));
    output.push_str(&format!(
        "**Indic Languages:** {}\n",
        field(&sub.indic_languages)
    ));
    for (name, value) in &sub.extras {
        output.push_str(&format!("**{}:** {}\n", name, value));
    }

    output
}
