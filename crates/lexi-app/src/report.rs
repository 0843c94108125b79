use lexi_types::FetchReport;

const DEFINITION_WIDTH: usize = 72;

/// Plain-text review listing of a finished batch
pub fn render_summary(report: &FetchReport) -> String {
    let mut out = String::new();

    let mut found: Vec<_> = report.found.iter().collect();
    found.sort_by(|a, b| a.word.cmp(&b.word));

    let word_width = found
        .iter()
        .map(|r| r.word.as_str().chars().count())
        .max()
        .unwrap_or(0);

    for record in found {
        let mut headword = record.word.as_str().to_string();
        if !record.reading.is_empty() {
            headword = format!("{} [{}]", record.expression, record.reading);
        }
        out.push_str(&format!(
            "{:<width$}  {}\n",
            headword,
            truncate(&strip_tags(&record.definition), DEFINITION_WIDTH),
            width = word_width
        ));
    }

    let mut missing: Vec<_> = report.missing_words().map(|w| w.as_str()).collect();
    missing.sort_unstable();
    if !missing.is_empty() {
        out.push_str(&format!("\nNo definition: {}\n", missing.join(", ")));
    }

    out.push_str(&format!(
        "\n{} defined, {} not found, {} failed\n",
        report.found.len(),
        report.not_found.len(),
        report.failed.len()
    ));

    out
}

/// Drop markup from a rendered definition for terminal display
fn strip_tags(html: &str) -> String {
    let html = html.replace("<br>", " ");
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
