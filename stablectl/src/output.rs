//! Text / JSON rendering of API envelopes.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(format: OutputFormat, envelope: &Value) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(envelope)?),
        OutputFormat::Text => Ok(render_text(envelope)),
    }
}

fn render_text(envelope: &Value) -> String {
    let mut lines = Vec::new();

    if let Some(message) = envelope["message"].as_str() {
        lines.push(format!("✓ {message}"));
    }

    match &envelope["data"] {
        Value::Array(horses) => {
            if horses.is_empty() {
                lines.push("No horses found".to_string());
            }
            lines.extend(horses.iter().map(horse_line));
            if let Some(count) = envelope["count"].as_u64() {
                lines.push(format!("{count} horse(s)"));
            }
        }
        Value::Null => {}
        horse => lines.push(horse_line(horse)),
    }

    lines.join("\n")
}

fn horse_line(horse: &Value) -> String {
    let field = |key: &str| match &horse[key] {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    };

    format!(
        "{}  {}  {}  age {}  color {}  org {}",
        field("id"),
        field("name"),
        field("breed"),
        field("age"),
        field("color"),
        field("orgId"),
    )
}
