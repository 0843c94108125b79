use lexi_types::DefinitionRecord;
use serde::{Deserialize, Serialize};

/// How a definition record is laid out on a Basic note.
///
/// Templates may use `{word}`, `{expression}`, `{reading}`, `{definition}`,
/// `{part_of_speech}` and `{example}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub deck: String,
    pub model: String,
    pub front_template: String,
    pub back_template: String,
}

impl CardTemplate {
    /// Word on the front, rendered definition on the back
    pub fn vocabulary(deck: String, model: String) -> Self {
        Self::new(deck, model, "{word}".to_string(), "{definition}".to_string())
    }

    /// Create custom template
    pub fn new(deck: String, model: String, front: String, back: String) -> Self {
        Self {
            deck,
            model,
            front_template: front,
            back_template: back,
        }
    }

    /// Format the front of the card
    pub fn format_front(&self, record: &DefinitionRecord) -> String {
        render(&self.front_template, record)
    }

    /// Format the back of the card
    pub fn format_back(&self, record: &DefinitionRecord) -> String {
        let back = render(&self.back_template, record);
        if record.reading.is_empty() {
            return back;
        }
        // script-aware records: written form and reading above the glosses
        format!("{}【{}】<br>{}", record.expression, record.reading, back)
    }
}

fn render(template: &str, record: &DefinitionRecord) -> String {
    template
        .replace("{word}", record.word.as_str())
        .replace("{expression}", &record.expression)
        .replace("{reading}", &record.reading)
        .replace("{definition}", &record.definition)
        .replace("{part_of_speech}", &record.part_of_speech)
        .replace("{example}", &record.example)
}
