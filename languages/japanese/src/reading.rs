use std::collections::HashSet;

/// Separator between alternative readings
pub const READING_SEPARATOR: &str = "、";

/// Join readings for display, keeping the first occurrence of each in order
pub fn join_readings<I, S>(readings: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = Vec::new();

    for reading in readings {
        let reading = reading.as_ref().trim();
        if !reading.is_empty() && seen.insert(reading.to_string()) {
            unique.push(reading.to_string());
        }
    }

    unique.join(READING_SEPARATOR)
}
