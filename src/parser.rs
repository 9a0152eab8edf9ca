use csv::ReaderBuilder;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Reads participant names separated by newlines and/or commas
/// Empty fields and lines starting with '#' are skipped, later duplicates dropped
fn read_participants<R: Read>(source: R) -> Result<Vec<String>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(source);

    let mut seen = HashSet::new();
    let mut participants = Vec::new();

    for result in reader.records() {
        let record = result?;
        for field in record.iter() {
            if field.is_empty() {
                continue;
            }
            if !seen.insert(field.to_string()) {
                log::warn!("dropping duplicate participant '{}'", field);
                continue;
            }
            participants.push(field.to_string());
        }
    }

    Ok(participants)
}

/// Parses participant names from free text, e.g. a form field
pub fn parse_participants(text: &str) -> Result<Vec<String>, csv::Error> {
    read_participants(text.as_bytes())
}

/// Loads participant names from a file, one per line or comma separated
pub fn load_participants<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(path)?;
    Ok(read_participants(file)?)
}

/// Parses the requested number of calls per person (must be at least 1)
pub fn parse_call_count(value: &str) -> Result<usize, String> {
    let trimmed = value.trim();
    match trimmed.parse::<usize>() {
        Ok(0) => Err("calls per person must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(_) => Err(format!("'{}' is not a valid number of calls per person", trimmed)),
    }
}
