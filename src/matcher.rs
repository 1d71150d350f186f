/// A single trigger hit in a scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Byte offset of the hit in the original text
    pub offset: usize,
    /// The matched slice as it appears in the text
    pub surface: String,
}

/// Find every non-overlapping occurrence of `trigger` in `text`, comparing
/// case-insensitively per character. Scripts without case (kana, kanji) fall
/// through to exact containment, so the same scan serves Japanese and Latin
/// text. The returned surface form keeps the text's original casing.
pub fn find_occurrences(text: &str, trigger: &str) -> Vec<Occurrence> {
    if trigger.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let trigger_chars: Vec<char> = trigger.chars().collect();
    let mut hits = Vec::new();

    let mut i = 0;
    while i + trigger_chars.len() <= chars.len() {
        let window_matches = trigger_chars
            .iter()
            .enumerate()
            .all(|(j, tc)| chars_eq_ignore_case(chars[i + j].1, *tc));

        if window_matches {
            let start = chars[i].0;
            let end = chars
                .get(i + trigger_chars.len())
                .map(|(offset, _)| *offset)
                .unwrap_or(text.len());
            hits.push(Occurrence {
                offset: start,
                surface: text[start..end].to_string(),
            });
            // resume after the hit: a single trigger never overlaps itself
            i += trigger_chars.len();
        } else {
            i += 1;
        }
    }

    hits
}

/// Scan `text` for all `triggers` and merge the hits into appearance order.
/// Hits from distinct triggers may overlap; ties at the same offset keep
/// trigger-table order.
pub fn scan_triggers(text: &str, triggers: &[String]) -> Vec<Occurrence> {
    let mut all: Vec<Occurrence> = triggers
        .iter()
        .flat_map(|t| find_occurrences(text, t))
        .collect();
    all.sort_by_key(|o| o.offset);
    all
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
