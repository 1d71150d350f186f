use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One transcript keyword with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u32,
}

/// Frequency-ranked keywords over the full transcript text.
///
/// Tokenization is a deterministic script-aware baseline: runs of spaced
/// word characters become lowercased word tokens, runs of CJK characters
/// are indexed as overlapping character bigrams. Tokens shorter than two
/// characters are dropped. Ranking is by descending count with ties broken
/// by first appearance, so identical input always yields identical output.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<KeywordCount> {
    if text.trim().is_empty() || top_n == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<String, (u32, usize)> = HashMap::new();
    let mut order = 0usize;
    for token in tokenize(text) {
        if token.chars().count() < 2 {
            continue;
        }
        let entry = counts.entry(token).or_insert((0, order));
        entry.0 += 1;
        order += 1;
    }

    let mut ranked: Vec<(String, (u32, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(keyword, (count, _))| KeywordCount { keyword, count })
        .collect()
}

#[derive(PartialEq, Clone, Copy)]
enum CharClass {
    Cjk,
    Word,
    Separator,
}

fn classify(c: char) -> CharClass {
    if is_cjk(c) {
        CharClass::Cjk
    } else if c.is_alphanumeric() {
        CharClass::Word
    } else {
        CharClass::Separator
    }
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'   // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
        | '\u{31F0}'..='\u{31FF}' // katakana phonetic extensions
        | '\u{3400}'..='\u{4DBF}' // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
        | '\u{FF66}'..='\u{FF9D}' // halfwidth katakana
    )
}

fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_class = CharClass::Separator;

    for c in text.chars() {
        let class = classify(c);
        if class != run_class {
            flush_run(&mut tokens, &run, run_class);
            run.clear();
            run_class = class;
        }
        if class != CharClass::Separator {
            run.push(c);
        }
    }
    flush_run(&mut tokens, &run, run_class);
    tokens
}

fn flush_run(tokens: &mut Vec<String>, run: &str, class: CharClass) {
    match class {
        CharClass::Separator => {}
        CharClass::Word => tokens.push(run.to_lowercase()),
        CharClass::Cjk => {
            let chars: Vec<char> = run.chars().collect();
            if chars.len() < 2 {
                return;
            }
            for pair in chars.windows(2) {
                tokens.push(pair.iter().collect());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_keywords() {
        assert!(extract_keywords("", 10).is_empty());
        assert!(extract_keywords("  \n ", 10).is_empty());
    }

    #[test]
    fn test_word_tokens_are_counted_case_insensitively() {
        let ranked = extract_keywords("Growth growth GROWTH value value", 10);
        assert_eq!(ranked[0], KeywordCount { keyword: "growth".to_string(), count: 3 });
        assert_eq!(ranked[1], KeywordCount { keyword: "value".to_string(), count: 2 });
    }

    #[test]
    fn test_single_char_tokens_dropped() {
        let ranked = extract_keywords("a a a big big", 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].keyword, "big");
    }

    #[test]
    fn test_cjk_runs_become_bigrams() {
        // "期間限定" repeated surfaces its bigrams, including the compound edges
        let ranked = extract_keywords("期間限定。期間限定。", 10);
        let keywords: Vec<&str> = ranked.iter().map(|k| k.keyword.as_str()).collect();
        assert!(keywords.contains(&"期間"));
        assert!(keywords.contains(&"限定"));
        assert!(ranked.iter().all(|k| k.count == 2));
    }

    #[test]
    fn test_ties_break_by_first_appearance() {
        let ranked = extract_keywords("beta alpha beta alpha", 10);
        assert_eq!(ranked[0].keyword, "beta");
        assert_eq!(ranked[1].keyword, "alpha");
    }

    #[test]
    fn test_top_n_truncates() {
        let ranked = extract_keywords("one two three four five six", 3);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_determinism() {
        let text = "成功の秘密。成功への近道。success stories";
        assert_eq!(extract_keywords(text, 20), extract_keywords(text, 20));
    }
}
