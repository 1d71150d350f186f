use adpulse::lexicon::{SentimentLexicon, TechniqueEntry};
use adpulse::{
    AnalysisEngine, AnalysisTables, PersuasionDetector, TranscriptSegment, VolatilityMetrics,
};

fn segment(start: f64, end: f64, text: &str) -> TranscriptSegment {
    TranscriptSegment::new(start, end, text)
}

#[test]
fn positive_silence_negative_timeline() {
    let engine = AnalysisEngine::new(AnalysisTables::builtin().unwrap());
    let segments = vec![
        segment(0.0, 5.0, "素晴らしい、最高です"),
        segment(5.0, 10.0, ""),
        segment(10.0, 15.0, "不安、残念な結果"),
    ];
    let report = engine.analyze(&segments, "素晴らしい、最高です 不安、残念な結果");

    assert_eq!(report.emotion_segments.len(), 3);
    assert!(report.emotion_segments[0].emotion_score > 0.0);
    assert_eq!(report.emotion_segments[1].emotion_score, 0.0);
    assert!(report.emotion_segments[2].emotion_score < 0.0);

    assert_eq!(
        report.emotion_segments[0].positive_words,
        vec!["素晴らしい", "最高"]
    );
    assert!(report.emotion_segments[1].positive_words.is_empty());
    assert!(report.emotion_segments[1].negative_words.is_empty());
    assert_eq!(
        report.emotion_segments[2].negative_words,
        vec!["不安", "残念"]
    );

    // the silent middle segment is neutral: one change, positive to negative
    assert_eq!(report.volatility.direction_changes, 1);
    // swing into the negative segment: |-1.0 - 0.0|
    assert!((report.volatility.max_amplitude - 1.0).abs() < 1e-12);
    // population std of [1, 0, -1]
    assert!((report.volatility.volatility_std - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
}

#[test]
fn repeated_scarcity_trigger_single_record() {
    let tables = AnalysisTables {
        sentiment: SentimentLexicon {
            positive: vec!["良い".to_string()],
            negative: vec!["悪い".to_string()],
        },
        techniques: vec![
            TechniqueEntry {
                id: "scarcity".to_string(),
                label: "希少性".to_string(),
                triggers: vec!["今だけ限定".to_string()],
            },
            TechniqueEntry {
                id: "authority".to_string(),
                label: "権威性".to_string(),
                triggers: vec!["博士".to_string(), "専門家".to_string()],
            },
        ],
    };
    tables.validate().unwrap();

    let detector = PersuasionDetector::new(&tables.techniques);
    let detected = detector.detect("今だけ限定のご案内です。そう、今だけ限定。");

    assert_eq!(detected.len(), 1);
    assert_eq!(detected[0].technique, "scarcity");
    assert_eq!(detected[0].matches, vec!["今だけ限定", "今だけ限定"]);
    assert!(!detected.iter().any(|d| d.technique == "authority"));
}

#[test]
fn full_report_over_builtin_tables() {
    let engine = AnalysisEngine::new(AnalysisTables::builtin().unwrap());
    let segments = vec![
        segment(0.0, 4.0, "専門家が推薦する画期的な方法です"),
        segment(4.0, 9.0, "失敗やリスクが不安な方へ"),
        segment(9.0, 14.0, "今だけ限定、残りわずか、今すぐどうぞ"),
    ];
    let transcript_text = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let report = engine.analyze(&segments, &transcript_text);

    assert_eq!(report.emotion_segments.len(), 3);
    assert!(report.emotion_segments[0].emotion_score > 0.0);
    assert!(report.emotion_segments[1].emotion_score < 0.0);

    let ids: Vec<&str> = report
        .techniques
        .iter()
        .map(|t| t.technique.as_str())
        .collect();
    assert!(ids.contains(&"urgency"));
    assert!(ids.contains(&"scarcity"));
    assert!(ids.contains(&"authority"));

    assert!(report.volatility.direction_changes >= 1);
    assert!(!report.keywords.is_empty());
}

#[test]
fn volatility_reorder_properties_hold_end_to_end() {
    let engine = AnalysisEngine::new(AnalysisTables::builtin().unwrap());
    let ordered = vec![
        segment(0.0, 5.0, "最高です"),
        segment(5.0, 10.0, "最悪で不安"),
        segment(10.0, 15.0, "素晴らしい"),
    ];
    let swapped = vec![ordered[0].clone(), ordered[2].clone(), ordered[1].clone()];

    let a = engine.analyze(&ordered, "");
    let b = engine.analyze(&swapped, "");

    assert!((a.volatility.volatility_std - b.volatility.volatility_std).abs() < 1e-12);
    assert_eq!(a.volatility.direction_changes, 2);
    assert_eq!(b.volatility.direction_changes, 1);
}

#[test]
fn empty_and_single_segment_reports() {
    let engine = AnalysisEngine::new(AnalysisTables::builtin().unwrap());

    let empty = engine.analyze(&[], "");
    assert_eq!(empty.volatility, VolatilityMetrics::zero());

    let single = engine.analyze(&[segment(0.0, 5.0, "最高")], "最高");
    assert_eq!(single.volatility.volatility_std, 0.0);
    assert_eq!(single.volatility.direction_changes, 0);
    assert_eq!(single.volatility.max_amplitude, 0.0);
    assert_eq!(single.volatility.avg_score, 1.0);
}
