use ping_log_stats::output::{read_report, render_text, write_report, Report};
use ping_log_stats::parser::Entry;
use ping_log_stats::utils::config::SCHEMA_VERSION;
use tempfile::NamedTempFile;

fn create_test_report() -> Report {
    let entries = vec![
        Entry::new("A", 1, 10, 9, 5.0, 90.0),
        Entry::new("A", 1, 10, 5, 7.0, 85.0),
        Entry::new("B", 2, 10, 10, 3.0, 95.0),
    ];
    Report::from_entries(&entries).unwrap()
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();

    write_report(&report, temp_file.path()).unwrap();
    let loaded = read_report(temp_file.path()).unwrap();

    assert_eq!(loaded.version, SCHEMA_VERSION);
    assert_eq!(loaded.entry_count, 3);
    assert_eq!(loaded.hop_to_avg_latency, report.hop_to_avg_latency);
    assert_eq!(loaded.recipient_hops, report.recipient_hops);
}

#[test]
fn test_report_json_shape() {
    let report = create_test_report();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["user_to_avg_latency"]["A"], 7.0);
    assert_eq!(value["hop_to_loss_rate"]["1"], 0.5);
    assert_eq!(value["recipient_hops"]["B"], 2);
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_write_report_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(write_report(&create_test_report(), temp_dir.path()).is_err());
}

#[test]
fn test_render_text_has_five_sections_in_order() {
    let text = render_text(&create_test_report());
    let titles: Vec<&str> = text
        .lines()
        .filter(|line| !line.starts_with(' '))
        .collect();

    assert_eq!(
        titles,
        vec![
            "user avg latency:",
            "hop count avg latency:",
            "user loss rate:",
            "hop loss rate:",
            "recipient hop counts:",
        ]
    );
}
