use ping_log_stats::commands::{analyze_reader, execute_analyze, validate_args, AnalyzeArgs};
use ping_log_stats::output::read_report;
use ping_log_stats::parser::ReaderOptions;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_validate_args_valid() {
    let args = AnalyzeArgs {
        log_path: PathBuf::from("log.csv"),
        output_json: Some(PathBuf::from("report.json")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_tab_delimiter() {
    let args = AnalyzeArgs {
        delimiter: "tab".to_string(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_execute_analyze_writes_json() {
    let mut log = NamedTempFile::new().unwrap();
    writeln!(log, "recipient,hops,pings_sent,acks,avg_latency,battery_level").unwrap();
    writeln!(log, "A,1,10,9,5.0,90").unwrap();
    writeln!(log, "B,2,10,10,3.0,95").unwrap();

    let out_dir = tempfile::tempdir().unwrap();
    let json_path = out_dir.path().join("report.json");

    let args = AnalyzeArgs {
        log_path: log.path().to_path_buf(),
        output_json: Some(json_path.clone()),
        ..Default::default()
    };

    let mut out = Vec::new();
    let report = execute_analyze(args, &mut out).unwrap();
    let loaded = read_report(&json_path).unwrap();

    assert_eq!(loaded.user_to_avg_latency, report.user_to_avg_latency);
    assert_eq!(loaded.entry_count, 2);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("user avg latency:\n  A = 5\n  B = 3\n"));
}

#[test]
fn test_execute_analyze_format_error() {
    let mut log = NamedTempFile::new().unwrap();
    writeln!(log, "header").unwrap();
    writeln!(log, "A,one,10,9,5.0,90").unwrap();

    let args = AnalyzeArgs {
        log_path: log.path().to_path_buf(),
        ..Default::default()
    };

    let mut out = Vec::new();
    let err = execute_analyze(args, &mut out).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Row 2"));
    assert!(msg.contains("hops"));
}

#[test]
fn test_analyze_reader_zero_pings_error() {
    let input = "header\nA,1,10,9,5.0,90\nZ,1,0,0,5.0,90\n";
    let mut out = Vec::new();

    let err = analyze_reader(input.as_bytes(), &mut out, &ReaderOptions::default()).unwrap_err();

    assert!(format!("{:#}", err).contains("zero pings sent"));
}

#[test]
fn test_execute_analyze_reports_write_failure() {
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut log = NamedTempFile::new().unwrap();
    writeln!(log, "header").unwrap();
    writeln!(log, "A,1,10,9,5.0,90").unwrap();

    let args = AnalyzeArgs {
        log_path: log.path().to_path_buf(),
        ..Default::default()
    };

    let err = execute_analyze(args, &mut FullDisk).unwrap_err();
    assert!(format!("{:#}", err).contains("no space left"));
}
