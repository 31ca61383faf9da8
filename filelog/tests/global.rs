use log::LevelFilter;

// Single test: the process-wide logger can only be configured once per process.
#[test]
fn test_global_logger_end_to_end() {
    let path = format!("/tmp/filelog_global_{}.log", uuid::Uuid::new_v4());
    let other = format!("/tmp/filelog_global_{}.log", uuid::Uuid::new_v4());

    filelog::file_log().init("");
    assert!(!filelog::file_log().has_log_file());

    filelog::file_log().init(&path);
    filelog::file_log().init(&other);
    assert!(filelog::file_log().has_log_file());
    assert!(!std::path::Path::new(&other).exists());

    filelog::debug!("start");
    filelog::error!("fail:{}", "disk");

    filelog::install(LevelFilter::Debug).unwrap();
    assert!(filelog::install(LevelFilter::Debug).is_err());
    log::warn!("low space: {}MB", 12);
    log::info!("info maps to debug");
    log::trace!("filtered out");

    let content = std::fs::read_to_string(&path).unwrap();
    if !filelog::LOGS_ENABLED {
        assert!(content.is_empty());
        return;
    }
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    let timestamp = regex::Regex::new(r"^\d{1,2}-\d{1,2} \d{2}:\d{2}:\d{2} ").unwrap();
    assert!(lines.iter().all(|line| timestamp.is_match(line)));
    assert!(lines[0].ends_with(" debug: start"));
    assert!(lines[1].ends_with(" error: fail:disk"));
    assert!(lines[2].ends_with(" warning: low space: 12MB"));
    assert!(lines[3].ends_with(" debug: info maps to debug"));
    assert!(content.ends_with('\n'));
    std::fs::remove_file(&path).ok();
}
