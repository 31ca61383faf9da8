use filelog::file_log;

fn main() {
    file_log().init("/tmp/filelog_demo.log");
    filelog::debug!("main thread started");
    let handles: Vec<_> = (0..5)
        .map(|i| {
            std::thread::spawn(move || {
                for j in 0..3 {
                    filelog::warn!("thread {i} step {j}");
                }
                if i == 4 {
                    filelog::error!("thread {i} failed: {}", "disk full");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    println!(
        "last line of /tmp/filelog_demo.log is:\n\t{}",
        std::fs::read_to_string("/tmp/filelog_demo.log")
            .unwrap()
            .lines()
            .last()
            .unwrap_or("<empty, logging is disabled in this build>")
    );
}
