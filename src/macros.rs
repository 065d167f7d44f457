/// Timestamped `println!`, similar to the `info!` macro in tracing.
/// Pass a starting time as the first argument to also report the elapsed
/// time between then and now.
/// ```ignore
/// info_time!("visiting {}", url);
/// let time = chrono::Local::now();
/// info_time!(time, "wrote {} quests", n);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = chrono::Local::now();
        println!("{:<30} : {}", local_now, format!($strfm, $($arg),*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = chrono::Local::now();
        let run_time = (local_now - $time)
            .num_microseconds()
            .map(|n| n as f64 / 1_000_000.0)
            .unwrap_or(0.0);
        println!(
            "{:<30} : {}\nRUNTIME: {} sec",
            local_now,
            format!($strfm, $($arg),*),
            run_time
        );
    }};
}
