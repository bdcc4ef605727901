use chrono::Local;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

/// Sets up combined terminal + file logging. The log file name carries the
/// start timestamp so consecutive runs never overwrite each other.
pub fn init_logging(log_option: LevelFilter) -> Result<(), log::SetLoggerError> {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let name = format!("curve_log_{}.txt", date_and_time);
    CombinedLogger::init(vec![
        TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(log_option, Config::default(), File::create(name).unwrap()),
    ])
}
