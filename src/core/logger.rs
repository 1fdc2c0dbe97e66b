use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use log::{
    LevelFilter,
    Metadata,
    Record
};

struct MyLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        match self.file.as_ref() {
            Some(file) => {
                if let Ok(mut f) = file.lock() {
                    _ = writeln!(f, "{}", line);
                }
            },
            None => println!("{}", line),
        }
    }

    fn flush(&self) {
        match self.file.as_ref() {
            Some(file) => {
                if let Ok(mut f) = file.lock() {
                    _ = f.flush();
                }
            },
            None => {
                _ = io::stdout().flush();
            }
        }
    }
}

/// Installs the process-wide logger. Only the first call wins, later calls
/// just adjust the max level.
pub fn setup(level: LevelFilter, file: Option<&str>) {
    let file = file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Opening log file {} error: {}, fallback to stdout", path, e))
            .ok()
    });

    let logger = Box::leak(Box::new(MyLogger {
        level,
        file: file.map(Mutex::new),
    }));

    _ = log::set_logger(logger);
    log::set_max_level(level);
}
