use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    /// Writes to stderr so log lines never interleave with the rendered board.
    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    // Library code logs unconditionally; drop lines until a binary opts in.
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None);
        let line = logger.format_line("src/games/tictactoe/engine.rs", 42, "hello");
        assert!(line.ends_with("[engine.rs:42] hello"));
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Cli".to_string()));
        let line = logger.format_line("C:\\src\\main.rs", 7, "started");
        assert!(line.contains("][Cli][main.rs:7] started"));
    }
}
