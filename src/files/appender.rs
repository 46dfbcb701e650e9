use super::{FileError, FileHelper, WriteMode};
use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;

/// Line format written by [`LogFileAppender`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<timestamp> <LEVEL> <target>: <message>`
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: String,
    level: &'a str,
    target: &'a str,
    message: String,
}

/// `log` backend that appends records to a file through a [`FileHelper`]
#[derive(Debug)]
pub struct LogFileAppender {
    files: FileHelper,
    output_file: String,
    format: OutputFormat,
    level: LevelFilter,
}

impl LogFileAppender {
    /// Create an appender, touching the output file if it does not exist yet
    pub fn new(files: FileHelper, output_file: &str, format: OutputFormat) -> Result<Self, FileError> {
        if output_file.is_empty() {
            return Err(FileError::EmptyPath);
        }

        if !files.file_exists(output_file) {
            files.touch_file(output_file)?;
        }

        Ok(Self {
            files,
            output_file: output_file.to_string(),
            format,
            level: LevelFilter::Info,
        })
    }

    /// Set the most verbose level written to the file
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Output path as given, before `~` expansion
    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    /// Install as the global `log` backend
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Render a record as one output line, newline included
    pub fn format_record(&self, record: &Record) -> String {
        let timestamp = Utc::now().to_rfc3339();

        match self.format {
            OutputFormat::Plain => format!(
                "{} {} {}: {}\n",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            ),
            OutputFormat::Json => {
                let line = JsonLine {
                    timestamp,
                    level: record.level().as_str(),
                    target: record.target(),
                    message: record.args().to_string(),
                };
                // Serializing plain strings cannot fail
                let mut json = serde_json::to_string(&line).unwrap_or_default();
                json.push('\n');
                json
            }
        }
    }
}

impl Log for LogFileAppender {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        if let Err(e) = self
            .files
            .put_contents(&self.output_file, line, WriteMode::Append)
        {
            eprintln!("[paramkit] Failed to append log record: {}", e);
        }
    }

    fn flush(&self) {}
}
