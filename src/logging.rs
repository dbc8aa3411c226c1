use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

// stdout carries the program's result, so logs stay quiet unless RUST_LOG asks.
const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_LOG_FILE_PATH: &str = "logs/ai-processor.log";

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogOutput {
    Stderr,
    File,
    Both,
}

impl LogOutput {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::File => "file",
            Self::Both => "both",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LoggingSettings {
    format: LogFormat,
    output: LogOutput,
    file_path: PathBuf,
}

impl LoggingSettings {
    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            format: parse_log_format(get_var("LOG_FORMAT").as_deref()),
            output: parse_log_output(get_var("LOG_OUTPUT").as_deref()),
            file_path: parse_log_file_path(get_var("LOG_FILE_PATH").as_deref()),
        }
    }
}

fn normalized(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_ascii_lowercase()
}

fn parse_log_format(raw: Option<&str>) -> LogFormat {
    match normalized(raw).as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

fn parse_log_output(raw: Option<&str>) -> LogOutput {
    match normalized(raw).as_str() {
        "file" => LogOutput::File,
        "both" => LogOutput::Both,
        _ => LogOutput::Stderr,
    }
}

fn parse_log_file_path(raw: Option<&str>) -> PathBuf {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_PATH))
}

fn rolling_file_writer(path: &Path) -> std::io::Result<(non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| std::ffi::OsStr::new("ai-processor.log"));

    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn install(format: LogFormat, writer: BoxMakeWriter) -> InitResult {
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(writer)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter())
            .with_writer(writer)
            .try_init(),
    }
}

fn install_with_file(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let include_stderr = settings.output == LogOutput::Both;

    match rolling_file_writer(&settings.file_path) {
        Ok((file_writer, guard)) => {
            let writer = if include_stderr {
                BoxMakeWriter::new(std::io::stderr.and(file_writer))
            } else {
                BoxMakeWriter::new(file_writer)
            };

            install(settings.format, writer).ok().map(|()| guard)
        }
        Err(err) => {
            eprintln!(
                "ai-processor: failed to initialize LOG_OUTPUT={} at '{}': {}; {}",
                settings.output.as_str(),
                settings.file_path.display(),
                err,
                if include_stderr {
                    "using stderr only"
                } else {
                    "using stderr instead"
                }
            );
            let _ = install(settings.format, BoxMakeWriter::new(std::io::stderr));
            None
        }
    }
}

/// Installs the global subscriber. A second call is a no-op.
///
/// Keep the returned guard alive until exit; dropping it flushes the file writer.
#[must_use]
pub fn init() -> Option<WorkerGuard> {
    let settings = LoggingSettings::from_env_with(|key| env::var(key).ok());

    match settings.output {
        LogOutput::Stderr => {
            let _ = install(settings.format, BoxMakeWriter::new(std::io::stderr));
            None
        }
        LogOutput::File | LogOutput::Both => install_with_file(&settings),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{
        DEFAULT_LOG_FILE_PATH, LogFormat, LogOutput, LoggingSettings, parse_log_file_path,
        parse_log_format, parse_log_output,
    };

    fn settings_from_pairs(pairs: &[(&str, &str)]) -> LoggingSettings {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        LoggingSettings::from_env_with(|key| vars.get(key).map(|value| value.to_string()))
    }

    #[test]
    fn settings_default_to_pretty_stderr() {
        let settings = settings_from_pairs(&[]);
        assert_eq!(settings.format, LogFormat::Pretty);
        assert_eq!(settings.output, LogOutput::Stderr);
        assert_eq!(settings.file_path, PathBuf::from(DEFAULT_LOG_FILE_PATH));
    }

    #[test]
    fn settings_read_configured_values() {
        let settings = settings_from_pairs(&[
            ("LOG_FORMAT", "json"),
            ("LOG_OUTPUT", "both"),
            ("LOG_FILE_PATH", "/var/log/ai.log"),
        ]);
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.output, LogOutput::Both);
        assert_eq!(settings.file_path, PathBuf::from("/var/log/ai.log"));
    }

    #[test]
    fn parse_log_format_accepts_json_case_insensitively() {
        assert_eq!(parse_log_format(Some(" JSON ")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("unknown")), LogFormat::Pretty);
    }

    #[test]
    fn parse_log_output_accepts_file_and_both() {
        assert_eq!(parse_log_output(Some("file")), LogOutput::File);
        assert_eq!(parse_log_output(Some(" BOTH ")), LogOutput::Both);
        assert_eq!(parse_log_output(Some("syslog")), LogOutput::Stderr);
    }

    #[test]
    fn parse_log_file_path_uses_default_for_blank_values() {
        assert_eq!(
            parse_log_file_path(Some("  ")),
            PathBuf::from(DEFAULT_LOG_FILE_PATH)
        );
    }
}
