use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_MODEL: &str = "google/learnlm-1.5-pro-experimental:free";
pub const DEFAULT_TASK: &str = "proofread";

#[derive(Debug, Clone, Parser)]
#[command(name = "ai-processor", version)]
#[command(about = "Pipe text through an LLM to proofread, translate, or polish commit messages")]
pub struct Cli {
    /// Model to use for processing.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Task to perform on the input text (proofread, translate, commit).
    #[arg(long, default_value = DEFAULT_TASK)]
    pub task: String,

    /// Print only the processed result, suppressing original input.
    #[arg(short, long)]
    pub only_result: bool,

    /// Read the API key from this file instead of ~/.openrouter.key.
    #[arg(long)]
    pub key_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, DEFAULT_MODEL, DEFAULT_TASK};

    #[test]
    fn parse_uses_defaults_without_flags() {
        let cli = Cli::try_parse_from(["ai-processor"]).expect("empty args should parse");
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert_eq!(cli.task, DEFAULT_TASK);
        assert!(!cli.only_result);
    }

    #[test]
    fn parse_reads_all_flags() {
        let cli = Cli::try_parse_from([
            "ai-processor",
            "--model",
            "openai/gpt-4o-mini",
            "--task",
            "commit",
            "-o",
            "--key-file",
            "/tmp/key",
        ])
        .expect("flags should parse");

        assert_eq!(cli.model, "openai/gpt-4o-mini");
        assert_eq!(cli.task, "commit");
        assert!(cli.only_result);
        assert_eq!(cli.key_file.as_deref(), Some(std::path::Path::new("/tmp/key")));
    }

    #[test]
    fn parse_accepts_long_only_result_flag() {
        let cli = Cli::try_parse_from(["ai-processor", "--only-result"])
            .expect("long flag should parse");
        assert!(cli.only_result);
    }

    #[test]
    fn parse_keeps_unknown_task_for_later_resolution() {
        let cli = Cli::try_parse_from(["ai-processor", "--task", "bogus"])
            .expect("any task name should parse");
        assert_eq!(cli.task, "bogus");
    }
}
