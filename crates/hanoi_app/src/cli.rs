use std::path::PathBuf;

use clap::Parser;
use hanoi_store::DEFAULT_STATE_DIR;

use crate::platform::logging::LogDestination;

/// Tower of Hanoi in the terminal.
///
/// Type a tower number to pick up its top disk and another number to drop it,
/// or a pair such as `13` to move in one go. `i` shows the rules.
#[derive(Debug, Parser)]
#[command(name = "hanoi", version)]
pub struct Cli {
    /// Number of disks to start with (3 to 6). Overrides the saved difficulty.
    #[arg(short, long)]
    pub difficulty: Option<u8>,

    /// Directory for preferences and the log file.
    #[arg(long, env = "HANOI_STATE_DIR", default_value = DEFAULT_STATE_DIR)]
    pub state_dir: PathBuf,

    /// Where log records go.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log debug records as well.
    #[arg(short, long)]
    pub verbose: bool,

    /// Terminal width in cells.
    #[arg(long, env = "COLUMNS", default_value_t = 100)]
    pub columns: u16,

    /// Terminal height in cells.
    #[arg(long, env = "LINES", default_value_t = 30)]
    pub rows: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn difficulty_and_state_dir_parse() {
        let cli = Cli::try_parse_from([
            "hanoi",
            "--difficulty",
            "5",
            "--state-dir",
            "/tmp/hanoi",
            "--log",
            "off",
            "--columns",
            "40",
            "--rows",
            "30",
        ])
        .unwrap();

        assert_eq!(cli.difficulty, Some(5));
        assert_eq!(cli.state_dir, PathBuf::from("/tmp/hanoi"));
        assert_eq!(cli.log, LogDestination::Off);
        assert_eq!((cli.columns, cli.rows), (40, 30));
    }
}
