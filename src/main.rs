use clap::Parser;
use rsvp_reader::core::config::{self, CliOverrides};
use rsvp_reader::source::{self, LoadedText};
use rsvp_reader::tui;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rsvp", about = "Read text one word at a time, eyes fixed on one letter")]
struct Args {
    /// Plain text file to read (`-` for stdin). Reads a demo text if omitted.
    file: Option<PathBuf>,

    /// Reading speed in words per minute
    #[arg(short, long)]
    wpm: Option<u32>,

    /// Start reading immediately
    #[arg(short, long)]
    autoplay: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger first so config warnings land in the log; level is narrowed below
    let log_path = config::data_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("rsvp.log"))
        .unwrap_or_else(|| PathBuf::from("rsvp.log"));
    init_logger(&log_path);

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            eprintln!("Ignoring config file: {e}");
            config::ReaderConfig::default()
        }
    };
    let cli = CliOverrides {
        wpm: args.wpm,
        autoplay: args.autoplay,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::set_max_level(resolved.log_level);

    log::info!("RSVP reader starting at {} wpm", resolved.wpm);

    let loaded = match args.file {
        Some(path) => match source::read_text(&path) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                eprintln!("Failed to read {}: {e}", path.display());
                return Err(e);
            }
        },
        None => LoadedText::demo(),
    };

    tui::run(resolved, loaded)
}

/// File logger at full verbosity; the terminal belongs to the TUI.
/// Returns false if the log file can't be opened or a logger already exists.
fn init_logger(path: &Path) -> bool {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(path) {
        Ok(log_file) => WriteLogger::init(LevelFilter::Trace, log_config, log_file).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsvp_reader::core::config::{GeneralConfig, ReaderConfig};

    #[test]
    fn test_config_warnings_reach_log_file() {
        let path = std::env::temp_dir().join(format!("rsvp-log-test-{}.log", std::process::id()));
        assert!(init_logger(&path));

        let file_config = ReaderConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
            },
            ..Default::default()
        };
        let resolved = config::resolve(&file_config, &CliOverrides::default());
        log::set_max_level(resolved.log_level);
        log::logger().flush();

        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(contents.contains("Unknown log level"));
    }
}
