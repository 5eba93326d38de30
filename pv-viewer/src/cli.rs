use std::time::Duration;

use clap::Parser;
use pv_common::{Project, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "pv-viewer", version, about = "Preview window for a video editing project")]
pub struct Cli {
    #[arg(long, default_value = "Untitled", help = "Project shown in the window title")]
    pub project: String,

    #[arg(long, help = "Factory name of the source element")]
    pub source: Option<String>,

    #[arg(long, help = "Factory name of the sink element")]
    pub sink: Option<String>,

    #[arg(long, help = "Interval between pipeline polls in milliseconds")]
    pub poll_interval_ms: Option<u64>,

    #[arg(long, help = "Seek backward/forward step in milliseconds")]
    pub seek_step_ms: Option<u64>,
}

impl Cli {
    pub fn project(&self) -> Project {
        Project::new(self.project.clone())
    }

    pub fn config(&self) -> ViewerConfig {
        let mut config = ViewerConfig::default();
        if let Some(ref source) = self.source {
            config.source_factory = source.clone();
        }
        if let Some(ref sink) = self.sink {
            config.sink_factory = sink.clone();
        }
        if let Some(ms) = self.poll_interval_ms {
            config.poll_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = self.seek_step_ms {
            config.seek_step = Duration::from_millis(ms);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["pv-viewer"]).unwrap();
        assert_eq!(cli.config(), ViewerConfig::default());
        assert_eq!(cli.project().name(), "Untitled");
    }

    #[test]
    fn overrides() {
        let cli = Cli::try_parse_from([
            "pv-viewer",
            "--project",
            "demo",
            "--source",
            "videotestsrc",
            "--sink",
            "autovideosink",
            "--poll-interval-ms",
            "0",
            "--seek-step-ms",
            "5000",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.sink_factory, "autovideosink");
        assert_eq!(config.poll_interval, Duration::from_millis(1));
        assert_eq!(config.seek_step, Duration::from_secs(5));
        assert_eq!(cli.project().viewer_title(), "demo - Viewer");
    }
}
