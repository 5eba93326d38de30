use std::time::Duration;

pub const DEFAULT_SOURCE_FACTORY: &str = "videotestsrc";
pub const DEFAULT_SINK_FACTORY: &str = "gtk4paintablesink";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub source_factory: String,
    pub sink_factory: String,
    pub poll_interval: Duration,
    pub seek_step: Duration,
    pub default_width: i32,
    pub default_height: i32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source_factory: DEFAULT_SOURCE_FACTORY.to_owned(),
            sink_factory: DEFAULT_SINK_FACTORY.to_owned(),
            poll_interval: Duration::from_millis(40),
            seek_step: Duration::from_secs(1),
            default_width: 300,
            default_height: 200,
        }
    }
}
