use std::time::Duration;

const UNKNOWN: &str = "--:--:--.---";

/// `H:MM:SS.mmm`
pub fn format_time(time: Option<Duration>) -> String {
    let Some(time) = time else {
        return UNKNOWN.to_owned();
    };

    let millis = time.as_millis();
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1000) % 60;
    format!("{hours}:{minutes:02}:{seconds:02}.{:03}", millis % 1000)
}

/// Position / duration readout shown next to the transport buttons.
pub fn format_progress(position: Option<Duration>, duration: Option<Duration>) -> String {
    format!("{} / {}", format_time(position), format_time(duration))
}
