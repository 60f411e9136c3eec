#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DowntimeWindow {
    #[default]
    None,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    Custom,
}

const NO_DOWNTIME: &str = "There will be no downtime for this release.";
const NO_DOWNTIME_WITH_NATIVE: &str = "There will be no downtime for the web platform \
     and mobile users will need to update their app once the release is complete.";
const NATIVE_UPDATE_CLAUSE: &str =
    " Mobile users will need to update their app once the release is complete.";

impl DowntimeWindow {
    /// Maps a raw downtime selection to a window. Unrecognized non-empty
    /// selections fall back to `Custom`, which claims no specific duration.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "none" => DowntimeWindow::None,
            "15min" => DowntimeWindow::FifteenMinutes,
            "30min" => DowntimeWindow::ThirtyMinutes,
            "1hour" => DowntimeWindow::OneHour,
            _ => DowntimeWindow::Custom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DowntimeWindow::None => "none",
            DowntimeWindow::FifteenMinutes => "15min",
            DowntimeWindow::ThirtyMinutes => "30min",
            DowntimeWindow::OneHour => "1hour",
            DowntimeWindow::Custom => "custom",
        }
    }

    /// Builds the announcement's closing sentence. When the release ships a
    /// native mobile build, the update instruction is folded in exactly once.
    pub fn closing_statement(&self, has_native_release: bool) -> String {
        let base = match self {
            DowntimeWindow::None => NO_DOWNTIME,
            DowntimeWindow::FifteenMinutes => {
                "The web platform will not be accessible for approximately 15 minutes \
                 during this release."
            }
            DowntimeWindow::ThirtyMinutes => {
                "The web platform will not be accessible for approximately 30 minutes \
                 during this release."
            }
            DowntimeWindow::OneHour => {
                "The web platform will not be accessible for approximately 1 hour \
                 during this release."
            }
            DowntimeWindow::Custom => {
                "The web platform will not be accessible during this release window."
            }
        };

        if !has_native_release {
            return base.to_string();
        }

        match self {
            DowntimeWindow::None => NO_DOWNTIME_WITH_NATIVE.to_string(),
            _ => format!("{base}{NATIVE_UPDATE_CLAUSE}"),
        }
    }
}
