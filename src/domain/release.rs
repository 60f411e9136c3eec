use chrono::{NaiveDate, NaiveTime};

use crate::domain::downtime::DowntimeWindow;

/// Everything the announcement is drafted from. Version fields are optional
/// and independently omittable; date, time, and ticket details are required
/// before a generation attempt may start.
#[derive(Debug, Clone, Default)]
pub struct ReleaseForm {
    pub backend_version: Option<String>,
    pub web_version: Option<String>,
    pub mobile_version: Option<String>,
    pub native_version: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub release_time: Option<NaiveTime>,
    pub ticket_details: String,
    pub downtime: DowntimeWindow,
}

impl ReleaseForm {
    pub fn has_required_fields(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Names of the required fields that are still absent, in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.release_date.is_none() {
            missing.push("release date");
        }
        if self.release_time.is_none() {
            missing.push("release time");
        }
        if self.ticket_details.trim().is_empty() {
            missing.push("ticket details");
        }
        missing
    }

    /// True when the release ships a native mobile build, which changes the
    /// closing statement to tell mobile users to update.
    pub fn has_native_release(&self) -> bool {
        present_value(&self.native_version).is_some()
    }
}

/// A version field counts as present only when non-blank; the returned value
/// is trimmed for rendering.
pub(crate) fn present_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
