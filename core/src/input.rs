use serde_json::Value;

use crate::error::{CalendarError, Result};
use crate::model::activity::ActivityMap;
use crate::time::parse_iso_date;

/// Parses `{"YYYY-MM-DD": count, ...}` into an [`ActivityMap`].
///
/// Everything the renderer assumes is checked here: the document must be an
/// object, every key a real calendar date, every value a non-negative integer.
pub fn parse_activity(text: &str) -> Result<ActivityMap> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(entries) = value else {
        return Err(CalendarError::NotAnObject);
    };

    let mut activity = ActivityMap::new();
    for (key, value) in entries {
        let date = parse_iso_date(&key)?;
        let count = value.as_u64().ok_or_else(|| CalendarError::InvalidCount {
            date: key.clone(),
            value: value.to_string(),
        })?;
        activity.insert(date, count);
    }

    Ok(activity)
}
