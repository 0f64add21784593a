//! Display formatting for dates and numbers

use wasm_bindgen::JsValue;

fn date(ms: i64) -> js_sys::Date {
    js_sys::Date::new(&JsValue::from_f64(ms as f64))
}

/// "17 Oct 2026, 08:30" style local date and time
pub fn date_time(ms: i64) -> String {
    let options = js_sys::Object::new();
    for (key, value) in [
        ("day", "numeric"),
        ("month", "short"),
        ("year", "numeric"),
        ("hour", "2-digit"),
        ("minute", "2-digit"),
    ] {
        let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
    }
    date(ms).to_locale_string("en-GB", &options).into()
}

/// "17/10" style short date for chart labels
pub fn short_date(ms: i64) -> String {
    let d = date(ms);
    format!("{:02}/{:02}", d.get_date(), d.get_month() + 1)
}

/// Value for a `datetime-local` input, in local time
pub fn to_datetime_local(ms: i64) -> String {
    let offset_ms = date(ms).get_timezone_offset() * 60_000.0;
    let shifted = js_sys::Date::new(&JsValue::from_f64(ms as f64 - offset_ms));
    let iso: String = shifted.to_iso_string().into();
    iso.chars().take(16).collect()
}

/// Parse a `datetime-local` value as local time
pub fn from_datetime_local(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    let millis = js_sys::Date::new(&JsValue::from_str(value)).get_time();
    millis.is_finite().then(|| millis as i64)
}

/// One decimal, without a trailing ".0"
pub fn kg(value: f64) -> String {
    // adding 0.0 turns -0 into 0
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Signed change, e.g. "+1.5" or "-2"
pub fn signed_kg(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", kg(value))
    } else {
        kg(value)
    }
}
