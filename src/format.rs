/// Fixed four-decimal rendering of a statistic. Infinities print as `+Inf`/`-Inf`.
pub fn stat(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 {
            "+Inf".to_owned()
        } else {
            "-Inf".to_owned()
        }
    } else if value.is_nan() {
        "NaN".to_owned()
    } else {
        format!("{:.4}", value)
    }
}

/// A labelled report line, `  <label padded to 20> : <value>`
pub fn field(label: &str, value: &str) -> String {
    format!("  {:<20}: {}", label, value)
}
