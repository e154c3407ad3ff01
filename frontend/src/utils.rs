/// Formats an integer with comma thousands separators, e.g. `5243` -> `"5,243"`.
#[cfg(target_arch = "wasm32")]
pub fn format_thousands(value: u64) -> String {
    js_sys::Number::from(value as f64)
        .to_locale_string("en-US")
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_thousands(value: u64) -> String {
    group_digits(value)
}

// Same output as `Intl.NumberFormat("en-US")` for integers.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a pixel length for inline styles, dropping a trailing `.0`.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
