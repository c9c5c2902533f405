//! Text field coercion and display formatting.

/// Parse a user-typed amount. Thousands separators are ignored; anything that
/// isn't a finite number reads as 0.
pub fn parse_amount(s: &str) -> f64 {
    let v = s.trim().replace(',', "").parse::<f64>().unwrap_or(0.0);
    if v.is_finite() { v } else { 0.0 }
}

pub fn format_money(v: f64) -> String {
    format!("${:.2}", v)
}

pub fn format_stake(v: f64) -> String {
    format!("{:.4}", v)
}

/// Price as shown in the input box: short, without trailing zeros.
pub fn format_price(v: f64) -> String {
    let s = format!("{:.4}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
