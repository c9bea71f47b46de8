//! Display formatting for the kiosk screens: rupiah-style currency grouping
//! and the payment countdown text.

/// Formats an amount the way the payment card shows it, e.g. `Rp 50.000`.
/// Currencies other than IDR fall back to `<code> <grouped amount>`.
pub fn currency(amount: i64, currency: &str) -> String {
    let grouped = group_thousands(amount);
    if currency.eq_ignore_ascii_case("IDR") {
        format!("Rp {grouped}")
    } else {
        format!("{currency} {grouped}")
    }
}

/// Formats remaining whole seconds as `m:ss` (minutes unpadded, seconds
/// zero-padded), matching the countdown readout.
pub fn countdown(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

fn group_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
