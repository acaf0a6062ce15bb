// src/formatter.rs

use crate::models::DEFAULT_CURRENCY;

pub const NOT_AVAILABLE: &str = "N/A";

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

// BRL uses "." for thousands and "," for decimals: R$ 1.234,56
pub fn format_currency(value: f64, currency: &str) -> String {
    if currency == DEFAULT_CURRENCY {
        format!("R$ {}", group_digits(value, 2, '.', ','))
    } else {
        format!("{} {}", currency, group_digits(value, 2, ',', '.'))
    }
}

pub fn format_market_cap(market_cap: Option<f64>) -> String {
    let market_cap = match market_cap {
        Some(value) if value != 0.0 => value,
        _ => return NOT_AVAILABLE.to_string(),
    };

    if market_cap >= BILLION {
        format!("R$ {:.1}B", market_cap / BILLION)
    } else if market_cap >= MILLION {
        format!("R$ {:.1}M", market_cap / MILLION)
    } else {
        format!("R$ {}", group_digits(market_cap, 0, '.', ','))
    }
}

pub fn format_percentage(value: f64) -> String {
    // -0.0 + 0.0 == +0.0, keeps "+0.00%" for negative zero
    let value = value + 0.0;
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

fn group_digits(value: f64, decimals: usize, thousands: char, decimal: char) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(thousands);
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push(decimal);
        grouped.push_str(fraction);
    }
    grouped
}
