//! Number formatting for prices and totals (es-AR convention:
//! thousands separated with a dot, comma as the decimal mark).

/// Formats a number with thousands separators and the given number of decimals
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a dot every 3 digits, counting from the end of the integer part
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    let formatted_integer = grouped.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Monetary value with a leading `$`, no decimals (prices are whole pesos)
pub fn format_money(value: f64) -> String {
    format!("${}", format_number_with_decimals(value, 0))
}

/// Monetary value with two decimals, for cost/sell price fields
pub fn format_money_exact(value: f64) -> String {
    format!("${}", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.0), "$1.234");
        assert_eq!(format_money(1234567.0), "$1.234.567");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(-1234.0), "$-1.234");
    }

    #[test]
    fn test_format_money_exact() {
        assert_eq!(format_money_exact(1234.5), "$1.234,50");
        assert_eq!(format_money_exact(0.0), "$0,00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
    }
}
