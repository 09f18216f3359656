//! Number parsing and formatting for form fields

/// Parses user input as a decimal number, falling back to 0.
///
/// Leading whitespace is skipped and the longest numeric prefix is used,
/// so `"12abc"` gives 12 and `"abc"` gives 0. Non-finite values give 0.
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::parse_number;
/// assert_eq!(parse_number("12.5"), 12.5);
/// assert_eq!(parse_number(""), 0.0);
/// ```
pub fn parse_number(text: &str) -> f64 {
    numeric_prefix(text.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        end
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_count = frac_end - (end + 1);
        if digit_count + frac_count > 0 {
            end = frac_end;
            digit_count += frac_count;
        }
    }

    if digit_count == 0 {
        return "";
    }

    // Экспонента учитывается только если за ней есть цифры
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    &text[..end]
}

/// Форматирует число с указанным количеством знаков после запятой
///
/// Negative zero and non-finite values are written as zero.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let value = if value == 0.0 || !value.is_finite() {
        0.0
    } else {
        value
    };
    format!("{:.*}", decimals as usize, value)
}

/// Форматирует денежное значение с 2 знаками после запятой
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}
