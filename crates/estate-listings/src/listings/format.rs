use super::domain::{AreaUnit, PropertyRecord};

/// Renders a whole-unit price the way listing cards show it: euro amounts in
/// continental style (`12.500.000 €`), everything else with a leading symbol
/// and comma grouping.
pub fn format_price(price: f64, currency: &str) -> String {
    let whole = price.round() as u64;
    match currency.trim().to_ascii_uppercase().as_str() {
        "EUR" => format!("{} €", group_digits(whole, '.')),
        "USD" => format!("${}", group_digits(whole, ',')),
        "GBP" => format!("£{}", group_digits(whole, ',')),
        "CHF" => format!("CHF {}", group_digits(whole, ',')),
        other => format!("{other} {}", group_digits(whole, ',')),
    }
}

pub fn format_area(area: f64, unit: AreaUnit) -> String {
    let whole = area.trunc() as u64;
    let cents = ((area - area.trunc()) * 100.0).round() as u64;
    let number = match cents {
        0 => group_digits(whole, ','),
        100 => group_digits(whole + 1, ','),
        cents if cents % 10 == 0 => format!("{}.{}", group_digits(whole, ','), cents / 10),
        cents => format!("{}.{cents:02}", group_digits(whole, ',')),
    };
    format!("{number} {}", unit.label())
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Lowercases, drops everything but ASCII word characters and spaces, then
/// joins words with dashes.
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == ' ')
        .collect();
    kept.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn property_url(record: &PropertyRecord) -> String {
    format!("/properties/{}/{}", record.id, slugify(&record.title))
}

/// Cuts `text` to `max_chars`, backs off to the last whole word and appends
/// an ellipsis. Text that already fits is returned unchanged.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(idx) => cut[..idx].trim_end(),
        None => cut.as_str(),
    };
    format!("{trimmed}...")
}
