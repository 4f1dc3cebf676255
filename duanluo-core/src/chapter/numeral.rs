//! Chapter-number parsing for Arabic, full-width and Chinese numerals

/// Parse a chapter number such as `12`, `１２`, `十二`, `一百零八` or `一〇八`.
///
/// Returns `None` for empty input or any character outside the numeral set.
pub fn parse(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(value) = parse_decimal(text) {
        return Some(value);
    }

    let has_unit = text.chars().any(|c| unit_value(c).is_some() || c == '万');
    if has_unit {
        parse_with_units(text)
    } else {
        parse_positional(text)
    }
}

fn parse_decimal(text: &str) -> Option<u32> {
    let mut value: u32 = 0;
    for ch in text.chars() {
        let digit = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            '０'..='９' => ch as u32 - '０' as u32,
            _ => return None,
        };
        value = value.checked_mul(10)?.checked_add(digit)?;
    }
    Some(value)
}

fn digit_value(ch: char) -> Option<u32> {
    let value = match ch {
        '零' | '〇' | '○' => 0,
        '一' => 1,
        '二' | '两' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    };
    Some(value)
}

fn unit_value(ch: char) -> Option<u32> {
    match ch {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        _ => None,
    }
}

/// `一〇八` style: each char is one decimal digit
fn parse_positional(text: &str) -> Option<u32> {
    let mut value: u32 = 0;
    for ch in text.chars() {
        value = value.checked_mul(10)?.checked_add(digit_value(ch)?)?;
    }
    Some(value)
}

/// `一百零八` style: digits scaled by 十/百/千, sections scaled by 万
fn parse_with_units(text: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut section: u32 = 0;
    let mut number: u32 = 0;

    for ch in text.chars() {
        if let Some(digit) = digit_value(ch) {
            number = digit;
        } else if let Some(unit) = unit_value(ch) {
            // Bare 十 means one ten
            let factor = if number == 0 { 1 } else { number };
            section = section.checked_add(factor.checked_mul(unit)?)?;
            number = 0;
        } else if ch == '万' {
            section = section.checked_add(number)?;
            total = total.checked_add(section.checked_mul(10_000)?)?;
            section = 0;
            number = 0;
        } else {
            return None;
        }
    }

    total.checked_add(section)?.checked_add(number)
}
