/// Resolves a day reference from free text: explicit "day N", the ordinal
/// words up to "fifth day", and "last day"/"final day". The orchestrator
/// uses this to cross-check the interpreter's chosen day before an edit.
pub fn parse_day_reference(user_input: &str, total_days: u32) -> Option<u32> {
    let input = user_input.to_lowercase();

    if let Some(day) = explicit_day_number(&input) {
        return Some(day);
    }

    const ORDINALS: [(&str, u32); 5] = [
        ("first day", 1),
        ("second day", 2),
        ("third day", 3),
        ("fourth day", 4),
        ("fifth day", 5),
    ];
    for (phrase, day) in ORDINALS {
        if input.contains(phrase) {
            return Some(day);
        }
    }

    if input.contains("last day") || input.contains("final day") {
        return Some(total_days);
    }

    None
}

/// First occurrence of "day" followed by optional whitespace and digits.
fn explicit_day_number(input: &str) -> Option<u32> {
    let bytes = input.as_bytes();
    let mut from = 0;

    while let Some(found) = input[from..].find("day") {
        let mut i = from + found + 3;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i > digits_start {
            return input[digits_start..i].parse().ok();
        }
        from += found + 3;
    }

    None
}
