//! Display text helpers for bridge rows.

/// Categorical matter type into display form: underscores to spaces, title
/// case per word. `WORK_PERMIT_EXTENSION` reads "Work Permit Extension".
pub fn compact_matter_type(matter_type: &str) -> String {
    matter_type
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Matter title into a row-width label: dashes and their surrounding
/// whitespace collapsed to single spaces, truncated with an ellipsis past
/// 26 characters.
pub fn compact_title(title: &str) -> String {
    let cleaned = title
        .split('-')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() > 26 {
        let head: String = cleaned.chars().take(25).collect();
        format!("{head}...")
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matter_type_title_cased() {
        assert_eq!(compact_matter_type("WORK_PERMIT_EXTENSION"), "Work Permit Extension");
        assert_eq!(compact_matter_type("PR"), "Pr");
        assert_eq!(compact_matter_type(""), "");
    }

    #[test]
    fn title_collapses_dashes_and_truncates() {
        assert_eq!(compact_title("H-1B Extension - Vega"), "H 1B Extension Vega");
        assert_eq!(compact_title("Family Sponsorship - Patel"), "Family Sponsorship Patel");
        assert_eq!(compact_title("Short"), "Short");
        let long = compact_title("A very long matter title that keeps going");
        assert_eq!(long.chars().count(), 28);
        assert!(long.ends_with("..."));
    }
}
