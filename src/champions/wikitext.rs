use regex::Regex;

const CHAMPION_ROW_PATTERN: &str = r"\{\{List of champions row\|(\w+)\}\}";

/// Champion names from the wiki's "List of champions" page source, in page order.
///
/// Only rows whose name is made of word characters match; e.g. `Kai'Sa` or
/// `Dr. Mundo` rows are skipped.
pub fn extract_champions(wikitext: &str) -> Vec<String> {
    let re = Regex::new(CHAMPION_ROW_PATTERN).expect("static pattern is valid");

    re.captures_iter(wikitext)
        .map(|caps| caps[1].to_string())
        .collect()
}
