use crate::champions::images::BuildReport;
use colored::*;
use std::path::Path;

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_report(report: &BuildReport, output: &Path) {
    for warning in report_warnings(report) {
        display_warning(&warning);
    }

    display_success(&format!(
        "Wrote {} image URLs to {}",
        report.entries.to_string().bold(),
        output.display()
    ));
}

fn report_warnings(report: &BuildReport) -> Vec<String> {
    let mut warnings = Vec::new();

    if report.duplicates > 0 {
        warnings.push(format!(
            "{} duplicate champion name(s) collapsed",
            report.duplicates
        ));
    }

    if report.entries == 0 {
        warnings.push("No champions in input, wrote an empty mapping".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_reported_in_past_tense() {
        let report = BuildReport {
            names_read: 0,
            entries: 0,
            duplicates: 0,
        };
        assert_eq!(
            report_warnings(&report),
            vec!["No champions in input, wrote an empty mapping"]
        );
    }

    #[test]
    fn duplicates_are_counted() {
        let report = BuildReport {
            names_read: 5,
            entries: 3,
            duplicates: 2,
        };
        assert_eq!(
            report_warnings(&report),
            vec!["2 duplicate champion name(s) collapsed"]
        );
    }

    #[test]
    fn clean_run_has_no_warnings() {
        let report = BuildReport {
            names_read: 2,
            entries: 2,
            duplicates: 0,
        };
        assert!(report_warnings(&report).is_empty());
    }
}
