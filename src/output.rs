//! Output formatting and persistence for search and review statistics.
//!
//! Owns the "N/A" sentinel for absent or non-finite averages, star
//! bars, comment previews, JSON printing, and CSV export.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::engine::level::course_level;
use crate::models::CourseSummary;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Renders an average to one decimal, or `"N/A"` when the value is
/// absent or not a finite number. Never coerces missing data to 0.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() => format!("{r:.1}"),
        _ => "N/A".to_string(),
    }
}

/// Coarse quality bucket for an average rating, mirroring the tiers the
/// directory uses on its cards.
pub fn rating_tier(rating: Option<f64>) -> &'static str {
    match rating {
        Some(r) if r.is_finite() => {
            if r >= 4.5 {
                "excellent"
            } else if r >= 4.0 {
                "good"
            } else if r >= 3.0 {
                "fair"
            } else {
                "poor"
            }
        }
        _ => "n/a",
    }
}

/// Five-slot star bar for an integer rating, e.g. `★★★★☆` for 4.
pub fn render_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Truncates a comment to at most `max` characters for card previews,
/// appending an ellipsis when something was cut.
pub fn comment_preview(comment: &str, max: usize) -> String {
    if comment.chars().count() <= max {
        return comment.to_string();
    }
    let cut: String = comment.chars().take(max).collect();
    format!("{cut}...")
}

/// Logs any serializable result as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One exported row of course search results.
#[derive(Debug, Serialize)]
struct CourseRow<'a> {
    code: &'a str,
    title: &'a str,
    department: &'a str,
    level: Option<u16>,
    avg_rating: Option<f64>,
    avg_workload: Option<f64>,
    avg_difficulty: Option<f64>,
}

/// Appends filtered course rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn export_courses(path: &str, courses: &[&CourseSummary]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = courses.len(), "Exporting CSV");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for course in courses {
        writer.serialize(CourseRow {
            code: &course.code,
            title: &course.title,
            department: &course.department.code,
            level: course_level(&course.code),
            avg_rating: course.avg_rating,
            avg_workload: course.avg_workload,
            avg_difficulty: course.avg_difficulty,
        })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn course(code: &str, avg_rating: Option<f64>) -> CourseSummary {
        CourseSummary {
            id: code.to_string(),
            code: code.to_string(),
            title: "Sample".to_string(),
            description: None,
            department: Department {
                id: String::new(),
                code: "STAT".to_string(),
                name: "Statistics".to_string(),
            },
            avg_rating,
            avg_workload: None,
            avg_difficulty: None,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_format_rating_sentinels() {
        assert_eq!(format_rating(Some(4.25)), "4.2");
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(f64::NAN)), "N/A");
        assert_eq!(format_rating(Some(f64::INFINITY)), "N/A");
    }

    #[test]
    fn test_rating_tiers() {
        assert_eq!(rating_tier(Some(4.7)), "excellent");
        assert_eq!(rating_tier(Some(4.5)), "excellent");
        assert_eq!(rating_tier(Some(4.0)), "good");
        assert_eq!(rating_tier(Some(3.2)), "fair");
        assert_eq!(rating_tier(Some(1.0)), "poor");
        assert_eq!(rating_tier(None), "n/a");
        assert_eq!(rating_tier(Some(f64::NAN)), "n/a");
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(0), "☆☆☆☆☆");
        assert_eq!(render_stars(4), "★★★★☆");
        assert_eq!(render_stars(5), "★★★★★");
        // out-of-range input clamps instead of panicking
        assert_eq!(render_stars(9), "★★★★★");
    }

    #[test]
    fn test_comment_preview() {
        assert_eq!(comment_preview("short", 150), "short");
        let long = "x".repeat(200);
        let preview = comment_preview(&long, 150);
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));
        // truncation respects char boundaries
        assert_eq!(comment_preview("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let courses = [course("STAT 220", Some(4.2)), course("CSE 390", None)];
        print_json(&courses).unwrap();
    }

    #[test]
    fn test_export_creates_file() {
        let path = temp_path("review_scout_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        let courses = [course("STAT 220", Some(4.2))];
        let refs: Vec<&CourseSummary> = courses.iter().collect();
        export_courses(&path, &refs).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("STAT 220"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_writes_header_once() {
        let path = temp_path("review_scout_test_header.csv");
        let _ = fs::remove_file(&path);

        let courses = [course("STAT 220", Some(4.2)), course("CSE 390", None)];
        let refs: Vec<&CourseSummary> = courses.iter().collect();
        export_courses(&path, &refs).unwrap();
        export_courses(&path, &refs).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // Header line should appear exactly once
        let header_count = content.lines().filter(|l| l.contains("avg_rating")).count();
        assert_eq!(header_count, 1);
        // 1 header + 2 rows per export call
        assert_eq!(content.lines().count(), 5);

        fs::remove_file(&path).unwrap();
    }
}
