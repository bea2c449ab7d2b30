//! Course level buckets derived from course codes.

use std::collections::BTreeMap;

use crate::models::CourseSummary;

/// The level buckets the search surface offers.
pub const LEVELS: [u16; 8] = [100, 200, 300, 400, 500, 600, 700, 800];

/// Extracts the hundreds-digit level from a course code.
///
/// A code yields a level when whitespace is followed by at least three
/// digits: "STAT 220" → 200, "CSE 390" → 300. Codes without a numeric
/// portion ("MATH") have no level, which is distinct from level 0.
pub fn course_level(code: &str) -> Option<u16> {
    let chars: Vec<char> = code.chars().collect();

    for window in chars.windows(4) {
        if window[0].is_whitespace()
            && window[1].is_ascii_digit()
            && window[2].is_ascii_digit()
            && window[3].is_ascii_digit()
        {
            let hundreds = window[1].to_digit(10)? as u16;
            return Some(hundreds * 100);
        }
    }

    None
}

/// Counts courses per level bucket. Courses with no level are omitted.
pub fn level_histogram(courses: &[CourseSummary]) -> BTreeMap<u16, usize> {
    let mut counts = BTreeMap::new();

    for course in courses {
        if let Some(level) = course_level(&course.code) {
            *counts.entry(level).or_insert(0) += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    fn course(code: &str) -> CourseSummary {
        CourseSummary {
            id: code.to_string(),
            code: code.to_string(),
            title: String::new(),
            description: None,
            department: Department {
                id: String::new(),
                code: "STAT".to_string(),
                name: "Statistics".to_string(),
            },
            avg_rating: None,
            avg_workload: None,
            avg_difficulty: None,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_course_level_examples() {
        assert_eq!(course_level("STAT 220"), Some(200));
        assert_eq!(course_level("CSE 390"), Some(300));
        assert_eq!(course_level("MATH"), None);
    }

    #[test]
    fn test_course_level_needs_whitespace_before_digits() {
        assert_eq!(course_level("STAT220"), None);
        assert_eq!(course_level("STAT  220"), Some(200));
    }

    #[test]
    fn test_course_level_needs_three_digits() {
        assert_eq!(course_level("STAT 22"), None);
        // trailing digits beyond three do not change the bucket
        assert_eq!(course_level("STAT 2207"), Some(200));
    }

    #[test]
    fn test_level_histogram() {
        let courses = vec![
            course("STAT 220"),
            course("STAT 311"),
            course("CSE 312"),
            course("MATH"),
        ];

        let counts = level_histogram(&courses);
        assert_eq!(counts.get(&200), Some(&1));
        assert_eq!(counts.get(&300), Some(&2));
        assert_eq!(counts.get(&100), None);
        assert_eq!(counts.values().sum::<usize>(), 3);
    }
}
