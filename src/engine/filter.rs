//! Compound search filters over course and professor snapshots.

use std::collections::BTreeSet;

use crate::engine::level::course_level;
use crate::models::{CourseSummary, ProfessorSummary};

/// Lower bound of the rating scale; a minimum at this value means "show all".
pub const MIN_RATING: f64 = 1.0;
/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// A conjunction of independent search predicates. Each predicate only
/// applies when its field is set, so the default filter matches
/// everything.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    /// Case-insensitive substring matched against text fields.
    pub query: String,
    /// Exact, case-sensitive department code. Empty means any.
    pub department: String,
    /// Level buckets to keep. Empty means any level, including none.
    pub levels: BTreeSet<u16>,
    pub min_rating: f64,
    pub max_rating: f64,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            department: String::new(),
            levels: BTreeSet::new(),
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl SearchFilter {
    /// Rating predicate shared by courses and professors.
    ///
    /// A present average must lie in `[min_rating, max_rating]`
    /// inclusive. An absent average passes only in "show all" mode,
    /// when the minimum sits at the bottom of the scale.
    fn rating_in_range(&self, avg: Option<f64>) -> bool {
        match avg {
            Some(r) => !(r < self.min_rating || r > self.max_rating),
            None => self.min_rating <= MIN_RATING,
        }
    }

    /// Text predicate: matches when ANY field contains the query.
    /// Vacuously true for an empty query.
    fn query_matches(&self, fields: &[&str]) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        fields.iter().any(|f| contains_ci(f, &needle))
    }

    /// Cheap exact predicates run before the substring scan.
    pub fn matches_course(&self, course: &CourseSummary) -> bool {
        if !self.department.is_empty() && course.department.code != self.department {
            return false;
        }

        if !self.levels.is_empty() {
            match course_level(&course.code) {
                Some(level) if self.levels.contains(&level) => {}
                _ => return false,
            }
        }

        if !self.rating_in_range(course.avg_rating) {
            return false;
        }

        self.query_matches(&[
            &course.code,
            &course.title,
            &course.department.code,
            &course.department.name,
        ])
    }

    /// Same structure as [`Self::matches_course`] minus the level
    /// predicate; professors have no course-level concept.
    pub fn matches_professor(&self, prof: &ProfessorSummary) -> bool {
        if !self.department.is_empty() {
            match &prof.department {
                Some(dept) if dept.code == self.department => {}
                _ => return false,
            }
        }

        if !self.rating_in_range(prof.avg_rating) {
            return false;
        }

        let (dept_code, dept_name) = match &prof.department {
            Some(d) => (d.code.as_str(), d.name.as_str()),
            None => ("", ""),
        };
        self.query_matches(&[&prof.name, dept_code, dept_name])
    }

    /// Applies the predicate preserving input order.
    pub fn filter_courses<'a>(&self, courses: &'a [CourseSummary]) -> Vec<&'a CourseSummary> {
        courses.iter().filter(|c| self.matches_course(c)).collect()
    }

    pub fn filter_professors<'a>(
        &self,
        professors: &'a [ProfessorSummary],
    ) -> Vec<&'a ProfessorSummary> {
        professors
            .iter()
            .filter(|p| self.matches_professor(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    fn dept(code: &str, name: &str) -> Department {
        Department {
            id: code.to_string(),
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    fn course(code: &str, title: &str, dept_code: &str, avg_rating: Option<f64>) -> CourseSummary {
        CourseSummary {
            id: code.to_string(),
            code: code.to_string(),
            title: title.to_string(),
            description: None,
            department: dept(dept_code, &format!("{dept_code} department")),
            avg_rating,
            avg_workload: None,
            avg_difficulty: None,
            reviews: Vec::new(),
        }
    }

    fn professor(name: &str, dept_code: Option<&str>, avg_rating: Option<f64>) -> ProfessorSummary {
        ProfessorSummary {
            id: name.to_string(),
            name: name.to_string(),
            slug: String::new(),
            department: dept_code.map(|c| dept(c, &format!("{c} department"))),
            avg_rating,
            reviews: Vec::new(),
        }
    }

    fn sample_courses() -> Vec<CourseSummary> {
        vec![
            course("STAT 220", "Statistical Reasoning", "STAT", Some(4.2)),
            course("CSE 390", "Programming Tools", "CSE", Some(3.1)),
            course("MATH 126", "Calculus III", "MATH", None),
            course("MUSEUM", "Museology Practicum", "ART", Some(4.9)),
        ]
    }

    #[test]
    fn test_default_filter_is_identity() {
        let courses = sample_courses();
        let filtered = SearchFilter::default().filter_courses(&courses);
        assert_eq!(filtered.len(), courses.len());
        for (kept, original) in filtered.iter().zip(courses.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_department_filter_is_exact_and_case_sensitive() {
        let courses = sample_courses();
        let filter = SearchFilter {
            department: "STAT".to_string(),
            ..Default::default()
        };

        let filtered = filter.filter_courses(&courses);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.iter().all(|c| c.department.code == "STAT"));

        let lower = SearchFilter {
            department: "stat".to_string(),
            ..Default::default()
        };
        assert!(lower.filter_courses(&courses).is_empty());
    }

    #[test]
    fn test_level_filter_excludes_unleveled_courses() {
        let courses = sample_courses();
        let filter = SearchFilter {
            levels: BTreeSet::from([200, 300]),
            ..Default::default()
        };

        let codes: Vec<&str> = filter
            .filter_courses(&courses)
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        // MUSEUM has no level and MATH 126 is a 100-level course
        assert_eq!(codes, vec!["STAT 220", "CSE 390"]);
    }

    #[test]
    fn test_rating_range_is_inclusive() {
        let courses = sample_courses();
        let filter = SearchFilter {
            min_rating: 3.1,
            max_rating: 4.2,
            ..Default::default()
        };

        let codes: Vec<&str> = filter
            .filter_courses(&courses)
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, vec!["STAT 220", "CSE 390"]);
    }

    #[test]
    fn test_unrated_course_passes_only_in_show_all_mode() {
        let courses = sample_courses();

        let show_all = SearchFilter::default();
        assert!(
            show_all
                .filter_courses(&courses)
                .iter()
                .any(|c| c.code == "MATH 126")
        );

        let raised_min = SearchFilter {
            min_rating: 2.0,
            ..Default::default()
        };
        assert!(
            !raised_min
                .filter_courses(&courses)
                .iter()
                .any(|c| c.code == "MATH 126")
        );
    }

    #[test]
    fn test_query_matches_any_text_field_case_insensitively() {
        let courses = sample_courses();

        let by_title = SearchFilter {
            query: "calculus".to_string(),
            ..Default::default()
        };
        assert_eq!(by_title.filter_courses(&courses).len(), 1);

        let by_dept_name = SearchFilter {
            query: "cse depart".to_string(),
            ..Default::default()
        };
        assert_eq!(by_dept_name.filter_courses(&courses).len(), 1);

        let by_code = SearchFilter {
            query: "stat 2".to_string(),
            ..Default::default()
        };
        assert_eq!(by_code.filter_courses(&courses).len(), 1);

        let no_match = SearchFilter {
            query: "underwater basket weaving".to_string(),
            ..Default::default()
        };
        assert!(no_match.filter_courses(&courses).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let courses = sample_courses();
        let filter = SearchFilter {
            query: "s".to_string(),
            min_rating: 3.0,
            ..Default::default()
        };

        let once: Vec<CourseSummary> = filter
            .filter_courses(&courses)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<CourseSummary> = filter.filter_courses(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_professor_filters() {
        let profs = vec![
            professor("Ada Lovelace", Some("CSE"), Some(4.8)),
            professor("Grace Hopper", Some("MATH"), Some(3.9)),
            professor("Emmy Noether", None, None),
        ];

        let by_dept = SearchFilter {
            department: "CSE".to_string(),
            ..Default::default()
        };
        assert_eq!(by_dept.filter_professors(&profs).len(), 1);

        // professor without a department never matches a department filter
        let by_other_dept = SearchFilter {
            department: "ART".to_string(),
            ..Default::default()
        };
        assert!(by_other_dept.filter_professors(&profs).is_empty());

        let by_name = SearchFilter {
            query: "hopper".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.filter_professors(&profs)[0].name, "Grace Hopper");

        // unrated professor behaves like an unrated course
        let raised_min = SearchFilter {
            min_rating: 4.0,
            ..Default::default()
        };
        let names: Vec<&str> = raised_min
            .filter_professors(&profs)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ada Lovelace"]);
    }
}
