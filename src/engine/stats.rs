//! Per-professor grouping and derived review statistics.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::engine::utility::mean;
use crate::models::{CourseRef, Review};

/// Derived statistics for one professor over a set of reviews.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessorStats {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub num_reviews: usize,
    pub avg_rating: f64,
    pub avg_workload: f64,
    pub avg_difficulty: f64,
    pub most_helpful_review: Option<Review>,
}

/// The three review averages plus the count they were computed over.
#[derive(Debug, Clone, Serialize)]
pub struct RatingSummary {
    pub num_reviews: usize,
    pub avg_rating: f64,
    pub avg_workload: f64,
    pub avg_difficulty: f64,
}

fn summarize(group: &[&Review]) -> RatingSummary {
    let ratings: Vec<f64> = group.iter().map(|r| r.rating as f64).collect();
    let workloads: Vec<f64> = group.iter().map(|r| r.workload as f64).collect();
    let difficulties: Vec<f64> = group.iter().map(|r| r.difficulty as f64).collect();

    RatingSummary {
        num_reviews: group.len(),
        avg_rating: mean(&ratings),
        avg_workload: mean(&workloads),
        avg_difficulty: mean(&difficulties),
    }
}

/// Last whitespace-delimited token of a name; empty string for blank names.
pub fn last_name(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or("")
}

/// Groups reviews by professor and reduces each group to a stats record.
///
/// Reviews without a professor are excluded from grouping. Each group's
/// averages are plain arithmetic means; `most_helpful_review` is the
/// first review in input order with a non-empty comment, falling back
/// to the group's first review, so it is always present for a group.
///
/// The result is sorted ascending by last name, compared
/// case-insensitively. The sort is stable, so professors with the same
/// last name keep their first-occurrence order.
pub fn professor_stats(reviews: &[Review]) -> Vec<ProfessorStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Review>> = HashMap::new();

    for review in reviews {
        let Some(prof) = &review.professor else {
            continue;
        };
        groups
            .entry(prof.id.as_str())
            .or_insert_with(|| {
                order.push(prof.id.as_str());
                Vec::new()
            })
            .push(review);
    }

    let mut stats: Vec<ProfessorStats> = order
        .iter()
        .filter_map(|id| {
            let group = &groups[id];
            let prof = group.first()?.professor.as_ref()?;

            let summary = summarize(group);
            let most_helpful = group
                .iter()
                .find(|r| !r.comment.is_empty())
                .or_else(|| group.first())
                .map(|r| (*r).clone());

            Some(ProfessorStats {
                id: prof.id.clone(),
                name: prof.name.clone(),
                slug: if prof.slug.is_empty() {
                    prof.id.clone()
                } else {
                    prof.slug.clone()
                },
                num_reviews: summary.num_reviews,
                avg_rating: summary.avg_rating,
                avg_workload: summary.avg_workload,
                avg_difficulty: summary.avg_difficulty,
                most_helpful_review: most_helpful,
            })
        })
        .collect();

    stats.sort_by(|a, b| {
        last_name(&a.name)
            .to_lowercase()
            .cmp(&last_name(&b.name).to_lowercase())
    });

    stats
}

/// Averages over the reviews matching `course_code` exactly.
///
/// Returns `None` when no review references the course, so callers can
/// render a "no data" state instead of a zero average.
pub fn course_stats(reviews: &[Review], course_code: &str) -> Option<RatingSummary> {
    let matching: Vec<&Review> = reviews
        .iter()
        .filter(|r| r.course.as_ref().is_some_and(|c| c.code == course_code))
        .collect();

    if matching.is_empty() {
        return None;
    }

    Some(summarize(&matching))
}

/// Distinct courses referenced by a review set, first-occurrence order.
pub fn courses_taught(reviews: &[Review]) -> Vec<CourseRef> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut courses = Vec::new();

    for review in reviews {
        if let Some(course) = &review.course {
            if seen.insert(course.code.as_str()) {
                courses.push(course.clone());
            }
        }
    }

    courses
}
