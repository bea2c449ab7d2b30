//! Value records received from the review directory backend.
//!
//! Everything here is deserialized straight from GraphQL responses
//! (camelCase on the wire) and treated as an immutable snapshot. The
//! engine never mutates these records; a new fetch produces a new
//! snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department a course or professor belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    pub id: String,
    pub code: String,
    pub name: String,
}

/// Course reference carried inside a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    pub id: String,
    pub code: String,
    pub title: String,
}

/// Professor reference carried inside a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// A single rating submission: a rating/workload/difficulty triple in
/// [1,5] plus an optional free-text comment.
///
/// Depending on the query, either the course ref or the professor ref
/// is populated (course pages embed professors, professor pages embed
/// courses), so both are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: u8,
    pub workload: u8,
    pub difficulty: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub course: Option<CourseRef>,
    #[serde(default)]
    pub professor: Option<ProfessorRef>,
    pub created_at: DateTime<Utc>,
}

/// A course as returned by the backend, with precomputed averages.
///
/// Averages are `None` when the course has no reviews yet; the detail
/// query includes the review list, the search query omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub department: Department,
    pub avg_rating: Option<f64>,
    pub avg_workload: Option<f64>,
    pub avg_difficulty: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A professor as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub department: Option<Department>,
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}
