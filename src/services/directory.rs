//! Trait and types for interacting with a review directory backend.

use anyhow::Result;
use review_scout::models::{CourseSummary, Department, ProfessorSummary};

/// Abstraction over the directory data source (e.g., the GraphQL
/// backend). Detail lookups return `None` for unknown keys rather than
/// failing, matching the backend's nullable single-object queries.
#[async_trait::async_trait]
pub trait DirectoryApi {
    /// Returns the course catalog with precomputed averages.
    async fn list_courses(&self) -> Result<Vec<CourseSummary>>;

    /// Returns all professors with their average rating.
    async fn list_professors(&self) -> Result<Vec<ProfessorSummary>>;

    /// Returns all departments.
    async fn list_departments(&self) -> Result<Vec<Department>>;

    /// Returns one course with its full review list, if it exists.
    async fn course_by_code(&self, code: &str) -> Result<Option<CourseSummary>>;

    /// Returns one professor with their full review list, if they exist.
    async fn professor_by_slug(&self, slug: &str) -> Result<Option<ProfessorSummary>>;
}
