use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::infra::graphql::queries;
use crate::services::directory::DirectoryApi;
use review_scout::fetch::{BasicClient, post_json};
use review_scout::graphql::{Connection, GraphqlRequest, decode_data};
use review_scout::models::{CourseSummary, Department, ProfessorSummary};

/// Endpoint used when `GRAPHQL_URL` is not set.
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8000/graphql/";

/// [`DirectoryApi`] implementation backed by the GraphQL service.
pub struct GraphqlDirectory {
    endpoint: String,
    http: BasicClient,
}

impl GraphqlDirectory {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: BasicClient::new(),
        }
    }

    /// Resolves the endpoint from an explicit override, then the
    /// `GRAPHQL_URL` environment variable, then the local default.
    pub fn from_env(override_url: Option<String>) -> Self {
        let endpoint = override_url
            .or_else(|| std::env::var("GRAPHQL_URL").ok())
            .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());
        Self::new(endpoint)
    }

    async fn run<T: DeserializeOwned>(&self, request: &GraphqlRequest) -> Result<T> {
        debug!(endpoint = %self.endpoint, "Sending GraphQL request");
        let bytes = post_json(&self.http, &self.endpoint, request).await?;
        decode_data(&bytes)
    }
}

#[derive(Deserialize)]
struct CoursesData {
    courses: Connection<CourseSummary>,
}

#[derive(Deserialize)]
struct ProfessorsData {
    professors: Connection<ProfessorSummary>,
}

#[derive(Deserialize)]
struct DepartmentsData {
    departments: Connection<Department>,
}

#[derive(Deserialize)]
struct CourseData {
    course: Option<CourseSummary>,
}

#[derive(Deserialize)]
struct ProfessorData {
    professor: Option<ProfessorSummary>,
}

#[async_trait]
impl DirectoryApi for GraphqlDirectory {
    async fn list_courses(&self) -> Result<Vec<CourseSummary>> {
        let data: CoursesData = self
            .run(&GraphqlRequest::new(queries::GET_COURSES))
            .await?;
        Ok(data.courses.into_nodes())
    }

    async fn list_professors(&self) -> Result<Vec<ProfessorSummary>> {
        let data: ProfessorsData = self
            .run(&GraphqlRequest::new(queries::GET_PROFESSORS))
            .await?;
        Ok(data.professors.into_nodes())
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        let data: DepartmentsData = self
            .run(&GraphqlRequest::new(queries::GET_DEPARTMENTS))
            .await?;
        Ok(data.departments.into_nodes())
    }

    async fn course_by_code(&self, code: &str) -> Result<Option<CourseSummary>> {
        let request = GraphqlRequest::with_variables(
            queries::GET_COURSE,
            json!({ "code": code.trim() }),
        );
        let data: CourseData = self.run(&request).await?;
        Ok(data.course)
    }

    async fn professor_by_slug(&self, slug: &str) -> Result<Option<ProfessorSummary>> {
        let request =
            GraphqlRequest::with_variables(queries::GET_PROFESSOR_BY_SLUG, json!({ "slug": slug }));
        let data: ProfessorData = self.run(&request).await?;
        Ok(data.professor)
    }
}
