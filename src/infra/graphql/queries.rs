//! GraphQL query documents for the review directory backend.
//!
//! List queries page through Relay connections; the backend caps pages
//! at 100, which covers the full catalog for this deployment.

pub const GET_COURSES: &str = r#"
query GetCourses {
  courses(first: 100) {
    edges {
      node {
        id
        code
        title
        department {
          code
          name
        }
        avgRating
        avgWorkload
        avgDifficulty
      }
    }
  }
}
"#;

pub const GET_PROFESSORS: &str = r#"
query GetProfessors {
  professors(first: 100) {
    edges {
      node {
        id
        name
        slug
        department {
          code
          name
        }
        avgRating
      }
    }
  }
}
"#;

pub const GET_DEPARTMENTS: &str = r#"
query GetDepartments {
  departments(first: 100) {
    edges {
      node {
        id
        code
        name
      }
    }
  }
}
"#;

pub const GET_COURSE: &str = r#"
query GetCourse($code: String!) {
  course(code: $code) {
    id
    code
    title
    description
    department {
      code
      name
    }
    avgRating
    avgWorkload
    avgDifficulty
    reviews {
      id
      rating
      workload
      difficulty
      comment
      professor {
        id
        name
        slug
      }
      createdAt
    }
  }
}
"#;

pub const GET_PROFESSOR_BY_SLUG: &str = r#"
query GetProfessorBySlug($slug: String!) {
  professor(slug: $slug) {
    id
    name
    slug
    department {
      code
      name
    }
    avgRating
    reviews {
      id
      rating
      workload
      difficulty
      comment
      course {
        id
        code
        title
      }
      createdAt
    }
  }
}
"#;
