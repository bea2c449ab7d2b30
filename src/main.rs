//! CLI entry point for the review_scout directory client.
//!
//! Provides subcommands for searching the course catalog, viewing a
//! course with per-professor statistics, viewing a professor's reviews,
//! and listing professors and departments.

mod infra;
mod services;

use crate::infra::graphql::client::GraphqlDirectory;
use crate::services::directory::DirectoryApi;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use review_scout::engine::filter::SearchFilter;
use review_scout::engine::level::{LEVELS, level_histogram};
use review_scout::engine::stats::{course_stats, courses_taught, professor_stats};
use review_scout::output::{
    comment_preview, export_courses, format_rating, rating_tier, render_stars,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "review_scout")]
#[command(about = "Search and aggregate course and professor reviews", long_about = None)]
struct Cli {
    /// GraphQL endpoint; falls back to $GRAPHQL_URL, then localhost
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search courses and professors with compound filters
    Search {
        /// Free-text query matched against codes, titles, names, and departments
        query: Option<String>,

        /// Which result sets to show
        #[arg(short, long, value_enum, default_value_t = Category::Classes)]
        category: Category,

        /// Exact department code (e.g. STAT)
        #[arg(short, long, default_value = "")]
        department: String,

        /// Course level bucket, repeatable (e.g. -l 200 -l 300)
        #[arg(short = 'l', long = "level")]
        levels: Vec<u16>,

        /// Minimum average rating (1 shows unrated entries too)
        #[arg(long, default_value_t = 1.0)]
        min_rating: f64,

        /// Maximum average rating
        #[arg(long, default_value_t = 5.0)]
        max_rating: f64,

        /// CSV file to append matching courses to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show a course with per-professor review statistics
    Course {
        /// Course code, e.g. "STAT 220"
        code: String,
    },
    /// Show a professor's reviews, optionally restricted to one course
    Professor {
        /// Professor slug, e.g. "ada-lovelace"
        slug: String,

        /// Only consider reviews for this course code
        #[arg(short, long)]
        course: Option<String>,
    },
    /// List all professors with their average rating
    Professors,
    /// List all departments
    Departments,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Category {
    All,
    Classes,
    Professors,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/review_scout.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("review_scout.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let api = GraphqlDirectory::from_env(cli.endpoint);

    match cli.command {
        Commands::Search {
            query,
            category,
            department,
            levels,
            min_rating,
            max_rating,
            output,
        } => {
            let filter = SearchFilter {
                query: query.unwrap_or_default(),
                department,
                levels: levels.into_iter().collect(),
                min_rating,
                max_rating,
            };
            run_search(&api, &filter, category, output.as_deref()).await?;
        }
        Commands::Course { code } => run_course(&api, &code).await?,
        Commands::Professor { slug, course } => {
            run_professor(&api, &slug, course.as_deref()).await?;
        }
        Commands::Professors => run_professors(&api).await?,
        Commands::Departments => run_departments(&api).await?,
    }

    Ok(())
}

/// Fetches the full snapshot concurrently and renders the filtered
/// result sets for the requested category.
#[tracing::instrument(skip_all)]
async fn run_search(
    api: &GraphqlDirectory,
    filter: &SearchFilter,
    category: Category,
    output: Option<&str>,
) -> Result<()> {
    let (courses, professors, departments) = tokio::try_join!(
        api.list_courses(),
        api.list_professors(),
        api.list_departments(),
    )?;

    info!(
        courses = courses.len(),
        professors = professors.len(),
        departments = departments.len(),
        "Snapshot fetched"
    );

    if category != Category::Professors {
        let matches = filter.filter_courses(&courses);

        let histogram = level_histogram(&courses);
        for level in LEVELS {
            let count = histogram.get(&level).copied().unwrap_or(0);
            info!(level, count, "Level bucket");
        }

        info!(total = matches.len(), "Classes matching filters");
        for course in &matches {
            info!(
                code = %course.code,
                title = %course.title,
                department = %course.department.code,
                rating = %format_rating(course.avg_rating),
                workload = %format_rating(course.avg_workload),
                tier = rating_tier(course.avg_rating),
                "Course"
            );
        }

        if let Some(path) = output {
            export_courses(path, &matches)?;
            info!(path, rows = matches.len(), "Search results exported");
        }
    }

    if category != Category::Classes {
        let matches = filter.filter_professors(&professors);

        info!(total = matches.len(), "Professors matching filters");
        for prof in &matches {
            let dept = prof
                .department
                .as_ref()
                .map(|d| d.name.as_str())
                .unwrap_or("");
            info!(
                name = %prof.name,
                department = dept,
                rating = %format_rating(prof.avg_rating),
                tier = rating_tier(prof.avg_rating),
                "Professor"
            );
        }
    }

    Ok(())
}

/// Renders one course: description, averages, and per-professor stats
/// with a most-helpful-review preview.
#[tracing::instrument(skip(api))]
async fn run_course(api: &GraphqlDirectory, code: &str) -> Result<()> {
    let Some(course) = api.course_by_code(code).await? else {
        warn!(code, "Course not found");
        return Ok(());
    };

    info!(
        code = %course.code,
        title = %course.title,
        department = %course.department.name,
        "Course"
    );
    match &course.description {
        Some(d) if !d.is_empty() => info!("{d}"),
        _ => info!("No description available for this course."),
    }
    info!(
        rating = %format_rating(course.avg_rating),
        workload = %format_rating(course.avg_workload),
        difficulty = %format_rating(course.avg_difficulty),
        "Course averages"
    );

    let stats = professor_stats(&course.reviews);
    if stats.is_empty() {
        info!("No professors found for this course yet.");
        return Ok(());
    }

    for prof in &stats {
        info!(
            name = %prof.name,
            slug = %prof.slug,
            reviews = prof.num_reviews,
            rating = %format_rating(Some(prof.avg_rating)),
            workload = %format_rating(Some(prof.avg_workload)),
            difficulty = %format_rating(Some(prof.avg_difficulty)),
            tier = rating_tier(Some(prof.avg_rating)),
            "Professor"
        );
        match &prof.most_helpful_review {
            Some(review) if !review.comment.is_empty() => {
                info!(
                    stars = %render_stars(review.rating),
                    "Most helpful: {}",
                    comment_preview(&review.comment, 150)
                );
            }
            _ => info!("No reviews have been written yet."),
        }
    }

    Ok(())
}

/// Renders one professor: courses taught, optional course-specific
/// stats, and the matching reviews.
#[tracing::instrument(skip(api))]
async fn run_professor(api: &GraphqlDirectory, slug: &str, course: Option<&str>) -> Result<()> {
    let Some(prof) = api.professor_by_slug(slug).await? else {
        warn!(slug, "Professor not found");
        return Ok(());
    };

    let dept = prof
        .department
        .as_ref()
        .map(|d| d.name.as_str())
        .unwrap_or("");
    info!(
        name = %prof.name,
        department = dept,
        rating = %format_rating(prof.avg_rating),
        "Professor"
    );

    for taught in courses_taught(&prof.reviews) {
        info!(code = %taught.code, title = %taught.title, "Teaches");
    }

    let reviews: Vec<_> = match course {
        Some(code) => {
            match course_stats(&prof.reviews, code) {
                Some(summary) => info!(
                    course = code,
                    reviews = summary.num_reviews,
                    rating = %format_rating(Some(summary.avg_rating)),
                    workload = %format_rating(Some(summary.avg_workload)),
                    difficulty = %format_rating(Some(summary.avg_difficulty)),
                    "Course-specific stats"
                ),
                None => info!(course = code, "No reviews yet for this course"),
            }
            prof.reviews
                .iter()
                .filter(|r| r.course.as_ref().is_some_and(|c| c.code == code))
                .collect()
        }
        None => prof.reviews.iter().collect(),
    };

    info!(total = reviews.len(), "Reviews");
    for review in reviews {
        info!(
            date = %review.created_at.format("%Y-%m-%d"),
            stars = %render_stars(review.rating),
            workload = review.workload,
            difficulty = review.difficulty,
            "Review"
        );
        if !review.comment.is_empty() {
            info!("{}", review.comment);
        }
    }

    Ok(())
}

async fn run_professors(api: &GraphqlDirectory) -> Result<()> {
    let professors = api.list_professors().await?;

    info!(total = professors.len(), "Professors fetched");
    for prof in &professors {
        let dept = prof
            .department
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("");
        info!(
            name = %prof.name,
            slug = %prof.slug,
            department = dept,
            rating = %format_rating(prof.avg_rating),
            tier = rating_tier(prof.avg_rating),
            "Professor"
        );
    }

    Ok(())
}

async fn run_departments(api: &GraphqlDirectory) -> Result<()> {
    let departments = api.list_departments().await?;

    info!(total = departments.len(), "Departments fetched");
    for dept in &departments {
        info!(code = %dept.code, name = %dept.name, "Department");
    }

    Ok(())
}
