use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
use cv_screener::config::AppConfig;
use cv_screener::error::AppError;
use cv_screener::screening::{score_candidate, CandidateSummary, CriteriaConfig};
use cv_screener::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "CV Screener",
    about = "Score extracted resume records against recruiter-defined criteria",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one extracted candidate record from disk
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Candidate record JSON, as produced by the extraction pipeline
    #[arg(long)]
    candidate: PathBuf,
    /// Criteria configuration JSON; defaults to all criteria inactive
    #[arg(long)]
    criteria: Option<PathBuf>,
    /// Reference year for "present" dates (defaults to the current year)
    #[arg(long)]
    present_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    candidate: Value,
    #[serde(default)]
    criteria: CriteriaConfig,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    present_year: Option<i32>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => run_score(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/candidates/score", post(score_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cv screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        candidate,
        criteria,
        present_year,
    } = args;

    let raw = read_json(&candidate)?;
    let criteria = match criteria {
        Some(path) => serde_json::from_value(read_json(&path)?).map_err(|err| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid criteria file: {err}"),
            ))
        })?,
        None => CriteriaConfig::default(),
    };
    let present_year = present_year.unwrap_or_else(|| Local::now().year());
    let source = candidate
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| candidate.display().to_string());

    let summary = score_candidate(&raw, &criteria, &source, present_year)?;
    render_summary(&source, &summary);

    Ok(())
}

fn read_json(path: &Path) -> Result<Value, AppError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{} is not valid JSON: {err}", path.display()),
        ))
    })
}

async fn healthcheck() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        serde_json::json!({ "status": "ready" })
    } else {
        serde_json::json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn score_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<CandidateSummary>, AppError> {
    let ScoreRequest {
        candidate,
        criteria,
        source,
        present_year,
    } = payload;

    let source = source.unwrap_or_else(|| "upload".to_string());
    let present_year = present_year.unwrap_or_else(|| Local::now().year());

    let summary = score_candidate(&candidate, &criteria, &source, present_year)?;
    Ok(Json(summary))
}

fn render_summary(source: &str, summary: &CandidateSummary) {
    println!("Candidate summary for {source}");
    println!(
        "{} — poste visé : {}",
        summary.introduction.full_name, summary.score.target_role
    );
    if !summary.introduction.locations.is_empty() {
        println!("Localisation : {}", summary.introduction.locations);
    }

    println!("\nScore : {}/100", summary.score.total);
    for component in &summary.score.components {
        println!(
            "- {} : {}/{} ({})",
            component.criterion.label(),
            component.points,
            component.criterion.weight(),
            component.note
        );
    }

    if summary.score.badges.is_empty() {
        println!("\nBadges : aucun");
    } else {
        println!("\nBadges");
        for badge in &summary.score.badges {
            println!("- {} : {}", badge.name, badge.description);
        }
    }

    println!("\nRemarque : {}", summary.score.remark);

    if !summary.formations.is_empty() {
        println!("\nFormations");
        for formation in &summary.formations {
            println!(
                "- {} | {} | {} | {}",
                formation.diploma, formation.institution, formation.period, formation.status
            );
        }
    }
}
