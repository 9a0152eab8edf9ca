use actix_web::{web, App, HttpServer, HttpResponse, Result, middleware};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::assign::{check_plan, max_per_person, plan, Assignment, CallMap, TWO_PERSON_NOTE};
use crate::config::Settings;
use crate::parser::parse_participants;

// Last generated assignment, kept only so it can be exported as text
pub struct AppState {
    pub last_assignment: Mutex<Option<Assignment>>,
    pub max_participants: usize,
}

#[derive(Deserialize)]
pub struct FeasibilityRequest {
    participants: usize,
    calls: usize,
}

#[derive(Serialize)]
pub struct FeasibilityResponse {
    possible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    max_per_person: usize,
}

#[derive(Deserialize)]
pub struct AssignRequest {
    names: String,
    calls: usize,
}

#[derive(Serialize)]
pub struct AssignResponse {
    success: bool,
    per_person: usize,
    assignments: CallMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    report: String,
}

fn error_json(message: impl Into<String>) -> serde_json::Value {
    serde_json::json!({"success": false, "error": message.into()})
}

fn too_many(count: usize, limit: usize) -> serde_json::Value {
    error_json(format!("{} participants is more than the limit of {}", count, limit))
}

// Feasibility endpoint
async fn feasibility(
    req: web::Json<FeasibilityRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.participants > state.max_participants {
        let body = too_many(req.participants, state.max_participants);
        return Ok(HttpResponse::BadRequest().json(body));
    }

    let outcome = check_plan(req.participants, req.calls);
    let note = (req.participants == 2).then(|| TWO_PERSON_NOTE.to_string());
    Ok(HttpResponse::Ok().json(FeasibilityResponse {
        possible: outcome.is_ok(),
        reason: outcome.err().map(|e| e.to_string()),
        note,
        max_per_person: max_per_person(req.participants),
    }))
}

// Generation endpoint
async fn generate(
    req: web::Json<AssignRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let participants = match parse_participants(&req.names) {
        Ok(participants) => participants,
        Err(e) => {
            let body = error_json(format!("Could not read names: {}", e));
            return Ok(HttpResponse::BadRequest().json(body));
        }
    };

    if participants.len() > state.max_participants {
        let body = too_many(participants.len(), state.max_participants);
        return Ok(HttpResponse::BadRequest().json(body));
    }

    match plan(&participants, req.calls) {
        Ok(assignment) => {
            let response = AssignResponse {
                success: true,
                per_person: assignment.per_person,
                assignments: assignment.calls.clone(),
                note: assignment.note.clone(),
                report: assignment.report(),
            };

            let mut last = state
                .last_assignment
                .lock()
                .map_err(|_| actix_web::error::ErrorInternalServerError("state lock poisoned"))?;
            *last = Some(assignment);

            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(error_json(e.to_string()))),
    }
}

// Plain text export of the last assignment
async fn get_report(state: web::Data<AppState>) -> Result<HttpResponse> {
    let last = state
        .last_assignment
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("state lock poisoned"))?;

    if let Some(ref assignment) = *last {
        Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(assignment.report()))
    } else {
        let body = serde_json::json!({"error": "No assignment generated yet"});
        Ok(HttpResponse::NotFound().json(body))
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/feasibility", web::post().to(feasibility))
        .route("/api/assign", web::post().to(generate))
        .route("/api/report", web::get().to(get_report));
}

pub async fn start_server(settings: Settings) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        last_assignment: Mutex::new(None),
        max_participants: settings.max_participants,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((settings.bind.as_str(), settings.port))?
    .run()
    .await
}
