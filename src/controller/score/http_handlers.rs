use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

use super::data_service::{get_data_for_scores_page, record_score_and_save};
use crate::model::{Player, TournamentPoints};
use crate::score::aggregate_leaderboard;
use crate::storage::{RoundStore, StorageError};
use crate::view::score::{render_leaderboard, render_scores_template};

// Helper function to get a query parameter with a default value
fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(|s| s.as_str()).unwrap_or("")
}

fn wants_json(query: &HashMap<String, String>) -> bool {
    match get_param_str(query, "json") {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false), // Default to false
    }
}

fn storage_error_response(e: &StorageError) -> HttpResponse {
    match e {
        StorageError::NotFound(_) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
        _ => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn scores(
    query: web::Query<HashMap<String, String>>,
    store: Data<dyn RoundStore>,
) -> impl Responder {
    let round_id = get_param_str(&query, "round").trim();
    if round_id.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "round parameter is required"}));
    }

    match get_data_for_scores_page(round_id, store.get_ref()).await {
        Ok(data) => {
            if wants_json(&query) {
                HttpResponse::Ok().json(data)
            } else {
                let markup = render_scores_template(&data);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => storage_error_response(&e),
    }
}

pub async fn record_score(
    query: web::Query<HashMap<String, String>>,
    store: Data<dyn RoundStore>,
) -> impl Responder {
    let round_id = get_param_str(&query, "round").trim().to_string();
    if round_id.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "round parameter is required"}));
    }

    let player_id = get_param_str(&query, "player").trim().to_string();
    if player_id.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "player parameter is required"}));
    }

    let hole_number: i32 = match get_param_str(&query, "hole").trim().parse() {
        Ok(h) if h >= 1 => h,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "hole must be a positive integer"}));
        }
    };

    let strokes: i32 = match get_param_str(&query, "strokes").trim().parse() {
        Ok(s) if s >= 1 => s,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "strokes must be a positive integer"}));
        }
    };

    match record_score_and_save(&round_id, &player_id, hole_number, strokes, store.get_ref()).await
    {
        Ok(data) => {
            if wants_json(&query) {
                HttpResponse::Ok().json(data)
            } else {
                let markup = render_scores_template(&data);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => storage_error_response(&e),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaderboardRequest {
    pub players: Vec<Player>,
    pub tournaments: Vec<TournamentPoints>,
}

/// Pure computation endpoint: per-tournament points in, ranked standings
/// out. Callers keep their own tournament storage.
pub async fn leaderboard(
    query: web::Query<HashMap<String, String>>,
    body: web::Json<LeaderboardRequest>,
) -> impl Responder {
    let entries = aggregate_leaderboard(&body.tournaments, &body.players);
    if get_param_str(&query, "html") == "1" {
        let markup = render_leaderboard(&entries);
        HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string())
    } else {
        HttpResponse::Ok().json(entries)
    }
}
