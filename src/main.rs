use actix_files::Files;
use actix_web::web::{self, Data};
use actix_web::{App, HttpResponse, HttpServer, Responder};
use std::collections::HashMap;
use std::sync::Arc;

use fairway_score::args;
use fairway_score::controller::score::{leaderboard, record_score, scores};
use fairway_score::storage::{FallbackRoundStore, RemoteRoundStore, RoundStore, SqliteRoundStore};
use fairway_score::view::index::render_index_template;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = args::args_checks();

    let local = SqliteRoundStore::open(&args.db_path)?;
    let store: Arc<dyn RoundStore> = match &args.api_base_url {
        Some(base_url) => Arc::new(FallbackRoundStore::new(
            RemoteRoundStore::new(base_url.clone()),
            local,
        )),
        None => Arc::new(local),
    };
    let store_data: Data<dyn RoundStore> = Data::from(store);

    tracing::info!(bind = %args.bind, port = args.port, db_path = %args.db_path, "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .route("/", web::get().to(index))
            .route("/scores", web::get().to(scores))
            .route("/scores/record", web::post().to(record_score))
            .route("/leaderboard", web::post().to(leaderboard))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

async fn index(query: web::Query<HashMap<String, String>>) -> impl Responder {
    let title = query
        .get("title")
        .filter(|t| !t.trim().is_empty())
        .map_or("Scoreboard", String::as_str);
    let markup = render_index_template(title);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
