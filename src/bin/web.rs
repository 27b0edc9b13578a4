//! Single binary web server: plans bracket views from posted tournament data.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).
//!
//! Stateless: every request carries the whole dataset and nothing is stored.

use actix_web::{
    get, post,
    web::{Json, JsonConfig},
    App, HttpResponse, HttpServer, Responder,
};
use bracket_view::{ranking_to_csv, Lang, RenderSession, StageBody, TournamentData, ViewerConfig};
use serde::Deserialize;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Request body shared by every planning endpoint.
#[derive(Deserialize)]
struct ViewBody {
    data: TournamentData,
    #[serde(default)]
    config: ViewerConfig,
    #[serde(default)]
    lang: Lang,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-view",
    })
}

/// Plan every stage. On a stage error, responds 422 with the stages planned before it.
#[post("/api/render")]
async fn api_render(body: Json<ViewBody>) -> HttpResponse {
    let ViewBody { data, config, lang } = body.into_inner();
    let mut session = RenderSession::new(config, lang);
    match session.render(&data) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "stages": session.stages(),
            "highlights": session.highlights(),
        })),
        Err(e) => {
            log::warn!("Render failed after {} stage(s): {}", session.stages().len(), e);
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": e.to_string(),
                "stages": session.stages(),
            }))
        }
    }
}

/// Ranking tables of every round-robin group, one CSV block per group.
#[post("/api/ranking.csv")]
async fn api_ranking_csv(body: Json<ViewBody>) -> HttpResponse {
    let ViewBody { data, config, lang } = body.into_inner();
    let mut session = RenderSession::new(config, lang);
    if let Err(e) = session.render(&data) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }

    let mut out = String::new();
    for stage in session.stages() {
        let StageBody::RoundRobin { groups } = &stage.body else {
            continue;
        };
        for group in groups {
            match ranking_to_csv(&group.ranking, &data.participants, session.lang()) {
                Ok(csv) => {
                    out.push_str(&format!("# {} - {}\n", stage.name, group.title));
                    out.push_str(&csv);
                    out.push('\n');
                }
                Err(e) => {
                    return HttpResponse::InternalServerError()
                        .json(serde_json::json!({ "error": e.to_string() }))
                }
            }
        }
    }
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .body(out)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .app_data(JsonConfig::default().limit(4 * 1024 * 1024))
            .service(api_health)
            .service(api_render)
            .service(api_ranking_csv)
    })
    .bind(bind)?
    .run()
    .await
}
