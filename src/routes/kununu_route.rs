use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::services::{KununuClient, KununuError};

#[derive(Deserialize)]
struct PaginationQuery {
    keywords: Option<String>,
}

#[derive(Deserialize)]
struct PageQuery {
    keywords: Option<String>,
    page: u32,
}

#[derive(Serialize)]
struct PaginationBody {
    num_pages: u32,
}

/// The page-load entry point: fetch and shape the filter keyword lists.
#[get("/keywords")]
async fn keywords(client: web::Data<KununuClient>) -> HttpResponse {
    match client.fetch_keywords().await {
        Ok(keywords) => HttpResponse::Ok().json(keywords),
        Err(e) => fetch_failure(e),
    }
}

#[get("/pagination")]
async fn pagination(
    client: web::Data<KununuClient>,
    query: web::Query<PaginationQuery>,
) -> HttpResponse {
    let keyword_list = split_keywords(query.keywords.as_deref());

    match client.fetch_pagination(&keyword_list).await {
        Ok(num_pages) => HttpResponse::Ok().json(PaginationBody { num_pages }),
        Err(e) => fetch_failure(e),
    }
}

/// Passes the raw page payload through; mapping it onto company rows is
/// the caller's side of the boundary.
#[get("/page")]
async fn page(client: web::Data<KununuClient>, query: web::Query<PageQuery>) -> HttpResponse {
    let keyword_list = split_keywords(query.keywords.as_deref());

    match client.fetch_page(&keyword_list, query.page).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => fetch_failure(e),
    }
}

fn split_keywords(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

fn fetch_failure(e: KununuError) -> HttpResponse {
    log::error!("Kununu search request failed: {:?}", e);

    match e {
        KununuError::Network(_) => HttpResponse::BadGateway().finish(),
        KununuError::Parse(_) | KununuError::SchemaMismatch(_) => {
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::split_keywords;

    #[test]
    fn keywords_split_in_input_order() {
        assert_eq!(
            split_keywords(Some("industry-tech, country-de")),
            vec!["industry-tech".to_string(), "country-de".to_string()]
        );
    }

    #[test]
    fn absent_or_empty_keywords_mean_no_filters() {
        assert!(split_keywords(None).is_empty());
        assert!(split_keywords(Some("")).is_empty());
        assert!(split_keywords(Some(",,")).is_empty());
    }
}
