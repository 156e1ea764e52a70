use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{dal::company_db, domain::company::NewCompany};

#[derive(Serialize)]
struct InsertedCompany {
    id: i64,
}

#[post("")]
async fn add_company(pool: web::Data<SqlitePool>, body: web::Json<NewCompany>) -> HttpResponse {
    match company_db::insert_company(&body, &pool).await {
        Ok(id) => HttpResponse::Ok().json(InsertedCompany { id }),
        Err(e) => {
            log::error!("Failed to insert company into the local store: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("")]
async fn list_companies(pool: web::Data<SqlitePool>) -> HttpResponse {
    match company_db::get_companies(&pool).await {
        Ok(companies) => HttpResponse::Ok().json(companies),
        Err(e) => {
            log::error!("Failed to read companies from the local store: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
