use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self},
    App, HttpServer,
};
use sqlx::SqlitePool;

use crate::{
    routes::{company_route, kununu_route},
    services::KununuClient,
};

pub fn run(
    listener: TcpListener,
    db_pool: SqlitePool,
    kununu_client: KununuClient,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let kununu_client = web::Data::new(kununu_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(
                web::scope("/kununu")
                    .service(kununu_route::keywords)
                    .service(kununu_route::pagination)
                    .service(kununu_route::page),
            )
            .service(
                web::scope("/companies")
                    .service(company_route::add_company)
                    .service(company_route::list_companies),
            )
            .app_data(db_pool.clone())
            .app_data(kununu_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
