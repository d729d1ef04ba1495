#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::{establish_connection_pool, get_connection, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::people::list_people;
    use crate::services::seed::seed_demo_people;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        {
            let mut conn = get_connection(&pool).map_err(|e| {
                std::io::Error::other(format!("Failed to get database connection: {e}"))
            })?;
            run_migrations(&mut conn)
                .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
        }

        let repo = DieselRepository::new(pool);

        if server_config.seed_demo_data {
            let created = seed_demo_people(&repo)
                .map_err(|e| std::io::Error::other(format!("Failed to seed demo data: {e}")))?;
            log::info!("Seeded {created} demo people");
        }

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on {}:{}",
            server_config.address,
            server_config.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(list_people)
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
