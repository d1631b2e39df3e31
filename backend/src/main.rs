mod config;
mod job_controller;
mod services;

use crate::config::Config;
use crate::job_controller::state::JobsState;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // Initialize job controller state
    let (jobs_state, rx) = JobsState::new(config.job_channel_capacity, config.job_ttl());

    // Start job updater task
    let updater_state = jobs_state.clone();
    tokio::spawn(async move {
        job_controller::state::start_job_updater(updater_state, rx).await;
    });

    info!("Contact import service running at {}", config.url());

    let bind = (config.host.clone(), config.port);
    let json_limit = config.max_upload_bytes;
    let config = web::Data::new(config);
    let jobs_state = web::Data::new(jobs_state);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(jobs_state.clone())
            .app_data(config.clone())
            .service(services::contacts::configure_routes())
    })
    .bind(bind)?
    .run()
    .await
}
