// src/main.rs

use log::info;
use quote_server::config::Config;
use quote_server::run_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logger();

    let config = Config::load();
    info!("Starting cotacoes server at http://{}", config.bind_address);

    run_server(config).await
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
