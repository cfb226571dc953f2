mod config;
mod server;

use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

use crate::config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let site = SiteConfig::from_env()?;
    log::info!(
        "serving {} on http://{}:{}",
        site.dist_dir.display(),
        site.host,
        site.port
    );

    let bind = (site.host.clone(), site.port);
    HttpServer::new(move || {
        let site = site.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| server::routes(cfg, &site))
    })
    .bind(bind.clone())
    .with_context(|| format!("binding {}:{}", bind.0, bind.1))?
    .run()
    .await?;

    Ok(())
}
