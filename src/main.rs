use std::sync::Arc;

use media_gateway::config::AppConfig;
use media_gateway::routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let config = Arc::new(AppConfig::from_env());
    if let Err(missing) = config.credentials() {
        tracing::warn!(
            ?missing,
            "Cloudinary credentials not fully configured, /api/images will return errors"
        );
    }

    let port = config.port;
    let routes = routes::gateway(config);

    tracing::info!("media gateway running on http://127.0.0.1:{}", port);
    warp::serve(routes).run(([127, 0, 0, 1], port)).await;
}
