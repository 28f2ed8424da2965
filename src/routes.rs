use std::collections::HashMap;
use std::sync::Arc;

use warp::{Filter, Reply};

use crate::config::AppConfig;
use crate::handlers;
use crate::services;

// The whole dispatch table. OPTIONS short-circuits before any business logic;
// the terminal branch turns everything unmatched into a contextual 404.
pub fn gateway(config: Arc<AppConfig>) -> impl Filter<Extract = impl Reply> + Clone {
    let client = services::https_client();
    let with_config = warp::any().map(move || config.clone());
    let with_client = warp::any().map(move || client.clone());

    let preflight = warp::options().map(handlers::preflight);

    let images = warp::path!("api" / "images")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(with_config.clone())
        .and(with_client)
        .and_then(handlers::list_images);

    let emailjs_config = warp::path!("api" / "emailjs-config")
        .and(warp::get())
        .and(with_config.clone())
        .map(handlers::emailjs_config);

    let health = warp::path!("api" / "health")
        .and(with_config)
        .map(handlers::health);

    let not_found = warp::any()
        .and(warp::method())
        .and(warp::path::full())
        .and_then(handlers::reject_not_found);

    preflight
        .or(images)
        .or(emailjs_config)
        .or(health)
        .or(not_found)
        .recover(handlers::handle_rejection)
}
