use std::env;

use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

use blog_client::blog::filter::{BLOG_CATEGORIES, CATEGORY_ALL};
use blog_client::utils::helpers::estimate_reading_time;
use blog_client::{ApiClient, BlogListView, BlogService, SiteConfig};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let query = env::args().nth(1).unwrap_or_default();
    let mut category = env::args().nth(2).unwrap_or_else(|| CATEGORY_ALL.to_string());
    if !BLOG_CATEGORIES.contains(&category.as_str()) {
        warn!("Unknown category {:?}, showing all articles", category);
        category = CATEGORY_ALL.to_string();
    }

    info!("Fetching blogs for company {}", config.company);

    let client = ApiClient::new(&config);
    let mut view = BlogListView::new(BlogService::new(&client));
    view.load().await;

    if !query.is_empty() {
        view.set_input(&query);
        view.apply_next_settled().await;
    }
    view.select_category(&category);

    let visible = view.visible();
    if visible.is_empty() {
        println!("{}", view.empty_state_message());
    } else {
        for blog in &visible {
            println!(
                "[{}] {} ({} min read)",
                blog.category,
                blog.title,
                estimate_reading_time(&blog.description)
            );
        }
    }

    view.teardown();
}
