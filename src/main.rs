use anyhow::Context;
use std::sync::Arc;
use weather_chat::{
    api::{ChatService, HttpChatService},
    config::load_config,
    logging::init_logging,
    ui::run_ui,
    App, ChatView,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let _logger = init_logging(&config).context("Failed to start logger")?;

    log::info!("Starting weather-chat against {}", config.service_url);

    let service: Arc<dyn ChatService> = Arc::new(HttpChatService::new(&config.service_url));
    let app = App::new(ChatView::new());

    run_ui(app, service)
        .await
        .context("Terminal UI exited with an error")?;

    log::info!("Shutting down");
    Ok(())
}
