use fetchitt::configuration::get_configuration;
use fetchitt::startup::Application;
use fetchitt::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("fetchitt".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");
    tracing::info!(
        backend = %configuration.backend.base_url,
        "Starting the Fetchitt landing page"
    );

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await
}
