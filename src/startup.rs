use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    backend_client::BackendClient,
    configuration::Settings,
    routes::{health_check, landing, register, stylesheet, switch_tab},
};

/// A running application
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server serving the landing page. The behavior of the app is
    /// configured through the `settings` argument.
    pub async fn build(settings: Settings) -> std::io::Result<Self> {
        let backend_client = settings.backend.client().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid backend base URL: {}", err),
            )
        })?;
        tracing::info!(
            registration_url = %backend_client.registration_url(),
            "Forwarding registrations"
        );

        let app_config = settings.application;
        let app_address = format!("{}:{}", &app_config.host, app_config.port);
        let listener = TcpListener::bind(app_address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, backend_client)?;
        Ok(Self { port, server })
    }

    /// The port that the app is listening on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listen and handle requests until we receive a stop signal
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Starts a server, listening on `listener`, running in the background and returns it
fn run(listener: TcpListener, backend_client: BackendClient) -> std::io::Result<Server> {
    let backend_client = web::Data::new(backend_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(landing)
            .service(switch_tab)
            .service(register)
            .service(stylesheet)
            .app_data(backend_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
