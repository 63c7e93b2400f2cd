use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::{ContactSettings, Configuration};
use crate::mail::{EmailClient, EmailSender};
use crate::routes::contact::json_config;
use crate::routes::{contact, health_check};

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting service on address: {}:{}",
            configuration.app.host,
            port
        );

        let email_client = EmailClient::new(configuration.email_client);
        if !email_client.is_configured() {
            tracing::warn!("No email provider token configured, contact submissions will fail");
        }

        let server = run(listener, Arc::new(email_client), configuration.contact)?;

        Ok(Self {
            port,
            address: configuration.app.host,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn address(&self) -> String {
        self.address.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: Arc<dyn EmailSender>,
    contact_settings: ContactSettings,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::from(email_client);
    let contact_settings = web::Data::new(contact_settings);

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .service(
                web::resource("/api/contact")
                    .app_data(json_config())
                    .route(web::post().to(contact)),
            )
            .app_data(email_client.clone())
            .app_data(contact_settings.clone())
    })
    .listen(listener)?
    .run())
}
