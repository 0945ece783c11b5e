use anyhow::Context;

/// The configuration parameters for the application.
///
/// Resolved once at startup from environment variables and passed
/// explicitly into each component's constructor; nothing reads the
/// environment after boot.
pub struct Config {
    /// The connection URL for the Postgres database this application
    /// should use.
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config { database_url, port })
    }
}
