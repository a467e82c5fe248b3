use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_UPLOAD_LIMIT: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "bookchat", about = "Book index browser and chat front-end")]
pub struct ServerConfig {
    /// Base URL of the search backend
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:8000")]
    pub backend_url: String,

    /// Address the web server listens on
    #[arg(long, env = "LEPTOS_SITE_ADDR", default_value = "0.0.0.0:3000")]
    pub site_addr: SocketAddr,

    /// Directory holding the compiled site assets
    #[arg(long, env = "LEPTOS_SITE_ROOT", default_value = "target/site")]
    pub site_root: String,

    /// Largest accepted upload body, in bytes
    #[arg(
        long = "upload-limit",
        env = "UPLOAD_LIMIT_BYTES",
        default_value_t = DEFAULT_UPLOAD_LIMIT
    )]
    pub upload_limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "bookchat",
            "--backend-url",
            "http://search.internal:9000",
            "--site-addr",
            "127.0.0.1:8080",
            "--upload-limit",
            "1024",
        ])
        .unwrap();

        assert_eq!(config.backend_url, "http://search.internal:9000");
        assert_eq!(config.site_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.upload_limit, 1024);
    }

    #[test]
    fn invalid_address_is_rejected() {
        let result = ServerConfig::try_parse_from(["bookchat", "--site-addr", "not-an-address"]);
        assert!(result.is_err());
    }
}
