use std::path::PathBuf;

#[derive(clap::Parser)]
#[command(about = "Portfolio website server")]
pub struct Config {
    /// Port to listen on, on all interfaces.
    #[arg(long, env, default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env)]
    pub database_url: String,

    /// Directory served under `/images`.
    #[arg(long, env, default_value = "images")]
    pub images_dir: PathBuf,

    /// Where the page renderer fetches the API from.
    /// Defaults to this server's own `/api`.
    #[arg(long, env)]
    api_base_url: Option<String>,
}

impl Config {
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.clone(),
            None => format!("http://127.0.0.1:{}/api", self.port),
        }
    }
}
