use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8081)]
    pub port: u16,

    /// Sqlite file backing the local round store
    #[arg(short = 'd', long, value_name = "PATH", default_value = "rounds.db")]
    pub db_path: String,

    /// Base URL of the remote rounds API; when set, the API is tried first
    /// and the local store is the fallback
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,
}
