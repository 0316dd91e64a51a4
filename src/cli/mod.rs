use clap::Parser;

use crate::connector::{ContainerConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "usersvc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Bind to 0.0.0.0 instead of --host, exposing the server on all network interfaces
    #[arg(long)]
    pub public: bool,

    /// Start with an empty store instead of the seed user
    #[arg(long)]
    pub no_seed: bool,
}

impl Cli {
    pub fn container_config(&self) -> ContainerConfig {
        ContainerConfig {
            seed: !self.no_seed,
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        let host = if self.public {
            "0.0.0.0".to_string()
        } else {
            self.host.clone()
        };

        ServerConfig {
            host,
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["usersvc"]);

        assert!(cli.container_config().seed);
        assert_eq!(cli.server_config().bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_public_and_no_seed() {
        let cli = Cli::parse_from(["usersvc", "--public", "--port", "9000", "--no-seed"]);

        assert!(!cli.container_config().seed);
        assert_eq!(cli.server_config().bind_addr(), "0.0.0.0:9000");
    }
}
