use std::net::SocketAddr;

use clap::Parser;
use contact_form::submitter::SubmitterConfig;
use mongodb_connector::config::StoreConfig;

#[derive(Parser, Debug)]
#[command(about = "Serves the contact page and stores its submissions")]
pub(crate) struct Args {
    /// Address the HTTP server binds to
    #[arg(long, env = "CONTACT_BIND_ADDRESS", default_value = "0.0.0.0:8080")]
    pub(crate) bind: SocketAddr,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "CONTACT_ALLOWED_ORIGIN", default_value = "http://localhost:3000")]
    pub(crate) allowed_origin: String,

    /// Collection submissions are written to
    #[arg(long, env = "CONTACT_COLLECTION", default_value = common::constants::COLLECTION_MESSAGES_NAME)]
    pub(crate) collection: String,
}

impl Args {
    pub(crate) fn store_config(&self) -> StoreConfig {
        StoreConfig {
            collection: self.collection.clone(),
            ..StoreConfig::from_env()
        }
    }

    pub(crate) fn submitter_config(&self) -> SubmitterConfig {
        SubmitterConfig {
            collection: self.collection.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["api"]).unwrap();

        assert_eq!(args.bind.to_string(), "0.0.0.0:8080");
        assert_eq!(args.allowed_origin, "http://localhost:3000");
        assert_eq!(args.collection, "messages");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "api",
            "--bind",
            "127.0.0.1:9000",
            "--allowed-origin",
            "https://example.com",
            "--collection",
            "inbox",
        ])
        .unwrap();

        assert_eq!(args.bind.to_string(), "127.0.0.1:9000");
        assert_eq!(args.allowed_origin, "https://example.com");
        assert_eq!(args.collection, "inbox");
    }

    #[test]
    fn store_and_submitter_share_collection() {
        let args = Args::try_parse_from(["api", "--collection", "inbox"]).unwrap();

        assert_eq!(args.store_config().collection, "inbox");
        assert_eq!(args.submitter_config().collection, "inbox");
    }
}
