use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

use oxyreader::core::DEFAULT_ENDPOINT;
use oxyreader::{
    Credentials, Document, OxylabsReader, OxylabsWebReader, Payload, Reader, ReaderConfig,
    ReaderResult,
};

/// Load documents from the Oxylabs realtime scraping API.
///
/// Credentials are read from OXYLABS_USERNAME and OXYLABS_PASSWORD.
#[derive(Parser)]
#[command(name = "oxyreader")]
#[command(version)]
struct Cli {
    /// JSON object forwarded as the request body
    payload: String,

    /// Use the web reader (payload must contain `url`)
    #[arg(long, default_value_t = false)]
    web: bool,

    /// Use the blocking transport instead of the async one
    #[arg(long, default_value_t = false)]
    blocking: bool,

    /// API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 100)]
    timeout: u64,
}

impl Cli {
    fn reader(&self) -> ReaderResult<Box<dyn Reader>> {
        let credentials = Credentials::from_env()?;
        let config = ReaderConfig::default()
            .with_endpoint(&self.endpoint)?
            .with_timeout(Duration::from_secs(self.timeout));

        Ok(if self.web {
            Box::new(OxylabsWebReader::from_credentials(credentials).with_config(config))
        } else {
            Box::new(OxylabsReader::from_credentials(credentials).with_config(config))
        })
    }

    async fn run(self) -> ReaderResult<Vec<Document>> {
        let payload: Payload = serde_json::from_str(&self.payload)?;
        let reader = self.reader()?;

        if self.blocking {
            tokio::task::spawn_blocking(move || reader.load_data(&payload))
                .await?
        } else {
            reader.aload_data(&payload).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.run().await {
        Ok(docs) => {
            for doc in docs {
                println!("{}", doc.text);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
