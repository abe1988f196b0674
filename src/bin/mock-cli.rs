use std::time::Instant;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "mock-cli")]
#[command(about = "Probe a running mock API server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the sample user
    User,
    /// Post a JSON body and print the echo
    Echo {
        /// JSON document to send
        #[arg(short, long, default_value = "{}")]
        body: String,
    },
    /// Hit the route that always answers 404
    NotFound,
    /// Hit the route that always answers 401
    Unauthorized,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::User => client.get(format!("{}/api/user", base)),
        Commands::Echo { body } => {
            let json: Value = serde_json::from_str(&body)?;
            client.post(format!("{}/api/user", base)).json(&json)
        }
        Commands::NotFound => client.get(format!("{}/api/always/404", base)),
        Commands::Unauthorized => client.get(format!("{}/api/always/401", base)),
    };

    let start = Instant::now();
    let res = request.send().await?;
    let elapsed = start.elapsed();

    print_response(res, elapsed.as_millis()).await
}

async fn print_response(
    res: reqwest::Response,
    elapsed_ms: u128,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Status: {} ({} ms)", res.status(), elapsed_ms);

    let text = res.text().await?;
    if text.is_empty() {
        println!("(empty body)");
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
