use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "calc-cli")]
#[command(about = "Client CLI for the calc-api service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(short, long, default_value = "00000000")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers
    Add { number1: i64, number2: i64 },
    /// Subtract the second integer from the first
    Subtract { number1: i64, number2: i64 },
    /// Multiply two integers
    Multiply { number1: i64, number2: i64 },
    /// Divide the first integer by the second
    Divide { number1: i64, number2: i64 },
}

impl Commands {
    fn path_and_operands(&self) -> (&'static str, i64, i64) {
        match *self {
            Commands::Add { number1, number2 } => ("/add/", number1, number2),
            Commands::Subtract { number1, number2 } => ("/subtract/", number1, number2),
            Commands::Multiply { number1, number2 } => ("/multiply/", number1, number2),
            Commands::Divide { number1, number2 } => ("/divide/", number1, number2),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert("X-Session-Token", HeaderValue::from_str(&cli.token)?);

    let (path, number1, number2) = cli.command.path_and_operands();
    let res = client
        .post(format!("{}{}", cli.url, path))
        .headers(headers)
        .json(&json!({ "number1": number1, "number2": number2 }))
        .send()
        .await?;

    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
