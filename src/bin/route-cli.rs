use clap::{Parser, Subcommand};
use serde_json::Value;

use admin_nav::routing::links::{edit_link, list_link, new_link};
use admin_nav::routing::{Segment, SegmentCodec};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Encode, decode and resolve encrypted admin routes", long_about = None)]
struct Cli {
    /// Base URL of a running navigation service.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token for a route word
    Encode { word: Segment },
    /// Print the route word behind a token
    Decode { token: String },
    /// Build an admin link
    Link {
        master: Segment,
        module: Segment,
        /// Link to the create form
        #[arg(long, conflicts_with = "edit")]
        new: bool,
        /// Link to the edit form of a record
        #[arg(long)]
        edit: Option<String>,
    },
    /// Ask the service how it resolves a path
    Resolve { path: String },
    /// Check service status
    Status,
    /// Print the sidebar menu
    Sidebar,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let codec = SegmentCodec::global();

    match cli.command {
        Commands::Encode { word } => println!("{}", codec.encode(word)),
        Commands::Decode { token } => match codec.decode(&token) {
            Some(word) => println!("{word}"),
            None => {
                eprintln!("Error: {token:?} is not a known route token");
                std::process::exit(1);
            }
        },
        Commands::Link { master, module, new, edit } => {
            let link = match (edit, new) {
                (Some(id), _) => edit_link(codec, master, module, &id),
                (None, true) => new_link(codec, master, module),
                (None, false) => list_link(codec, master, module),
            };
            println!("{link}");
        }
        Commands::Resolve { path } => {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()?;
            let path = if path.starts_with('/') { path } else { format!("/{path}") };
            let res = client.get(format!("{}{}", cli.url, path)).send().await?;
            if res.status().is_redirection() {
                let location = res
                    .headers()
                    .get(reqwest::header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("?");
                println!("redirect home → {location}");
            } else {
                print_response(res).await?;
            }
        }
        Commands::Status => {
            let res = reqwest::get(format!("{}/_routes/status", cli.url)).await?;
            print_response(res).await?;
        }
        Commands::Sidebar => {
            let res = reqwest::get(format!("{}/_routes/sidebar", cli.url)).await?;
            print_response(res).await?;
        }
    }

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
