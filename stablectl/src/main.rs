use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value, json};

mod client;
mod output;

use client::{HorseClient, Identity};
use output::{OutputFormat, render};

/// Command-line client for the stable management API.
///
/// Identity:
/// - mock mode: `--org` / `--user` / `--role` become `x-org-id` / `x-user-id` / `x-role`
/// - jwt mode: `--token` is sent as `Authorization: Bearer <token>` (identity flags are ignored)
#[derive(Parser, Debug)]
#[command(name = "stablectl", version, about)]
struct Cli {
    /// API base URL
    #[arg(long, env = "STABLE_API_URL", default_value = "http://localhost:3000", global = true)]
    base_url: String,

    /// Organization id (x-org-id)
    #[arg(long, env = "STABLE_ORG_ID", global = true)]
    org: Option<String>,

    /// User id (x-user-id)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Role (x-role): admin | user
    #[arg(long, global = true)]
    role: Option<String>,

    /// Bearer access token
    #[arg(long, env = "STABLE_API_TOKEN", global = true)]
    token: Option<String>,

    /// Print the raw JSON envelope
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the organization's horses
    List,

    /// Show one horse
    Get { id: String },

    /// Register a horse
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        color: Option<String>,
    },

    /// Change some fields of a horse
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        age: Option<i32>,
        #[arg(long, conflicts_with = "clear_color")]
        color: Option<String>,
        /// Send `"color": null`
        #[arg(long, default_value_t = false)]
        clear_color: bool,
    },

    /// Remove a horse (and its records)
    Delete { id: String },
}

fn update_body(
    name: Option<String>,
    breed: Option<String>,
    age: Option<i32>,
    color: Option<String>,
    clear_color: bool,
) -> Value {
    let mut body = Map::new();
    if let Some(name) = name {
        body.insert("name".into(), json!(name));
    }
    if let Some(breed) = breed {
        body.insert("breed".into(), json!(breed));
    }
    if let Some(age) = age {
        body.insert("age".into(), json!(age));
    }
    if clear_color {
        body.insert("color".into(), Value::Null);
    } else if let Some(color) = color {
        body.insert("color".into(), json!(color));
    }
    Value::Object(body)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let client = HorseClient::new(
        &cli.base_url,
        Identity {
            org_id: cli.org,
            user_id: cli.user,
            role: cli.role,
            token: cli.token,
        },
    )?;

    let envelope = match cli.command {
        Command::List => client.list().await?,
        Command::Get { id } => client.get(&id).await?,
        Command::Create {
            name,
            breed,
            age,
            color,
        } => {
            let mut body = json!({"name": name, "breed": breed, "age": age});
            if let Some(color) = color {
                body["color"] = json!(color);
            }
            client.create(body).await?
        }
        Command::Update {
            id,
            name,
            breed,
            age,
            color,
            clear_color,
        } => {
            let body = update_body(name, breed, age, color, clear_color);
            if body.as_object().is_some_and(Map::is_empty) {
                bail!("nothing to update: pass at least one of --name, --breed, --age, --color, --clear-color");
            }
            client.update(&id, body).await?
        }
        Command::Delete { id } => client.delete(&id).await?,
    };

    println!("{}", render(format, &envelope)?);
    Ok(())
}
