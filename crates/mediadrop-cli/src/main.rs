//! Mediadrop CLI: upload, delete and resolve files through the configured provider.
//!
//! Configuration comes from the environment (or `.env`): STORAGE_PROVIDER,
//! LOCAL_UPLOAD_BASE_PATH, LOCAL_UPLOAD_PATH, STORAGE_SERVER_URL, STORAGE_PORT.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediadrop_core::{ResourceType, StorageConfig, UploadOptions, UrlOptions};
use mediadrop_storage::create_provider;
use serde::Serialize;

use mediadrop_cli::{guess_mimetype, init_tracing};

#[derive(Parser)]
#[command(name = "mediadrop", about = "Mediadrop upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// Folder to store the file under
        #[arg(long, default_value = "general")]
        folder: String,
        /// Mimetype (guessed from the extension if omitted)
        #[arg(long)]
        mimetype: Option<String>,
        /// Original filename (defaults to the file's name)
        #[arg(long)]
        filename: Option<String>,
    },
    /// Delete a stored file by public id
    Delete {
        /// Public id returned by upload, e.g. avatars/name-123-abcdef0123456789.webp
        public_id: String,
        /// Resource type: image, video, raw
        #[arg(long, default_value = "image")]
        resource_type: ResourceType,
    },
    /// Print the public URL of a stored file
    Url {
        /// Public id returned by upload
        public_id: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = StorageConfig::from_env().context("Failed to load storage configuration")?;
    config.validate()?;
    let provider = create_provider(&config)
        .await
        .context("Failed to initialize upload provider")?;

    match cli.command {
        Commands::Upload {
            file,
            folder,
            mimetype,
            filename,
        } => {
            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let mimetype = mimetype.unwrap_or_else(|| guess_mimetype(&file).to_string());
            let filename = filename.or_else(|| {
                file.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            });

            let mut options = UploadOptions::new(mimetype).with_folder(folder);
            options.filename = filename;

            let result = provider.upload(data, &options).await?;
            print_json(&result)?;
        }
        Commands::Delete {
            public_id,
            resource_type,
        } => {
            let outcome = provider.delete(&public_id, resource_type).await?;
            print_json(&serde_json::json!({
                "success": outcome.is_success(),
                "publicId": public_id,
                "result": outcome,
            }))?;
        }
        Commands::Url { public_id } => {
            let url = provider.get_url(&public_id, &UrlOptions::default())?;
            print_json(&serde_json::json!({ "url": url }))?;
        }
    }

    Ok(())
}
