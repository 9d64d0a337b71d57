use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use colored::*;
use gemini_photo_edit::{Config, DataUrl, FilterPreset, Hotspot, ImageResource, PhotoEditor};

#[derive(Debug, Parser)]
#[command(
    name = "gemini-photo-edit",
    version,
    about = "Edit photos with the Gemini image model"
)]
struct Cli {
    /// Configuration file to use instead of ~/.gemini-photo-edit/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Model identifier, overriding the configured one
    #[arg(long, global = true)]
    model: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Edit the area around a point of the image
    Edit {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        x: u32,
        #[arg(long)]
        y: u32,
        #[arg(long)]
        output: PathBuf,
    },
    /// Apply a filter to the whole image
    #[command(group(ArgGroup::new("style").required(true).args(["prompt", "preset"])))]
    Filter {
        #[arg(long)]
        image: PathBuf,
        /// Describe the filter in your own words
        #[arg(long)]
        prompt: Option<String>,
        /// One of: synthwave, anime, lomo, hologram
        #[arg(long)]
        preset: Option<FilterPreset>,
        #[arg(long)]
        output: PathBuf,
    },
    /// Replace the footer logo of an image with another logo
    SwapLogo {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        logo: PathBuf,
        /// Run the synthwave filter on the swapped image
        #[arg(long)]
        then_synthwave: bool,
        #[arg(long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{} {err:#}", "❌ Error:".bright_red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let editor = PhotoEditor::from_config(&config);

    let (result, output) = match cli.command {
        Command::Edit {
            image,
            prompt,
            x,
            y,
            output,
        } => {
            let image = ImageResource::from_path(image);
            let result = editor.edit_image(&image, &prompt, Hotspot::new(x, y)).await;
            (result, output)
        }
        Command::Filter {
            image,
            prompt,
            preset,
            output,
        } => {
            let image = ImageResource::from_path(image);
            let result = match (preset, prompt) {
                (Some(preset), _) => editor.apply_filter_preset(&image, preset).await,
                (None, Some(prompt)) => editor.apply_filter(&image, &prompt).await,
                (None, None) => anyhow::bail!("either --prompt or --preset is required"),
            };
            (result, output)
        }
        Command::SwapLogo {
            image,
            logo,
            then_synthwave,
            output,
        } => {
            let image = ImageResource::from_path(image);
            let logo = ImageResource::from_path(logo);
            let swapped = editor.swap_logo(&image, &logo).await?;
            let result = if then_synthwave {
                let swapped = ImageResource::from_data_url(&swapped.to_string())?;
                editor
                    .apply_filter_preset(&swapped, FilterPreset::Synthwave)
                    .await
            } else {
                Ok(swapped)
            };
            (result, output)
        }
    };

    let image = result?;
    write_image(&image, &output).await?;
    println!(
        "{} {} ({})",
        "✨ Saved".bright_green().bold(),
        output.display(),
        image.mime_type().cyan()
    );
    Ok(())
}

async fn write_image(image: &DataUrl, output: &Path) -> Result<()> {
    let bytes = image.decode()?;
    tokio::fs::write(output, bytes)
        .await
        .with_context(|| format!("failed to write {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_a_preset_instead_of_a_prompt() {
        let cli = Cli::try_parse_from([
            "gemini-photo-edit",
            "filter",
            "--image",
            "in.png",
            "--preset",
            "lomo",
            "--output",
            "out.png",
        ])
        .unwrap();

        match cli.command {
            Command::Filter { preset, prompt, .. } => {
                assert_eq!(preset, Some(FilterPreset::Lomo));
                assert_eq!(prompt, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn filter_needs_exactly_one_of_prompt_or_preset() {
        let base = ["gemini-photo-edit", "filter", "--image", "in.png", "--output", "out.png"];
        assert!(Cli::try_parse_from(base).is_err());

        let both = base
            .into_iter()
            .chain(["--prompt", "noir", "--preset", "anime"]);
        assert!(Cli::try_parse_from(both).is_err());

        assert!(Cli::try_parse_from(base.into_iter().chain(["--preset", "sepia"])).is_err());
    }

    #[test]
    fn swap_logo_synthwave_flag() {
        let cli = Cli::try_parse_from([
            "gemini-photo-edit",
            "swap-logo",
            "--image",
            "in.jpg",
            "--logo",
            "logo.png",
            "--then-synthwave",
            "--output",
            "out.png",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::SwapLogo {
                then_synthwave: true,
                ..
            }
        ));
    }
}
