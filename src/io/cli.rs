//! Command-line interface and run orchestration

use crate::compose::quadrant::QuadrantSet;
use crate::compose::recipe::enumerate_recipes;
use crate::io::configuration::{CANONICAL_SIZE, DOWNSCALE_SIZE, FALLBACK_LABEL_A, FALLBACK_LABEL_B};
use crate::io::error::{CompositionError, Result};
use crate::io::image::{downscale, load_canonical, save_png};
use crate::io::naming::sanitize_label;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quadtile")]
#[command(
    author,
    version,
    about = "Recombine quadrants of two square textures into twelve composites"
)]
/// Command-line arguments for the composite generation tool
pub struct Cli {
    /// First source image (any format the image crate can decode)
    #[arg(value_name = "IMAGE_A")]
    pub image_a: PathBuf,

    /// Second source image
    #[arg(value_name = "IMAGE_B")]
    pub image_b: PathBuf,

    /// Directory where composites are written, created if absent
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Label substituted for the first image in generated filenames
    #[arg(long, value_name = "NAME")]
    pub name_a: Option<String>,

    /// Label substituted for the second image in generated filenames
    #[arg(long, value_name = "NAME")]
    pub name_b: Option<String>,

    /// Downscale composites to 100x100 on save
    #[arg(short, long)]
    pub downscale: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a single generation run from source paths to written
/// composites
pub struct CompositionRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CompositionRunner {
    /// Create a new runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the full pipeline: load, split, compose, and write all composites
    ///
    /// The pipeline is linear and aborts on the first failure. Output files
    /// written before a failure are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if an input path is missing, a source image cannot
    /// be decoded, the output directory cannot be created, or a composite
    /// cannot be written.
    pub fn run(&self) -> Result<()> {
        require_input(&self.cli.image_a)?;
        require_input(&self.cli.image_b)?;

        let name_a = sanitize_label(
            self.cli.name_a.as_deref().unwrap_or_default(),
            FALLBACK_LABEL_A,
        );
        let name_b = sanitize_label(
            self.cli.name_b.as_deref().unwrap_or_default(),
            FALLBACK_LABEL_B,
        );

        let set_a = QuadrantSet::split(&load_canonical(&self.cli.image_a)?);
        let set_b = QuadrantSet::split(&load_canonical(&self.cli.image_b)?);

        std::fs::create_dir_all(&self.cli.output).map_err(|source| {
            CompositionError::FileSystem {
                path: self.cli.output.clone(),
                operation: "create output directory",
                source,
            }
        })?;

        let recipes = enumerate_recipes(&name_a, &name_b);
        if let Some(ref pm) = self.progress_manager {
            pm.initialize(recipes.len());
        }

        let mut written = 0_usize;
        for recipe in &recipes {
            if let Some(ref pm) = self.progress_manager {
                pm.start_output(recipe.stem());
            }

            let composite = recipe.compose(CANONICAL_SIZE, CANONICAL_SIZE, &set_a, &set_b)?;
            let path = self.output_path(recipe.stem());
            if self.cli.downscale {
                save_png(&downscale(&composite), &path)?;
            } else {
                save_png(&composite, &path)?;
            }
            written += 1;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_output();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish(written, &self.cli.output);
        }

        Ok(())
    }

    fn output_path(&self, stem: &str) -> PathBuf {
        let file_name = if self.cli.downscale {
            format!("{DOWNSCALE_SIZE}x{DOWNSCALE_SIZE}-{stem}.png")
        } else {
            format!("{stem}.png")
        };

        self.cli.output.join(file_name)
    }
}

fn require_input(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(CompositionError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
