//! Command-line interface for generating level layouts from background images

use crate::algorithm::difficulty::Tier;
use crate::algorithm::level::Level;
use crate::algorithm::placement::{LevelRequest, PlacementPlanner};
use crate::analysis::BackgroundImage;
use crate::io::configuration::{
    DEFAULT_LEVEL_COUNT, DEFAULT_START_LEVEL, OUTPUT_LEVEL_INFIX, PREVIEW_SUFFIX,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::{export_preview, load_background};
use crate::io::layout::export_layout;
use crate::io::progress::ProgressManager;
use crate::io::themes::theme_for_level;
use crate::math::seed::current_timestamp_ms;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "camoplace")]
#[command(
    author,
    version,
    about = "Generate hidden-object level layouts from background images"
)]
/// Command-line arguments for the level generator
pub struct Cli {
    /// Background image or directory of backgrounds to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// First level to generate
    #[arg(short, long, default_value_t = DEFAULT_START_LEVEL)]
    pub level: u32,

    /// Number of consecutive levels per background
    #[arg(short = 'n', long, default_value_t = DEFAULT_LEVEL_COUNT)]
    pub count: u32,

    /// Difficulty tier: easy, medium or hard
    #[arg(short, long, default_value = "easy")]
    pub difficulty: Tier,

    /// Clock reading in milliseconds; pins the seed for reproducible layouts
    #[arg(short, long)]
    pub timestamp: Option<u64>,

    /// Theme label recorded in the layout instead of the built-in rotation
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate levels whose layout file already exists
    #[arg(long)]
    pub no_skip: bool,

    /// Also write a PNG preview with object markers
    #[arg(short, long)]
    pub preview: bool,
}

impl Cli {
    /// Check if existing layouts should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject arguments the generator cannot honour
    ///
    /// # Errors
    ///
    /// Returns an error if the start level is 0, the level count is 0, or
    /// the level range overflows
    pub fn validate(&self) -> Result<()> {
        if self.level == 0 {
            return Err(invalid_parameter("level", &self.level, &"levels start at 1"));
        }
        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"at least one level must be generated",
            ));
        }
        if self.level.checked_add(self.count - 1).is_none() {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"level range exceeds u32",
            ));
        }
        Ok(())
    }

    /// Levels requested on the command line
    pub fn levels(&self) -> std::ops::RangeInclusive<u32> {
        self.level..=self.level.saturating_add(self.count.saturating_sub(1))
    }
}

/// Generates layouts for every background found at the CLI target
pub struct LevelBatch {
    cli: Cli,
    planner: PlacementPlanner,
    progress_manager: Option<ProgressManager>,
}

impl LevelBatch {
    /// Create a batch runner with the default variant catalog
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            planner: PlacementPlanner::default(),
            progress_manager,
        }
    }

    /// Generate layouts according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target discovery or writing
    /// any output fails
    pub async fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!(path = %self.cli.target.display(), "no backgrounds to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index).await?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"background must be a PNG or JPEG image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory entry")?.path();
                if is_supported(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    async fn process_file(&self, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path, self.cli.count);
        }

        let bytes: Arc<[u8]> = std::fs::read(input_path)
            .with_path(input_path, "read background")?
            .into();
        let preview_background = if self.cli.preview {
            Some(load_background(input_path)?)
        } else {
            None
        };

        for level_index in self.cli.levels() {
            let layout_path = Self::layout_path(input_path, level_index);
            if self.cli.skip_existing() && layout_path.exists() {
                info!(path = %layout_path.display(), "skipping, layout exists");
                continue;
            }

            let request = LevelRequest::new(
                level_index,
                self.cli.difficulty,
                BackgroundImage::Encoded(Arc::clone(&bytes)),
            )
            .with_theme(
                self.cli
                    .theme
                    .clone()
                    .unwrap_or_else(|| theme_for_level(level_index).to_string()),
            )
            .with_timestamp(self.cli.timestamp.unwrap_or_else(current_timestamp_ms));

            let level = self.planner.generate(request).await;
            Self::write_outputs(&level, &layout_path, preview_background.as_ref(), input_path)?;

            if let Some(ref pm) = self.progress_manager {
                pm.level_done(
                    index,
                    level.objects().len(),
                    level.header().requested_count,
                );
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn write_outputs(
        level: &Level,
        layout_path: &Path,
        preview_background: Option<&image::RgbImage>,
        input_path: &Path,
    ) -> Result<()> {
        export_layout(level, layout_path)?;
        info!(
            level = level.header().level,
            objects = level.objects().len(),
            seed = level.header().seed,
            path = %layout_path.display(),
            "layout written"
        );

        if let Some(background) = preview_background {
            let preview_path = Self::preview_path(input_path, level.header().level);
            export_preview(background, level, &preview_path)?;
        }
        Ok(())
    }

    fn output_stem(input_path: &Path, level: u32) -> String {
        let stem = input_path.file_stem().unwrap_or_default();
        format!("{}{OUTPUT_LEVEL_INFIX}{level}", stem.to_string_lossy())
    }

    /// Layout file written for `level` of `input_path`
    pub fn layout_path(input_path: &Path, level: u32) -> PathBuf {
        let name = format!("{}.json", Self::output_stem(input_path, level));
        input_path.with_file_name(name)
    }

    /// Preview file written for `level` of `input_path`
    pub fn preview_path(input_path: &Path, level: u32) -> PathBuf {
        let name = format!("{}{PREVIEW_SUFFIX}.png", Self::output_stem(input_path, level));
        input_path.with_file_name(name)
    }
}

fn is_supported(path: &Path) -> bool {
    let is_preview = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(PREVIEW_SUFFIX));
    !is_preview
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            })
}
