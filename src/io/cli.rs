//! Command-line interface for batch word-cloud generation from text files

use crate::io::configuration::{
    CLOUD_HD_SUFFIX, CLOUD_SUFFIX, DEFAULT_BACKGROUND, DEFAULT_MAX_FONT, DEFAULT_MAX_WORDS,
    DEFAULT_MIN_FONT, DEFAULT_PALETTE, DEFAULT_SEED, FREQUENCIES_SUFFIX, MASK_SUFFIX,
    MIN_INPUT_CHARS, RELATIVE_SCALING, STANDARD_HEIGHT, STANDARD_WIDTH,
};
use crate::io::error::{CloudError, Result, configuration_error};
use crate::io::image::{export_frequencies, export_image, export_mask_png};
use crate::io::input::read_input;
use crate::io::progress::{ProgressManager, Stage};
use crate::render::config::{Orientation, RenderConfig, Resolution};
use crate::render::font::FontResource;
use crate::render::orchestrator::{
    MaskSource, RenderedImage, SilhouettePreview, render_resolutions,
};
use crate::render::palette::{Palette, parse_hex_color};
use crate::spatial::canvas::Canvas;
use crate::spatial::shapes::Shape;
use crate::text::frequency::{ExtractOptions, FrequencyMapping, extract_with};
use crate::text::stopwords::{StopwordConfig, StopwordLanguage, StopwordSet, parse_custom_terms};
use clap::Parser;
use image::ImageFormat;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wordshape")]
#[command(
    author,
    version,
    about = "Extract term frequencies and render shape-constrained word clouds"
)]
/// Command-line arguments for the word-cloud tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input text file or directory of text files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Silhouette: rectangle, circle, oval, square, star, heart, cloud, bulb
    #[arg(short = 's', long, default_value = "rectangle")]
    pub shape: String,

    /// Silhouette image overriding --shape (dark pixels are paintable)
    #[arg(long, value_name = "IMAGE")]
    pub mask_image: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = STANDARD_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = STANDARD_HEIGHT)]
    pub height: u32,

    /// Treat each line as one phrase instead of splitting into words
    #[arg(short, long)]
    pub phrases: bool,

    /// Language stop-word list: none, primary, both
    #[arg(short, long, default_value = "primary")]
    pub language: String,

    /// Extra stop-words, comma separated
    #[arg(long, default_value = "")]
    pub stopwords: String,

    /// Fold plural forms into their singular
    #[arg(long)]
    pub normalize_plurals: bool,

    /// Keep tokens made only of digits
    #[arg(long)]
    pub include_numbers: bool,

    /// Maximum number of words in the cloud
    #[arg(short, long, default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,

    /// Smallest font size
    #[arg(long, default_value_t = DEFAULT_MIN_FONT)]
    pub min_font: u32,

    /// Largest font size
    #[arg(long, default_value_t = DEFAULT_MAX_FONT)]
    pub max_font: u32,

    /// Word orientation: horizontal, mixed, vertical
    #[arg(short, long, default_value = "horizontal")]
    pub orientation: String,

    /// Background colour as #rgb or #rrggbb
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Colour palette
    #[arg(short = 'c', long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Random seed for reproducible layout
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Font file used by the renderer
    #[arg(short, long)]
    pub font: Option<PathBuf>,

    /// Also render a high definition output
    #[arg(long)]
    pub hd: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Stop-word configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown language.
    pub fn stopword_config(&self) -> Result<StopwordConfig> {
        Ok(StopwordConfig {
            base_language: self.language.parse::<StopwordLanguage>()?,
            custom_terms: parse_custom_terms(&self.stopwords),
        })
    }

    /// Extraction options from the arguments
    pub const fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            min_input_chars: MIN_INPUT_CHARS,
            normalize_plurals: self.normalize_plurals,
            include_numbers: self.include_numbers,
        }
    }

    /// Render configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid canvas, orientation,
    /// colour, palette or numeric range.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let config = RenderConfig {
            canvas: Canvas::new(self.width, self.height)?,
            max_words: self.max_words,
            min_font_size: self.min_font,
            max_font_size: self.max_font,
            prefer_horizontal: self.orientation.parse::<Orientation>()?.prefer_horizontal(),
            relative_scaling: RELATIVE_SCALING,
            background: parse_hex_color(&self.background)?,
            palette: self.palette.parse::<Palette>()?,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Mask source from the arguments
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown shape.
    pub fn mask_source(&self) -> Result<MaskSource> {
        match &self.mask_image {
            Some(path) => Ok(MaskSource::Silhouette(path.clone())),
            None => Ok(MaskSource::Shape(self.shape.parse::<Shape>()?)),
        }
    }

    fn resolutions(&self) -> Vec<Resolution> {
        if self.hd {
            vec![Resolution::Standard, Resolution::HighDefinition]
        } else {
            vec![Resolution::Standard]
        }
    }
}

/// Settings shared by every file of a run
struct RunSettings {
    stopwords: StopwordSet,
    options: ExtractOptions,
    render: RenderConfig,
    source: MaskSource,
    font: FontResource,
    resolutions: Vec<Resolution>,
}

/// Orchestrates batch processing of text files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the target cannot be
    /// read, or any file fails to process.
    pub fn process(&mut self) -> Result<()> {
        let settings = self.settings()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("Nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &settings)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn settings(&self) -> Result<RunSettings> {
        let stopword_config = self.cli.stopword_config()?;
        let render = self.cli.render_config()?;
        let source = self.cli.mask_source()?;

        // Shape and canvas must agree before any file is written
        source.build(render.canvas)?;

        Ok(RunSettings {
            stopwords: StopwordSet::from_config(&stopword_config),
            options: self.cli.extract_options(),
            render,
            source,
            font: FontResource::resolve(self.cli.font.as_deref()),
            resolutions: self.cli.resolutions(),
        })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_text_file(target) {
                Ok(if self.should_process_file(target) {
                    vec![target.clone()]
                } else {
                    vec![]
                })
            } else {
                Err(configuration_error(
                    "target",
                    &target.display(),
                    &"target file must be a .txt file",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| CloudError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_text_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(configuration_error(
                "target",
                &target.display(),
                &"target must be a .txt file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path(input_path, CLOUD_SUFFIX, "png");
        if output_path.exists() {
            log::info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn stage(&self, index: usize, stage: Stage) {
        if let Some(ref pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }

    fn process_file(&self, input_path: &Path, index: usize, settings: &RunSettings) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        self.stage(index, Stage::Extract);
        let input = read_input(input_path, self.cli.phrases)?;
        let frequencies = extract_with(
            &input,
            &settings.stopwords,
            self.cli.phrases,
            &settings.options,
        )?;
        export_frequencies(
            &frequencies,
            &output_path(input_path, FREQUENCIES_SUFFIX, "tsv"),
        )?;

        self.stage(index, Stage::Mask);
        if let Some(mask) = settings.source.build(settings.render.canvas)? {
            export_mask_png(&mask, &output_path(input_path, MASK_SUFFIX, "png"))?;
        }

        self.stage(index, Stage::Render);
        let outputs = render_cloud(&frequencies, settings)?;

        self.stage(index, Stage::Export);
        let mut standard = None;
        for output in &outputs {
            match output.resolution {
                Resolution::Standard => {
                    export_image(
                        &output.image,
                        &output_path(input_path, CLOUD_SUFFIX, "jpg"),
                        ImageFormat::Jpeg,
                    )?;
                    standard = Some(&output.image);
                }
                Resolution::HighDefinition => {
                    export_image(
                        &output.image,
                        &output_path(input_path, CLOUD_HD_SUFFIX, "png"),
                        ImageFormat::Png,
                    )?;
                }
            }
        }
        // Written last: its presence marks a finished file for skip checks
        if let Some(image) = standard {
            export_image(
                image,
                &output_path(input_path, CLOUD_SUFFIX, "png"),
                ImageFormat::Png,
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index);
        }

        log::info!(
            "Processed {} ({} distinct terms)",
            input_path.display(),
            frequencies.len()
        );

        Ok(())
    }
}

fn render_cloud(frequencies: &FrequencyMapping, settings: &RunSettings) -> Result<Vec<RenderedImage>> {
    render_resolutions(
        &SilhouettePreview,
        frequencies,
        &settings.source,
        &settings.render,
        &settings.font,
        &settings.resolutions,
    )
}

fn is_text_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("txt")
}

/// Output path next to `input_path` named `<stem><suffix>.<extension>`
pub fn output_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
