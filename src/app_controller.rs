use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::clipboard::{self, ClipboardSink, CopyOutcome};
use crate::file_utils::FileManager;
use crate::form::{TranslateForm, TranslationResult};
use crate::substitution::{SubstitutionEngine, TranslationRule};

// @module: Application controller for text translation

/// Summary of a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Engine built from the configured match mode
    engine: SubstitutionEngine,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let engine = SubstitutionEngine::new(config.match_mode);
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &SubstitutionEngine {
        &self.engine
    }

    /// Rules given explicitly win; otherwise the configured rules are used
    pub fn resolve_rules(&self, rules: Vec<TranslationRule>) -> Vec<TranslationRule> {
        if rules.is_empty() {
            debug!("Using {} rule(s) from configuration", self.config.translations.len());
            self.config.translations.clone()
        } else {
            rules
        }
    }

    /// Run one submit on in-memory content
    pub fn translate_text(&self, content: &str, rules: Vec<TranslationRule>) -> Result<TranslationResult> {
        let form = TranslateForm::new(content, self.resolve_rules(rules));
        Ok(form.submit(&self.engine)?)
    }

    /// Translate `input_file` into `output_file`
    pub fn run(
        &self,
        input_file: &Path,
        output_file: &Path,
        rules: &[TranslationRule],
        force_overwrite: bool,
    ) -> Result<Option<TranslationResult>> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        if output_file.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_file);
            return Ok(None);
        }

        let content = FileManager::read_to_string(input_file)?;
        let result = self.translate_text(&content, rules.to_vec())?;
        FileManager::write_to_file(output_file, &result.content)?;

        info!("Success: {:?} ({} replacement(s))", output_file, result.total_matches());
        Ok(Some(result))
    }

    /// Like `run`, but an existing output without `force_overwrite` is an error
    pub fn run_single(
        &self,
        input_file: &Path,
        output_file: &Path,
        rules: &[TranslationRule],
        force_overwrite: bool,
    ) -> Result<TranslationResult> {
        self.run(input_file, output_file, rules, force_overwrite)?
            .ok_or_else(|| anyhow!("Output file already exists: {:?}. Use -f to force overwrite.", output_file))
    }

    /// Translate every matching file under `input_dir` next to its source
    pub fn run_folder(&self, input_dir: &Path, rules: &[TranslationRule], force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        info!("Processing directory: {:?}", input_dir);

        let mut files: Vec<PathBuf> = Vec::new();
        for ext in &self.config.file_extensions {
            files.extend(FileManager::find_files(input_dir, ext)?);
        }
        files.sort();
        files.dedup();

        let suffix = &self.config.output_suffix;
        let mut summary = FolderSummary::default();

        for path in files {
            if FileManager::is_generated_output(&path, suffix) {
                debug!("Ignoring generated file {:?}", path);
                continue;
            }

            let parent = path.parent().unwrap_or(Path::new(""));
            let output = FileManager::generate_output_path(&path, parent, suffix);

            match self.run(&path, &output, rules, force_overwrite) {
                Ok(Some(_)) => summary.processed += 1,
                Ok(None) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing {:?}: {}", path, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Finished: {} processed, {} skipped, {} failed",
            summary.processed, summary.skipped, summary.failed
        );

        Ok(summary)
    }

    /// Best-effort copy of a result, logging the confirmation
    pub fn copy_result<S: ClipboardSink + ?Sized>(&self, sink: &mut S, text: &str) -> CopyOutcome {
        let outcome = clipboard::copy_result(sink, text);
        if let Some(notice) = outcome.notice() {
            info!("{}", notice.message);
        }
        outcome
    }
}
