use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::substitution::TranslationRule;

// @module: File and directory utilities

/// `OLD=NEW` as given on the command line; the first `=` splits
static RULE_ARG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?s)([^=]+)=(.+)$").unwrap()
});

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a translated file
    // @params: input_file, output_dir, suffix
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        suffix: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(suffix);
        if let Some(ext) = input_file.extension() {
            output_filename.push('.');
            output_filename.push_str(&ext.to_string_lossy());
        }

        output_dir.join(output_filename)
    }

    /// True when the file name already carries `.suffix.` before its extension
    pub fn is_generated_output<P: AsRef<Path>>(path: P, suffix: &str) -> bool {
        path.as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(&format!(".{}", suffix)))
            .unwrap_or(false)
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load an ordered rule list from a JSON array of `{"oldWord", "newWord"}` objects
    pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<Vec<TranslationRule>> {
        let content = Self::read_to_string(&path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse rules file: {:?}", path.as_ref()))
    }

    /// Rules file entries first, then `OLD=NEW` arguments, each in the order given
    pub fn collect_rules<S: AsRef<str>>(rules_file: Option<&Path>, rule_args: &[S]) -> Result<Vec<TranslationRule>> {
        let mut rules = match rules_file {
            Some(path) => Self::load_rules(path)?,
            None => Vec::new(),
        };

        for arg in rule_args {
            rules.push(Self::parse_rule_arg(arg.as_ref())?);
        }

        Ok(rules)
    }

    /// Inline text wins over the input file, which wins over `fallback`
    pub fn read_content<R: Read>(text: Option<&str>, input_file: Option<&Path>, mut fallback: R) -> Result<String> {
        if let Some(text) = text {
            return Ok(text.to_string());
        }

        if let Some(path) = input_file {
            return Self::read_to_string(path);
        }

        let mut content = String::new();
        fallback
            .read_to_string(&mut content)
            .context("Failed to read content from stdin")?;
        Ok(content)
    }

    /// Parse a single `OLD=NEW` argument
    pub fn parse_rule_arg(arg: &str) -> Result<TranslationRule> {
        let caps = RULE_ARG_REGEX
            .captures(arg)
            .ok_or_else(|| anyhow!("Invalid rule '{}', expected OLD=NEW", arg))?;

        Ok(TranslationRule::new(&caps[1], &caps[2]))
    }
}
