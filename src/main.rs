// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use wordswap::app_config::{self, Config};
use wordswap::clipboard::SystemClipboard;
use wordswap::file_utils::FileManager;
use wordswap::{Controller, MatchMode};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply translation rules to text (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for wordswap
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// Input text file or directory to process (stdin when omitted)
    #[arg(value_name = "INPUT_PATH", conflicts_with = "text")]
    input_path: Option<PathBuf>,

    /// Content to translate, given inline
    #[arg(short, long)]
    text: Option<String>,

    /// Translation rule, may be repeated; applied in the order given
    #[arg(short, long = "rule", value_name = "OLD=NEW")]
    rules: Vec<String>,

    /// JSON file with an ordered list of {"oldWord", "newWord"} rules
    #[arg(short = 'R', long)]
    rules_file: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Match old words literally instead of as patterns
    #[arg(long)]
    literal: bool,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// wordswap - ordered, case-preserving word substitution
#[derive(Parser, Debug)]
#[command(name = "wordswap")]
#[command(version)]
#[command(about = "Replace whole words while keeping their casing")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "wordswap replaces whole words in text according to an ordered list of rules.
Each replacement takes the casing of the word it replaces (HELLO -> HI, Hello -> Hi, hello -> hi).

EXAMPLES:
    wordswap -t 'Hello world' -r hello=hi          # Prints 'Hi world'
    wordswap notes.txt -r cat=dog -o out.txt       # Translate a file
    wordswap -R rules.json --copy < notes.txt      # Rules from a file, copy result
    wordswap --literal -t 'a.b axb' -r a.b=ab      # Match old words literally
    wordswap /docs -r colour=color                 # Translate every .txt/.md file in a folder
    wordswap completions bash > wordswap.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering is left to log::max_level so it can be changed after init
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "wordswap", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args),
        None => run_translate(cli.args),
    }
}

fn run_translate(options: TranslateArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.into());
    }

    let (mut config, created) = Config::load_or_create(&options.config_path)?;
    if created {
        warn!("Config file not found at '{}', created default config.", options.config_path);
    }

    // Override config with CLI options if provided
    if options.literal {
        config.match_mode = MatchMode::Literal;
    }
    if options.copy {
        config.copy_to_clipboard = true;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.into());
    }

    config.validate()
        .context("Configuration validation failed")?;

    let rules = FileManager::collect_rules(options.rules_file.as_deref(), &options.rules)?;
    debug!("{} rule(s) from the command line, match mode {}", rules.len(), config.match_mode);

    let controller = Controller::with_config(config)?;

    if let Some(input_path) = &options.input_path {
        if input_path.is_dir() {
            if options.output.is_some() {
                return Err(anyhow!("--output cannot be used with a directory input"));
            }
            if controller.config().copy_to_clipboard {
                warn!("Clipboard copy is not supported for directory input, ignoring");
            }
            let summary = controller.run_folder(input_path, &rules, options.force_overwrite)?;
            if summary.failed > 0 {
                return Err(anyhow!("{} file(s) failed", summary.failed));
            }
            return Ok(());
        }

        if !input_path.is_file() {
            return Err(anyhow!("Input path does not exist: {:?}", input_path));
        }

        if let Some(output) = &options.output {
            let result = controller.run_single(input_path, output, &rules, options.force_overwrite)?;
            copy_if_requested(&controller, &result.content);
            return Ok(());
        }
    }

    let content = FileManager::read_content(
        options.text.as_deref(),
        options.input_path.as_deref(),
        std::io::stdin(),
    )?;
    let result = controller.translate_text(&content, rules)?;

    match &options.output {
        Some(output) => {
            if output.exists() && !options.force_overwrite {
                return Err(anyhow!("Output file already exists: {:?}. Use -f to force overwrite.", output));
            }
            FileManager::write_to_file(output, &result.content)?;
            info!("Success: {:?}", output);
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(result.content.as_bytes())?;
            if !result.content.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    copy_if_requested(&controller, &result.content);
    Ok(())
}

fn copy_if_requested(controller: &Controller, text: &str) {
    if !controller.config().copy_to_clipboard {
        return;
    }

    match SystemClipboard::new() {
        Ok(mut clipboard) => {
            controller.copy_result(&mut clipboard, text);
        }
        Err(e) => warn!("{}", e),
    }
}
