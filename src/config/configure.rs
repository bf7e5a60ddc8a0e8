//! Interactive configuration prompts
//!
//! Reads answers line by line from any `BufRead` so the flow can be driven
//! from stdin or from a buffer in tests. Blank answers keep the current value.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::error::Result;

/// Number of token characters shown in prompts
pub const TOKEN_DISPLAY_CHARS: usize = 10;

/// Shorten a token for display in a prompt.
///
/// Only the first few characters are shown, and an unset token reads as
/// `Not set...`. This is a display convenience, not redaction.
pub fn mask_token(token: Option<&str>) -> String {
    let shown = token.filter(|t| !t.is_empty()).unwrap_or("Not set");
    format!("{}...", shown.chars().take(TOKEN_DISPLAY_CHARS).collect::<String>())
}

/// Interpret a yes/no answer. `None` means keep the current value.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}

/// Prompt-driven editor for [`Settings`]
pub struct Configurator<R, W> {
    input: R,
    output: W,
    default_base_directory: PathBuf,
}

impl<R: BufRead, W: Write> Configurator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            default_base_directory: Settings::default_base_directory(),
        }
    }

    /// Override the base directory offered when none is stored
    pub fn with_default_base_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_base_directory = dir.into();
        self
    }

    /// Walk through every field and return the merged settings
    pub fn run(&mut self, mut settings: Settings) -> Result<Settings> {
        writeln!(self.output, "Project Init Configuration\n")?;

        writeln!(self.output, "Enter your GitHub Personal Access Token")?;
        writeln!(self.output, "(Leave blank to keep current value)")?;
        let token = self.ask(&format!("Token [{}]: ", mask_token(settings.token())))?;
        if !token.is_empty() {
            settings.token = Some(token);
        }

        writeln!(self.output, "\nEnter default base directory for repositories")?;
        writeln!(self.output, "(Leave blank to keep current value)")?;
        let current_dir = settings
            .base_directory
            .clone()
            .unwrap_or_else(|| self.default_base_directory.clone());
        let base_dir = self.ask(&format!("Base directory [{}]: ", current_dir.display()))?;
        if !base_dir.is_empty() {
            settings.base_directory = Some(PathBuf::from(base_dir));
        } else if settings.base_directory.is_none() {
            settings.base_directory = Some(current_dir);
        }

        writeln!(self.output, "\nDefault repository visibility")?;
        writeln!(self.output, "(Leave blank to keep current value)")?;
        let private = self.ask(&format!(
            "Make repos private by default? (yes/no) [{}]: ",
            settings.private
        ))?;
        if let Some(private) = parse_yes_no(&private) {
            settings.private = private;
        }

        Ok(settings)
    }

    /// Print the post-save summary. Never prints the token itself.
    pub fn print_summary(&mut self, settings: &Settings, path: &Path) -> Result<()> {
        writeln!(self.output, "Configuration saved to {}", path.display())?;
        writeln!(self.output, "\n✓ Configuration updated successfully!")?;
        writeln!(self.output, "\nCurrent settings:")?;
        writeln!(
            self.output,
            "  Token: {}",
            if settings.token().is_some() { "Set" } else { "Not set" }
        )?;
        writeln!(
            self.output,
            "  Base directory: {}",
            settings
                .base_directory
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )?;
        writeln!(self.output, "  Private by default: {}", settings.private)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // EOF reads as an empty line
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        debug!("prompt answered ({} bytes)", line.trim().len());
        Ok(line.trim().to_string())
    }
}

/// Run the configure flow against stdin/stdout and persist the result
pub fn configure(path: &Path) -> Result<Settings> {
    let settings = Settings::load_from(path)?;

    let stdin = std::io::stdin();
    let mut configurator = Configurator::new(stdin.lock(), std::io::stdout());
    let settings = configurator.run(settings)?;

    settings.save_to(path)?;
    configurator.print_summary(&settings, path)?;

    Ok(settings)
}
