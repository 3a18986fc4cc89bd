//! Driver configuration.

/// How the driver presents each executed line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Echo `> <line>` before each result.
    pub echo: bool,
    /// Prompt shown by the interactive editor.
    pub prompt: String,
}

impl DriverConfig {
    /// Defaults for the interactive editor: the user already sees what they
    /// typed, so the line is not echoed back.
    pub fn interactive() -> Self {
        DriverConfig {
            echo: false,
            ..DriverConfig::default()
        }
    }

    /// Apply one command-line flag. Returns `false` if the flag is unknown.
    pub fn apply_flag(&mut self, flag: &str) -> bool {
        if flag == "--quiet" || flag == "-q" {
            self.echo = false;
        } else if flag == "--echo" {
            self.echo = true;
        } else if let Some(prompt) = flag.strip_prefix("--prompt=") {
            self.prompt = prompt.to_owned();
        } else {
            return false;
        }
        true
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            echo: true,
            prompt: "> ".to_owned(),
        }
    }
}
