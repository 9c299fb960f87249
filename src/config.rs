use std::path::PathBuf;

/// Whether the appended content is preceded by a single `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineFlag {
    Prefix,
    Plain,
}

impl NewlineFlag {
    /**
     * @brief Parse the flag the way existing callers expect.
     * @param raw Value passed to `-n`.
     * @return `Prefix` only for the exact string `True`, `Plain` for anything else.
     */
    pub fn from_legacy(raw: &str) -> Self {
        if raw == "True" { NewlineFlag::Prefix } else { NewlineFlag::Plain }
    }

    /**
     * @brief Parse the flag, rejecting values other than `True` and `False`.
     * @param raw Value passed to `-n`.
     * @return Parsed flag, or an error naming the rejected value.
     */
    pub fn from_strict(raw: &str) -> Result<Self, Box<dyn std::error::Error>> {
        match raw {
            "True" => Ok(NewlineFlag::Prefix),
            "False" => Ok(NewlineFlag::Plain),
            other => Err(format!("invalid newline flag {:?}: expected True or False", other).into()),
        }
    }
}

impl From<bool> for NewlineFlag {
    fn from(prefix: bool) -> Self {
        if prefix { NewlineFlag::Prefix } else { NewlineFlag::Plain }
    }
}

/// Everything one append needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppendConfig {
    pub file: PathBuf,
    pub content: String,
    pub newline: NewlineFlag,
}

impl AppendConfig {
    pub fn new(file: impl Into<PathBuf>, content: impl Into<String>, newline: NewlineFlag) -> Self {
        Self { file: file.into(), content: content.into(), newline }
    }

    /**
     * @brief Text that will be appended to the target file.
     * @return `content`, preceded by `\n` when the flag asks for it.
     */
    pub fn payload(&self) -> String {
        match self.newline {
            NewlineFlag::Prefix => format!("\n{}", self.content),
            NewlineFlag::Plain => self.content.clone(),
        }
    }
}
