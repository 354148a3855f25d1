use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed instruction: `{0}`")]
    MalformedInstruction(String),

    #[error("Unknown {field} mnemonic: `{mnemonic}`")]
    UnknownMnemonic {
        field: &'static str,
        mnemonic: String,
    },

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbolReference(String),

    #[error("Address out of range: `{0}` does not fit in 15 bits")]
    AddressOutOfRange(String),

    #[error("Invalid instruction kind: {0}")]
    InvalidInstructionKind(&'static str),
}

/// Failure of an assembly run, pinned to the source line that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {error}", line = .idx + 1)]
pub struct LineError {
    /// 0-based source line index
    pub idx: usize,
    pub raw: String,
    pub error: Error,
}

impl LineError {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        cprintln!("<red,bold>error</>: {}", self.error);

        let line_num = self.idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, self.raw);
        cprintln!("      <blue>|</>");
    }
}

/// Failures of the command line front end around the assembler core.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    Serialize(#[source] serde_yaml::Error),
}

impl IoError {
    pub fn print_diag(&self) {
        cprintln!("<red,bold>error</>: {}", self);
        if let Some(source) = std::error::Error::source(self) {
            cprintln!("     <blue>=</> <bold>cause</>: {}", source);
        }
    }
}
