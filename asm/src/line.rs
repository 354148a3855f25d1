// ----------------------------------------------------------------------------
// Line

pub const COMMENT: &str = "//";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    idx: usize,
    raw: String,
    code: Option<String>,
    comment: Option<String>,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        let comment = raw
            .split_once(COMMENT)
            .map(|(_, comment)| comment.to_string());
        Self {
            idx,
            raw: raw.to_string(),
            code: normalize(raw),
            comment,
        }
    }

    /// 0-based index in the source text.
    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Instruction text with whitespace and comment removed.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Strip the trailing comment and every whitespace character.
/// Returns `None` for lines that carry no instruction.
pub fn normalize(raw: &str) -> Option<String> {
    let code = match raw.split_once(COMMENT) {
        Some((code, _)) => code,
        None => raw,
    };
    let clean: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.is_empty() {
        None
    } else {
        Some(clean)
    }
}
