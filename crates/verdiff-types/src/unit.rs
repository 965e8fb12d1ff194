use serde::{Deserialize, Serialize};

/// Identifies one comparable piece of content: a file at a relative path
/// (tree mode) or a page of text (document mode, 1-based).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitLabel {
    Path(String),
    Page(usize),
}

impl UnitLabel {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn page(page: usize) -> Self {
        Self::Page(page)
    }
}

impl std::fmt::Display for UnitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Page(page) => write!(f, "page {page}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_label_displays_bare_path() {
        let label = UnitLabel::path("src/main.py");
        assert_eq!(label.to_string(), "src/main.py");
    }

    #[test]
    fn page_label_displays_page_number() {
        let label = UnitLabel::page(3);
        assert_eq!(label.to_string(), "page 3");
    }
}
