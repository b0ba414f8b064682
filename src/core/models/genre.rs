//! Book genres

use serde::{Deserialize, Serialize};

/// Genre of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    /// Novels and other fiction
    #[default]
    Fiction,
    /// Non-fiction prose
    Nonfiction,
    /// Magazines and journals
    Periodical,
    /// Life stories
    Biography,
    /// Children's books
    Children,
}

impl Genre {
    /// All genres in menu order
    pub const ALL: [Self; 5] = [
        Self::Fiction,
        Self::Nonfiction,
        Self::Periodical,
        Self::Biography,
        Self::Children,
    ];

    /// Fixed display label shown to patrons
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::Nonfiction => "Non-fiction",
            Self::Periodical => "Periodical",
            Self::Biography => "Biography",
            Self::Children => "Children's",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fiction => write!(f, "fiction"),
            Self::Nonfiction => write!(f, "nonfiction"),
            Self::Periodical => write!(f, "periodical"),
            Self::Biography => write!(f, "biography"),
            Self::Children => write!(f, "children"),
        }
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "fiction" | "1" => Ok(Self::Fiction),
            "nonfiction" | "2" => Ok(Self::Nonfiction),
            "periodical" | "3" => Ok(Self::Periodical),
            "biography" | "4" => Ok(Self::Biography),
            "children" | "childrens" | "children's" | "5" => Ok(Self::Children),
            _ => Err(format!(
                "Invalid genre: {s}. Use: fiction, nonfiction, periodical, biography, children (or 1-5)"
            )),
        }
    }
}
