//! Category Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed display category
///
/// Declaration order is the order sections appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Children,
    Dependent,
    Independent,
    Springless,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Children,
        Category::Dependent,
        Category::Independent,
        Category::Springless,
    ];

    /// Identifier used in catalog records
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Dependent => "dependent",
            Self::Independent => "independent",
            Self::Springless => "springless",
        }
    }

    /// Section title shown above the category cards
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Children => "Детские матрасы",
            Self::Dependent => "Матрасы с зависимыми пружинами",
            Self::Independent => "Матрасы с независимыми пружинами",
            Self::Springless => "Беспружинные матрасы",
        }
    }

    /// Resolve a catalog identifier; unknown identifiers yield `None`
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
