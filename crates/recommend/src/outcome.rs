use serde::Serialize;
use thiserror::Error;
use whattoeat_recipe::Recipe;

/// Separator placed between dish names in the reply text.
pub const DEFAULT_SEPARATOR: &str = "、";

/// Why no recommendation could be made. These are expected answers to
/// ordinary input, not faults; the `Display` text is what the caller sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    #[error("人数至少为1")]
    InvalidPartySize,

    #[error("三人及以上需要至少一个汤类菜品（当前无匹配汤品）")]
    SoupUnavailable,

    #[error("可选用的菜品不足,仅有{available}道菜可选择，选择失败。")]
    Insufficient { available: usize },
}

/// Dishes chosen for one request, in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub dishes: Vec<&'static Recipe>,
}

impl Recommendation {
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dishes.iter().map(|r| r.name)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn soup_count(&self) -> usize {
        self.dishes.iter().filter(|r| r.is_soup()).count()
    }

    pub fn to_text(&self, separator: &str) -> String {
        format!(
            "为您推荐以下菜品：{}",
            self.names().collect::<Vec<_>>().join(separator)
        )
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text(DEFAULT_SEPARATOR))
    }
}
