use std::collections::HashSet;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(
    EnumString,
    Display,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Course {
    #[default]
    Dish,
    /// Counts towards the soup quota of larger parties
    Soup,
}

/// A catalog entry. Ingredient names are compared exactly, so `番茄` and
/// `西红柿` are different ingredients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
    pub course: Course,
}

impl Recipe {
    pub const fn dish(name: &'static str, ingredients: &'static [&'static str]) -> Self {
        Self {
            name,
            ingredients,
            course: Course::Dish,
        }
    }

    pub const fn soup(name: &'static str, ingredients: &'static [&'static str]) -> Self {
        Self {
            name,
            ingredients,
            course: Course::Soup,
        }
    }

    pub fn is_soup(&self) -> bool {
        self.course == Course::Soup
    }

    /// True when every required ingredient is in `available`.
    pub fn is_cookable_with(&self, available: &HashSet<String>) -> bool {
        self.ingredients
            .iter()
            .all(|ingredient| available.contains(*ingredient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn available(items: &[&str]) -> HashSet<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_cookable_requires_every_ingredient() {
        let recipe = Recipe::dish("番茄炒蛋", &["番茄", "鸡蛋"]);

        assert!(recipe.is_cookable_with(&available(&["番茄", "鸡蛋"])));
        assert!(recipe.is_cookable_with(&available(&["鸡蛋", "番茄", "葱"])));
        assert!(!recipe.is_cookable_with(&available(&["番茄"])));
        assert!(!recipe.is_cookable_with(&available(&[])));
    }

    #[test]
    fn test_cookable_is_case_sensitive() {
        let recipe = Recipe::dish("Omelette", &["Egg"]);

        assert!(recipe.is_cookable_with(&available(&["Egg"])));
        assert!(!recipe.is_cookable_with(&available(&["egg"])));
        assert!(!recipe.is_cookable_with(&available(&["Eggs"])));
    }

    #[test]
    fn test_course_strings() {
        assert_eq!(Course::Soup.as_ref(), "soup");
        assert_eq!(Course::from_str("dish"), Ok(Course::Dish));
        assert!(Recipe::soup("罗宋汤", &["牛肉"]).is_soup());
        assert!(!Recipe::dish("回锅肉", &["猪肉"]).is_soup());
    }
}
