use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use crate::error::{CatalogError, CatalogResult};
use crate::types::Recipe;

const RECIPES: &[Recipe] = &[
    Recipe::dish("番茄炒蛋", &["番茄", "鸡蛋"]),
    Recipe::soup("罗宋汤", &["牛肉", "土豆", "番茄", "洋葱"]),
    Recipe::dish("清蒸鱼", &["鱼", "姜", "葱"]),
    Recipe::dish("糖醋排骨", &["排骨", "糖"]),
    Recipe::dish("糖醋鱼", &["鱼", "糖"]),
    Recipe::dish("酸辣土豆丝", &["土豆", "醋", "辣椒"]),
    Recipe::soup("紫菜蛋花汤", &["紫菜", "鸡蛋"]),
    Recipe::dish("回锅肉", &["猪肉", "辣椒", "豆瓣酱"]),
    Recipe::dish("凉拌胡萝卜丝", &["胡萝卜", "辣椒"]),
    Recipe::soup("白菜豆腐汤", &["白菜", "豆腐"]),
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(RECIPES).unwrap_or_else(|err| panic!("built-in recipe catalog is corrupted: {err}"))
});

/// Immutable, validated list of recipes. Order is preserved and is the
/// order in which matches are reported.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: &'static [Recipe],
}

impl Catalog {
    /// Validate a recipe list.
    ///
    /// Every recipe needs a non-empty name, at least one ingredient and a
    /// name unique within the list.
    pub fn new(recipes: &'static [Recipe]) -> CatalogResult<Self> {
        let mut names = HashSet::with_capacity(recipes.len());

        for recipe in recipes {
            if recipe.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }

            if recipe.ingredients.is_empty() {
                return Err(CatalogError::NoIngredients(recipe.name.to_owned()));
            }

            if !names.insert(recipe.name) {
                return Err(CatalogError::DuplicateName(recipe.name.to_owned()));
            }
        }

        Ok(Self { recipes })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn recipes(&self) -> &'static [Recipe] {
        self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&'static Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Every ingredient name referenced by at least one recipe, sorted.
    pub fn ingredients(&self) -> BTreeSet<&'static str> {
        self.recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().copied())
            .collect()
    }
}
