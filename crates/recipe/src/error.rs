use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Recipe name must not be empty")]
    EmptyName,

    #[error("Recipe {0} has no required ingredients")]
    NoIngredients(String),

    #[error("Recipe {0} appears more than once in the catalog")]
    DuplicateName(String),
}
