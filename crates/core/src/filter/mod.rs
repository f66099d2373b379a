//! Recipe filters built from list query parameters.
//!
//! A filter is a conjunction: a recipe matches only if it satisfies every
//! condition. Conditions are derived from a flat, multi-valued set of query
//! parameters:
//!
//! | Key            | Values used | Condition                                   |
//! |----------------|-------------|---------------------------------------------|
//! | `servings`     | first       | `servings == value`                         |
//! | `category`     | first       | `category == value`                         |
//! | `title`        | all         | title contains value (case-insensitive)     |
//! | `instructions` | all         | instructions contain value (case-insensitive) |
//! | `includes`     | all         | ingredients contain value                   |
//! | `excludes`     | all         | ingredients do not contain value            |
//!
//! Any other key is ignored.

mod error;

pub use error::FilterError;

use crate::recipe::{Category, Recipe};

/// A conjunctive predicate over recipe fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub servings: Option<u32>,
    pub category: Option<Category>,
    pub title_contains: Vec<String>,
    pub instructions_contains: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl RecipeFilter {
    /// Builds a filter from query parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use recipes_core::filter::RecipeFilter;
    ///
    /// let filter = RecipeFilter::from_params([("servings", "4"), ("includes", "potato")]).unwrap();
    /// assert_eq!(filter.servings, Some(4));
    /// assert_eq!(filter.includes, vec!["potato".to_string()]);
    /// ```
    pub fn from_params<I, K, V>(params: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();

        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                "servings" => {
                    if filter.servings.is_none() {
                        let servings = value
                            .trim()
                            .parse()
                            .map_err(|_| FilterError::InvalidServings(value.to_string()))?;
                        filter.servings = Some(servings);
                    }
                }
                "category" => {
                    if filter.category.is_none() {
                        let category = value
                            .parse()
                            .map_err(|_| FilterError::InvalidCategory(value.to_string()))?;
                        filter.category = Some(category);
                    }
                }
                "title" => filter.title_contains.push(value.to_string()),
                "instructions" => filter.instructions_contains.push(value.to_string()),
                "includes" => filter.includes.push(value.to_string()),
                "excludes" => filter.excludes.push(value.to_string()),
                _ => {}
            }
        }

        Ok(filter)
    }

    /// Returns true if the filter has no conditions and matches everything.
    pub fn is_empty(&self) -> bool {
        self.servings.is_none()
            && self.category.is_none()
            && self.title_contains.is_empty()
            && self.instructions_contains.is_empty()
            && self.includes.is_empty()
            && self.excludes.is_empty()
    }

    /// Evaluates the filter against a recipe.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.servings.is_none_or(|s| recipe.servings == s)
            && self.category.is_none_or(|c| recipe.category == c)
            && self
                .title_contains
                .iter()
                .all(|needle| contains_ignore_case(&recipe.title, needle))
            && self
                .instructions_contains
                .iter()
                .all(|needle| contains_ignore_case(&recipe.instructions, needle))
            && self.includes.iter().all(|i| recipe.has_ingredient(i))
            && !self.excludes.iter().any(|i| recipe.has_ingredient(i))
    }

    /// Filters a slice of recipes, keeping the ones that match.
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
