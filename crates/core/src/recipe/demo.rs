//! Demo recipes for seeding and tests.

use super::types::{Category, Recipe};

/// Returns the four demo recipes, with ids `"0"` through `"3"`.
///
/// # Example
///
/// ```
/// use recipes_core::recipe::demo_recipes;
///
/// let recipes = demo_recipes();
/// assert_eq!(recipes.len(), 4);
/// assert_eq!(recipes[0].id, "0");
/// ```
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Fried egg with tomato", 2, Category::NonVegetarian)
            .with_id("0")
            .with_ingredients(["egg", "tomato"])
            .with_instructions(
                "crack the egg on the pan with little oil. And bake in oven for 2 minutes.",
            ),
        Recipe::new("Kadai paneer", 3, Category::Vegetarian)
            .with_id("1")
            .with_ingredients(["paneer", "bell pepper"])
            .with_instructions(
                "firstly, in a large kadai, heat 1 tbsp butter and saute 1 bay leaf, \
                 1 green chilli, 1 tsp kasuri methi till they aromatic.",
            ),
        Recipe::new("mixed veg", 2, Category::Vegetarian)
            .with_id("2")
            .with_ingredients(["bell pepper", "potato", "mushroom"])
            .with_instructions("chop all the ingredients and stir it in kadai with oil and spices"),
        Recipe::new("salmon with potato", 4, Category::NonVegetarian)
            .with_id("3")
            .with_ingredients(["salmon", "potato"])
            .with_instructions("at 250 degree celcius grill the fish along with potato in the oven"),
    ]
}
