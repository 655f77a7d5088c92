pub mod ask;
pub mod find_recipes;
pub mod health_route;
pub mod select_recipe;
