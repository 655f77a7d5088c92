pub mod select_recipe_request;
pub mod select_recipe_route;
