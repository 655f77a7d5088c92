pub mod find_recipes_request;
pub mod find_recipes_route;
