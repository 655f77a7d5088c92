//! Prompt composition for the recipe assistant.

use llm_gateway::ChatTurn;
use recipe_directory::DetailedRecipe;

use super::window::{ConversationRole, ConversationWindow};

/// Fixed behavioral instruction for the assistant.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful cooking assistant. Answer user questions about the given recipe.";

/// Renders the recipe into the fixed textual representation injected into
/// every prompt: title, summary, instructions, ready time, servings and
/// the comma-joined ingredient list. Absent optional fields are omitted
/// rather than rendered as placeholder text.
pub fn render_recipe(recipe: &DetailedRecipe) -> String {
    let mut out = format!("Title: {}", recipe.title);
    if let Some(summary) = &recipe.summary {
        out.push_str(&format!("\nSummary: {summary}"));
    }
    if let Some(instructions) = &recipe.instructions {
        out.push_str(&format!("\nInstructions: {instructions}"));
    }
    if let Some(minutes) = recipe.ready_in_minutes {
        out.push_str(&format!("\nReady in: {minutes} minutes"));
    }
    if let Some(servings) = recipe.servings {
        out.push_str(&format!("\nServings: {servings}"));
    }
    out.push_str(&format!(
        "\nIngredients: {}",
        recipe.ingredients.join(", ")
    ));
    out
}

/// Composes the full model request: system instruction, the retained
/// window turns in chronological order, then a user turn carrying the
/// freshly rendered recipe together with the question.
pub fn compose(
    recipe: &DetailedRecipe,
    window: &ConversationWindow,
    question: &str,
) -> Vec<ChatTurn> {
    let mut turns = Vec::with_capacity(2 + 2 * window.len());
    turns.push(ChatTurn::system(SYSTEM_PROMPT));

    for turn in window.turns() {
        turns.push(match turn.role {
            ConversationRole::User => ChatTurn::user(turn.text.clone()),
            ConversationRole::Assistant => ChatTurn::assistant(turn.text.clone()),
        });
    }

    turns.push(ChatTurn::user(format!(
        "Here is the recipe:\n{}\n\n{}",
        render_recipe(recipe),
        question
    )));

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_gateway::ChatRole;

    fn carbonara() -> DetailedRecipe {
        DetailedRecipe {
            id: 123,
            title: "Spaghetti Carbonara".into(),
            summary: Some("Classic Italian pasta dish with creamy sauce.".into()),
            instructions: Some("1. Cook pasta. 2. Mix eggs and cheese.".into()),
            ready_in_minutes: Some(25),
            servings: Some(2),
            ingredients: vec![
                "spaghetti".into(),
                "eggs".into(),
                "parmesan cheese".into(),
                "pancetta".into(),
                "black pepper".into(),
            ],
        }
    }

    #[test]
    fn rendered_ingredients_round_trip() {
        let recipe = carbonara();
        let rendered = render_recipe(&recipe);

        let line = rendered
            .lines()
            .find(|l| l.starts_with("Ingredients: "))
            .unwrap();
        let recovered: Vec<String> = line["Ingredients: ".len()..]
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        assert_eq!(recovered, recipe.ingredients);
    }

    #[test]
    fn absent_fields_are_omitted_not_defaulted() {
        let recipe = DetailedRecipe {
            id: 7,
            title: "Plain Toast".into(),
            summary: None,
            instructions: None,
            ready_in_minutes: None,
            servings: None,
            ingredients: vec![],
        };
        let rendered = render_recipe(&recipe);
        assert!(rendered.starts_with("Title: Plain Toast"));
        assert!(!rendered.contains("Summary:"));
        assert!(!rendered.contains("Ready in:"));
        assert!(!rendered.contains("None"));
    }

    #[test]
    fn compose_orders_system_history_then_question() {
        let recipe = carbonara();
        let mut window = ConversationWindow::default();
        window.push("Q1", "A1");

        let turns = compose(&recipe, &window, "How long does it take?");
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].role, ChatRole::System);
        assert_eq!(turns[1].content, "Q1");
        assert_eq!(turns[2].content, "A1");
        assert_eq!(turns[3].role, ChatRole::User);
        assert!(turns[3].content.contains("Here is the recipe:"));
        assert!(turns[3].content.contains("Spaghetti Carbonara"));
        assert!(turns[3].content.ends_with("How long does it take?"));
    }
}
