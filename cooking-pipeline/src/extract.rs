//! Dish-name extraction from free-text queries.
//!
//! The model is instructed to emit ONLY a JSON value matching the
//! [`DishName`] schema; its answer is then parsed against that schema.
//! A response that does not parse fails with [`ExtractionError`]; no
//! fallback guessing is attempted. This is a hard boundary the
//! orchestrator surfaces to its caller.

use tracing::debug;

use llm_gateway::ChatTurn;

use crate::capabilities::ChatModel;
use crate::errors::ExtractionError;
use crate::schema::DishName;

/// Machine-readable format instructions embedded into the prompt.
const FORMAT_INSTRUCTIONS: &str =
    r#"The output must be a JSON object with exactly one string field: {"name": "<dish name>"}"#;

/// Asks the model for the dish named in `query` and parses the answer.
///
/// # Errors
/// - [`ExtractionError::Model`] when the model call fails
/// - [`ExtractionError::Schema`] when the output does not parse
/// - [`ExtractionError::EmptyName`] when the parsed name is blank
pub async fn extract<M>(model: &M, query: &str) -> Result<DishName, ExtractionError>
where
    M: ChatModel + ?Sized,
{
    let prompt = build_prompt(query);
    let answer = model
        .chat(&[ChatTurn::user(prompt)])
        .await
        .map_err(ExtractionError::Model)?;

    let dish = parse_dish_name(&answer)?;
    debug!(dish = %dish.name, "dish name extracted");
    Ok(dish)
}

/// Builds the single-turn extraction prompt.
fn build_prompt(query: &str) -> String {
    format!(
        "Extract the name of the dish from the user query below.\n\
         Return ONLY valid JSON in the format described.\n\
         Do not include any extra explanation, markdown, or text.\n\n\
         {FORMAT_INSTRUCTIONS}\n\n\
         Query: {query}"
    )
}

/// Parses model text against the [`DishName`] schema.
///
/// Models occasionally wrap the value in code fences or surrounding
/// prose, so the outermost JSON object is scanned out of the text before
/// decoding. Anything that still fails to decode is a schema error.
fn parse_dish_name(text: &str) -> Result<DishName, ExtractionError> {
    let start = text.find('{');
    let end = text.rfind('}');

    let candidate = match (start, end) {
        (Some(s), Some(e)) if s < e => &text[s..=e],
        _ => {
            return Err(ExtractionError::Schema {
                raw: snippet(text),
            });
        }
    };

    let dish: DishName =
        serde_json::from_str(candidate).map_err(|_| ExtractionError::Schema {
            raw: snippet(text),
        })?;

    if dish.name.trim().is_empty() {
        return Err(ExtractionError::EmptyName);
    }

    Ok(DishName {
        name: dish.name.trim().to_string(),
    })
}

fn snippet(text: &str) -> String {
    text.chars().take(160).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json() {
        let d = parse_dish_name(r#"{"name": "Butter Chicken"}"#).unwrap();
        assert_eq!(d.name, "Butter Chicken");
    }

    #[test]
    fn parses_fenced_json() {
        let text = "```json\n{\"name\": \"Pad Thai\"}\n```";
        let d = parse_dish_name(text).unwrap();
        assert_eq!(d.name, "Pad Thai");
    }

    #[test]
    fn parses_json_with_surrounding_prose() {
        let text = "Sure! Here you go: {\"name\": \"Ramen\"} Hope that helps.";
        let d = parse_dish_name(text).unwrap();
        assert_eq!(d.name, "Ramen");
    }

    #[test]
    fn trims_whitespace_in_name() {
        let d = parse_dish_name(r#"{"name": "  Biryani "}"#).unwrap();
        assert_eq!(d.name, "Biryani");
    }

    #[test]
    fn rejects_text_without_json_object() {
        let err = parse_dish_name("The dish is Butter Chicken.").unwrap_err();
        assert!(matches!(err, ExtractionError::Schema { .. }));
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = parse_dish_name(r#"{"dish": "Butter Chicken"}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::Schema { .. }));
    }

    #[test]
    fn rejects_empty_name() {
        let err = parse_dish_name(r#"{"name": "   "}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyName));
    }
}
