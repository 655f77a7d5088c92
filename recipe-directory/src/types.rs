//! Domain types and wire payloads for the recipe directory.

use serde::{Deserialize, Serialize};

use crate::errors::RecipeDirectoryError;

/// One search hit, in the upstream's ranking order.
///
/// Order is significant: the surrounding selection step uses the 1-based
/// position within the returned sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Upstream recipe id.
    pub id: i64,
    /// Display title.
    pub title: String,
}

/// Full recipe detail as exposed to the rest of the application.
///
/// Optional fields mirror the upstream payload: absence is preserved, not
/// replaced by placeholder text. `ingredients` always exists and defaults
/// to empty when the upstream omits its ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRecipe {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    /// Projected from `extendedIngredients[*].original`, upstream order.
    pub ingredients: Vec<String>,
}

/// Wire shape of `GET /recipes/complexSearch`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPayload {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
}

/// Wire shape of `GET /recipes/{id}/information`.
///
/// Deliberately permissive: `id`/`title` are optional here so that a
/// payload missing them surfaces as [`RecipeDirectoryError::IncompleteData`]
/// rather than a generic decode failure.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailPayload {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    #[serde(rename = "readyInMinutes")]
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    #[serde(rename = "extendedIngredients", default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtendedIngredient {
    pub original: String,
}

impl DetailedRecipe {
    /// Validates the minimum required fields and projects the ingredient
    /// list out of the extended form.
    pub(crate) fn from_payload(p: DetailPayload) -> Result<Self, RecipeDirectoryError> {
        let id = p
            .id
            .ok_or(RecipeDirectoryError::IncompleteData { missing: "id" })?;
        let title = p
            .title
            .ok_or(RecipeDirectoryError::IncompleteData { missing: "title" })?;

        let ingredients = p
            .extended_ingredients
            .into_iter()
            .map(|i| i.original)
            .collect();

        Ok(Self {
            id,
            title,
            summary: p.summary,
            instructions: p.instructions,
            ready_in_minutes: p.ready_in_minutes,
            servings: p.servings,
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_payload_decodes_in_ranking_order() {
        let v = json!({
            "results": [
                {"id": 1, "title": "Butter Chicken"},
                {"id": 2, "title": "Chicken Tikka"}
            ]
        });
        let p: SearchPayload = serde_json::from_value(v).unwrap();
        assert_eq!(
            p.results,
            vec![
                RecipeSummary {
                    id: 1,
                    title: "Butter Chicken".into()
                },
                RecipeSummary {
                    id: 2,
                    title: "Chicken Tikka".into()
                },
            ]
        );
    }

    #[test]
    fn search_payload_without_results_is_empty() {
        let p: SearchPayload = serde_json::from_value(json!({})).unwrap();
        assert!(p.results.is_empty());
    }

    #[test]
    fn detail_projects_extended_ingredients_in_order() {
        let v = json!({
            "id": 636488,
            "title": "Butter Chicken",
            "summary": "Rich and creamy.",
            "instructions": "Cook it.",
            "readyInMinutes": 45,
            "servings": 4,
            "extendedIngredients": [
                {"original": "500g chicken"},
                {"original": "2 tbsp butter"},
                {"original": "1 cup cream"}
            ]
        });
        let p: DetailPayload = serde_json::from_value(v).unwrap();
        let r = DetailedRecipe::from_payload(p).unwrap();
        assert_eq!(r.id, 636488);
        assert_eq!(r.title, "Butter Chicken");
        assert_eq!(r.ready_in_minutes, Some(45));
        assert_eq!(r.servings, Some(4));
        assert_eq!(
            r.ingredients,
            vec!["500g chicken", "2 tbsp butter", "1 cup cream"]
        );
    }

    #[test]
    fn detail_without_ingredient_list_yields_empty_vec() {
        let v = json!({"id": 7, "title": "Plain Toast"});
        let p: DetailPayload = serde_json::from_value(v).unwrap();
        let r = DetailedRecipe::from_payload(p).unwrap();
        assert!(r.ingredients.is_empty());
        assert_eq!(r.summary, None);
        assert_eq!(r.instructions, None);
        assert_eq!(r.ready_in_minutes, None);
        assert_eq!(r.servings, None);
    }

    #[test]
    fn detail_missing_title_is_incomplete_data() {
        let v = json!({"id": 7});
        let p: DetailPayload = serde_json::from_value(v).unwrap();
        let err = DetailedRecipe::from_payload(p).unwrap_err();
        assert!(matches!(
            err,
            RecipeDirectoryError::IncompleteData { missing: "title" }
        ));
    }

    #[test]
    fn detail_missing_id_is_incomplete_data() {
        let v = json!({"title": "Nameless"});
        let p: DetailPayload = serde_json::from_value(v).unwrap();
        let err = DetailedRecipe::from_payload(p).unwrap_err();
        assert!(matches!(
            err,
            RecipeDirectoryError::IncompleteData { missing: "id" }
        ));
    }
}
