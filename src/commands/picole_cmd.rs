//! Commands for Picole CRUD
//!
//! Exposes list, form and mutation operations to the shell. Arguments arrive
//! as camelCase JSON; errors go back as plain strings.
//!
//! Save failures are logged by the inventory and not surfaced here: the shell
//! always gets the list as it is in memory.

use serde::Deserialize;

use crate::domain::{DomainError, DomainResult, Picole};
use crate::form::{FormField, PicoleForm};
use crate::repository::ListRepository;
use crate::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPicoleArgs {
    pub name: String,
    pub price: String,
    pub flavor: String,
    pub quantity: String,
    #[serde(default)]
    pub editing_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdArgs {
    pub id: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFormArgs {
    pub field: FormField,
    pub value: String,
}

/// Keep the in-memory outcome when only the save step failed
fn ignore_persist_failure(result: DomainResult<()>) -> Result<(), String> {
    match result {
        Ok(()) | Err(DomainError::Persist(_)) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// List all picoles in display order
pub async fn list_picoles<R: ListRepository<Picole>>(
    state: &AppState<R>,
) -> Result<Vec<Picole>, String> {
    let app = state.app.lock().await;
    Ok(app.items().to_vec())
}

/// Current form contents
pub async fn get_form<R: ListRepository<Picole>>(
    state: &AppState<R>,
) -> Result<PicoleForm, String> {
    let app = state.app.lock().await;
    Ok(app.form().clone())
}

/// Change one form field
pub async fn update_form<R: ListRepository<Picole>>(
    state: &AppState<R>,
    args: UpdateFormArgs,
) -> Result<PicoleForm, String> {
    let mut app = state.app.lock().await;
    app.form_mut().set_field(args.field, args.value);
    Ok(app.form().clone())
}

/// Create (no `editingId`) or update a picole from the submitted fields
///
/// Rejected with an error when any field is empty; the form then keeps the
/// submitted values.
pub async fn submit_picole<R: ListRepository<Picole>>(
    state: &AppState<R>,
    args: SubmitPicoleArgs,
) -> Result<Vec<Picole>, String> {
    let mut app = state.app.lock().await;

    let form = app.form_mut();
    form.name = args.name;
    form.price = args.price;
    form.flavor = args.flavor;
    form.quantity = args.quantity;
    form.editing_id = args.editing_id;

    ignore_persist_failure(app.submit().await)?;
    Ok(app.items().to_vec())
}

/// Load a picole into the form for editing
pub async fn edit_picole<R: ListRepository<Picole>>(
    state: &AppState<R>,
    args: IdArgs,
) -> Result<PicoleForm, String> {
    let mut app = state.app.lock().await;
    let form = app.edit(args.id).map_err(|e| e.to_string())?;
    Ok(form.clone())
}

/// Delete a picole; unknown ids leave the list unchanged
pub async fn delete_picole<R: ListRepository<Picole>>(
    state: &AppState<R>,
    args: IdArgs,
) -> Result<Vec<Picole>, String> {
    let mut app = state.app.lock().await;
    ignore_persist_failure(app.delete(args.id).await)?;
    Ok(app.items().to_vec())
}

/// Leave edit mode and empty the form
pub async fn cancel_edit<R: ListRepository<Picole>>(
    state: &AppState<R>,
) -> Result<PicoleForm, String> {
    let mut app = state.app.lock().await;
    app.cancel_edit();
    Ok(app.form().clone())
}

/// Where the inventory is saved, for the shell's about/diagnostics view
pub async fn data_file_path<R: ListRepository<Picole>>(
    state: &AppState<R>,
) -> Result<String, String> {
    Ok(state.config.data_file().display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repository::MemoryRepository;

    fn state() -> AppState<MemoryRepository<Picole>> {
        AppState::with_repository(MemoryRepository::new(), AppConfig::in_dir("unused"))
    }

    fn args(json: serde_json::Value) -> SubmitPicoleArgs {
        serde_json::from_value(json).expect("Invalid args")
    }

    #[tokio::test]
    async fn test_submit_args_from_json() {
        let parsed = args(serde_json::json!({
            "name": "Morango",
            "price": "5",
            "flavor": "Morango",
            "quantity": "10",
            "editingId": 3
        }));
        assert_eq!(parsed.editing_id, Some(3));

        let parsed = args(serde_json::json!({
            "name": "Morango",
            "price": "5",
            "flavor": "Morango",
            "quantity": "10"
        }));
        assert_eq!(parsed.editing_id, None);
    }

    #[tokio::test]
    async fn test_create_edit_delete_flow() {
        let state = state();

        let items = submit_picole(&state, args(serde_json::json!({
            "name": "Morango", "price": "5", "flavor": "Morango", "quantity": "10"
        })))
        .await
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);

        let form = edit_picole(&state, IdArgs { id: 1 }).await.unwrap();
        assert_eq!(form.editing_id, Some(1));

        let items = submit_picole(&state, args(serde_json::json!({
            "name": "Morango", "price": "6", "flavor": "Morango", "quantity": "8", "editingId": 1
        })))
        .await
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, "6");
        assert!(!get_form(&state).await.unwrap().is_editing());

        let items = delete_picole(&state, IdArgs { id: 1 }).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_submit_incomplete_is_error() {
        let state = state();

        let result = submit_picole(&state, args(serde_json::json!({
            "name": "Uva", "price": "", "flavor": "Uva", "quantity": "2"
        })))
        .await;

        assert!(result.unwrap_err().starts_with("Invalid input"));
        assert!(list_picoles(&state).await.unwrap().is_empty());
        assert_eq!(get_form(&state).await.unwrap().name, "Uva");
    }

    #[tokio::test]
    async fn test_save_failure_is_not_surfaced() {
        let state = state();
        state.app.lock().await.inventory().repository().set_fail_persist(true);

        let items = submit_picole(&state, args(serde_json::json!({
            "name": "Coco", "price": "3", "flavor": "Coco", "quantity": "1"
        })))
        .await
        .unwrap();

        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_unknown_picole() {
        let state = state();
        let err = edit_picole(&state, IdArgs { id: 9 }).await.unwrap_err();
        assert_eq!(err, "Not found: Picole 9");
    }

    #[tokio::test]
    async fn test_data_file_path_reports_config() {
        let state = state();
        let path = data_file_path(&state).await.unwrap();
        assert_eq!(path, std::path::Path::new("unused").join("picoles.txt").display().to_string());
    }

    #[tokio::test]
    async fn test_form_commands() {
        let state = state();

        let args: UpdateFormArgs =
            serde_json::from_value(serde_json::json!({ "field": "flavor", "value": "Manga" })).unwrap();
        let form = update_form(&state, args).await.unwrap();
        assert_eq!(form.flavor, "Manga");

        let form = cancel_edit(&state).await.unwrap();
        assert_eq!(form, PicoleForm::default());
    }
}
