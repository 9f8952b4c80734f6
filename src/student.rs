use std::collections::HashMap;

use serde::Serialize;

use crate::error::AppError;

/// The sole domain entity: one row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub mark: i64,
}

/// Typed payload of the add-or-update form.
///
/// `id` is the hidden field the edit form carries: `None` when it was
/// absent or submitted empty, which is what selects the create branch.
/// The other four fields are required; construction fails with a
/// 400-class error when one is missing or `mark`/`id` is non-numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSubmission {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub mark: i64,
}

impl StudentSubmission {
    /// Build a submission from decoded urlencoded form fields.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, AppError> {
        let required = |field: &'static str| -> Result<String, AppError> {
            form.get(field)
                .cloned()
                .ok_or(AppError::MissingField(field))
        };

        let name = required("name")?;
        let email = required("email")?;
        let phone = required("phone")?;

        let mark_raw = required("mark")?;
        let mark = mark_raw.trim().parse::<i64>().map_err(|_| {
            AppError::BadRequest(format!("mark must be an integer, got '{mark_raw}'"))
        })?;

        // The hidden id field dispatches create vs. update: only
        // presence and non-emptiness matter, existence is not checked.
        let id = match form.get("id").map(|s| s.trim()) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                AppError::BadRequest(format!("id must be an integer, got '{raw}'"))
            })?),
        };

        Ok(Self {
            id,
            name,
            email,
            phone,
            mark,
        })
    }
}
