//! Declarative validation rules for every request shape.
//!
//! Each request is checked against its rule set before any store access;
//! failures collect every offending field into a single
//! [`Error::Validation`] with human-readable messages. Bounds are part of
//! the external contract and must not drift:
//!
//! | Field        | Rule            |
//! |--------------|-----------------|
//! | username     | length 3–100    |
//! | password     | length 6–100    |
//! | name         | length 3–100    |
//! | title        | length 1–100    |
//! | description  | length ≥ 1      |
//! | note id      | positive        |
//! | page         | ≥ 1             |
//! | size         | 1–100           |

use crate::error::{Error, Result};
use crate::models::{
    CreateNoteRequest, LoginUserRequest, RegisterUserRequest, SearchNoteRequest, UpdateNoteRequest,
    UpdateUserRequest,
};

/// Length rule for one string field. Lengths are counted in characters.
fn check_length(errors: &mut Vec<String>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min {
        if min == 1 {
            errors.push(format!("{field} must not be empty"));
        } else {
            errors.push(format!("{field} must be at least {min} characters"));
        }
    } else if len > max {
        errors.push(format!("{field} must be at most {max} characters"));
    }
}

fn finish(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors.join("; ")))
    }
}

/// Validate a registration request.
pub fn validate_register(req: &RegisterUserRequest) -> Result<()> {
    let mut errors = Vec::new();
    check_length(&mut errors, "Username", &req.username, 3, 100);
    check_length(&mut errors, "Password", &req.password, 6, 100);
    check_length(&mut errors, "Name", &req.name, 3, 100);
    finish(errors)
}

/// Validate a login request.
pub fn validate_login(req: &LoginUserRequest) -> Result<()> {
    let mut errors = Vec::new();
    check_length(&mut errors, "Username", &req.username, 3, 100);
    check_length(&mut errors, "Password", &req.password, 6, 100);
    finish(errors)
}

/// Validate a profile update. Both fields are optional; present fields must
/// satisfy the same bounds as at registration.
pub fn validate_update_user(req: &UpdateUserRequest) -> Result<()> {
    let mut errors = Vec::new();
    if let Some(name) = &req.name {
        check_length(&mut errors, "Name", name, 3, 100);
    }
    if let Some(password) = &req.password {
        check_length(&mut errors, "Password", password, 6, 100);
    }
    finish(errors)
}

/// Validate a note creation request.
pub fn validate_create_note(req: &CreateNoteRequest) -> Result<()> {
    let mut errors = Vec::new();
    check_length(&mut errors, "Title", &req.title, 1, 100);
    check_length(&mut errors, "Description", &req.description, 1, usize::MAX);
    finish(errors)
}

/// Validate a note id (path parameter or body field).
pub fn validate_note_id(id: i64) -> Result<()> {
    if id > 0 {
        Ok(())
    } else {
        Err(Error::Validation("Note id must be positive".to_string()))
    }
}

/// Validate a note update request, id included.
pub fn validate_update_note(req: &UpdateNoteRequest) -> Result<()> {
    let mut errors = Vec::new();
    if req.id <= 0 {
        errors.push("Note id must be positive".to_string());
    }
    check_length(&mut errors, "Title", &req.title, 1, 100);
    check_length(&mut errors, "Description", &req.description, 1, usize::MAX);
    finish(errors)
}

/// Validate a search request: optional title filter, 1-based page, bounded size.
pub fn validate_search(req: &SearchNoteRequest) -> Result<()> {
    let mut errors = Vec::new();
    if let Some(title) = &req.title {
        check_length(&mut errors, "Title", title, 1, 100);
    }
    if req.page < 1 {
        errors.push("Page must be at least 1".to_string());
    }
    if req.size < 1 || req.size > 100 {
        errors.push("Size must be between 1 and 100".to_string());
    }
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str, name: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_register_valid() {
        assert!(validate_register(&register("alice", "secret1", "Alice")).is_ok());
    }

    #[test]
    fn test_register_username_too_short() {
        let err = validate_register(&register("ab", "secret1", "Alice")).unwrap_err();
        assert!(err
            .to_string()
            .contains("Username must be at least 3 characters"));
    }

    #[test]
    fn test_register_boundary_lengths_accepted() {
        // 3 and 100 are inclusive bounds.
        assert!(validate_register(&register("abc", "123456", "abc")).is_ok());
        let hundred = "a".repeat(100);
        assert!(validate_register(&register(&hundred, &hundred, &hundred)).is_ok());
    }

    #[test]
    fn test_register_over_max_rejected() {
        let long = "a".repeat(101);
        let err = validate_register(&register(&long, "secret1", "Alice")).unwrap_err();
        assert!(err
            .to_string()
            .contains("Username must be at most 100 characters"));
    }

    #[test]
    fn test_register_collects_all_field_errors() {
        let err = validate_register(&register("", "", "")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Username"));
        assert!(msg.contains("Password"));
        assert!(msg.contains("Name"));
    }

    #[test]
    fn test_password_minimum_is_six() {
        let err = validate_register(&register("alice", "12345", "Alice")).unwrap_err();
        assert!(err
            .to_string()
            .contains("Password must be at least 6 characters"));
        assert!(validate_register(&register("alice", "123456", "Alice")).is_ok());
    }

    #[test]
    fn test_update_user_empty_request_is_ok() {
        assert!(validate_update_user(&UpdateUserRequest::default()).is_ok());
    }

    #[test]
    fn test_update_user_present_fields_checked() {
        let req = UpdateUserRequest {
            name: Some("ab".to_string()),
            password: None,
        };
        assert!(validate_update_user(&req).is_err());
    }

    #[test]
    fn test_create_note_empty_title() {
        let req = CreateNoteRequest {
            title: String::new(),
            description: "d".to_string(),
        };
        let err = validate_create_note(&req).unwrap_err();
        assert!(err.to_string().contains("Title must not be empty"));
    }

    #[test]
    fn test_create_note_empty_description() {
        let req = CreateNoteRequest {
            title: "t".to_string(),
            description: String::new(),
        };
        let err = validate_create_note(&req).unwrap_err();
        assert!(err.to_string().contains("Description must not be empty"));
    }

    #[test]
    fn test_create_note_title_max_100() {
        let req = CreateNoteRequest {
            title: "a".repeat(101),
            description: "d".to_string(),
        };
        assert!(validate_create_note(&req).is_err());

        let req = CreateNoteRequest {
            title: "a".repeat(100),
            description: "d".to_string(),
        };
        assert!(validate_create_note(&req).is_ok());
    }

    #[test]
    fn test_note_id_must_be_positive() {
        assert!(validate_note_id(1).is_ok());
        assert!(validate_note_id(0).is_err());
        assert!(validate_note_id(-3).is_err());
    }

    fn search(title: Option<&str>, page: i64, size: i64) -> SearchNoteRequest {
        SearchNoteRequest {
            title: title.map(String::from),
            page,
            size,
        }
    }

    #[test]
    fn test_search_defaults_shape_valid() {
        assert!(validate_search(&search(None, 1, 10)).is_ok());
    }

    #[test]
    fn test_search_page_below_one() {
        assert!(validate_search(&search(None, 0, 10)).is_err());
    }

    #[test]
    fn test_search_size_bounds() {
        assert!(validate_search(&search(None, 1, 0)).is_err());
        assert!(validate_search(&search(None, 1, 101)).is_err());
        assert!(validate_search(&search(None, 1, 1)).is_ok());
        assert!(validate_search(&search(None, 1, 100)).is_ok());
    }

    #[test]
    fn test_search_empty_title_filter_rejected() {
        assert!(validate_search(&search(Some(""), 1, 10)).is_err());
    }
}
