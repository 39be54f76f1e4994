//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTask, NewTodo, Page, Todo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self, page: u32, size: u32) -> HttpRequest {
        HttpRequest::without_body(
            HttpMethod::Get,
            format!("{}/todos?page={page}&size={size}", self.base_url),
        )
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Get, format!("{}/todos/{id}", self.base_url))
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/todos", self.base_url),
            to_json(input)?,
        ))
    }

    pub fn build_add_task(&self, todo_id: i64, input: &NewTask) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/todos/{todo_id}/tasks", self.base_url),
            to_json(input)?,
        ))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Delete, format!("{}/todos/{id}", self.base_url))
    }

    pub fn build_delete_task(&self, id: i64) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Delete, format!("{}/tasks/{id}", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Page<Todo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    /// The server answers with the parent todo, tasks included.
    pub fn parse_add_task(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn to_json<T: Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_carries_paging() {
        let req = client().build_list_todos(2, 5);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos?page=2&size=5");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_json_body() {
        let input = NewTodo::new("Mr. Test", "Remember to test.");
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["author"], "Mr. Test");
        assert_eq!(body["details"], "Remember to test.");
    }

    #[test]
    fn build_add_task_targets_parent_todo() {
        let input = NewTask {
            completed: true,
            details: "Done already".to_string(),
        };
        let req = client().build_add_task(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos/7/tasks");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["completed"], true);
        assert_eq!(body["details"], "Done already");
    }

    #[test]
    fn build_delete_requests() {
        let req = client().build_delete_todo(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/3");

        let req = client().build_delete_task(4);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/tasks/4");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"{"content":[{"id":1,"author":"A","details":"D","tasks":[]}],
            "number":0,"size":20,"totalElements":1,"totalPages":1}"#;
        let page = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].author, "A");
        assert_eq!(page.total_elements, 1);
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client().parse_get_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_todo_bad_request() {
        let err = client()
            .parse_create_todo(response(400, r#"{"error":"author must not be blank"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 400, .. }));
    }

    #[test]
    fn parse_add_task_returns_parent_with_tasks() {
        let body = r#"{"id":1,"author":"A","details":"D",
            "tasks":[{"id":1,"completed":false,"details":"Task 1"}]}"#;
        let todo = client().parse_add_task(response(201, body)).unwrap();
        assert_eq!(todo.tasks.len(), 1);
        assert_eq!(todo.tasks[0].details, "Task 1");
    }

    #[test]
    fn parse_delete_statuses() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
        assert!(client().parse_delete_task(response(204, "")).is_ok());
        let err = client().parse_delete_task(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        assert_eq!(client.build_get_todo(1).path, "http://localhost:3000/todos/1");
    }

    #[test]
    fn parse_get_todo_bad_json() {
        let err = client().parse_get_todo(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
