use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
    Form,
};
use http::{header, StatusCode};

use crate::error::AppError;
use crate::modules::notes::types::*;
use crate::modules::views::{render, View, ViewModel};
use crate::types::AppState;

fn redirect_home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}

pub async fn get_notes(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    render(View::Index, ViewModel::List(state.notes.list()))
}

pub async fn add_note() -> Result<Html<String>, AppError> {
    render(View::Add, ViewModel::Empty)
}

pub async fn save_note(
    State(state): State<AppState>,
    form: Option<Form<NoteForm>>,
) -> impl IntoResponse {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    state.notes.create(form.title, form.description);
    redirect_home()
}

pub async fn edit_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let EditNote { id, note } = state.notes.get(&id)?;
    render(View::Edit, ViewModel::Edit { id, note })
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Option<Form<NoteForm>>,
) -> Result<impl IntoResponse, AppError> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    state.notes.update(&id, form.title, form.description)?;
    Ok(redirect_home())
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.notes.delete(&id)?;
    Ok(redirect_home())
}
