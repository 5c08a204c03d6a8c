use std::fmt::Write;

use axum::response::Html;

use crate::error::AppError;
use crate::modules::notes::types::Note;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Index,
    Add,
    Edit,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Index => "index",
            View::Add => "add",
            View::Edit => "edit",
        }
    }
}

/// Data handed to a view.
#[derive(Clone, Debug)]
pub enum ViewModel {
    List(Vec<(String, Note)>),
    Edit { id: String, note: Note },
    Empty,
}

/// Renders `view` inside the base layout.
pub fn render(view: View, model: ViewModel) -> Result<Html<String>, AppError> {
    let mut content = String::new();
    let written = match (view, model) {
        (View::Index, ViewModel::List(notes)) => index(&mut content, notes),
        (View::Add, ViewModel::Empty) => note_form(&mut content, "Add Note", "/notes/save", None),
        (View::Edit, ViewModel::Edit { id, note }) => {
            let action = format!("/notes/update/{}", escape(&id));
            note_form(&mut content, "Edit Note", &action, Some(&note))
        }
        (view, model) => {
            return Err(AppError::Render(format!(
                "view {:?} cannot display {}",
                view.name(),
                model_kind(&model)
            )))
        }
    };
    written.map_err(|e| AppError::Render(e.to_string()))?;

    let mut page = String::with_capacity(content.len() + 512);
    base(&mut page, &content).map_err(|e| AppError::Render(e.to_string()))?;
    Ok(Html(page))
}

fn model_kind(model: &ViewModel) -> &'static str {
    match model {
        ViewModel::List(_) => "a note list",
        ViewModel::Edit { .. } => "a single note",
        ViewModel::Empty => "no data",
    }
}

fn base(out: &mut String, content: &str) -> std::fmt::Result {
    write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Notes</title>
<link rel="stylesheet" href="/public/css/style.css">
</head>
<body>
<nav><a href="/">All Notes</a> | <a href="/notes/add">Add Note</a></nav>
<main>
{content}
</main>
</body>
</html>
"#
    )
}

fn index(out: &mut String, mut notes: Vec<(String, Note)>) -> std::fmt::Result {
    // numeric keys sort by value, anything else goes last
    notes.sort_by_key(|(id, _)| (id.parse::<u64>().unwrap_or(u64::MAX), id.clone()));

    writeln!(out, "<h1>Notes</h1>")?;
    if notes.is_empty() {
        return writeln!(out, r#"<p class="empty">No notes yet.</p>"#);
    }

    writeln!(out, "<table>")?;
    writeln!(out, "<tr><th>Title</th><th>Description</th><th>Created On</th><th></th></tr>")?;
    for (id, note) in &notes {
        let id = escape(id);
        writeln!(
            out,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><a href="/notes/edit/{id}">Edit</a> <a href="/notes/delete/{id}">Delete</a></td></tr>"#,
            escape(&note.title),
            escape(&note.description),
            note.created_on.format("%Y-%m-%d %H:%M:%S UTC"),
        )?;
    }
    writeln!(out, "</table>")
}

fn note_form(out: &mut String, heading: &str, action: &str, note: Option<&Note>) -> std::fmt::Result {
    let (title, description) = note
        .map(|n| (escape(&n.title), escape(&n.description)))
        .unwrap_or_default();

    write!(
        out,
        r#"<h1>{heading}</h1>
<form action="{action}" method="post">
<p><label for="title">Title</label><br><input type="text" id="title" name="title" value="{title}"></p>
<p><label for="description">Description</label><br><textarea id="description" name="description">{description}</textarea></p>
<p><input type="submit" value="Save"></p>
</form>
"#
    )
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
