use std::sync::Arc;

use askama::Template;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use chrono::Local;
use entity::blog_post;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder, SqlErr,
};

use crate::error::AppError;
use crate::models::blog_model::{PostForm, TITLE_TAKEN_MESSAGE};
use crate::models::FormErrors;
use crate::templates::{IndexTemplate, MakePostTemplate, PostTemplate};

pub fn blog_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/", get(get_all_posts))
        .route("/post/:id", get(show_post))
        .route("/add_new_post", get(new_post_form).post(add_new_post))
        .route("/edit-post/:id", get(edit_post_form).post(edit_post))
        .route("/delete-post/:id", get(delete_post).post(delete_post))
        .layer(Extension(db))
}

/// Today's date the way posts display it, e.g. `October 19, 2026`.
pub fn today_stamp() -> String {
    Local::now().format("%B %d, %Y").to_string()
}

async fn get_all_posts(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Html<String>, AppError> {
    let all_posts = blog_post::Entity::find()
        .order_by_asc(blog_post::Column::Id)
        .all(db.as_ref())
        .await?;

    Ok(Html(IndexTemplate { all_posts }.render()?))
}

async fn show_post(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Html<String>, AppError> {
    let post = find_post(db.as_ref(), parse_id(&id)?).await?;

    Ok(Html(PostTemplate { post }.render()?))
}

async fn new_post_form() -> Result<Html<String>, AppError> {
    render_form(&PostForm::default(), &FormErrors::new(), None)
}

async fn add_new_post(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(render_form(&form, &errors, None)?.into_response());
    }

    let new_post = form.clone().into_active_model(today_stamp());
    match new_post.insert(db.as_ref()).await {
        Ok(post) => {
            tracing::info!(id = post.id, title = %post.title, "created post");
            Ok(Redirect::to("/").into_response())
        }
        Err(err) if is_title_taken(&err) => {
            Ok(render_form(&form, &title_taken(), None)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn edit_post_form(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let post = find_post(db.as_ref(), id).await?;

    render_form(&PostForm::from_model(&post), &FormErrors::new(), Some(id))
}

async fn edit_post(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let post = find_post(db.as_ref(), id).await?;

    if let Err(errors) = form.validate() {
        return Ok(render_form(&form, &errors, Some(id))?.into_response());
    }

    // publish date is re-stamped on every edit
    let mut post: blog_post::ActiveModel = post.into();
    form.clone().apply_to(&mut post, today_stamp());

    match post.update(db.as_ref()).await {
        Ok(post) => {
            tracing::info!(id = post.id, title = %post.title, "updated post");
            Ok(Redirect::to("/").into_response())
        }
        Err(err) if is_title_taken(&err) => {
            Ok(render_form(&form, &title_taken(), Some(id))?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn delete_post(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    match blog_post::Entity::find_by_id(id).one(db.as_ref()).await? {
        Some(post) => {
            post.delete(db.as_ref()).await?;
            tracing::info!(id, "deleted post");
            Ok(Redirect::to("/").into_response())
        }
        None => {
            // no error page here, the miss is only logged
            tracing::warn!(id, "post not found");
            Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

/// Only plain digits name a post; anything else, or an id out of range, is not found.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound);
    }
    raw.parse().map_err(|_| AppError::NotFound)
}

async fn find_post(db: &DatabaseConnection, id: i32) -> Result<blog_post::Model, AppError> {
    blog_post::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)
}

fn render_form(
    form: &PostForm,
    errors: &FormErrors,
    editing: Option<i32>,
) -> Result<Html<String>, AppError> {
    let action = match editing {
        Some(id) => format!("/edit-post/{id}"),
        None => "/add_new_post".to_string(),
    };

    let page = MakePostTemplate {
        fields: form.fields(errors),
        is_edit: editing.is_some(),
        action,
    };

    Ok(Html(page.render()?))
}

fn is_title_taken(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn title_taken() -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add("blog_post_title", TITLE_TAKEN_MESSAGE);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digit_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
    }

    #[test]
    fn other_ids_are_not_found() {
        for raw in ["", "abc", "-1", "+1", "1.5", "99999999999"] {
            assert!(matches!(parse_id(raw), Err(AppError::NotFound)), "{raw}");
        }
    }
}
