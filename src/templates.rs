use askama::Template;
use entity::blog_post;

use crate::models::FieldView;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub all_posts: Vec<blog_post::Model>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: blog_post::Model,
}

#[derive(Template)]
#[template(path = "make-post.html")]
pub struct MakePostTemplate {
    pub fields: Vec<FieldView>,
    pub is_edit: bool,
    pub action: String,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
