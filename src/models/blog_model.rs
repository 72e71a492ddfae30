use entity::blog_post;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use super::{is_url, required, FieldView, FormErrors, INVALID_URL_MESSAGE, REQUIRED_MESSAGE};

pub const TITLE_TAKEN_MESSAGE: &str = "A post with this title already exists.";

/// The new/edit post form, keyed by the names the HTML inputs submit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PostForm {
    pub blog_post_title: String,
    pub blog_subtitle: String,
    pub author_name: String,
    pub blog_img_url: String,
    pub blog_content: String,
}

impl PostForm {
    pub fn from_model(post: &blog_post::Model) -> Self {
        Self {
            blog_post_title: post.title.clone(),
            blog_subtitle: post.subtitle.clone(),
            author_name: post.author.clone(),
            blog_img_url: post.img_url.clone(),
            blog_content: post.body.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        for (name, value) in [
            ("blog_post_title", &self.blog_post_title),
            ("blog_subtitle", &self.blog_subtitle),
            ("author_name", &self.author_name),
            ("blog_img_url", &self.blog_img_url),
            ("blog_content", &self.blog_content),
        ] {
            if !required(value) {
                errors.add(name, REQUIRED_MESSAGE);
            }
        }

        if !is_url(&self.blog_img_url) {
            errors.add("blog_img_url", INVALID_URL_MESSAGE);
        }

        errors.into_result()
    }

    pub fn fields(&self, errors: &FormErrors) -> Vec<FieldView> {
        vec![
            FieldView::text("blog_post_title", "Blog Post Title", &self.blog_post_title, errors),
            FieldView::text("blog_subtitle", "Blog Subtitle", &self.blog_subtitle, errors),
            FieldView::text("author_name", "Author Name", &self.author_name, errors),
            FieldView::text("blog_img_url", "Blog Image URL", &self.blog_img_url, errors)
                .input_type("url"),
            FieldView::text("blog_content", "Blog Content", &self.blog_content, errors)
                .multiline(),
        ]
    }

    /// A fresh record stamped with `date`; the id is left to the database.
    pub fn into_active_model(self, date: String) -> blog_post::ActiveModel {
        let mut post = blog_post::ActiveModel::default();
        self.apply_to(&mut post, date);
        post
    }

    /// Overwrites every column of `post` with the submitted values.
    pub fn apply_to(self, post: &mut blog_post::ActiveModel, date: String) {
        post.title = Set(self.blog_post_title);
        post.subtitle = Set(self.blog_subtitle);
        post.author = Set(self.author_name);
        post.img_url = Set(self.blog_img_url);
        post.body = Set(self.blog_content);
        post.date = Set(date);
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue::NotSet;

    use super::*;

    fn filled() -> PostForm {
        PostForm {
            blog_post_title: "The Life of Cactus".to_string(),
            blog_subtitle: "Who knew that cacti lived such interesting lives.".to_string(),
            author_name: "Angela Yu".to_string(),
            blog_img_url: "https://images.unsplash.com/photo-1530482054429.jpg".to_string(),
            blog_content: "<p>Nori grape silver beet broccoli kombu beet greens.</p>".to_string(),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn every_blank_field_is_reported() {
        let errors = PostForm::default().validate().unwrap_err();

        assert_eq!(errors.len(), 5);
        for field in [
            "blog_post_title",
            "blog_subtitle",
            "author_name",
            "blog_img_url",
            "blog_content",
        ] {
            assert_eq!(errors.get(field), Some(REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn image_must_be_url_shaped() {
        let form = PostForm {
            blog_img_url: "cactus.jpg".to_string(),
            ..filled()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("blog_img_url"), Some(INVALID_URL_MESSAGE));
    }

    #[test]
    fn whitespace_only_title_is_missing() {
        let form = PostForm {
            blog_post_title: "   ".to_string(),
            ..filled()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("blog_post_title"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn maps_form_fields_onto_columns() {
        let post = filled().into_active_model("October 19, 2026".to_string());

        assert_eq!(post.id, NotSet);
        assert_eq!(post.title, Set("The Life of Cactus".to_string()));
        assert_eq!(post.author, Set("Angela Yu".to_string()));
        assert_eq!(post.date, Set("October 19, 2026".to_string()));
        assert_eq!(
            post.body,
            Set("<p>Nori grape silver beet broccoli kombu beet greens.</p>".to_string())
        );
    }

    #[test]
    fn prepopulates_from_record() {
        let model = blog_post::Model {
            id: 7,
            title: "t".to_string(),
            subtitle: "s".to_string(),
            date: "May 01, 2024".to_string(),
            body: "b".to_string(),
            author: "a".to_string(),
            img_url: "https://example.com/i.png".to_string(),
        };

        let form = PostForm::from_model(&model);
        assert_eq!(form.blog_post_title, "t");
        assert_eq!(form.blog_subtitle, "s");
        assert_eq!(form.author_name, "a");
        assert_eq!(form.blog_img_url, "https://example.com/i.png");
        assert_eq!(form.blog_content, "b");
    }

    #[test]
    fn field_views_carry_errors() {
        let form = PostForm::default();
        let errors = form.validate().unwrap_err();
        let fields = form.fields(&errors);

        assert_eq!(fields.len(), 5);
        assert!(fields.iter().all(|f| f.error.as_deref() == Some(REQUIRED_MESSAGE)));
        assert!(fields[4].multiline);
    }
}
