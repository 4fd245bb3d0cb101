use chrono::{DateTime, FixedOffset, Utc};
use entities::{blog, sea_orm_active_enums::BlogStatus};
use sea_orm::Set;
use uuid::Uuid;

pub fn blog(author_id: Uuid) -> blog::ActiveModel {
    let now = Utc::now();
    let id = Uuid::now_v7();
    blog::ActiveModel {
        id: Set(id),
        title: Set("Walking in faith".to_string()),
        slug: Set(format!("walking-in-faith-{}", id.simple())),
        content: Set("Content of the blog post.".to_string()),
        excerpt: Set(None),
        featured_image: Set(None),
        category: Set("General".to_string()),
        tags: Set("".to_string()),
        status: Set(BlogStatus::Draft),
        views: Set(0),
        author_id: Set(Some(author_id)),
        published_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait BlogFactory {
    fn published(self) -> blog::ActiveModel;
    fn published_at(self, published_at: DateTime<FixedOffset>) -> blog::ActiveModel;
    fn status(self, status: BlogStatus) -> blog::ActiveModel;
    fn title(self, title: &str) -> blog::ActiveModel;
    fn category(self, category: &str) -> blog::ActiveModel;
    fn views(self, views: i32) -> blog::ActiveModel;
}

impl BlogFactory for blog::ActiveModel {
    fn published(self) -> blog::ActiveModel {
        self.published_at(Utc::now().into())
    }

    fn published_at(mut self, published_at: DateTime<FixedOffset>) -> blog::ActiveModel {
        self.status = Set(BlogStatus::Published);
        self.published_at = Set(Some(published_at));
        self
    }

    fn status(mut self, status: BlogStatus) -> blog::ActiveModel {
        self.status = Set(status);
        self
    }

    fn title(mut self, title: &str) -> blog::ActiveModel {
        self.title = Set(title.to_string());
        self
    }

    fn category(mut self, category: &str) -> blog::ActiveModel {
        self.category = Set(category.to_string());
        self
    }

    fn views(mut self, views: i32) -> blog::ActiveModel {
        self.views = Set(views);
        self
    }
}
