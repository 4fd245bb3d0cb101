use chrono::{DateTime, Duration, FixedOffset, Utc};
use entities::event;
use sea_orm::Set;
use uuid::Uuid;

pub fn event(created_by: Uuid) -> event::ActiveModel {
    let now = Utc::now();
    event::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set("Sunday picnic".to_string()),
        description: Set("Bring something to share.".to_string()),
        location: Set("Church garden".to_string()),
        category: Set("Fellowship".to_string()),
        start_at: Set((now + Duration::days(7)).into()),
        end_at: Set(None),
        image_url: Set(None),
        max_attendees: Set(None),
        registration_required: Set(false),
        is_published: Set(true),
        created_by: Set(Some(created_by)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait EventFactory {
    fn start_at(self, start_at: DateTime<FixedOffset>) -> event::ActiveModel;
    fn max_attendees(self, max_attendees: i32) -> event::ActiveModel;
    fn is_published(self, is_published: bool) -> event::ActiveModel;
    fn category(self, category: &str) -> event::ActiveModel;
}

impl EventFactory for event::ActiveModel {
    fn start_at(mut self, start_at: DateTime<FixedOffset>) -> event::ActiveModel {
        self.start_at = Set(start_at);
        self
    }

    fn max_attendees(mut self, max_attendees: i32) -> event::ActiveModel {
        self.max_attendees = Set(Some(max_attendees));
        self.registration_required = Set(true);
        self
    }

    fn is_published(mut self, is_published: bool) -> event::ActiveModel {
        self.is_published = Set(is_published);
        self
    }

    fn category(mut self, category: &str) -> event::ActiveModel {
        self.category = Set(category.to_string());
        self
    }
}
