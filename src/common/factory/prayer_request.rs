use chrono::Utc;
use entities::{prayer_request, sea_orm_active_enums::PrayerRequestStatus};
use sea_orm::Set;
use uuid::Uuid;

pub fn prayer_request() -> prayer_request::ActiveModel {
    let now = Utc::now();
    prayer_request::ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set(Some("Hannah".to_string())),
        email: Set(Some("hannah@test.com".to_string())),
        request: Set("Please pray for my family.".to_string()),
        is_anonymous: Set(false),
        is_public: Set(false),
        status: Set(PrayerRequestStatus::Pending),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait PrayerRequestFactory {
    fn is_public(self, is_public: bool) -> prayer_request::ActiveModel;
    fn anonymous(self) -> prayer_request::ActiveModel;
    fn status(self, status: PrayerRequestStatus) -> prayer_request::ActiveModel;
}

impl PrayerRequestFactory for prayer_request::ActiveModel {
    fn is_public(mut self, is_public: bool) -> prayer_request::ActiveModel {
        self.is_public = Set(is_public);
        self
    }

    fn anonymous(mut self) -> prayer_request::ActiveModel {
        self.is_anonymous = Set(true);
        self.name = Set(None);
        self.email = Set(None);
        self
    }

    fn status(mut self, status: PrayerRequestStatus) -> prayer_request::ActiveModel {
        self.status = Set(status);
        self
    }
}
