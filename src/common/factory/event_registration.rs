use chrono::Utc;
use entities::{event_registration, sea_orm_active_enums::RegistrationStatus};
use sea_orm::Set;
use uuid::Uuid;

pub fn event_registration(event_id: Uuid) -> event_registration::ActiveModel {
    let now = Utc::now();
    let id = Uuid::now_v7();
    event_registration::ActiveModel {
        id: Set(id),
        event_id: Set(event_id),
        name: Set("Martha".to_string()),
        email: Set(format!("{}@test.com", id)),
        phone: Set(None),
        attendees: Set(1),
        notes: Set(None),
        status: Set(RegistrationStatus::Registered),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait EventRegistrationFactory {
    fn attendees(self, attendees: i32) -> event_registration::ActiveModel;
    fn email(self, email: &str) -> event_registration::ActiveModel;
    fn status(self, status: RegistrationStatus) -> event_registration::ActiveModel;
}

impl EventRegistrationFactory for event_registration::ActiveModel {
    fn attendees(mut self, attendees: i32) -> event_registration::ActiveModel {
        self.attendees = Set(attendees);
        self
    }

    fn email(mut self, email: &str) -> event_registration::ActiveModel {
        self.email = Set(email.to_string());
        self
    }

    fn status(mut self, status: RegistrationStatus) -> event_registration::ActiveModel {
        self.status = Set(status);
        self
    }
}
