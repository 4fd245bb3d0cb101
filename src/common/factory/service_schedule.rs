use chrono::{NaiveTime, Utc};
use entities::service_schedule;
use sea_orm::Set;
use uuid::Uuid;

pub fn service_schedule() -> service_schedule::ActiveModel {
    let now = Utc::now();
    service_schedule::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set("Sunday Worship".to_string()),
        day_of_week: Set(0),
        start_time: Set(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
        end_time: Set(NaiveTime::from_hms_opt(12, 0, 0)),
        location: Set("Main sanctuary".to_string()),
        description: Set(None),
        is_active: Set(true),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait ServiceScheduleFactory {
    fn day_of_week(self, day_of_week: i16) -> service_schedule::ActiveModel;
    fn start_time(self, start_time: NaiveTime) -> service_schedule::ActiveModel;
    fn is_active(self, is_active: bool) -> service_schedule::ActiveModel;
}

impl ServiceScheduleFactory for service_schedule::ActiveModel {
    fn day_of_week(mut self, day_of_week: i16) -> service_schedule::ActiveModel {
        self.day_of_week = Set(day_of_week);
        self
    }

    fn start_time(mut self, start_time: NaiveTime) -> service_schedule::ActiveModel {
        self.start_time = Set(start_time);
        self.end_time = Set(None);
        self
    }

    fn is_active(mut self, is_active: bool) -> service_schedule::ActiveModel {
        self.is_active = Set(is_active);
        self
    }
}
