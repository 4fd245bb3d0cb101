use chrono::{NaiveDate, Utc};
use entities::sermon;
use sea_orm::Set;
use uuid::Uuid;

pub fn sermon() -> sermon::ActiveModel {
    let now = Utc::now();
    sermon::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set("The good shepherd".to_string()),
        speaker: Set("Pastor Ruth".to_string()),
        preached_on: Set(now.date_naive()),
        scripture: Set(Some("John 10:11".to_string())),
        description: Set(None),
        series: Set(None),
        video_url: Set(None),
        audio_url: Set(None),
        thumbnail_url: Set(None),
        is_published: Set(true),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait SermonFactory {
    fn preached_on(self, preached_on: NaiveDate) -> sermon::ActiveModel;
    fn series(self, series: &str) -> sermon::ActiveModel;
    fn speaker(self, speaker: &str) -> sermon::ActiveModel;
    fn is_published(self, is_published: bool) -> sermon::ActiveModel;
}

impl SermonFactory for sermon::ActiveModel {
    fn preached_on(mut self, preached_on: NaiveDate) -> sermon::ActiveModel {
        self.preached_on = Set(preached_on);
        self
    }

    fn series(mut self, series: &str) -> sermon::ActiveModel {
        self.series = Set(Some(series.to_string()));
        self
    }

    fn speaker(mut self, speaker: &str) -> sermon::ActiveModel {
        self.speaker = Set(speaker.to_string());
        self
    }

    fn is_published(mut self, is_published: bool) -> sermon::ActiveModel {
        self.is_published = Set(is_published);
        self
    }
}
