use chrono::Utc;
use entities::{admin, sea_orm_active_enums::AdminRole};
use sea_orm::Set;

/// argon2 hash of "password".
pub const HASHED_PASSWORD: &str = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";

pub fn admin() -> admin::ActiveModel {
    let now = Utc::now();
    let id = uuid::Uuid::now_v7();
    admin::ActiveModel {
        id: Set(id),
        username: Set(format!("admin_{}", id.simple())),
        email: Set(format!("{}@test.com", id)),
        password: Set(HASHED_PASSWORD.to_string()),
        first_name: Set("Grace".to_string()),
        last_name: Set("Hopper".to_string()),
        role: Set(AdminRole::Admin),
        is_active: Set(true),
        last_login_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait AdminFactory {
    fn role(self, role: AdminRole) -> admin::ActiveModel;
    fn is_active(self, is_active: bool) -> admin::ActiveModel;
    fn password(self, hashed_password: &str) -> admin::ActiveModel;
}

impl AdminFactory for admin::ActiveModel {
    fn role(mut self, role: AdminRole) -> admin::ActiveModel {
        self.role = Set(role);
        self
    }

    fn is_active(mut self, is_active: bool) -> admin::ActiveModel {
        self.is_active = Set(is_active);
        self
    }

    fn password(mut self, hashed_password: &str) -> admin::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }
}
