use serde::Deserialize;

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub secret: SecretSettings,
    pub upload: UploadSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                port: 5000,
                max_log_files: 14,
                ..Default::default()
            },
            secret: SecretSettings {
                token_expiration_hours: 24,
                ..Default::default()
            },
            upload: UploadSettings {
                dir: "uploads".to_string(),
                max_image_bytes: 5 * 1024 * 1024,
                max_video_bytes: 100 * 1024 * 1024,
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub max_log_files: usize,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Clone, Default)]
pub struct SecretSettings {
    pub jwt_secret: String,
    pub token_expiration_hours: i64,
}

impl std::fmt::Debug for SecretSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSettings")
            .field("jwt_secret", &"[redacted]")
            .field("token_expiration_hours", &self.token_expiration_hours)
            .finish()
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct UploadSettings {
    pub dir: String,
    pub max_image_bytes: u64,
    pub max_video_bytes: u64,
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
