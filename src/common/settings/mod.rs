use std::{env, str::FromStr};

use crate::settings::types::{
    ApplicationSettings, DatabaseSettings, Environment, SecretSettings, Settings, UploadSettings,
};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    if let Err(e) = dotenvy::from_filename(env_file_name) {
        if !e.not_found() {
            return Err(format!("Failed to fetch env file: {}", e));
        }
    }

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_testing_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => return Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

pub fn get_test_settings() -> Settings {
    get_settings(".env.testing").expect("Error on getting settings.")
}

fn get_testing_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            ..b.application
        },
        debug: false,
        secret: SecretSettings {
            token_expiration_hours: 1,
            ..b.secret
        },
        ..b
    })
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            port: get_env_var_or("APP_APPLICATION__PORT", s.application.port)?,
            ..s.application
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        secret: SecretSettings {
            jwt_secret: get_env_var("APP_SECRET__JWT_SECRET")?,
            token_expiration_hours: get_env_var_or(
                "APP_SECRET__TOKEN_EXPIRATION_HOURS",
                s.secret.token_expiration_hours,
            )?,
        },
        upload: UploadSettings {
            dir: env::var("APP_UPLOAD__DIR").unwrap_or(s.upload.dir),
            max_image_bytes: get_env_var_or("APP_UPLOAD__MAX_IMAGE_BYTES", s.upload.max_image_bytes)?,
            max_video_bytes: get_env_var_or("APP_UPLOAD__MAX_VIDEO_BYTES", s.upload.max_video_bytes)?,
        },
    })
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}

fn get_env_var_or<T: FromStr>(key: &str, default: T) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => parse_value(key, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| format!("Failed to parse {}: {}", key, e))
}
