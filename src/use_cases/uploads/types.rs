use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Video,
}

impl UploadKind {
    /// Subdirectory of the upload dir, also the first path segment of the public url.
    pub fn dir_name(&self) -> &'static str {
        match self {
            UploadKind::Image => "images",
            UploadKind::Video => "videos",
        }
    }

    /// Allowed MIME types paired with the extension a stored file gets.
    pub fn allowed_types(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            UploadKind::Image => &[
                ("image/jpeg", "jpg"),
                ("image/png", "png"),
                ("image/gif", "gif"),
                ("image/webp", "webp"),
            ],
            UploadKind::Video => &[
                ("video/mp4", "mp4"),
                ("video/webm", "webm"),
                ("video/quicktime", "mov"),
                ("video/ogg", "ogv"),
            ],
        }
    }
}

impl std::str::FromStr for UploadKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" | "images" => Ok(UploadKind::Image),
            "video" | "videos" => Ok(UploadKind::Video),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct UploadVisible {
    pub filename: String,
    pub url: String,
    pub size: u64,
    pub mime_type: String,
}
