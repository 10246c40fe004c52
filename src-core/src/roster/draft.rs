use super::types::{ProfileExtra, ProfileRecord};

/// Editable text form of a [`ProfileRecord`], as held by the admin editor.
/// Tags are a single comma-separated field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub tags: String,
    pub location: String,
    pub contact: String,
}

impl ProfileDraft {
    pub fn from_record(record: &ProfileRecord) -> Self {
        let extra = record.extra.clone().unwrap_or_default();
        Self {
            name: record.name.clone(),
            role: record.role.clone(),
            bio: record.bio.clone(),
            image: record.image.clone(),
            tags: record.tags.join(", "),
            location: extra.location.unwrap_or_default(),
            contact: extra.contact.unwrap_or_default(),
        }
    }

    pub fn into_record(self, id: u32) -> ProfileRecord {
        let extra = ProfileExtra {
            location: non_empty(self.location),
            contact: non_empty(self.contact),
        };
        ProfileRecord {
            id,
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            bio: self.bio.trim().to_string(),
            image: self.image.trim().to_string(),
            tags: self
                .tags
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
            extra: if extra.is_empty() { None } else { Some(extra) },
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
