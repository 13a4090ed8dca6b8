use chrono::{DateTime, NaiveDate, Utc};

use super::{CreateProfileDto, UpdateProfileDto};

/// Study tracker user profile
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub dob: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(dto: CreateProfileDto) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: dto.username,
            email: dto.email,
            name: dto.name,
            gender: dto.gender,
            age: dto.age,
            occupation: dto.occupation,
            dob: dto.dob,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, dto: UpdateProfileDto) {
        if let Some(email) = dto.email {
            self.email = email;
        }
        if dto.name.is_some() {
            self.name = dto.name;
        }
        if dto.gender.is_some() {
            self.gender = dto.gender;
        }
        if dto.age.is_some() {
            self.age = dto.age;
        }
        if dto.occupation.is_some() {
            self.occupation = dto.occupation;
        }
        if dto.dob.is_some() {
            self.dob = dto.dob;
        }
        self.updated_at = Utc::now();
    }
}
