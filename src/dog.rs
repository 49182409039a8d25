use serde::Serialize;
use std::fmt;

#[derive(sqlx::FromRow, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Dog {
    pub id: i64,
    pub name: Option<String>,
    pub breed: Option<String>,
}

impl Dog {
    pub fn is(&self, name: &str, breed: &str) -> bool {
        self.name.as_deref() == Some(name) && self.breed.as_deref() == Some(breed)
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.id,
            self.name.as_deref().unwrap_or("NULL"),
            self.breed.as_deref().unwrap_or("NULL"),
        )
    }
}
