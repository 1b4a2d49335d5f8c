//! The movie entity and the shapes it takes on the way in and out of the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Closed set of categories a movie may belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Romance,
    Action,
    Horror,
    Comedy,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Romance,
        Category::Action,
        Category::Horror,
        Category::Comedy,
        Category::ScienceFiction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Romance => "Romance",
            Category::Action => "Action",
            Category::Horror => "Horror",
            Category::Comedy => "Comedy",
            Category::ScienceFiction => "Science Fiction",
        }
    }

    /// Parse a canonical label or one of the legacy labels still sent by older clients.
    pub fn parse(label: &str) -> Option<Category> {
        let found = Self::ALL.into_iter().find(|c| c.as_str() == label);
        found.or(match label {
            "Acción" => Some(Category::Action),
            "Terror" => Some(Category::Horror),
            "Comedia" => Some(Category::Comedy),
            "Ciencia Ficción" => Some(Category::ScienceFiction),
            _ => None,
        })
    }

    /// Canonical labels joined for error messages and DDL.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Category::as_str).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted movie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Inception")]
    pub title: String,
    #[schema(example = "Christopher Nolan")]
    pub author: String,
    #[schema(example = 2010)]
    pub release_year: i32,
    pub category: Category,
}

/// A fully validated create payload. Carries exactly the four writable fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub author: String,
    pub release_year: i32,
    pub category: Category,
}

impl NewMovie {
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            author: self.author,
            release_year: self.release_year,
            category: self.category,
        }
    }
}

/// Sparse set of validated fields an update supplies. `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub release_year: Option<i32>,
    pub category: Option<Category>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.release_year.is_none()
            && self.category.is_none()
    }

    /// Apply the present fields to `movie` in place.
    pub fn apply(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(author) = &self.author {
            movie.author = author.clone();
        }
        if let Some(year) = self.release_year {
            movie.release_year = year;
        }
        if let Some(category) = self.category {
            movie.category = category;
        }
    }

    /// Promote to a create payload when every field is present.
    pub fn into_new(self) -> Option<NewMovie> {
        Some(NewMovie {
            title: self.title?,
            author: self.author?,
            release_year: self.release_year?,
            category: self.category?,
        })
    }
}

/// Request body of `POST /movies`, used for the API document.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct CreateMovieRequest {
    #[schema(example = "Inception")]
    pub title: String,
    #[schema(example = "Christopher Nolan")]
    pub author: String,
    #[schema(example = 2010, minimum = 1850)]
    pub release_year: i32,
    pub category: Category,
}

/// Request body of `PATCH /movies/{id}`, used for the API document.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UpdateMovieRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    #[schema(minimum = 1888)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_parse() {
        for c in Category::ALL {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("Musical"), None);
        assert_eq!(Category::parse("romance"), None);
    }

    #[test]
    fn legacy_category_labels_map_to_canonical() {
        assert_eq!(Category::parse("Acción"), Some(Category::Action));
        assert_eq!(Category::parse("Ciencia Ficción"), Some(Category::ScienceFiction));
    }

    #[test]
    fn science_fiction_serializes_with_space() {
        let v = serde_json::to_value(Category::ScienceFiction).unwrap();
        assert_eq!(v, "Science Fiction");
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut movie = Movie {
            id: 7,
            title: "Old".into(),
            author: "A".into(),
            release_year: 1999,
            category: Category::Comedy,
        };
        let patch = MoviePatch {
            title: Some("New Title".into()),
            ..Default::default()
        };
        patch.apply(&mut movie);
        assert_eq!(movie.title, "New Title");
        assert_eq!(movie.author, "A");
        assert_eq!(movie.release_year, 1999);
        assert_eq!(movie.category, Category::Comedy);
    }

    #[test]
    fn incomplete_patch_is_not_a_new_movie() {
        let patch = MoviePatch {
            title: Some("T".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert!(patch.into_new().is_none());
    }
}
