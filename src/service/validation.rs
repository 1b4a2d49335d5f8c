//! Request validation: declarative per-field rules, evaluated eagerly so every violation is reported.

use crate::config::YearLimits;
use crate::error::{AppError, FieldError, Location};
use crate::model::{Category, MoviePatch};
use serde_json::{Map, Value};

/// Writable movie fields, by request key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieField {
    Title,
    Author,
    ReleaseYear,
    Category,
}

impl MovieField {
    pub fn key(&self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Author => "author",
            MovieField::ReleaseYear => "release_year",
            MovieField::Category => "category",
        }
    }
}

/// Predicate applied to a present value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    NonEmptyText,
    YearAtLeast(i32),
    KnownCategory,
}

/// One (field, predicate, message) rule.
#[derive(Clone, Debug)]
pub struct FieldRule {
    pub field: MovieField,
    pub required: bool,
    pub check: Check,
    pub message: String,
}

/// Validated value produced by a passing check.
enum Checked {
    Text(String),
    Year(i32),
    Category(Category),
}

impl Check {
    fn apply(&self, v: &Value) -> Option<Checked> {
        match (self, v) {
            (Check::NonEmptyText, Value::String(s)) if !s.is_empty() => {
                Some(Checked::Text(s.clone()))
            }
            (Check::YearAtLeast(min), v) => {
                let n = match v {
                    Value::Number(n) => n.as_i64()?,
                    Value::String(s) => s.trim().parse::<i64>().ok()?,
                    _ => return None,
                };
                let year = i32::try_from(n).ok()?;
                (year >= *min).then_some(Checked::Year(year))
            }
            (Check::KnownCategory, Value::String(s)) => Category::parse(s).map(Checked::Category),
            _ => None,
        }
    }
}

/// The rule list attached to one operation.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// All four fields required.
    pub fn for_create(limits: &YearLimits) -> Self {
        Self {
            rules: field_rules(true, limits.create_min),
        }
    }

    /// All four fields optional, same constraints when present.
    pub fn for_update(limits: &YearLimits) -> Self {
        Self {
            rules: field_rules(false, limits.update_min),
        }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Evaluate every rule against `body`, collecting violations. Unknown keys are ignored.
    /// Absent and `null` fields count as not supplied.
    pub fn check(&self, body: &Map<String, Value>, errors: &mut Vec<FieldError>) -> MoviePatch {
        let mut patch = MoviePatch::default();
        for rule in &self.rules {
            let value = body.get(rule.field.key()).filter(|v| !v.is_null());
            let Some(value) = value else {
                if rule.required {
                    errors.push(field_error(rule, None));
                }
                continue;
            };
            match (rule.field, rule.check.apply(value)) {
                (MovieField::Title, Some(Checked::Text(s))) => patch.title = Some(s),
                (MovieField::Author, Some(Checked::Text(s))) => patch.author = Some(s),
                (MovieField::ReleaseYear, Some(Checked::Year(y))) => patch.release_year = Some(y),
                (MovieField::Category, Some(Checked::Category(c))) => patch.category = Some(c),
                _ => errors.push(field_error(rule, Some(value.clone()))),
            }
        }
        patch
    }
}

fn field_rules(required: bool, min_year: i32) -> Vec<FieldRule> {
    vec![
        FieldRule {
            field: MovieField::Title,
            required,
            check: Check::NonEmptyText,
            message: "title must be a non-empty string".into(),
        },
        FieldRule {
            field: MovieField::Author,
            required,
            check: Check::NonEmptyText,
            message: "author must be a non-empty string".into(),
        },
        FieldRule {
            field: MovieField::ReleaseYear,
            required,
            check: Check::YearAtLeast(min_year),
            message: format!(
                "release_year must be an integer greater than or equal to {}",
                min_year
            ),
        },
        FieldRule {
            field: MovieField::Category,
            required,
            check: Check::KnownCategory,
            message: format!("category must be one of: {}", Category::labels().join(", ")),
        },
    ]
}

fn field_error(rule: &FieldRule, value: Option<Value>) -> FieldError {
    let message = if value.is_none() {
        format!("{} is required; {}", rule.field.key(), rule.message)
    } else {
        rule.message.clone()
    };
    FieldError {
        field: rule.field.key().to_string(),
        location: Location::Body,
        message,
        value,
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Path identifier must parse as an integer.
    pub fn path_id(raw: &str) -> Result<i64, AppError> {
        let mut errors = Vec::new();
        let id = check_id(raw, &mut errors);
        match id {
            Some(id) if errors.is_empty() => Ok(id),
            _ => Err(AppError::Validation(errors)),
        }
    }

    /// Validate a body against `rules`, returning the typed fields it supplies.
    pub fn body(body: &Map<String, Value>, rules: &RuleSet) -> Result<MoviePatch, AppError> {
        let mut errors = Vec::new();
        let patch = rules.check(body, &mut errors);
        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(AppError::Validation(errors))
        }
    }

    /// Validate path id and body together so both kinds of violation are reported at once.
    pub fn id_and_body(
        raw_id: &str,
        body: &Map<String, Value>,
        rules: &RuleSet,
    ) -> Result<(i64, MoviePatch), AppError> {
        let mut errors = Vec::new();
        let id = check_id(raw_id, &mut errors);
        let patch = rules.check(body, &mut errors);
        match id {
            Some(id) if errors.is_empty() => Ok((id, patch)),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn check_id(raw: &str, errors: &mut Vec<FieldError>) -> Option<i64> {
    let id = raw.parse::<i64>().ok();
    if id.is_none() {
        errors.push(FieldError {
            field: "id".into(),
            location: Location::Params,
            message: "id must be an integer".into(),
            value: Some(Value::String(raw.to_string())),
        });
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    fn fields(err: AppError) -> Vec<String> {
        match err {
            AppError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_accepts_complete_payload() {
        let rules = RuleSet::for_create(&YearLimits::default());
        let body = object(json!({
            "title": "Inception",
            "author": "Nolan",
            "release_year": 2010,
            "category": "Science Fiction"
        }));
        let patch = RequestValidator::body(&body, &rules).unwrap();
        let movie = patch.into_new().unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.release_year, 2010);
        assert_eq!(movie.category, Category::ScienceFiction);
    }

    #[test]
    fn create_reports_every_missing_field() {
        let rules = RuleSet::for_create(&YearLimits::default());
        let err = RequestValidator::body(&Map::new(), &rules).unwrap_err();
        assert_eq!(fields(err), ["title", "author", "release_year", "category"]);
    }

    #[test]
    fn create_rejects_unknown_category() {
        let rules = RuleSet::for_create(&YearLimits::default());
        let body = object(json!({
            "title": "T",
            "author": "A",
            "release_year": 2000,
            "category": "Musical"
        }));
        let err = RequestValidator::body(&body, &rules).unwrap_err();
        assert_matches!(
            &err,
            AppError::Validation(errors) if errors[0].value == Some(json!("Musical"))
        );
        assert_eq!(fields(err), ["category"]);
    }

    #[test]
    fn create_year_floor_is_inclusive() {
        let rules = RuleSet::for_create(&YearLimits::default());
        let movie = |year: i32| {
            object(json!({"title": "T", "author": "A", "release_year": year, "category": "Action"}))
        };
        assert!(RequestValidator::body(&movie(1850), &rules).is_ok());
        let err = RequestValidator::body(&movie(1849), &rules).unwrap_err();
        assert_eq!(fields(err), ["release_year"]);
    }

    #[test]
    fn update_uses_its_own_year_floor() {
        let rules = RuleSet::for_update(&YearLimits::default());
        let body = object(json!({"release_year": 1870}));
        assert_eq!(fields(RequestValidator::body(&body, &rules).unwrap_err()), ["release_year"]);
        let body = object(json!({"release_year": 1888}));
        assert_eq!(RequestValidator::body(&body, &rules).unwrap().release_year, Some(1888));
    }

    #[test]
    fn update_skips_absent_and_null_fields() {
        let rules = RuleSet::for_update(&YearLimits::default());
        let body = object(json!({"title": "New Title", "author": null}));
        let patch = RequestValidator::body(&body, &rules).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New Title"));
        assert!(patch.author.is_none());
        assert!(patch.release_year.is_none());
    }

    #[test]
    fn present_but_empty_values_are_rejected() {
        let rules = RuleSet::for_update(&YearLimits::default());
        let body = object(json!({"title": "", "release_year": 0, "category": ""}));
        let err = RequestValidator::body(&body, &rules).unwrap_err();
        assert_eq!(fields(err), ["title", "release_year", "category"]);
    }

    #[test]
    fn whitespace_only_text_is_non_empty() {
        let rules = RuleSet::for_update(&YearLimits::default());
        let body = object(json!({"title": "   ", "author": " "}));
        let patch = RequestValidator::body(&body, &rules).unwrap();
        assert_eq!(patch.title.as_deref(), Some("   "));
        assert_eq!(patch.author.as_deref(), Some(" "));
    }

    #[test]
    fn year_accepts_numeric_strings_but_not_fractions() {
        let rules = RuleSet::for_update(&YearLimits::default());
        let body = object(json!({"release_year": "1999"}));
        assert_eq!(RequestValidator::body(&body, &rules).unwrap().release_year, Some(1999));
        let body = object(json!({"release_year": 1999.5}));
        assert!(RequestValidator::body(&body, &rules).is_err());
        let body = object(json!({"release_year": 99_999_999_999i64}));
        assert!(RequestValidator::body(&body, &rules).is_err());
    }

    #[test]
    fn title_must_be_a_string() {
        let rules = RuleSet::for_update(&YearLimits::default());
        let body = object(json!({"title": 42}));
        assert_eq!(fields(RequestValidator::body(&body, &rules).unwrap_err()), ["title"]);
    }

    #[test]
    fn path_id_must_be_an_integer() {
        assert_eq!(RequestValidator::path_id("42").unwrap(), 42);
        let err = RequestValidator::path_id("abc").unwrap_err();
        assert_matches!(
            &err,
            AppError::Validation(errors) if errors[0].location == Location::Params
        );
        assert_eq!(fields(err), ["id"]);
    }

    #[test]
    fn id_and_body_errors_are_reported_together() {
        let rules = RuleSet::for_update(&YearLimits::default());
        let body = object(json!({"category": "Musical"}));
        let err = RequestValidator::id_and_body("x1", &body, &rules).unwrap_err();
        assert_eq!(fields(err), ["id", "category"]);
    }
}
