//! Request key normalisation: camelCase and legacy field names -> canonical snake_case names.

use serde_json::{Map, Value};

/// Legacy field names still sent by clients of the first deployment, with their canonical name.
const LEGACY_FIELDS: &[(&str, &str)] = &[
    ("titulo", "title"),
    ("autor", "author"),
    ("anio_estreno", "release_year"),
    ("categoria", "category"),
];

/// Convert a single identifier from camelCase to snake_case.
/// e.g. "releaseYear" -> "release_year"
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Canonical name for a request key, or the key itself when it is not an alias.
pub fn canonical_key(key: &str) -> String {
    let snake = to_snake_case(key);
    LEGACY_FIELDS
        .iter()
        .find(|(legacy, _)| *legacy == snake)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(snake)
}

/// Rename aliased keys of a request object in place. A key already spelled canonically wins over its alias.
pub fn canonicalize_keys(obj: &mut Map<String, Value>) {
    let keys: Vec<String> = obj.keys().cloned().collect();
    for k in keys {
        let canonical = canonical_key(&k);
        if canonical == k {
            continue;
        }
        if let Some(v) = obj.remove(&k) {
            if !obj.contains_key(&canonical) {
                obj.insert(canonical, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn legacy_names_become_canonical() {
        let mut body = object(json!({
            "titulo": "Test",
            "autor": "A",
            "anio_estreno": 2023,
            "categoria": "Romance"
        }));
        canonicalize_keys(&mut body);
        assert_eq!(
            Value::Object(body),
            json!({"title": "Test", "author": "A", "release_year": 2023, "category": "Romance"})
        );
    }

    #[test]
    fn camel_case_becomes_snake_case() {
        assert_eq!(canonical_key("releaseYear"), "release_year");
        assert_eq!(canonical_key("title"), "title");
    }

    #[test]
    fn canonical_spelling_wins_over_alias() {
        let mut body = object(json!({"title": "Kept", "titulo": "Dropped"}));
        canonicalize_keys(&mut body);
        assert_eq!(Value::Object(body), json!({"title": "Kept"}));
    }

    #[test]
    fn unknown_keys_are_left_alone() {
        let mut body = object(json!({"rating": 5}));
        canonicalize_keys(&mut body);
        assert_eq!(Value::Object(body), json!({"rating": 5}));
    }
}
