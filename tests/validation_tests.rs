//! End-to-end validation scenarios across the rule library.

use chrono::{Duration, Utc};
use fieldcheck::{rules, validation_spec, SpecError, Validated, ValidationSpec, Violation};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
struct Basket {
    items: Vec<Option<String>>,
    tags: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    enabled: bool,
    archived: bool,
}

#[derive(Debug, Clone)]
struct Signup {
    email: String,
    nickname: Option<String>,
    country: String,
    born_at: chrono::DateTime<Utc>,
    amount: String,
}

#[derive(Debug, Clone)]
struct Grid {
    rows: Vec<Vec<i32>>,
}

fn violations_of(outcome: Validated<impl std::fmt::Debug>) -> Vec<Violation> {
    match outcome {
        Validated::Invalid(violations) => violations.into_vec(),
        Validated::Valid(value) => panic!("expected violations for {value:?}"),
    }
}

fn basket_spec() -> ValidationSpec {
    validation_spec(|spec| {
        spec.constraints::<Basket>(|c| {
            c.property("items", |b: &Basket| &b.items, |p| {
                p.add(rules::size(1, 3)?).each(|e| {
                    e.add(rules::not_null());
                    Ok(())
                })?;
                Ok(())
            })?
            .property("tags", |b: &Basket| &b.tags, |p| {
                p.add(rules::subset(["new", "sale"])?);
                Ok(())
            })?;
            Ok(())
        })
    })
    .unwrap()
}

#[test]
fn null_element_reports_indexed_path() {
    let basket = Basket {
        items: vec![Some("a".into()), Some("b".into()), None],
        tags: HashSet::new(),
    };

    let violations = violations_of(basket_spec().validate(basket).unwrap());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field_path, "items.<element:2>");
    assert_eq!(violations[0].constraint, "not_null");
    assert_eq!(violations[0].message, "must not be null");
}

#[test]
fn collection_rules_run_before_element_rules() {
    let basket = Basket {
        items: vec![None, Some("b".into()), None, Some("d".into())],
        tags: ["clearance".to_string()].into_iter().collect(),
    };

    let found: Vec<(String, String)> = violations_of(basket_spec().validate(basket).unwrap())
        .into_iter()
        .map(|v| (v.field_path, v.constraint))
        .collect();
    assert_eq!(
        found,
        vec![
            ("items".to_string(), "size".to_string()),
            ("items.<element:0>".to_string(), "not_null".to_string()),
            ("items.<element:2>".to_string(), "not_null".to_string()),
            ("tags".to_string(), "subset".to_string()),
        ]
    );
}

#[test]
fn boolean_assertions() {
    let spec = validation_spec(|spec| {
        spec.constraints::<Settings>(|c| {
            c.property("enabled", |s: &Settings| &s.enabled, |p| {
                p.add(rules::assert_true());
                Ok(())
            })?
            .property("archived", |s: &Settings| &s.archived, |p| {
                p.add(rules::assert_false());
                Ok(())
            })?;
            Ok(())
        })
    })
    .unwrap();

    let ok = Settings {
        enabled: true,
        archived: false,
    };
    assert_eq!(spec.validate(ok.clone()).unwrap(), Validated::Valid(ok));

    let paths = violations_of(
        spec.validate(Settings {
            enabled: false,
            archived: true,
        })
        .unwrap(),
    )
    .into_iter()
    .map(|v| v.field_path)
    .collect::<Vec<_>>();
    assert_eq!(paths, vec!["enabled", "archived"]);
}

fn signup_spec() -> ValidationSpec {
    validation_spec(|spec| {
        spec.constraints::<Signup>(|c| {
            c.property("email", |s: &Signup| &s.email, |p| {
                p.add(rules::email());
                Ok(())
            })?
            .property("nickname", |s: &Signup| &s.nickname, |p| {
                p.add(rules::optional(rules::length(3, 12)?));
                Ok(())
            })?
            .property("country", |s: &Signup| &s.country, |p| {
                p.add(rules::one_of(["FR", "DE", "IT"])?);
                Ok(())
            })?
            .property("born_at", |s: &Signup| &s.born_at, |p| {
                p.add(rules::past());
                Ok(())
            })?
            .property("amount", |s: &Signup| &s.amount, |p| {
                p.add(rules::cs_range(0.0, 100.0)?);
                Ok(())
            })?;
            Ok(())
        })
    })
    .unwrap()
}

fn signup() -> Signup {
    Signup {
        email: "ada@example.org".into(),
        nickname: None,
        country: "FR".into(),
        born_at: Utc::now() - Duration::days(365 * 30),
        amount: "12.50".into(),
    }
}

#[test]
fn well_formed_signup_is_valid() {
    assert!(signup_spec().validate(signup()).unwrap().is_valid());
}

#[test]
fn every_failing_field_is_reported() {
    let bad = Signup {
        email: "not-an-address".into(),
        nickname: Some("ab".into()),
        country: "US".into(),
        born_at: Utc::now() + Duration::days(1),
        amount: "one hundred".into(),
    };

    let codes: Vec<String> = violations_of(signup_spec().validate(bad).unwrap())
        .into_iter()
        .map(|v| v.constraint)
        .collect();
    assert_eq!(codes, vec!["email", "length", "one_of", "past", "cs_range"]);
}

#[test]
fn messages_render_parameters_and_values() {
    let bad = Signup {
        nickname: Some("a-very-long-nickname".into()),
        ..signup()
    };

    let violations = violations_of(signup_spec().validate(bad).unwrap());
    assert_eq!(violations[0].message, "length must be between 3 and 12");
    assert_eq!(
        violations[0].rejected_value.as_deref(),
        Some("Some(\"a-very-long-nickname\")")
    );
}

#[test]
fn nested_collections_index_every_level() {
    let spec = validation_spec(|spec| {
        spec.constraints::<Grid>(|c| {
            c.property("rows", |g: &Grid| &g.rows, |p| {
                p.each(|row| {
                    row.add(rules::not_empty()).each(|cell| {
                        cell.add(rules::positive_or_zero());
                        Ok(())
                    })?;
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })
    })
    .unwrap();

    let grid = Grid {
        rows: vec![vec![1, 2], vec![], vec![3, -4]],
    };
    let paths: Vec<String> = violations_of(spec.validate(grid).unwrap())
        .into_iter()
        .map(|v| v.field_path)
        .collect();
    assert_eq!(paths, vec!["rows.<element:1>", "rows.<element:2>.<element:1>"]);
}

#[test]
fn violations_serialize_to_json() {
    let bad = Signup {
        country: "US".into(),
        ..signup()
    };

    let violations = match signup_spec().validate(bad).unwrap() {
        Validated::Invalid(violations) => violations,
        Validated::Valid(_) => panic!("expected violations"),
    };
    let json: serde_json::Value = serde_json::from_str(&violations.to_json().unwrap()).unwrap();

    assert_eq!(json[0]["field_path"], "country");
    assert_eq!(json[0]["constraint"], "one_of");
    assert_eq!(json[0]["rejected_value"], "\"US\"");
}

#[test]
fn invalid_declarations_fail_before_validation() {
    let result = validation_spec(|spec| {
        spec.constraints::<Signup>(|c| {
            c.property("email", |s: &Signup| &s.email, |p| {
                p.add(rules::pattern("[a-z")?);
                Ok(())
            })?;
            Ok(())
        })
    });
    assert!(matches!(result, Err(SpecError::InvalidPattern { .. })));

    let result = validation_spec(|spec| {
        spec.constraints::<Signup>(|c| {
            c.property("country", |s: &Signup| &s.country, |p| {
                p.add(rules::one_of(Vec::<&str>::new())?);
                Ok(())
            })?;
            Ok(())
        })
    });
    assert!(matches!(result, Err(SpecError::EmptyValueSet { .. })));
}

#[test]
fn into_result_exposes_violations_as_error() {
    let err = signup_spec()
        .validate(Signup {
            email: String::new(),
            ..signup()
        })
        .unwrap()
        .into_result()
        .unwrap_err();

    assert_eq!(err.field_paths(), vec!["email"]);
    assert_eq!(err.to_string(), "email: must be a well-formed email address");
}
