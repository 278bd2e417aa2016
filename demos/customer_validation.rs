//! Customer Validation
//!
//! This example demonstrates declaring constraints for a small object graph
//! and reading back every violation in one pass.
//!
//! Key concepts:
//! - Rules attached per field through builder closures
//! - Nested validation of a child type
//! - Element rules with indexed paths
//! - Configuration errors kept apart from data violations
//!
//! Run with: cargo run --example customer_validation

use fieldcheck::{rules, validation_spec, SpecError, Validated, ValidationSpec};

#[derive(Debug, Clone)]
struct Address {
    street: String,
    city: String,
    postcode: String,
}

#[derive(Debug, Clone)]
struct Customer {
    name: String,
    age: u32,
    emails: Vec<Option<String>>,
    address: Address,
    billing: Option<Address>,
}

fn customer_spec() -> Result<ValidationSpec, SpecError> {
    validation_spec(|spec| {
        spec.constraints::<Address>(|c| {
            c.property("street", |a: &Address| &a.street, |p| {
                p.add(rules::not_blank());
                Ok(())
            })?
            .property("city", |a: &Address| &a.city, |p| {
                p.add(rules::not_blank()).add(rules::length(2, 40)?);
                Ok(())
            })?
            .property("postcode", |a: &Address| &a.postcode, |p| {
                p.add(rules::pattern("[0-9]{5}")?);
                Ok(())
            })?;
            Ok(())
        })?
        .constraints::<Customer>(|c| {
            c.property("name", |cu: &Customer| &cu.name, |p| {
                p.add(rules::not_blank());
                Ok(())
            })?
            .property("age", |cu: &Customer| &cu.age, |p| {
                p.add(rules::range(18, 130)?);
                Ok(())
            })?
            .property("emails", |cu: &Customer| &cu.emails, |p| {
                p.add(rules::not_empty()).each(|e| {
                    e.add(rules::not_null())
                        .add(rules::optional(rules::email()));
                    Ok(())
                })?;
                Ok(())
            })?
            .property("address", |cu: &Customer| &cu.address, |p| {
                p.nested();
                Ok(())
            })?
            .property("billing", |cu: &Customer| &cu.billing, |p| {
                p.nested_with(Option::as_ref);
                Ok(())
            })?;
            Ok(())
        })
    })
}

fn report(label: &str, outcome: Validated<Customer>) {
    match outcome {
        Validated::Valid(customer) => println!("  {label}: valid ({})", customer.name),
        Validated::Invalid(violations) => {
            println!("  {label}: {} violation(s)", violations.len());
            for violation in violations.iter() {
                println!("    - {violation}");
            }
        }
    }
}

fn main() -> Result<(), SpecError> {
    println!("=== Customer Validation Example ===\n");

    let spec = customer_spec()?;
    println!("Registered types: {}\n", spec.len());

    let home = Address {
        street: "12 rue des Lilas".into(),
        city: "Lyon".into(),
        postcode: "69003".into(),
    };

    println!("1. A well-formed customer");
    let good = Customer {
        name: "Ada".into(),
        age: 36,
        emails: vec![Some("ada@example.org".into())],
        address: home.clone(),
        billing: None,
    };
    report("ada", spec.validate(good)?);

    println!("\n2. Several problems at once");
    let bad = Customer {
        name: " ".into(),
        age: 12,
        emails: vec![Some("ok@domain.com".into()), None, Some("nope".into())],
        address: Address {
            city: String::new(),
            ..home.clone()
        },
        billing: Some(Address {
            postcode: "ABCDE".into(),
            ..home
        }),
    };
    report("anonymous", spec.validate(bad.clone())?);

    println!("\n3. Violations as JSON");
    if let Validated::Invalid(violations) = spec.validate(bad)? {
        println!("  {}", violations.to_json()?);
    }

    println!("\n4. Configuration errors are reported separately");
    match spec.validate(String::from("not a customer")) {
        Err(err) => println!("  error: {err}"),
        Ok(_) => println!("  unexpected success"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
