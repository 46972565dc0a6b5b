//! Customer details form and its validation.

use crate::model::{Customer, PaymentMethod};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    PaymentMethod,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::PaymentMethod => "payment method",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Required,
    InvalidEmail,
    UnknownPaymentMethod(String),
}

impl Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Required => f.write_str("required"),
            Problem::InvalidEmail => f.write_str("not a valid email address"),
            Problem::UnknownPaymentMethod(method) => write!(f, "unknown method {method:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {problem}")]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
}

impl CheckoutForm {
    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<(Customer, PaymentMethod), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut required = |field: Field, value: &str| -> String {
            let value = value.trim();
            if value.is_empty() {
                errors.push(FieldError {
                    field,
                    problem: Problem::Required,
                });
            }
            value.to_string()
        };

        let name = required(Field::Name, &self.name);
        let email = required(Field::Email, &self.email);
        let phone = required(Field::Phone, &self.phone);
        let address = required(Field::Address, &self.address);
        let method = required(Field::PaymentMethod, &self.payment_method);

        if !email.is_empty() && !is_valid_email(&email) {
            errors.push(FieldError {
                field: Field::Email,
                problem: Problem::InvalidEmail,
            });
        }

        let payment_method = if method.is_empty() {
            None
        } else {
            match method.parse::<PaymentMethod>() {
                Ok(m) => Some(m),
                Err(_) => {
                    errors.push(FieldError {
                        field: Field::PaymentMethod,
                        problem: Problem::UnknownPaymentMethod(method.clone()),
                    });
                    None
                }
            }
        };

        match payment_method {
            Some(payment_method) if errors.is_empty() => Ok((
                Customer {
                    name,
                    email,
                    phone,
                    address,
                },
                payment_method,
            )),
            _ => Err(errors),
        }
    }
}

/// Email shape accepted by an HTML `type=email` input.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    local_ok && domain_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CheckoutForm {
        CheckoutForm {
            name: " Meera ".into(),
            email: "meera@example.in".into(),
            phone: "9000000001".into(),
            address: "4 Park Street".into(),
            payment_method: "card".into(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let (customer, method) = filled().validate().unwrap();
        assert_eq!(customer.name, "Meera");
        assert_eq!(method, PaymentMethod::Card);
    }

    #[test]
    fn test_all_failures_are_reported_together() {
        let form = CheckoutForm {
            name: "  ".into(),
            email: "not-an-email".into(),
            payment_method: "cheque".into(),
            ..CheckoutForm::default()
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                Field::Name,
                Field::Phone,
                Field::Address,
                Field::Email,
                Field::PaymentMethod
            ]
        );
        assert_eq!(errors[3].problem, Problem::InvalidEmail);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@mail.example.co.in"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@-bad.com"));
        assert!(!is_valid_email("user@exa..mple.com"));
        assert!(!is_valid_email("us er@example.com"));
    }
}
