//! Arithmetic, comparison and membership operations on values.
//!
//! Numeric rules: `int ⊕ int` stays `int` (with overflow checks) except `/`,
//! which always yields a float; mixing `int` and `float` promotes to `float`;
//! `%` is defined on ints only. `+` doubles as concatenation for strings
//! (stringifying the other operand) and arrays, and `*` repeats strings.

use super::Value;
use crate::error::RuntimeError;
use crate::Result;
use std::cmp::Ordering;
use std::convert::TryFrom;

fn type_error<T, M>(message: M) -> Result<T>
where
    M: Into<Box<str>>,
{
    Err(RuntimeError::new(message).into())
}

impl Value {
    /// The `+` operator.
    pub fn add(&self, other: &Self) -> Result<Value> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => match a.checked_add(*b) {
                Some(n) => Ok(Self::integer(n)),
                None => type_error("integer overflow in addition"),
            },
            (Self::Float(a), Self::Float(b)) => Ok(Self::float(a + b)),
            (Self::Integer(a), Self::Float(b)) => Ok(Self::float(*a as f64 + b)),
            (Self::Float(a), Self::Integer(b)) => Ok(Self::float(a + *b as f64)),
            (Self::String(a), Self::String(b)) => {
                Ok(Self::string(format!("{}{}", a, b)))
            }
            (Self::String(a), b) => Ok(Self::string(format!("{}{}", a, b))),
            (a, Self::String(b)) => Ok(Self::string(format!("{}{}", a, b))),
            (Self::Array(a), Self::Array(b)) => {
                let mut values = a.as_ref().clone();
                values.extend(b.iter().cloned());
                Ok(Self::array(values))
            }
            (a, b) => type_error(format!(
                "unsupported operands for +: {} and {}",
                a.get_type(),
                b.get_type()
            )),
        }
    }

    /// The binary `-` operator.
    pub fn sub(&self, other: &Self) -> Result<Value> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => match a.checked_sub(*b) {
                Some(n) => Ok(Self::integer(n)),
                None => type_error("integer overflow in subtraction"),
            },
            (Self::Float(a), Self::Float(b)) => Ok(Self::float(a - b)),
            (Self::Integer(a), Self::Float(b)) => Ok(Self::float(*a as f64 - b)),
            (Self::Float(a), Self::Integer(b)) => Ok(Self::float(a - *b as f64)),
            (a, b) => type_error(format!(
                "unsupported operands for -: {} and {}",
                a.get_type(),
                b.get_type()
            )),
        }
    }

    /// The `*` operator. `string * int` (either order) repeats the string.
    pub fn mul(&self, other: &Self) -> Result<Value> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => match a.checked_mul(*b) {
                Some(n) => Ok(Self::integer(n)),
                None => type_error("integer overflow in multiplication"),
            },
            (Self::Float(a), Self::Float(b)) => Ok(Self::float(a * b)),
            (Self::Integer(a), Self::Float(b)) => Ok(Self::float(*a as f64 * b)),
            (Self::Float(a), Self::Integer(b)) => Ok(Self::float(a * *b as f64)),
            (Self::String(s), Self::Integer(n)) | (Self::Integer(n), Self::String(s)) => {
                if *n <= 0 {
                    Ok(Self::string(""))
                } else {
                    Ok(Self::string(s.repeat(*n as usize)))
                }
            }
            (a, b) => type_error(format!(
                "unsupported operands for *: {} and {}",
                a.get_type(),
                b.get_type()
            )),
        }
    }

    /// The `/` operator; always yields a float.
    pub fn div(&self, other: &Self) -> Result<Value> {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => {
                if b == 0.0 {
                    type_error("division by zero")
                } else {
                    Ok(Self::float(a / b))
                }
            }
            _ => type_error(format!(
                "unsupported operands for /: {} and {}",
                self.get_type(),
                other.get_type()
            )),
        }
    }

    /// The `//` operator: floor division. An int pair stays int.
    pub fn int_div(&self, other: &Self) -> Result<Value> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                if *b == 0 {
                    return type_error("division by zero");
                }
                let mut q = a / b;
                if (a % b != 0) && ((a % b < 0) != (*b < 0)) {
                    q -= 1;
                }
                Ok(Self::integer(q))
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => {
                    if b == 0.0 {
                        type_error("division by zero")
                    } else {
                        Ok(Self::float((a / b).floor()))
                    }
                }
                _ => type_error(format!(
                    "unsupported operands for //: {} and {}",
                    self.get_type(),
                    other.get_type()
                )),
            },
        }
    }

    /// The `%` operator. Defined on int pairs only; the result takes the sign
    /// of the divisor, so `-7 % 3` is `2`.
    pub fn rem(&self, other: &Self) -> Result<Value> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                if *b == 0 {
                    return type_error("modulo by zero");
                }
                let mut r = a % b;
                if r != 0 && ((r < 0) != (*b < 0)) {
                    r += b;
                }
                Ok(Self::integer(r))
            }
            (a, b) => type_error(format!(
                "unsupported operands for %: {} and {}",
                a.get_type(),
                b.get_type()
            )),
        }
    }

    /// The `**` operator.
    pub fn pow(&self, other: &Self) -> Result<Value> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) if *b >= 0 => {
                let exp = match u32::try_from(*b) {
                    Ok(exp) => exp,
                    Err(_) => return type_error("integer overflow in exponentiation"),
                };
                match a.checked_pow(exp) {
                    Some(n) => Ok(Self::integer(n)),
                    None => type_error("integer overflow in exponentiation"),
                }
            }
            (Self::Integer(a), Self::Integer(b)) => Ok(Self::float((*a as f64).powf(*b as f64))),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => Ok(Self::float(a.powf(b))),
                _ => type_error(format!(
                    "unsupported operands for **: {} and {}",
                    self.get_type(),
                    other.get_type()
                )),
            },
        }
    }

    /// The `~` operator: concatenation of the stringified operands.
    pub fn concat(&self, other: &Self) -> Result<Value> {
        Ok(Self::string(format!("{}{}", self, other)))
    }

    /// The unary `-` operator.
    pub fn neg(&self) -> Result<Value> {
        match self {
            Self::Integer(i) => match i.checked_neg() {
                Some(n) => Ok(Self::integer(n)),
                None => type_error("integer overflow in negation"),
            },
            Self::Float(f) => Ok(Self::float(-f)),
            v => type_error(format!("unsupported operand for unary -: {}", v.get_type())),
        }
    }

    /// The unary `+` operator; the identity on numbers.
    pub fn pos(&self) -> Result<Value> {
        match self {
            Self::Integer(_) | Self::Float(_) => Ok(self.clone()),
            v => type_error(format!("unsupported operand for unary +: {}", v.get_type())),
        }
    }

    /// Ordering for `<`, `<=`, `>`, `>=`.
    ///
    /// Defined for same-variant int, float and string pairs; every other
    /// pairing (including int against float) fails.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Ok(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => match a.partial_cmp(b) {
                Some(ordering) => Ok(ordering),
                None => type_error("cannot order nan"),
            },
            (Self::String(a), Self::String(b)) => Ok(a.as_str().cmp(b.as_str())),
            (a, b) => type_error(format!(
                "cannot compare {} with {}",
                a.get_type(),
                b.get_type()
            )),
        }
    }

    /// Membership, the `in` operator, with `self` as the container.
    ///
    /// Arrays test by equality, strings by substring (the empty needle is
    /// always contained), objects by key. A `null` or `undefined` container
    /// yields `false`.
    pub fn contains(&self, needle: &Self) -> Result<bool> {
        match self {
            Self::Null | Self::Undefined => Ok(false),
            Self::Array(values) => Ok(values.iter().any(|element| element == needle)),
            Self::String(haystack) => match needle {
                Self::String(s) => Ok(haystack.contains(s.as_str())),
                v => type_error(format!(
                    "'in <string>' requires a string operand, not {}",
                    v.get_type()
                )),
            },
            Self::Object(object) => match needle.as_str() {
                Some(key) => Ok(object.contains_key(key)),
                None => Ok(false),
            },
            v => type_error(format!("{} is not a container", v.get_type())),
        }
    }
}
