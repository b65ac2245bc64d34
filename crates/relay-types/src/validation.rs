//! Configuration validation utilities for the relay.
//!
//! This module provides a small, type-safe framework for validating the TOML
//! configuration of pluggable implementations before they are constructed.
//! It supports hierarchical validation with nested schemas, custom validators
//! and detailed error reporting.

use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
	/// Error that occurs when a required field is missing.
	#[error("Missing required field: {0}")]
	MissingField(String),
	/// Error that occurs when a field has an invalid value.
	#[error("Invalid value for field '{field}': {message}")]
	InvalidValue { field: String, message: String },
	/// Error that occurs when field type is incorrect.
	#[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
	TypeMismatch {
		field: String,
		expected: String,
		actual: String,
	},
}

/// Represents the type of a configuration field.
#[derive(Debug)]
pub enum FieldType {
	/// A string value.
	String,
	/// An integer value with optional minimum and maximum bounds.
	Integer {
		/// Minimum allowed value (inclusive).
		min: Option<i64>,
		/// Maximum allowed value (inclusive).
		max: Option<i64>,
	},
	/// A boolean value (true/false).
	Boolean,
	/// A nested table with its own schema.
	Table(Schema),
}

/// Type alias for field validator functions.
///
/// Validators are custom functions that can perform additional validation
/// beyond type checking. They receive a TOML value and return an error
/// message if validation fails.
pub type FieldValidator = Box<dyn Fn(&toml::Value) -> Result<(), String> + Send + Sync>;

/// Represents a field in a configuration schema.
///
/// A field has a name, a type, and an optional custom validator function.
pub struct Field {
	pub name: String,
	pub field_type: FieldType,
	pub validator: Option<FieldValidator>,
}

impl std::fmt::Debug for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("field_type", &self.field_type)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

impl Field {
	/// Creates a new field with the given name and type.
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		Self {
			name: name.into(),
			field_type,
			validator: None,
		}
	}

	/// Adds a custom validator to this field.
	///
	/// The validator function receives the field's value and should return
	/// an error message if validation fails.
	pub fn with_validator<F>(mut self, validator: F) -> Self
	where
		F: Fn(&toml::Value) -> Result<(), String> + Send + Sync + 'static,
	{
		self.validator = Some(Box::new(validator));
		self
	}
}

/// Defines a validation schema for TOML configuration.
///
/// A schema consists of required fields that must be present and optional
/// fields that may be present. Schemas can be nested to validate complex
/// hierarchical configurations.
#[derive(Debug)]
pub struct Schema {
	pub required: Vec<Field>,
	pub optional: Vec<Field>,
}

impl Schema {
	/// Creates a new schema with required and optional fields.
	pub fn new(required: Vec<Field>, optional: Vec<Field>) -> Self {
		Self { required, optional }
	}

	/// Validates a TOML value against this schema.
	///
	/// Checks that all required fields are present, validates the type of
	/// each field, runs custom validators, and recursively validates nested
	/// tables.
	pub fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let table = config
			.as_table()
			.ok_or_else(|| ValidationError::TypeMismatch {
				field: "root".to_string(),
				expected: "table".to_string(),
				actual: config.type_str().to_string(),
			})?;

		// Check required fields
		for field in &self.required {
			let value = table
				.get(&field.name)
				.ok_or_else(|| ValidationError::MissingField(field.name.clone()))?;

			validate_field_type(&field.name, value, &field.field_type)?;

			if let Some(validator) = &field.validator {
				validator(value).map_err(|msg| ValidationError::InvalidValue {
					field: field.name.clone(),
					message: msg,
				})?;
			}
		}

		// Check optional fields if present
		for field in &self.optional {
			if let Some(value) = table.get(&field.name) {
				validate_field_type(&field.name, value, &field.field_type)?;

				if let Some(validator) = &field.validator {
					validator(value).map_err(|msg| ValidationError::InvalidValue {
						field: field.name.clone(),
						message: msg,
					})?;
				}
			}
		}

		Ok(())
	}
}

/// Validates that a value matches the expected field type.
///
/// For integers this also checks min/max bounds; for tables it delegates to
/// the nested schema, prefixing field names in errors with the table path.
fn validate_field_type(
	field_name: &str,
	value: &toml::Value,
	expected_type: &FieldType,
) -> Result<(), ValidationError> {
	match expected_type {
		FieldType::String => {
			if !value.is_str() {
				return Err(ValidationError::TypeMismatch {
					field: field_name.to_string(),
					expected: "string".to_string(),
					actual: value.type_str().to_string(),
				});
			}
		},
		FieldType::Integer { min, max } => {
			let int_val = value
				.as_integer()
				.ok_or_else(|| ValidationError::TypeMismatch {
					field: field_name.to_string(),
					expected: "integer".to_string(),
					actual: value.type_str().to_string(),
				})?;

			if let Some(min_val) = min {
				if int_val < *min_val {
					return Err(ValidationError::InvalidValue {
						field: field_name.to_string(),
						message: format!("Value {} is less than minimum {}", int_val, min_val),
					});
				}
			}

			if let Some(max_val) = max {
				if int_val > *max_val {
					return Err(ValidationError::InvalidValue {
						field: field_name.to_string(),
						message: format!("Value {} is greater than maximum {}", int_val, max_val),
					});
				}
			}
		},
		FieldType::Boolean => {
			if !value.is_bool() {
				return Err(ValidationError::TypeMismatch {
					field: field_name.to_string(),
					expected: "boolean".to_string(),
					actual: value.type_str().to_string(),
				});
			}
		},
		FieldType::Table(schema) => {
			schema.validate(value).map_err(|e| match e {
				ValidationError::MissingField(f) => {
					ValidationError::MissingField(format!("{}.{}", field_name, f))
				},
				ValidationError::InvalidValue { field, message } => ValidationError::InvalidValue {
					field: format!("{}.{}", field_name, field),
					message,
				},
				ValidationError::TypeMismatch {
					field,
					expected,
					actual,
				} => ValidationError::TypeMismatch {
					field: format!("{}.{}", field_name, field),
					expected,
					actual,
				},
			})?;
		},
	}

	Ok(())
}

/// Trait defining a configuration schema that can validate TOML values.
///
/// Each pluggable implementation exposes one of these so its configuration
/// can be validated before the implementation is constructed.
pub trait ConfigSchema: Send + Sync {
	/// Validates a TOML configuration value against this schema.
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError>;
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(s: &str) -> toml::Value {
		s.parse::<toml::Value>().unwrap()
	}

	#[test]
	fn test_required_field_missing() {
		let schema = Schema::new(vec![Field::new("private_key", FieldType::String)], vec![]);
		let result = schema.validate(&parse("other = 1"));
		assert!(matches!(result, Err(ValidationError::MissingField(f)) if f == "private_key"));
	}

	#[test]
	fn test_integer_bounds() {
		let schema = Schema::new(
			vec![Field::new(
				"port",
				FieldType::Integer {
					min: Some(1),
					max: Some(65535),
				},
			)],
			vec![],
		);
		assert!(schema.validate(&parse("port = 8080")).is_ok());
		assert!(schema.validate(&parse("port = 0")).is_err());
		assert!(schema.validate(&parse("port = 70000")).is_err());
	}

	#[test]
	fn test_custom_validator_runs() {
		let schema = Schema::new(
			vec![
				Field::new("address", FieldType::String).with_validator(|value| {
					let s = value.as_str().unwrap_or_default();
					if s.starts_with("0x") {
						Ok(())
					} else {
						Err("must start with 0x".to_string())
					}
				}),
			],
			vec![],
		);
		assert!(schema.validate(&parse("address = \"0xabc\"")).is_ok());
		let result = schema.validate(&parse("address = \"abc\""));
		assert!(matches!(
			result,
			Err(ValidationError::InvalidValue { field, .. }) if field == "address"
		));
	}

	#[test]
	fn test_nested_table_errors_are_prefixed() {
		let inner = Schema::new(vec![Field::new("path", FieldType::String)], vec![]);
		let schema = Schema::new(vec![Field::new("file", FieldType::Table(inner))], vec![]);
		let result = schema.validate(&parse("[file]\nother = true"));
		assert!(matches!(
			result,
			Err(ValidationError::MissingField(f)) if f == "file.path"
		));
	}
}
