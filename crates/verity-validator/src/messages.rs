//! Message catalog.
//!
//! One default template per rule kind, with `[placeholder]` substitution.
//! A caller-supplied override (per rule, or the schema-level `required`
//! template) fully replaces the default but uses the same placeholder
//! syntax. Rendering always goes through `verity_value::display`, so the
//! "received" value reads the same everywhere.

/// Default template for a rule method. Placeholders are substituted from
/// the executor's parameter list; `[valueName]` and `[value]` are always
/// available.
#[must_use]
pub fn default_template(method: &str) -> &'static str {
    match method {
        "required" => "[valueName] is required!",
        "string" => "[valueName] must be a string type!",
        "number" => "[valueName] must be a number type!",
        "float" => "[valueName] must be a float type!",
        "integer" => "[valueName] must be an integer type!",
        "boolean" => "[valueName] must be a boolean type!",
        "bigInt" => "[valueName] must be a bigint type!",
        "buffer" => "[valueName] must be a buffer type!",
        "date" => "the date [valueName] is not in the format [format]!",
        "time" => "the time [valueName] is not in the format [format]!",
        "minLength" => "[valueName] must have a minimum of [minLength] characters!",
        "maxLength" => "[valueName] must have a maximum of [maxLength] characters!",
        "minWord" => "[valueName] must have at least [minWord] words!",
        "min" => "[valueName] must be greater than or equal to [min]!",
        "max" => "[valueName] must be less than or equal to [max]!",
        "positive" => "[valueName] must be positive!",
        "negative" => "[valueName] must be negative!",
        "equal" => "[value] does not match [ref]!",
        "notEqual" => "[value] must not match [ref]!",
        "oneOf" => "[valueName] must have one of the following values: [candidates]!",
        "notOneOf" => "[valueName] cannot have one of the following values: [candidates]!",
        "regex" => "[value] does not match the required pattern!",
        "email" => "email [value] is invalid!",
        "uuid" => "[valueName] must be a valid UUID!",
        "array" => "[valueName] value must be an array!",
        "object" => "[valueName] value must be an object!",
        "custom" => "[valueName] failed custom validation!",
        _ => "[valueName] is invalid!",
    }
}

/// Substitutes every `[key]` occurrence in the template with its parameter.
///
/// Unknown placeholders are left in place; the template author sees their
/// typo rather than a silent empty string.
#[must_use]
pub fn render(template: &str, params: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, replacement) in params {
        out = out.replace(&format!("[{key}]"), replacement);
    }
    out
}
