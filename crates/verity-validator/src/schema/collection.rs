//! Array and object chain views, plus the field-set builder for objects.

use im::Vector;
use indexmap::IndexMap;

use crate::rules::Rule;
use crate::schema::{SchemaLike, schema_view};

schema_view! {
    /// Chain view after `array(item)`. Every element of the value runs the
    /// item schema's full rule sequence; its records join the parent report
    /// tagged with the element index.
    ArraySchema
}

schema_view! {
    /// Chain view after `object(fields)`. Each declared field runs its own
    /// rule sequence against the looked-up field value; nested records merge
    /// into the parent report under the field's name.
    ObjectSchema
}

/// Ordered set of field schemas for an `object` rule.
///
/// Declaration order is evaluation order, and therefore report order.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: IndexMap<String, Vector<Rule>>,
}

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares one field.
    ///
    /// # Panics
    ///
    /// Panics when the field name was already declared.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, schema: impl SchemaLike) -> Self {
        let name = name.into();
        assert!(
            !self.entries.contains_key(&name),
            "field {name} has already been declared!"
        );
        self.entries.insert(name, schema.into_schema().rules);
        self
    }

    pub(crate) fn into_entries(self) -> IndexMap<String, Vector<Rule>> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSpec;
    use crate::schema;

    #[test]
    fn fields_preserve_declaration_order() {
        let fields = Fields::new()
            .field("b", schema().string())
            .field("a", schema().number());
        let entries = fields.into_entries();
        let names: Vec<_> = entries.keys().map(String::as_str).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    #[should_panic(expected = "field a has already been declared!")]
    fn duplicate_field_panics() {
        let _ = Fields::new()
            .field("a", schema().string())
            .field("a", schema().number());
    }

    #[test]
    fn array_embeds_the_item_rule_sequence() {
        let chain = schema().array(schema().number().positive());
        let RuleSpec::Array { item } = &chain.inner.rules[0].spec else {
            panic!("expected array spec");
        };
        let methods: Vec<_> = item.iter().map(|r| r.method()).collect();
        assert_eq!(methods, ["number", "positive"]);
    }

    #[test]
    fn object_embeds_field_rule_sequences() {
        let chain = schema().object(
            Fields::new()
                .field("name", schema().string().min_length(1))
                .field("age", schema().number().not_required()),
        );
        let RuleSpec::Object { fields } = &chain.inner.rules[0].spec else {
            panic!("expected object spec");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["age"].len(), 2);
    }
}
