use crate::common::{CatalogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Feeds the designation; must be supplied.
    Key,
    /// Stored in the attribute bag under the field name; may be omitted.
    Attribute,
}

/// One column of a catalog's published record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn key(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Key,
        }
    }

    pub const fn attribute(label: &'static str) -> Self {
        Self {
            name: label,
            kind: FieldKind::Attribute,
        }
    }

    pub fn is_key(&self) -> bool {
        self.kind == FieldKind::Key
    }
}

/// Raw, already-split field values of one catalog record, bound to the
/// catalog's layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRecord {
    fields: Vec<(FieldSpec, String)>,
}

impl FieldRecord {
    /// Bind ordered values to a layout.
    ///
    /// Every key column must be present; attribute columns may be left off the
    /// end. Surplus values are rejected rather than dropped.
    pub fn bind<S: AsRef<str>>(
        catalog: &str,
        layout: &'static [FieldSpec],
        values: &[S],
    ) -> Result<Self> {
        if values.len() > layout.len() {
            return Err(CatalogError::TooManyFields {
                catalog: catalog.to_string(),
                expected: layout.len(),
                actual: values.len(),
            });
        }

        if let Some(missing) = layout[values.len()..].iter().find(|spec| spec.is_key()) {
            return Err(CatalogError::MissingField(missing.name.to_string()));
        }

        let fields = layout
            .iter()
            .zip(values)
            .map(|(spec, value)| (*spec, value.as_ref().trim().to_string()))
            .collect::<Vec<_>>();

        for (spec, value) in &fields {
            if spec.is_key() && value.is_empty() {
                return Err(CatalogError::MissingField(spec.name.to_string()));
            }
        }

        Ok(Self { fields })
    }

    /// Value of a named column.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.fields
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| CatalogError::MissingField(name.to_string()))
    }

    /// Value of the `index`-th key column.
    pub fn key(&self, index: usize) -> Result<&str> {
        self.fields
            .iter()
            .filter(|(spec, _)| spec.is_key())
            .nth(index)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| CatalogError::MissingField(format!("key #{}", index)))
    }

    /// Value of a named column, if supplied and not blank.
    pub fn optional(&self, name: &str) -> Option<&str> {
        self.get(name).ok().filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldSpec, &str)> {
        self.fields.iter().map(|(spec, value)| (spec, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LAYOUT: [FieldSpec; 4] = [
        FieldSpec::key("area"),
        FieldSpec::key("number"),
        FieldSpec::attribute("Mag(V)"),
        FieldSpec::attribute("Spectrum"),
    ];

    #[test]
    fn test_bind_trims_values() {
        let record = FieldRecord::bind("[A64]", &LAYOUT, &[" AB ", "01", "12.3"]).unwrap();
        assert_eq!(record.get("area").unwrap(), "AB");
        assert_eq!(record.key(1).unwrap(), "01");
        assert_eq!(record.optional("Mag(V)"), Some("12.3"));
        assert_eq!(record.optional("Spectrum"), None);
    }

    #[test]
    fn test_bind_requires_key_columns() {
        let err = FieldRecord::bind("[A64]", &LAYOUT, &["AB"]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField(ref name) if name == "number"));

        let err = FieldRecord::bind("[A64]", &LAYOUT, &["AB", "  "]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField(ref name) if name == "number"));
    }

    #[test]
    fn test_bind_rejects_surplus_values() {
        let err = FieldRecord::bind("[A64]", &LAYOUT, &["AB", "01", "12.3", "G5", "extra"])
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TooManyFields { expected: 4, actual: 5, .. }
        ));
    }
}
