//! Entries typed in by users rather than taken from a published catalog.
//!
//! A `VSNET-Name` attribute, when present, is the external name verbatim; the
//! computed form is only a fallback.

use tracing::debug;

use crate::catalog::descriptor::CatalogDescriptor;
use crate::catalog::strategy;
use crate::common::constants::{field, label};
use crate::common::Result;
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag};

static USER_LAYOUT: [FieldSpec; 5] = [
    FieldSpec::key(field::NAME),
    FieldSpec::attribute(label::VSNET_NAME),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::TYPE),
    FieldSpec::attribute(label::REMARKS),
];

#[derive(Debug)]
pub struct UserCatalog {
    code: &'static str,
    name: &'static str,
    acronym: &'static str,
    category: Category,
}

pub static USER_VARIABLE: UserCatalog = UserCatalog {
    code: "User Variable",
    name: "User-Added Variable Stars",
    acronym: "UserVar",
    category: Category::Variable,
};

pub static USER_OBJECT: UserCatalog = UserCatalog {
    code: "User Object",
    name: "User-Added Objects",
    acronym: "UserObj",
    category: Category::Others,
};

impl UserCatalog {
    fn computed_external_name(designation: &str) -> String {
        designation
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase()
    }
}

impl CatalogDescriptor for UserCatalog {
    fn catalog_code(&self) -> &'static str {
        self.code
    }

    fn catalog_name(&self) -> &'static str {
        self.name
    }

    fn acronym(&self) -> &'static str {
        self.acronym
    }

    fn category(&self) -> Category {
        self.category
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &USER_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(record.get(field::NAME)?.to_string())
    }

    fn external_name(&self, designation: &str, attributes: &KeyValueBag) -> Result<String> {
        match attributes.require(label::VSNET_NAME) {
            Ok(name) => Ok(name.to_string()),
            Err(e) => {
                debug!(catalog = self.code, designation, error = %e, "computing VSNET name");
                Ok(Self::computed_external_name(designation))
            }
        }
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        Ok(vec![strategy::safe_segment(&strategy::first_char_branch(
            designation,
        )?)?])
    }
}
