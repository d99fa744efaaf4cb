use crate::value_types::Phone;

/// A student's family contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilyMember {
    name: String,
    relationship: String,
    phone: Phone,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, relationship: impl Into<String>, phone: Phone) -> Self {
        Self {
            name: name.into(),
            relationship: relationship.into(),
            phone,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }
}
