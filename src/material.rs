//! Material representation
//!
//! The inspector only needs material identity: names act as filter keys for
//! the variant report. Shading parameters carried by the asset are ignored.

/// A material referenced by mesh primitives, identified by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    name: Option<String>,
}

impl Material {
    /// Create a material with an optional name
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// Get the name of the material, if the asset provides one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_name() {
        let material = Material::new(Some("Display_orange".to_owned()));
        assert_eq!(material.name(), Some("Display_orange"));

        let unnamed = Material::new(None);
        assert_eq!(unnamed.name(), None);
    }
}
