//! Canonical identifier types shared by the engine, statement helpers and reflection.

/// An identifier in canonical form.
///
/// Case-insensitive names are stored lowercase with `quoted == false`. Names
/// that only resolve when quoted (lowercase or mixed case in storage, reserved
/// words, special characters) keep their exact text and carry `quoted == true`
/// so SQL generation always wraps them in quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident {
    /// Identifier text, byte-for-byte.
    pub value: String,
    /// Set when the identifier must be quoted regardless of its content.
    pub quoted: bool,
}

impl Ident {
    /// Create an identifier without an explicit quote marker.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            value: name.into(),
            quoted: false,
        }
    }

    /// Create an identifier that is always emitted quoted.
    pub fn quoted(name: impl Into<String>) -> Self {
        Self {
            value: name.into(),
            quoted: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::new(name)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A schema-qualified name (e.g., `public.orders`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub schema: Option<Ident>,
    pub name: Ident,
}

impl QualifiedName {
    pub fn new(name: Ident) -> Self {
        Self { schema: None, name }
    }

    pub fn with_schema(schema: Ident, name: Ident) -> Self {
        Self {
            schema: Some(schema),
            name,
        }
    }

    /// Parts in qualification order, schema first.
    pub fn parts(&self) -> [Option<&Ident>; 2] {
        [self.schema.as_ref(), Some(&self.name)]
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{}.{}", schema, self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
