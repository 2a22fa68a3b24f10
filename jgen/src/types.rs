//! Type references.
//!
//! A [`TypeRef`] names a type the generated code refers to: either a
//! native type that never needs an import, or a declared (possibly generic)
//! class or interface type. Type references are immutable and cheap to
//! clone; declared types share their data behind an [`Arc`].

use std::{fmt, sync::Arc};

use jgencode_core::{is_blank, split_qualified};

use crate::{
    config::WellKnownTypes,
    error::{Error, Result},
};

/// Types that are built into the language or live in `java.lang` and
/// therefore never need an import.
const NATIVE_TYPES: &[&str] = &[
    "byte",
    "Byte",
    "short",
    "Short",
    "int",
    "Integer",
    "long",
    "Long",
    "float",
    "Float",
    "double",
    "Double",
    "boolean",
    "Boolean",
    "char",
    "Character",
    "String",
    "Object",
    "void",
];

/// Keys assigned to generic slots, in order.
const SLOT_KEYS: &[&str] = &["T", "U", "V", "W", "X", "Y", "Z"];

/// Check whether a short name is a native type.
pub fn is_native(name: &str) -> bool {
    NATIVE_TYPES.contains(&name)
}

fn slot_key(index: usize) -> String {
    SLOT_KEYS
        .get(index)
        .map(|key| key.to_string())
        .unwrap_or_else(|| format!("T{index}"))
}

/// A reference to a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive or built-in type (`int`, `String`, …). Never imported.
    Native(String),
    /// A package-qualified, possibly generic type.
    Declared(Arc<DeclaredType>),
}

/// Data of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclaredType {
    package: String,
    simple_name: String,
    generics: Vec<(String, GenericArg)>,
}

impl DeclaredType {
    /// Package name; empty for unqualified types.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Name without package or generic arguments.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Generic slots in declaration order.
    pub fn generics(&self) -> &[(String, GenericArg)] {
        &self.generics
    }
}

/// The value of one generic slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenericArg {
    /// A concrete type argument.
    Type(TypeRef),
    /// Raw text: a type variable (`T`), the bare wildcard `?`, or a
    /// wildcard bounded by a type variable (`? extends T`).
    Placeholder(String),
    /// A wildcard bounded by a concrete type, `? super Widget`.
    Wildcard { bound: WildcardBound, ty: TypeRef },
}

/// Direction of a wildcard bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Extends,
    Super,
}

impl WildcardBound {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Extends => "extends",
            Self::Super => "super",
        }
    }
}

impl GenericArg {
    /// Text as written inside the angle brackets.
    pub fn display(&self) -> String {
        match self {
            Self::Type(ty) => ty.full_name(),
            Self::Placeholder(text) => text.clone(),
            Self::Wildcard { bound, ty } => format!("? {} {}", bound.keyword(), ty.full_name()),
        }
    }
}

impl From<TypeRef> for GenericArg {
    fn from(ty: TypeRef) -> Self {
        Self::Type(ty)
    }
}

/// Text is parsed when the owning [`TypeRefBuilder`] is built.
impl From<&str> for GenericArg {
    fn from(text: &str) -> Self {
        Self::Placeholder(text.to_string())
    }
}

impl TypeRef {
    /// Create a native type reference.
    pub fn native(name: impl Into<String>) -> Self {
        Self::Native(name.into())
    }

    /// Parse a declared type using the standard well-known table.
    ///
    /// `raw` may carry generic arguments (`Map<String, List<com.acme.Item>>`)
    /// and may be package-qualified when `package` is blank.
    ///
    /// ```
    /// use jgencode::TypeRef;
    ///
    /// let list = TypeRef::declared("java.util", "List<java.lang.String>").unwrap();
    /// assert_eq!(list.full_name(), "List<String>");
    /// assert_eq!(list.qualified_name(), "java.util.List");
    /// ```
    pub fn declared(package: &str, raw: &str) -> Result<Self> {
        TypeParser::standard().declared(package, raw)
    }

    /// Start an explicit declared-type builder.
    pub fn builder() -> TypeRefBuilder {
        TypeRefBuilder::default()
    }

    /// Name without package or generic arguments.
    pub fn simple_name(&self) -> &str {
        match self {
            Self::Native(name) => name,
            Self::Declared(declared) => &declared.simple_name,
        }
    }

    /// Package of a declared type; `None` for native or unqualified types.
    pub fn package(&self) -> Option<&str> {
        match self {
            Self::Declared(declared) if !declared.package.is_empty() => Some(&declared.package),
            _ => None,
        }
    }

    /// Generic slots; always empty for native types.
    pub fn generics(&self) -> &[(String, GenericArg)] {
        match self {
            Self::Native(_) => &[],
            Self::Declared(declared) => &declared.generics,
        }
    }

    /// Display form used in declarations, e.g. `Map<String, List<Item>>`.
    pub fn full_name(&self) -> String {
        let generics = self.generics();
        if generics.is_empty() {
            return self.simple_name().to_string();
        }
        let args: Vec<String> = generics.iter().map(|(_, arg)| arg.display()).collect();
        format!("{}<{}>", self.simple_name(), args.join(", "))
    }

    /// Import form: package-qualified name without generic arguments.
    pub fn qualified_name(&self) -> String {
        match self.package() {
            Some(package) => format!("{}.{}", package, self.simple_name()),
            None => self.simple_name().to_string(),
        }
    }

    /// Class literal used in annotation attributes, e.g. `Widget.class`.
    pub fn class_literal(&self) -> String {
        format!("{}.class", self.simple_name())
    }

    /// Whether this is a native type.
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Access the declared data, if any.
    pub fn as_declared(&self) -> Option<&DeclaredType> {
        match self {
            Self::Native(_) => None,
            Self::Declared(declared) => Some(declared),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Builder for declared types with explicit generic slots.
///
/// ```
/// use jgencode::{GenericArg, TypeRef};
///
/// let repo = TypeRef::builder()
///     .package("org.springframework.data.repository")
///     .simple_name("CrudRepository")
///     .generic("T", TypeRef::declared("com.acme", "Widget").unwrap())
///     .generic("ID", TypeRef::native("Long"))
///     .build()
///     .unwrap();
/// assert_eq!(repo.full_name(), "CrudRepository<Widget, Long>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRefBuilder {
    package: String,
    simple_name: String,
    generics: Vec<(String, GenericArg)>,
}

impl TypeRefBuilder {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Simple name; generic syntax in it is parsed like [`TypeRef::declared`].
    pub fn simple_name(mut self, name: impl Into<String>) -> Self {
        self.simple_name = name.into();
        self
    }

    /// Set a generic slot. Setting an existing key replaces its value in place.
    ///
    /// Text arguments are parsed on [`build`](Self::build) by the same
    /// parser as the base name.
    pub fn generic(mut self, key: impl Into<String>, arg: impl Into<GenericArg>) -> Self {
        let key = key.into();
        let arg = arg.into();
        match self.generics.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = arg,
            None => self.generics.push((key, arg)),
        }
        self
    }

    pub fn build(self) -> Result<TypeRef> {
        self.build_with(TypeParser::standard())
    }

    /// Build, resolving short names against a custom table.
    pub fn build_with(self, parser: TypeParser<'_>) -> Result<TypeRef> {
        let parsed = parser.declared(&self.package, &self.simple_name)?;
        if self.generics.is_empty() {
            return Ok(parsed);
        }
        let mut declared = parsed.as_declared().cloned().unwrap_or_else(|| DeclaredType {
            package: String::new(),
            simple_name: parsed.simple_name().to_string(),
            generics: Vec::new(),
        });
        for (key, arg) in self.generics {
            let arg = match arg {
                GenericArg::Placeholder(text) => parser.argument(&text)?,
                arg => arg,
            };
            match declared.generics.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = arg,
                None => declared.generics.push((key, arg)),
            }
        }
        Ok(TypeRef::Declared(Arc::new(declared)))
    }
}

/// Parses textual type specifications into [`TypeRef`]s, resolving short
/// names through a [`WellKnownTypes`] table.
#[derive(Debug, Clone, Copy)]
pub struct TypeParser<'a> {
    well_known: &'a WellKnownTypes,
}

impl<'a> TypeParser<'a> {
    pub fn new(well_known: &'a WellKnownTypes) -> Self {
        Self { well_known }
    }

    /// Parser backed by the standard table.
    pub fn standard() -> TypeParser<'static> {
        TypeParser::new(WellKnownTypes::standard_ref())
    }

    /// Parse a declared type. See [`TypeRef::declared`].
    pub fn declared(&self, package: &str, raw: &str) -> Result<TypeRef> {
        let raw = raw.trim();
        let (base, args) = split_generic(raw)?;
        if is_blank(base) {
            return Err(Error::BlankName { what: "type" });
        }
        if let Some(bad) = base
            .chars()
            .find(|c| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.')))
        {
            return Err(Error::malformed(raw, format!("unexpected '{bad}'")));
        }

        let package = package.trim();
        let (package, simple_name) = if package.is_empty() {
            split_qualified(base)
        } else if base.contains('.') {
            return Err(Error::malformed(
                raw,
                "qualified name given together with a package",
            ));
        } else {
            (package, base)
        };
        if simple_name.is_empty() {
            return Err(Error::BlankName { what: "type" });
        }
        let package = if package.is_empty() {
            self.well_known.package_of(simple_name).unwrap_or_default()
        } else {
            package
        };

        let generics = args
            .into_iter()
            .enumerate()
            .map(|(i, arg)| Ok((slot_key(i), self.argument(arg)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeRef::Declared(Arc::new(DeclaredType {
            package: package.to_string(),
            simple_name: simple_name.to_string(),
            generics,
        })))
    }

    /// Parse one generic argument.
    ///
    /// Wildcard bounds are parsed as types, so they resolve through the
    /// same table as everything else.
    pub fn argument(&self, text: &str) -> Result<GenericArg> {
        let text = text.trim();
        if let Some(rest) = text.strip_prefix('?') {
            return self.wildcard(text, rest.trim());
        }
        if is_type_variable(text) {
            return Ok(GenericArg::Placeholder(text.to_string()));
        }
        if is_native(text) || text.ends_with("[]") {
            return Ok(GenericArg::Type(TypeRef::native(text)));
        }
        self.declared("", text).map(GenericArg::Type)
    }

    fn wildcard(&self, text: &str, rest: &str) -> Result<GenericArg> {
        if rest.is_empty() {
            return Ok(GenericArg::Placeholder("?".to_string()));
        }
        let (bound, ty) = if let Some(ty) = rest.strip_prefix("extends ") {
            (WildcardBound::Extends, ty)
        } else if let Some(ty) = rest.strip_prefix("super ") {
            (WildcardBound::Super, ty)
        } else {
            return Err(Error::malformed(text, "expected 'extends' or 'super' after '?'"));
        };
        match self.argument(ty)? {
            GenericArg::Type(ty) => Ok(GenericArg::Wildcard { bound, ty }),
            GenericArg::Placeholder(_) if is_type_variable(ty.trim()) => {
                Ok(GenericArg::Placeholder(format!("? {} {}", bound.keyword(), ty.trim())))
            }
            _ => Err(Error::malformed(text, "nested wildcard")),
        }
    }
}

/// `T`, `E`, `K2`: an upper-case letter optionally followed by digits.
fn is_type_variable(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_digit())
}

/// Split `Base<A, B<C>>` into `("Base", ["A", "B<C>"])`.
fn split_generic(raw: &str) -> Result<(&str, Vec<&str>)> {
    let Some(open) = raw.find('<') else {
        if raw.contains('>') {
            return Err(Error::malformed(raw, "unexpected '>'"));
        }
        if raw.contains(',') {
            return Err(Error::malformed(raw, "unexpected ','"));
        }
        return Ok((raw, Vec::new()));
    };

    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in raw.char_indices().skip_while(|(i, _)| *i < open) {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::malformed(raw, "unexpected '>'"))?;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let close = close.ok_or_else(|| Error::malformed(raw, "unclosed '<'"))?;
    if close + 1 != raw.len() {
        return Err(Error::malformed(raw, "unexpected text after '>'"));
    }

    let inner = &raw[open + 1..close];
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(inner[start..].trim());
    if args.iter().any(|arg| arg.is_empty()) {
        return Err(Error::malformed(raw, "empty type argument"));
    }

    Ok((raw[..open].trim(), args))
}
