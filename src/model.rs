//! Data model for one generation run — everything here is transient and
//! feeds both output buffers before being dropped.

/// Fully qualified name of the wrapped native class.
pub const NATIVE_CLASS: &str = "visiontransfer::DeviceParameters";

/// Type tokens that map straight onto Python scalars. Everything else is a
/// composite type living behind the `cpp.` glue namespace.
const PRIMITIVE_TYPES: [&str; 8] = [
    "int", "float", "double", "bool", "int&", "float&", "double&", "bool&",
];

pub fn is_primitive_type(ctype: &str) -> bool {
    PRIMITIVE_TYPES.contains(&ctype)
}

/// One `type name[=default]` argument as written in the header.
#[derive(Debug, Clone)]
pub struct Param {
    /// Raw type token, reference suffix included (`int`, `int&`, `AutoMode`).
    pub ctype: String,
    /// Name token with any `=default` suffix still attached (`count=5`).
    /// `None` for unnamed arguments (e.g. a bare `void`).
    pub name_with_default: Option<String>,
}

impl Param {
    /// Argument name with the default value stripped.
    pub fn name(&self) -> Option<&str> {
        self.name_with_default
            .as_deref()
            .map(|n| n.split_once('=').map_or(n, |(name, _)| name))
    }

    /// Type as referenced from the wrapper: primitives stay bare, composite
    /// types are qualified into the `cpp.` glue namespace.
    pub fn cython_type(&self) -> String {
        if is_primitive_type(&self.ctype) {
            self.ctype.clone()
        } else {
            format!("cpp.{}", self.ctype)
        }
    }

    /// Whether this argument is reference-typed (a native out-parameter).
    pub fn is_reference(&self) -> bool {
        self.ctype.contains('&')
            || self
                .name_with_default
                .as_deref()
                .is_some_and(|n| n.contains('&'))
    }
}

/// An inline accessor extracted from one declaration line.
#[derive(Debug)]
pub struct Accessor {
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
    /// Doc-comment text scanned immediately before the declaration. Kept with
    /// the accessor for scan-state fidelity; the emitted wrapper carries only
    /// the docstring placeholder token, which a separate substitution pass
    /// resolves against the extracted documentation.
    #[allow(dead_code)]
    pub doc: Option<String>,
}

impl Accessor {
    /// Fully qualified signature string used as the docstring substitution
    /// key, e.g. `visiontransfer::DeviceParameters::setAutoROI(x, y, width, height)`.
    pub fn qualified_ref(&self) -> String {
        let names = self
            .params
            .iter()
            .map(|p| p.name().unwrap_or(p.ctype.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}::{}({})", NATIVE_CLASS, self.name, names)
    }
}

/// Ordered scan output; both emitters consume the same stream.
#[derive(Debug)]
pub enum Event {
    /// The wrapped class body just opened — splice point for the
    /// hand-authored wrapper preamble.
    ClassOpen,
    Accessor(Accessor),
}

/// Split a raw `(`…`)` argument string into parameters. Each comma piece is
/// whitespace-split into a type token and an optional `name[=default]` token;
/// anything after the second token is discarded, so defaults must be written
/// without spaces around the `=`.
pub fn parse_args(raw: &str) -> Vec<Param> {
    raw.split(',')
        .filter_map(|piece| {
            let mut tokens = piece.split_whitespace();
            let ctype = tokens.next()?.to_string();
            Some(Param {
                ctype,
                name_with_default: tokens.next().map(str::to_string),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_empty() {
        assert!(parse_args("").is_empty());
    }

    #[test]
    fn args_with_default() {
        let params = parse_args("int count=5, double scale");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].ctype, "int");
        assert_eq!(params[0].name_with_default.as_deref(), Some("count=5"));
        assert_eq!(params[0].name(), Some("count"));
        assert_eq!(params[1].name(), Some("scale"));
    }

    #[test]
    fn reference_detection() {
        let params = parse_args("int& x, int y");
        assert!(params[0].is_reference());
        assert!(!params[1].is_reference());
    }

    #[test]
    fn composite_types_qualified() {
        let params = parse_args("AutoMode mode, int value");
        assert_eq!(params[0].cython_type(), "cpp.AutoMode");
        assert_eq!(params[1].cython_type(), "int");
    }

    #[test]
    fn qualified_ref_strips_defaults() {
        let acc = Accessor {
            return_type: "void".to_string(),
            name: "setAutoROI".to_string(),
            params: parse_args("int x, int y, int width=0, int height=0"),
            doc: None,
        };
        assert_eq!(
            acc.qualified_ref(),
            "visiontransfer::DeviceParameters::setAutoROI(x, y, width, height)"
        );
    }

    #[test]
    fn qualified_ref_no_args() {
        let acc = Accessor {
            return_type: "int".to_string(),
            name: "getGain".to_string(),
            params: vec![],
            doc: None,
        };
        assert_eq!(
            acc.qualified_ref(),
            "visiontransfer::DeviceParameters::getGain()"
        );
    }
}
