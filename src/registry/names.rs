//! Naming convention: prefix classification and canonical name derivation.
//!
//! A method participates in the property surface when its name carries one
//! of the conventional prefixes. The remainder of the name (the suffix) is
//! converted from camel case to the canonical snake_case property name.

/// The role a conventionally named method plays for its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MethodRole {
    /// Reads the property (`get`, `is`, `has` prefixes).
    Getter,
    /// Writes the property (`set` prefix).
    Setter,
    /// Produces the property's iterable form (`itr` prefix).
    Iterator,
    /// Clears the property (`unset` and `uns` prefixes).
    Unsetter,
}

/// Classifies a method name by prefix.
///
/// Returns the role and the derived canonical property name, or `None` when
/// the name carries no recognized prefix (such methods are not part of the
/// property surface). The long `unset` prefix is matched before the short
/// `uns` form so `unsetFoo` derives `foo` rather than `et_foo`.
pub(crate) fn classify(name: &str) -> Option<(MethodRole, String)> {
    let (role, suffix) = if let Some(rest) = name.strip_prefix("get") {
        (MethodRole::Getter, rest)
    } else if let Some(rest) = name.strip_prefix("set") {
        (MethodRole::Setter, rest)
    } else if let Some(rest) = name.strip_prefix("itr") {
        (MethodRole::Iterator, rest)
    } else if let Some(rest) = name.strip_prefix("is") {
        (MethodRole::Getter, rest)
    } else if let Some(rest) = name.strip_prefix("has") {
        (MethodRole::Getter, rest)
    } else if let Some(rest) = name.strip_prefix("unset") {
        (MethodRole::Unsetter, rest)
    } else if let Some(rest) = name.strip_prefix("uns") {
        (MethodRole::Unsetter, rest)
    } else {
        return None;
    };

    if suffix.is_empty() {
        return None;
    }

    Some((role, camel_to_snake(suffix)))
}

/// Converts a camel-case method suffix to its canonical snake_case form.
///
/// An underscore is inserted immediately before every ASCII uppercase letter
/// that is preceded by a word character, and the whole result is lowercased:
/// `myLongName` becomes `my_long_name`, `Active` becomes `active`, `URL`
/// becomes `u_r_l`.
pub(crate) fn camel_to_snake(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_is_word = false;

    for ch in input.chars() {
        if ch.is_ascii_uppercase() && prev_is_word {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
        prev_is_word = ch.is_alphanumeric() || ch == '_';
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_conversion() {
        assert_eq!(camel_to_snake("myLongName"), "my_long_name");
        assert_eq!(camel_to_snake("Active"), "active");
        assert_eq!(camel_to_snake("Something"), "something");
        assert_eq!(camel_to_snake("URL"), "u_r_l");
        assert_eq!(camel_to_snake("Item2Backup"), "item2_backup");
        assert_eq!(camel_to_snake("already_snake"), "already_snake");
    }

    #[test]
    fn prefix_roles() {
        assert_eq!(
            classify("getCalculator"),
            Some((MethodRole::Getter, "calculator".to_string()))
        );
        assert_eq!(
            classify("setCalculator"),
            Some((MethodRole::Setter, "calculator".to_string()))
        );
        assert_eq!(
            classify("itrArr"),
            Some((MethodRole::Iterator, "arr".to_string()))
        );
        assert_eq!(
            classify("isActive"),
            Some((MethodRole::Getter, "active".to_string()))
        );
        assert_eq!(
            classify("hasItems"),
            Some((MethodRole::Getter, "items".to_string()))
        );
    }

    #[test]
    fn unset_prefixes() {
        assert_eq!(
            classify("unsetProperty"),
            Some((MethodRole::Unsetter, "property".to_string()))
        );
        assert_eq!(
            classify("unsProperty"),
            Some((MethodRole::Unsetter, "property".to_string()))
        );
    }

    #[test]
    fn unrecognized_names() {
        assert_eq!(classify("compute"), None);
        assert_eq!(classify("fetchProperty"), None);
        assert_eq!(classify("get"), None);
        assert_eq!(classify(""), None);
    }
}
