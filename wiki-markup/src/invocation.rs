//! Parsed macro occurrences. An invocation only lives for the duration of one rewrite.

/// Argument keys recognized as named arguments.
pub const NAMED_ARGS: [&str; 1] = ["display"];

/// One `{{name|arg1|arg2|key=value}}` template or `[[target|label]]` link.
///
/// Positional arguments keep their order. Only keys in [`NAMED_ARGS`] are split out as named
/// arguments; any other `key=value` text is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroInvocation {
    pub name: String,
    pub positional: Vec<String>,
    pub named: Vec<(String, String)>,
}

impl MacroInvocation {
    /// Parses the argument string of a template (everything after the first `|`).
    pub fn template(name: &str, args: &str) -> Self {
        let mut positional = Vec::new();
        let mut named = Vec::new();
        for arg in args.split('|') {
            match split_named(arg) {
                Some((key, value)) => named.push((key.to_string(), value.to_string())),
                None => positional.push(arg.to_string()),
            }
        }
        Self {
            name: name.to_string(),
            positional,
            named,
        }
    }

    /// A link `[[target|label]]`; the label, when present, is kept whole.
    pub fn link(target: &str, label: Option<&str>) -> Self {
        let mut positional = vec![target.to_string()];
        positional.extend(label.map(str::to_string));
        Self {
            name: "link".to_string(),
            positional,
            named: Vec::new(),
        }
    }

    /// Positional argument `index`, treating blank values as absent.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.positional
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn named_arg(&self, key: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    /// Display override: the named `display` argument, else positional `index`.
    pub fn display(&self, index: usize) -> Option<&str> {
        self.named_arg("display").or_else(|| self.arg(index))
    }

    /// True when the positional arity is within `min..=max` and the first argument is non-blank.
    pub fn has_shape(&self, min: usize, max: usize) -> bool {
        let n = self.positional.len();
        n >= min && n <= max && (min == 0 || self.arg(0).is_some())
    }
}

fn split_named(arg: &str) -> Option<(&str, &str)> {
    let (key, value) = arg.split_once('=')?;
    let key = key.trim();
    NAMED_ARGS.contains(&key).then_some((key, value.trim()))
}
