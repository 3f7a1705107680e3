//! Splits raw arguments into flag names and raw values

use indexmap::IndexMap;

use crate::{Error, ParamType, Registry, Result};

/// Reserved flag names which request the usage listing
pub(crate) const HELP_POSSIBLES: &[&str] = &["h", "help"];

/// Flags found in one argument stream
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Raw values of non-boolean flags, later occurrences win
    pub values: IndexMap<String, String>,
    /// Boolean flags which were present
    pub flags: IndexMap<String, bool>,
    /// If `-h`, `-help` or `--help` was found
    pub help: bool,
    /// Arguments left over after flag parsing stopped
    pub rest: Vec<String>,
}

/// Tokenizes `args` (without the program name) against the declared parameters
///
/// Parsing stops at `--` or at the first argument which isn't a flag, the
/// remainder ends up in [Tokens::rest].
pub fn tokenize(args: impl IntoIterator<Item = String>, registry: &Registry) -> Result<Tokens> {
    let mut tokens = Tokens::default();
    let mut stream = args.into_iter();

    while let Some(arg) = stream.next() {
        if arg == "--" {
            tokens.rest.extend(stream);
            break;
        }
        if arg.len() < 2 || !arg.starts_with('-') {
            tokens.rest.push(arg);
            tokens.rest.extend(stream);
            break;
        }

        let body = arg.strip_prefix("--").unwrap_or(&arg[1..]);
        if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
            return Err(Error::BadFlagSyntax(arg));
        }
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        if HELP_POSSIBLES.contains(&name) {
            tokens.help = match inline {
                Some(value) => parse_bool(name, value)?,
                None => true,
            };
            continue;
        }

        match registry.param(name).map(|param| param.kind) {
            Some(ParamType::Bool) => {
                let value = match inline {
                    Some(value) => parse_bool(name, value)?,
                    None => true,
                };
                tokens.flags.insert(name.to_string(), value);
            }
            Some(_) => {
                let value = match inline {
                    Some(value) => value.to_string(),
                    None => stream
                        .next()
                        .ok_or_else(|| Error::MissingValue(name.to_string()))?,
                };
                tokens.values.insert(name.to_string(), value);
            }
            None => return Err(Error::UnknownFlag(name.to_string())),
        }
    }

    if !tokens.rest.is_empty() {
        tracing::warn!(rest = ?tokens.rest, "ignoring arguments after flags");
    }
    Ok(tokens)
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(Error::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Param;

    fn example_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(Param::new("u"));
        registry.register(Param::new("P").kind(ParamType::Int));
        registry.register(Param::new("v").kind(ParamType::Bool));
        registry
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn inline_and_separate_values() {
        let tokens = tokenize(args(&["-u=root", "--P", "22", "-v"]), &example_registry()).unwrap();
        assert_eq!(tokens.values["u"], "root");
        assert_eq!(tokens.values["P"], "22");
        assert_eq!(tokens.flags.get("v"), Some(&true));
        assert!(!tokens.help);
        assert!(tokens.rest.is_empty());
    }

    #[test]
    fn value_may_look_like_flag() {
        let tokens = tokenize(args(&["-u", "-v"]), &example_registry()).unwrap();
        assert_eq!(tokens.values["u"], "-v");
        assert!(tokens.flags.is_empty());
    }

    #[test]
    fn explicit_bools() {
        let tokens = tokenize(args(&["-v=false"]), &example_registry()).unwrap();
        assert_eq!(tokens.flags.get("v"), Some(&false));

        let err = tokenize(args(&["-v=maybe"]), &example_registry()).unwrap_err();
        assert!(matches!(err, Error::InvalidBool { name, value } if name == "v" && value == "maybe"));
    }

    #[test]
    fn help_flags() {
        for help in ["-h", "-help", "--help", "--h"] {
            let tokens = tokenize(args(&[help]), &example_registry()).unwrap();
            assert!(tokens.help, "{} should request help", help);
        }
    }

    #[test]
    fn stops_at_positional() {
        let tokens = tokenize(args(&["-u=a", "file.txt", "-v"]), &example_registry()).unwrap();
        assert_eq!(tokens.values["u"], "a");
        assert!(tokens.flags.is_empty());
        assert_eq!(tokens.rest, args(&["file.txt", "-v"]));

        let tokens = tokenize(args(&["--", "-v"]), &example_registry()).unwrap();
        assert_eq!(tokens.rest, args(&["-v"]));
    }

    #[test]
    fn bad_input() {
        let registry = example_registry();
        assert!(matches!(
            tokenize(args(&["-x=1"]), &registry),
            Err(Error::UnknownFlag(name)) if name == "x"
        ));
        assert!(matches!(
            tokenize(args(&["-u"]), &registry),
            Err(Error::MissingValue(name)) if name == "u"
        ));
        assert!(matches!(
            tokenize(args(&["---u"]), &registry),
            Err(Error::BadFlagSyntax(_))
        ));
        assert!(matches!(
            tokenize(args(&["-=u"]), &registry),
            Err(Error::BadFlagSyntax(_))
        ));
    }
}
