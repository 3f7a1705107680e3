//! Per-parameter validation against declared type and options

use crate::{Param, ParamType, Violation};

/// Checks one parameter's raw value, storing its parsed integer on the way
///
/// Empty values only fail when required, booleans are never required.
pub(crate) fn validate(param: &mut Param) -> Option<Violation> {
    if param.value.is_empty() {
        if param.required && param.kind != ParamType::Bool {
            return Some(Violation::MissingRequired {
                name: param.name.clone(),
            });
        }
        return None;
    }

    match param.kind {
        ParamType::Int => match param.value.parse::<i64>() {
            Ok(int) => {
                param.int_value = Some(int);
                None
            }
            Err(_) => {
                param.int_value = None;
                Some(Violation::InvalidInteger {
                    name: param.name.clone(),
                    value: param.value.clone(),
                })
            }
        },
        ParamType::Option if !param.options.contains_key(&param.value) => {
            Some(Violation::InvalidOption {
                name: param.name.clone(),
                value: param.value.clone(),
            })
        }
        ParamType::Option | ParamType::String | ParamType::Bool => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_value(param: Param, value: &str) -> Param {
        let mut param = param;
        param.value = value.to_string();
        param
    }

    #[test]
    fn missing_required() {
        let mut param = Param::new("u").required(true);
        assert_eq!(
            validate(&mut param),
            Some(Violation::MissingRequired { name: "u".into() })
        );

        let mut optional = Param::new("u");
        assert_eq!(validate(&mut optional), None);
    }

    #[test]
    fn required_bool_never_missing() {
        let mut param = Param::new("v").required(true).kind(ParamType::Bool);
        assert_eq!(validate(&mut param), None);
    }

    #[test]
    fn integers() {
        let mut good = with_value(Param::new("P").kind(ParamType::Int), "-122");
        assert_eq!(validate(&mut good), None);
        assert_eq!(good.int_value, Some(-122));

        let mut bad = with_value(Param::new("P").kind(ParamType::Int), "12a");
        assert_eq!(
            validate(&mut bad),
            Some(Violation::InvalidInteger {
                name: "P".into(),
                value: "12a".into()
            })
        );
        assert_eq!(bad.int_value, None);

        // required check wins over the integer check for empty values
        let mut empty = Param::new("P").kind(ParamType::Int).required(true);
        assert!(matches!(
            validate(&mut empty),
            Some(Violation::MissingRequired { .. })
        ));
    }

    #[test]
    fn options() {
        let mode = Param::new("m")
            .kind(ParamType::Option)
            .options("global:Global,rule:Rule");

        let mut good = with_value(mode.clone(), "rule");
        assert_eq!(validate(&mut good), None);

        // labels aren't accepted as values
        let mut label = with_value(mode.clone(), "Rule");
        assert!(matches!(
            validate(&mut label),
            Some(Violation::InvalidOption { value, .. }) if value == "Rule"
        ));

        let mut absent = mode;
        assert_eq!(validate(&mut absent), None);
    }
}
