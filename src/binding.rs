//! Binding declared parameters onto a destination struct

use crate::{Param, Value};

/// A struct whose fields are filled from command-line parameters
///
/// Usually generated with the [bind!](crate::bind) macro, but can be
/// implemented by hand when fields need custom handling.
pub trait Bind {
    /// Parameters to register, in field declaration order
    fn params() -> Vec<Param>;
    /// Writes `value` into the field declared under parameter `name`, if any
    fn assign(&mut self, name: &str, value: &Value);
}

/// Conversion from a validated [Value] into a field type
///
/// Returning `None` leaves the field untouched.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        Some(match value {
            Value::Str(string) => string.clone(),
            Value::Int(int) => int.to_string(),
            Value::Bool(boolean) => boolean.to_string(),
        })
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(boolean) => Some(*boolean),
            _ => None,
        }
    }
}

/// Empty strings become `None`, everything else is converted as `T`
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(string) if string.is_empty() => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(int) => <$ty>::try_from(*int).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Declares a struct along with its [Bind] implementation
///
/// Each field carries its parameter annotations in braces: `name`, `usage`,
/// `require`, `type` (`string`, `int`, `option` or `bool`), `options` in
/// `key:label,key:label` form and `default`. The name defaults to the field's
/// own name and unknown types fall back to `string`.
///
/// ```
/// flagbind::bind! {
///     #[derive(Debug, Default)]
///     pub struct Params {
///         user: String { name: "u", usage: "User name", require: true },
///         port: u16 { name: "P", usage: "Local port", type: int, default: "1080" },
///         verbose: bool { name: "v", usage: "Verbose output", type: bool },
///     }
/// }
/// ```
#[macro_export]
macro_rules! bind {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ident:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty { $($inner:tt)* }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $ident {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Bind for $ident {
            fn params() -> ::std::vec::Vec<$crate::Param> {
                ::std::vec![ $( $crate::field_param!($field; $($inner)*) ),* ]
            }

            #[allow(unused_variables)]
            fn assign(&mut self, name: &str, value: &$crate::Value) {
                $(
                    if $crate::field_name!($field; $($inner)*) == name {
                        if let ::std::option::Option::Some(value) =
                            <$ty as $crate::FromValue>::from_value(value)
                        {
                            self.$field = value;
                        }
                    }
                )*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! field_param {
    ($field:ident; $($inner:tt)*) => {{
        #[allow(unused_mut)]
        let mut param = $crate::Param::new(::std::stringify!($field));
        $crate::param_below!(param; $($inner)*);
        param
    }};
}

/// Parameter name of a field, the `name` annotation or the field's own name
#[doc(hidden)]
#[macro_export]
macro_rules! field_name {
    ($field:ident; $(,)?) => { ::std::stringify!($field) };
    ($field:ident; $(,)? name: $name:literal $($tail:tt)*) => { $name };
    ($field:ident; $(,)? type: $value:tt $($tail:tt)*) => {
        $crate::field_name!($field; $($tail)*)
    };
    ($field:ident; $(,)? $key:ident: $value:tt $($tail:tt)*) => {
        $crate::field_name!($field; $($tail)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! param_below {
    // end of parsing
    ($param:ident; $(,)?) => {};
    // name
    ($param:ident; $(,)? name: $name:literal $($tail:tt)*) => {
        $param.name = ::std::string::ToString::to_string($name);
        $crate::param_below!($param; $($tail)*);
    };
    // usage
    ($param:ident; $(,)? usage: $usage:literal $($tail:tt)*) => {
        $param.usage = ::std::string::ToString::to_string($usage);
        $crate::param_below!($param; $($tail)*);
    };
    // require
    ($param:ident; $(,)? require: $require:literal $($tail:tt)*) => {
        $param.required = $require;
        $crate::param_below!($param; $($tail)*);
    };
    // type, bare or quoted
    ($param:ident; $(,)? type: $kind:ident $($tail:tt)*) => {
        $param.kind = $crate::ParamType::from_tag(::std::stringify!($kind));
        $crate::param_below!($param; $($tail)*);
    };
    ($param:ident; $(,)? type: $kind:literal $($tail:tt)*) => {
        $param.kind = $crate::ParamType::from_tag($kind);
        $crate::param_below!($param; $($tail)*);
    };
    // options
    ($param:ident; $(,)? options: $options:literal $($tail:tt)*) => {
        $param.options = $crate::parse_options($options);
        $crate::param_below!($param; $($tail)*);
    };
    // default
    ($param:ident; $(,)? default: $default:literal $($tail:tt)*) => {
        $param = $param.default_value($default);
        $crate::param_below!($param; $($tail)*);
    };
}
