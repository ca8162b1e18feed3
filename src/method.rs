//! Module containing the concept of an Ethereum RPC method.

use serde::{Deserializer, Serializer};

/// A trait defining an Ethereum RPC method.
///
/// This crate only ever acts as a client, so a method knows how to serialize
/// its parameters onto the wire and deserialize its result off of it; the
/// opposite directions do not exist.
pub trait Method {
    type Params;
    type Result;

    fn name(&self) -> &'static str;

    fn serialize_params<S>(value: &Self::Params, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;

    fn deserialize_result<'de, D>(deserializer: D) -> Result<Self::Result, D::Error>
    where
        D: Deserializer<'de>;
}

#[macro_export]
macro_rules! method {
    (
        $(#[$attr:meta])*
        $pub:vis struct $type:ident as $name:literal $params:ty => $result:ty;
    ) => {
        $crate::method! {
            $(#[$attr])* $pub struct $type as $name
                $params [<$params>] => $result [<$result>];
        }
    };

    (
        $(#[$attr:meta])*
        $pub:vis struct $type:ident as $name:literal
            $params:ty => $result:ty [$($resultas:tt)*];
    ) => {
        $crate::method! {
            $(#[$attr])* $pub struct $type as $name
                $params [<$params>] => $result [$($resultas)*];
        }
    };

    (
        $(#[$attr:meta])*
        $pub:vis struct $type:ident as $name:literal
            $params:ty [$($paramsas:tt)*] => $result:ty;
    ) => {
        $crate::method! {
            $(#[$attr])* $pub struct $type as $name
                $params [$($paramsas)*] => $result [<$result>];
        }
    };

    (
        $(#[$attr:meta])*
        $pub:vis struct $type:ident as $name:literal
            $params:ty [$($paramsas:tt)*] => $result:ty [$($resultas:tt)*];
    ) => {
        $(#[$attr])*
        $pub struct $type;

        impl ::std::fmt::Debug for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.debug_tuple(stringify!($type))
                    .field(&$name)
                    .finish()
            }
        }

        #[allow(unused_imports)]
        impl $crate::method::Method for $type {
            type Params = $params;
            type Result = $result;

            fn name(&self) -> &'static str {
                $name
            }

            fn serialize_params<S>(value: &Self::Params, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::Serialize as _;
                $($paramsas)*::serialize(value, serializer)
            }

            fn deserialize_result<'de, D>(deserializer: D) -> Result<Self::Result, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use ::serde::Deserialize as _;
                $($resultas)*::deserialize(deserializer)
            }
        }

        impl ::serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use $crate::method::Method as _;
                serializer.serialize_str(self.name())
            }
        }
    };
}

#[macro_export]
macro_rules! module {
    (
        $(#[$attr:meta])*
        $pub:vis mod $mod:ident {
            $(
                $(#[$ma:meta])*
                $mv:vis struct $mt:ident as $mn:literal
                    $mp:ty $([$($mpp:tt)*])? => $mr:ty $([$($mrr:tt)*])?;
            )*
        }
    ) => {
        $(#[$attr])*
        $pub mod $mod {
            #[allow(unused_imports)]
            use super::*;

            $(
                $crate::method! {
                    $(#[$ma])* $mv struct $mt as $mn
                        $mp $([$($mpp)*])* => $mr $([$($mrr)*])*;
                }
            )*
        }
    };
}
