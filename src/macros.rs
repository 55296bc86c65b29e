/// Declares an EC2 value object.
///
/// Each attribute is written as
///
/// ```text
/// <kind> field / set_field / with_field: Type = "WireName";
/// ```
///
/// where `<kind>` is `one` (`with_*` takes `impl Into<Type>`, `set_*` takes
/// [`Assign`](crate::attribute::Assign)), `copy` (plain
/// scalars, `with_*` takes `Type`) or `many` (stored as `Vec<Type>`, `with_*`
/// appends). Every attribute is an `Option`; the shape gets accessors,
/// attribute-wise equality, `hash_code`, `Display` and serde support.
macro_rules! ec2_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident / $set:ident / $with:ident : $ty:ty = $wire:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                $field: Option<ec2_model!(@storage $kind $ty)>,
            )*
        }

        impl $name {
            /// An instance with every attribute absent.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                pub fn $field(
                    &self,
                ) -> Option<<ec2_model!(@storage $kind $ty) as $crate::attribute::Attribute>::View<'_>> {
                    self.$field.as_ref().map(|value| $crate::attribute::Attribute::view(value))
                }

                ec2_model!(@mutators $kind $field $set $with $ty);
            )*

            /// `31 * hash + attribute` over the attributes in declaration
            /// order, starting from 1, absent attributes counting as 0.
            pub fn hash_code(&self) -> i32 {
                let hash = 1;
                $( let hash = $crate::attribute::combine(hash, self.$field.as_ref()); )*
                hash
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32(self.hash_code());
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut fields = $crate::attribute::Fields::start(f)?;
                $( fields.entry($wire, self.$field.as_ref())?; )*
                fields.finish()
            }
        }

        impl $crate::attribute::Attribute for $name {
            type View<'a> = &'a $name;

            fn view(&self) -> &$name {
                self
            }

            fn attribute_hash(&self) -> i32 {
                self.hash_code()
            }

            fn fmt_attribute(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::attribute::Assign<$name> for $name {
            fn assign(self) -> Option<$name> {
                Some(self)
            }
        }

        impl $crate::request::Ec2Model for $name {
            const NAME: &'static str = stringify!($name);
        }
    };

    (@storage one $ty:ty) => { $ty };
    (@storage copy $ty:ty) => { $ty };
    (@storage many $ty:ty) => { Vec<$ty> };

    (@mutators one $field:ident $set:ident $with:ident $ty:ty) => {
        pub fn $set(&mut self, value: impl $crate::attribute::Assign<$ty>) {
            self.$field = $crate::attribute::Assign::assign(value);
        }

        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (@mutators copy $field:ident $set:ident $with:ident $ty:ty) => {
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
    // `None` and an empty vector both leave the attribute absent; `with_*`
    // appends, creating the list on first use.
    (@mutators many $field:ident $set:ident $with:ident $ty:ty) => {
        pub fn $set(&mut self, values: Option<Vec<$ty>>) {
            self.$field = $crate::prelude::OptionVecExt::not_empty(values);
        }

        pub fn $with<I>(mut self, values: I) -> Self
        where
            I: IntoIterator,
            I::Item: Into<$ty>,
        {
            let values = values.into_iter();
            let capacity = values.size_hint().0;
            self.$field
                .get_or_insert_with(|| Vec::with_capacity(capacity))
                .extend(values.map(Into::into));
            self
        }
    };
}

/// Declares an enumerated string: one variant per documented value plus
/// `Unknown(String)`, which keeps values this crate does not know verbatim.
///
/// Equality, hashing and ordering go through `as_str`, so a hand-built
/// `Unknown` carrying a documented value is the same value as its variant.
macro_rules! ec2_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident = $value:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub enum $name {
            $( $variant, )*
            /// A value not in the documented set, kept as received.
            Unknown(String),
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl $crate::attribute::Assign<$name> for $name {
            fn assign(self) -> Option<$name> {
                Some(self)
            }
        }

        impl $crate::attribute::Assign<$name> for &str {
            fn assign(self) -> Option<$name> {
                Some($name::from(self))
            }
        }

        impl $crate::attribute::Assign<$name> for String {
            fn assign(self) -> Option<$name> {
                Some($name::from(self))
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// The documented values, in documentation order.
            pub fn values() -> &'static [&'static str] {
                &[$( $value ),*]
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }

            /// Strict conversion: fails on empty or undocumented values.
            pub fn known(value: &str) -> $crate::prelude::Result<Self> {
                if value.is_empty() {
                    $crate::prelude::bail!("Value cannot be null or empty!");
                }
                match Self::from(value) {
                    Self::Unknown(value) => {
                        ::tracing::debug!(kind = stringify!($name), %value, "undocumented value");
                        $crate::prelude::bail!("Cannot create enum from {value} value!")
                    }
                    known => Ok(known),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )*
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match Self::from(value.as_str()) {
                    Self::Unknown(_) => Self::Unknown(value),
                    known => known,
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                <String as ::serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl $crate::attribute::Attribute for $name {
            type View<'a> = &'a $name;

            fn view(&self) -> &$name {
                self
            }

            fn attribute_hash(&self) -> i32 {
                $crate::attribute::string_hash(self.as_str())
            }

            fn fmt_attribute(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Marks a value object as the parameters of an EC2 action. `paginated`
/// additionally wires its `NextToken`/`MaxResults` attributes to
/// [`Paginated`](crate::request::Paginated).
macro_rules! ec2_request {
    ($name:ident => $action:literal) => {
        impl $crate::request::Ec2Request for $name {
            const ACTION: &'static str = $action;
        }
    };
    ($name:ident => $action:literal, paginated) => {
        ec2_request!($name => $action);

        impl $crate::request::Paginated for $name {
            fn next_token(&self) -> Option<&str> {
                $name::next_token(self)
            }

            fn set_next_token(&mut self, token: Option<String>) {
                $name::set_next_token(self, token)
            }

            fn max_results(&self) -> Option<i32> {
                $name::max_results(self)
            }
        }
    };
}
