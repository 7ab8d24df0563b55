//! Attributes shared by every Atom construct and the completeness query used
//! by validation and writing.

/// `atomCommonAttributes`: `xml:base` and `xml:lang`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonAttributes {
    /// Base URI for resolving relative references (`xml:base`)
    pub base: Option<String>,
    /// Natural language of the element's content (`xml:lang`)
    pub lang: Option<String>,
}

impl CommonAttributes {
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.lang.is_none()
    }
}

/// Access to the common attributes of a construct
pub trait HasCommon {
    fn common(&self) -> &CommonAttributes;
    fn common_mut(&mut self) -> &mut CommonAttributes;
}

/// Required-field self description.
///
/// Each construct reports which of its own mandatory fields are unset; nested
/// constructs are checked separately by [`crate::validate`].
pub trait Completeness {
    /// Names of mandatory fields that are absent
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Whether this instance is complete enough to serialize
    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Push `name` onto `missing` when `value` is unset or blank
pub(crate) fn require(missing: &mut Vec<&'static str>, name: &'static str, value: Option<&str>) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        missing.push(name);
    }
}

macro_rules! impl_has_common {
    ($($ty:ty => $($field:ident).+);+ $(;)?) => {
        $(
            impl $crate::model::common::HasCommon for $ty {
                fn common(&self) -> &$crate::model::common::CommonAttributes {
                    &self.$($field).+
                }

                fn common_mut(&mut self) -> &mut $crate::model::common::CommonAttributes {
                    &mut self.$($field).+
                }
            }
        )+
    };
}

pub(crate) use impl_has_common;
