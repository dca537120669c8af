//! Static locale data. Unit phrases list their plural forms separated by
//! `|`; `:count` and `:time` are placeholders.

pub(crate) mod en;
pub(crate) mod sr;
pub(crate) mod tr;
