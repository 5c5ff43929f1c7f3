use std::{fmt::Display, hash::Hash};

use pretty::RcDoc;

use crate::histogram::Histogram;

pub trait Pretty {
    fn to_doc(&self) -> RcDoc<'_, ()>;
}

impl<K> Pretty for Histogram<K>
where
    K: Display + Eq + Hash,
{
    fn to_doc(&self) -> RcDoc<'_, ()> {
        RcDoc::intersperse(
            self.sorted()
                .into_iter()
                .map(|(key, count)| RcDoc::text(format!("{key}: {count}"))),
            RcDoc::hardline(),
        )
    }
}
