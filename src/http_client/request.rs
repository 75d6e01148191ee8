use std::{
    collections::BTreeMap,
    ops::{Deref, DerefMut},
    time::Duration,
};

use bytes::Bytes;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub body: Bytes,
    pub timeout: Duration,
}

/// Header names mapped to their values. Keys keep the casing they were
/// inserted with; the transport normalizes them on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers(pub BTreeMap<String, String>);

impl Deref for Headers {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Headers {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(arr: [(K, V); N]) -> Self {
        let map = arr.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Headers(map)
    }
}

impl FromIterator<(String, String)> for Headers {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Headers(iter.into_iter().collect())
    }
}
