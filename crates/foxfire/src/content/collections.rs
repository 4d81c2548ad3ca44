use std::collections::HashMap;

use derive_more::{Deref, DerefMut};

use crate::content::Article;

/// The articles of a site, keyed by slug.
#[derive(Debug, Default, Deref, DerefMut)]
pub struct Articles(HashMap<String, Article>);
