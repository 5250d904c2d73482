//! Row shapes returned by the licences_sea adapter.

use crate::entities::{exam_versions, licence_categories, licence_types};

/// A licence type with its belongs-to relations resolved.
///
/// The relations are `Option` because the loaders report a dangling foreign
/// key as `None`; the repo layer decides what that means.
#[derive(Debug, Clone)]
pub struct LicenceRow {
    pub licence: licence_types::Model,
    pub version: Option<exam_versions::Model>,
    pub category: Option<licence_categories::Model>,
}
