//! Metadata converter.

use compo_model::FillMode;
use compo_model::phenopacket::{MetaData, Resource, Update};

use super::common::{external_reference, identifier};
use crate::error::{ConvertError, Result};
use crate::fragment::Fragment;

const ENTITY: &str = "metadata";

/// Convert a metadata block.
///
/// Cohort members are sometimes exported with an empty `metaData` object.
/// That case yields an empty fragment, which aggregates drop instead of
/// emitting.
///
/// # Errors
///
/// A non-empty block without `created`, `createdBy` or `resources` fails with
/// [`ConvertError::MissingField`].
pub fn convert_metadata(source: &MetaData, fill: FillMode) -> Result<Fragment> {
    let mut metadata = Fragment::new();
    if source.is_empty() {
        return Ok(metadata);
    }

    metadata.single("created", required(source.created.as_ref(), "created")?)?;
    metadata.single("created_by", required(source.created_by.as_ref(), "createdBy")?)?;
    metadata.single_opt("submitted_by", source.submitted_by.as_ref())?;

    let resources = required(source.resources.as_ref(), "resources")?;
    metadata.list(
        "resource",
        resources
            .iter()
            .map(|resource| convert_resource(resource, fill))
            .collect::<Result<Vec<_>>>()?,
    )?;

    if let Some(references) = &source.external_references {
        metadata.list(
            "external_reference",
            references
                .iter()
                .map(|reference| {
                    external_reference(&reference.id, reference.description.as_ref(), fill)
                })
                .collect::<Result<Vec<_>>>()?,
        )?;
    }
    if let Some(updates) = &source.updates {
        metadata.list(
            "update",
            updates
                .iter()
                .map(convert_update)
                .collect::<Result<Vec<_>>>()?,
        )?;
    }
    metadata.single_opt(
        "phenopacket_schema_version",
        source.phenopacket_schema_version.as_ref(),
    )?;
    Ok(metadata)
}

fn required<'a, T>(value: Option<&'a T>, field: &'static str) -> Result<&'a T> {
    value.ok_or(ConvertError::MissingField {
        entity: ENTITY,
        field,
    })
}

fn convert_resource(resource: &Resource, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.single("id", identifier(&resource.id, fill))?;
    fragment.single("name", &resource.name)?;
    fragment.single("url", &resource.url)?;
    fragment.single("version", &resource.version)?;
    fragment.single("namespace_prefix", &resource.namespace_prefix)?;
    fragment.single("iri-prefix", &resource.iri_prefix)?;
    Ok(fragment)
}

fn convert_update(update: &Update) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.single("timestamp", &update.timestamp)?;
    fragment.single("comment", &update.comment)?;
    fragment.single_opt("updated_by", update.updated_by.as_ref())?;
    Ok(fragment)
}
