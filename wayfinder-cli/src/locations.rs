//! `locations` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfinder_core::{Catalog, Location};

use crate::output::write_json;
use crate::request::{load_catalog, require_existing};
use crate::{ARG_CATALOG, ARG_DISTRICT, CliError};

/// CLI arguments for the `locations` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the catalog's locations as JSON, in catalog order. \
                 Use --district to list a single district.",
    about = "List catalog locations"
)]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct LocationsArgs {
    /// Catalog JSON file; defaults to the bundled Hanoi catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Only list locations in this district.
    #[arg(long = ARG_DISTRICT, value_name = "name")]
    #[serde(default)]
    pub(crate) district: Option<String>,
}

impl LocationsArgs {
    pub(crate) fn into_config(self) -> Result<Self, CliError> {
        self.load_and_merge().map_err(CliError::Configuration)
    }
}

pub(crate) fn run_locations(args: LocationsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_locations_with(args, &mut stdout)
}

pub(crate) fn run_locations_with(
    args: LocationsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    if let Some(path) = &config.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog(config.catalog.as_deref())?;
    let listed = list_locations(&catalog, config.district.as_deref())?;
    write_json(writer, &listed)
}

/// Locations of `catalog`, restricted to `district` when given.
pub(crate) fn list_locations<'a>(
    catalog: &'a Catalog,
    district: Option<&str>,
) -> Result<Vec<&'a Location>, CliError> {
    let Some(district) = district else {
        return Ok(catalog.locations().iter().collect());
    };
    let listed: Vec<&Location> = catalog
        .locations()
        .iter()
        .filter(|location| location.district == district)
        .collect();
    if listed.is_empty() {
        return Err(CliError::UnknownDistrict {
            district: district.to_owned(),
            known: catalog.districts().join(", "),
        });
    }
    Ok(listed)
}
