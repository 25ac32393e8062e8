//! Per-method, per-country restriction table.

use std::collections::HashSet;

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::payment_methods::CountryId;

/// Pre-sized table with one row per payment method and one column per country.
///
/// Rows are only ever added whole, so every method present carries a value for
/// every country the table was built over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionMatrix {
    country_ids: Vec<CountryId>,
    system_names: Vec<String>,
    cells: Vec<bool>,
}

impl RestrictionMatrix {
    /// Columns follow `country_ids`. A repeated id keeps its first column only.
    pub fn builder(mut country_ids: Vec<CountryId>) -> RestrictionMatrixBuilder {
        let mut seen = HashSet::with_capacity(country_ids.len());
        country_ids.retain(|country_id| seen.insert(*country_id));

        RestrictionMatrixBuilder {
            matrix: Self {
                country_ids,
                system_names: Vec::new(),
                cells: Vec::new(),
            },
        }
    }

    pub fn country_ids(&self) -> &[CountryId] {
        &self.country_ids
    }

    pub fn system_names(&self) -> &[String] {
        &self.system_names
    }

    pub fn is_empty(&self) -> bool {
        self.system_names.is_empty()
    }

    /// `None` when either the method or the country is not part of the table.
    pub fn is_restricted(&self, system_name: &str, country_id: CountryId) -> Option<bool> {
        let column = self.country_ids.iter().position(|id| *id == country_id)?;
        self.row(system_name)?.get(column).copied()
    }

    /// Restriction flags of one method, in column order.
    pub fn row(&self, system_name: &str) -> Option<&[bool]> {
        let row = self
            .system_names
            .iter()
            .position(|name| name == system_name)?;
        self.row_at(row)
    }

    fn row_at(&self, row: usize) -> Option<&[bool]> {
        let width = self.country_ids.len();
        let start = row.checked_mul(width)?;
        self.cells.get(start..start.checked_add(width)?)
    }
}

pub struct RestrictionMatrixBuilder {
    matrix: RestrictionMatrix,
}

impl RestrictionMatrixBuilder {
    /// Add the row of `system_name`. A method added twice keeps its latest row.
    pub fn push_row(
        &mut self,
        system_name: impl Into<String>,
        restricted_country_ids: &HashSet<CountryId>,
    ) -> &mut Self {
        let system_name = system_name.into();
        let row: Vec<bool> = self
            .matrix
            .country_ids
            .iter()
            .map(|country_id| restricted_country_ids.contains(country_id))
            .collect();

        let width = self.matrix.country_ids.len();
        match self
            .matrix
            .system_names
            .iter()
            .position(|name| *name == system_name)
        {
            Some(existing) => {
                let start = existing.saturating_mul(width);
                if let Some(cells) = self
                    .matrix
                    .cells
                    .get_mut(start..start.saturating_add(width))
                {
                    cells.copy_from_slice(&row);
                }
            }
            None => {
                self.matrix.system_names.push(system_name);
                self.matrix.cells.extend(row);
            }
        }

        self
    }

    pub fn build(self) -> RestrictionMatrix {
        self.matrix
    }
}

/// Serialized as `{system_name: {country_id: restricted}}`.
impl Serialize for RestrictionMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.system_names.len()))?;
        for (row, system_name) in self.system_names.iter().enumerate() {
            let cells = self.row_at(row).unwrap_or_default();
            map.serialize_entry(
                system_name,
                &RowView {
                    country_ids: &self.country_ids,
                    cells,
                },
            )?;
        }
        map.end()
    }
}

struct RowView<'a> {
    country_ids: &'a [CountryId],
    cells: &'a [bool],
}

impl Serialize for RowView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.country_ids.iter().zip(self.cells.iter()))
    }
}
