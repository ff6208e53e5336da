use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    model::{Circle, CircleId, Meter},
    ArudError, Result,
};

mod builtin;

/// Immutable dataset of circles and their meters.
///
/// The catalog is passed explicitly to everything that needs it, so
/// resolution and navigation can run against the built-in data or any dataset
/// loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    circles: Vec<Circle>,
}

/// A meter together with its owning circle and its position in that circle.
#[derive(Debug, Clone, Copy)]
pub struct MeterRef<'a> {
    pub circle: &'a Circle,
    pub meter: &'a Meter,
    pub index: usize,
}

#[derive(Deserialize)]
struct CatalogFile {
    circles: Vec<Circle>,
}

impl Catalog {
    /// Builds a catalog, ordering circles by their display order.
    pub fn new(mut circles: Vec<Circle>) -> Self {
        circles.sort_by_key(|circle| circle.order);
        Self { circles }
    }

    /// The dataset compiled into the crate.
    pub fn builtin() -> Self {
        Self::new(builtin::circles())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.circles))
    }

    /// Reads a dataset previously written by [`Catalog::to_json_pretty`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            circles = catalog.circles.len(),
            meters = catalog.total_meter_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Circles in display order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn circle(&self, id: CircleId) -> Option<&Circle> {
        self.circles.iter().find(|circle| circle.id == id)
    }

    pub fn circle_by_slug(&self, slug: &str) -> Option<&Circle> {
        let id = slug.parse::<CircleId>().ok()?;
        self.circle(id)
    }

    pub fn circle_at_order(&self, order: u8) -> Option<&Circle> {
        self.circles.iter().find(|circle| circle.order == order)
    }

    /// Looks a circle up by slug or by its display order number.
    pub fn find_circle(&self, key: &str) -> Result<&Circle> {
        let found = match key.trim().parse::<u8>() {
            Ok(order) => self.circle_at_order(order),
            Err(_) => self.circle_by_slug(key.trim()),
        };
        found.ok_or_else(|| ArudError::UnknownCircle(key.to_string()))
    }

    pub fn meter(&self, meter_id: &str) -> Option<MeterRef<'_>> {
        self.circles.iter().find_map(|circle| {
            circle
                .meters
                .iter()
                .position(|meter| meter.id == meter_id)
                .map(|index| MeterRef {
                    circle,
                    meter: &circle.meters[index],
                    index,
                })
        })
    }

    pub fn total_meter_count(&self) -> usize {
        self.circles.iter().map(Circle::meter_count).sum()
    }

    /// Iterates every meter in display order.
    pub fn meters(&self) -> impl Iterator<Item = MeterRef<'_>> {
        self.circles.iter().flat_map(|circle| {
            circle
                .meters
                .iter()
                .enumerate()
                .map(move |(index, meter)| MeterRef {
                    circle,
                    meter,
                    index,
                })
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_holds_five_ordered_circles() {
        let catalog = Catalog::builtin();
        let orders: Vec<u8> = catalog.circles().iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);

        let counts: Vec<usize> = catalog.circles().iter().map(Circle::meter_count).collect();
        assert_eq!(counts, vec![3, 2, 3, 6, 2]);
        assert_eq!(catalog.total_meter_count(), 16);
    }

    #[test]
    fn every_meter_points_back_at_its_circle() {
        let catalog = Catalog::builtin();
        for entry in catalog.meters() {
            assert_eq!(entry.meter.circle_id, entry.circle.id, "{}", entry.meter.id);
        }
    }

    #[test]
    fn finds_meters_with_their_index() {
        let catalog = Catalog::builtin();
        let found = catalog.meter("al-khafif").expect("al-khafif is built in");
        assert_eq!(found.circle.id, CircleId::Accordant);
        assert_eq!(found.index, 2);
        assert!(catalog.meter("al-missing").is_none());
    }

    #[test]
    fn finds_circles_by_slug_or_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find_circle("3").unwrap().id, CircleId::Contracted);
        assert_eq!(
            catalog.find_circle("circle5-consonant").unwrap().id,
            CircleId::Consonant
        );

        let err = catalog.find_circle("9").unwrap_err();
        assert!(matches!(err, ArudError::UnknownCircle(ref key) if key == "9"));
    }

    #[test]
    fn sorts_circles_given_out_of_order() {
        let mut circles = builtin::circles();
        circles.reverse();
        let catalog = Catalog::new(circles);
        assert_eq!(catalog.circles()[0].id, CircleId::Mixed);
    }

    #[test]
    fn json_export_loads_back_unchanged() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json_pretty().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Catalog::load(file.path()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Catalog::from_json_str("{\"circles\": 3}").unwrap_err();
        assert!(matches!(err, ArudError::Json(_)));
    }
}
